//! Integration tests for configuration resolution.
//!
//! These verify file loading across formats, CLI > file > default
//! precedence, and validation of the merged result.

use clap::Parser;
use std::fs;
use std::path::PathBuf;

use procscope::cli::{Args, OutputFormat};
use procscope::config::{resolve_config, validate_effective_config};
use tempfile::TempDir;

fn parse_args(argv: &[&str]) -> Args {
    let mut full = vec!["procscope"];
    full.extend_from_slice(argv);
    Args::parse_from(full)
}

#[test]
fn test_defaults_without_config_file() {
    let args = parse_args(&["--no-config"]);
    let config = resolve_config(&args).unwrap();

    assert_eq!(config.pattern.as_deref(), Some("firefox"));
    assert_eq!(config.proc_root, Some(PathBuf::from("/proc")));
    assert_eq!(config.format, Some(OutputFormat::Text));
    assert_eq!(config.enable_windows, Some(true));
    assert!(validate_effective_config(&config).is_ok());
}

#[test]
fn test_yaml_config_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("procscope.yaml");
    fs::write(&path, "pattern: chromium\nmax_processes: 50\n").unwrap();

    let args = parse_args(&["-c", path.to_str().unwrap()]);
    let config = resolve_config(&args).unwrap();

    assert_eq!(config.pattern.as_deref(), Some("chromium"));
    assert_eq!(config.max_processes, Some(50));
}

#[test]
fn test_json_config_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("procscope.json");
    fs::write(&path, r#"{"pattern": "chromium", "enable_windows": false}"#).unwrap();

    let args = parse_args(&["-c", path.to_str().unwrap()]);
    let config = resolve_config(&args).unwrap();

    assert_eq!(config.pattern.as_deref(), Some("chromium"));
    assert_eq!(config.enable_windows, Some(false));
}

#[test]
fn test_toml_config_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("procscope.toml");
    fs::write(&path, "pattern = \"chromium\"\nparallelism = 2\n").unwrap();

    let args = parse_args(&["-c", path.to_str().unwrap()]);
    let config = resolve_config(&args).unwrap();

    assert_eq!(config.pattern.as_deref(), Some("chromium"));
    assert_eq!(config.parallelism, Some(2));
}

#[test]
fn test_cli_pattern_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("procscope.yaml");
    fs::write(&path, "pattern: chromium\nmax_processes: 50\n").unwrap();

    let args = parse_args(&["firefox", "-c", path.to_str().unwrap()]);
    let config = resolve_config(&args).unwrap();

    // CLI wins for pattern, file value survives for max_processes
    assert_eq!(config.pattern.as_deref(), Some("firefox"));
    assert_eq!(config.max_processes, Some(50));
}

#[test]
fn test_no_windows_flag_disables_window_query() {
    let args = parse_args(&["--no-config", "--no-windows"]);
    let config = resolve_config(&args).unwrap();
    assert_eq!(config.enable_windows, Some(false));
}

#[test]
fn test_exclude_names_comma_parsing() {
    let args = parse_args(&["--no-config", "--exclude-names", "crashreporter, plugin-container"]);
    let config = resolve_config(&args).unwrap();
    assert_eq!(
        config.exclude_names,
        Some(vec![
            "crashreporter".to_string(),
            "plugin-container".to_string()
        ])
    );
}

#[test]
fn test_log_level_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("procscope.yaml");
    fs::write(&path, "log_level: debug\n").unwrap();

    let args = parse_args(&["-c", path.to_str().unwrap()]);
    let config = resolve_config(&args).unwrap();
    assert_eq!(config.log_level.as_deref(), Some("debug"));
    assert!(validate_effective_config(&config).is_ok());
}

#[test]
fn test_cli_log_level_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("procscope.yaml");
    fs::write(&path, "log_level: debug\n").unwrap();

    let args = parse_args(&["-c", path.to_str().unwrap(), "--log-level", "off"]);
    let config = resolve_config(&args).unwrap();
    assert_eq!(config.log_level.as_deref(), Some("off"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let args = parse_args(&["--no-config", "--max-processes", "0"]);
    let config = resolve_config(&args).unwrap();
    assert!(validate_effective_config(&config).is_err());
}

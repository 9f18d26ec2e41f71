//! Configuration management for procscope.
//!
//! This module handles loading, merging, and validating configuration from
//! files and CLI arguments. It supports YAML, JSON, and TOML formats with
//! precedence CLI > config file > default.

use crate::cli::{Args, ConfigFormat, OutputFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

// Default configuration constants
pub const DEFAULT_PATTERN: &str = "firefox";
pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// Effective configuration after merging file and CLI values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name pattern matched against process command lines
    pub pattern: Option<String>,

    /// Proc filesystem root; overridable for tests
    #[serde(alias = "proc-root")]
    pub proc_root: Option<PathBuf>,

    /// Report output format
    pub format: Option<OutputFormat>,

    /// Processes matching these names are always excluded
    #[serde(alias = "exclude-names")]
    pub exclude_names: Option<Vec<String>>,

    /// Parallel processing threads (0 = auto)
    pub parallelism: Option<usize>,

    /// Maximum number of processes to scan
    #[serde(alias = "max-processes")]
    pub max_processes: Option<usize>,

    /// Whether to attempt the window-manager query
    #[serde(alias = "enable-windows")]
    pub enable_windows: Option<bool>,

    /// Log level: off, error, warn, info, debug, trace
    #[serde(alias = "log-level")]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: Some(DEFAULT_PATTERN.to_string()),
            proc_root: Some(PathBuf::from(DEFAULT_PROC_ROOT)),
            format: Some(OutputFormat::Text),
            exclude_names: None,
            parallelism: None,
            max_processes: None,
            enable_windows: Some(true),
            log_level: Some("warn".to_string()),
        }
    }
}

/// Maps the effective log level to a tracing level filter.
/// `off` disables all log output entirely.
pub fn log_level_filter(cfg: &Config) -> LevelFilter {
    match cfg.log_level.as_deref().unwrap_or("warn") {
        "off" => LevelFilter::OFF,
        "error" => LevelFilter::ERROR,
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "debug" => LevelFilter::DEBUG,
        "trace" => LevelFilter::TRACE,
        _ => LevelFilter::WARN,
    }
}

/// Validates the merged configuration.
pub fn validate_effective_config(cfg: &Config) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(pattern) = &cfg.pattern {
        if pattern.trim().is_empty() {
            return Err("pattern must not be empty".into());
        }
    }

    if cfg.max_processes == Some(0) {
        return Err("max_processes must be greater than zero".into());
    }

    if let Some(root) = &cfg.proc_root {
        if root.as_os_str().is_empty() {
            return Err("proc_root must not be empty".into());
        }
    }

    if let Some(level) = cfg.log_level.as_deref() {
        match level {
            "off" | "error" | "warn" | "info" | "debug" | "trace" => {}
            other => {
                return Err(format!(
                    "invalid log_level '{}', expected off|error|warn|info|debug|trace",
                    other
                )
                .into());
            }
        }
    }

    Ok(())
}

/// Resolves configuration from CLI args, config file, and defaults.
/// This enforces precedence: CLI (if provided) > config file > default.
pub fn resolve_config(args: &Args) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if args.no_config {
        Config::default()
    } else {
        load_config(args.config.as_deref().and_then(|p| p.to_str()))?
    };

    // Override with CLI args
    if let Some(pattern) = &args.pattern {
        config.pattern = Some(pattern.clone());
    }

    if let Some(format) = args.format {
        config.format = Some(format);
    }

    if let Some(proc_root) = &args.proc_root {
        config.proc_root = Some(proc_root.clone());
    }

    if args.max_processes.is_some() {
        config.max_processes = args.max_processes;
    }

    if args.parallelism.is_some() {
        config.parallelism = args.parallelism;
    }

    // Parse comma-separated exclude names
    if let Some(exclude_str) = &args.exclude_names {
        config.exclude_names = Some(
            exclude_str
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
        );
    }

    if args.no_windows {
        config.enable_windows = Some(false);
    }

    if let Some(level) = args.log_level {
        config.log_level = Some(level.as_str().to_string());
    }

    Ok(config)
}

/// Loads configuration from a file, trying default locations when no
/// explicit path is given. Missing files fall back to defaults.
pub fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let path = if let Some(p) = path {
        PathBuf::from(p)
    } else {
        // Try default locations
        let defaults = [
            "/etc/procscope/procscope.yaml",
            "/etc/procscope/procscope.yml",
            "/etc/procscope/procscope.json",
            "./procscope.yaml",
            "./procscope.yml",
            "./procscope.json",
        ];

        defaults
            .iter()
            .find(|p| Path::new(p).exists())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(""))
    };

    if !path.exists() || path.to_string_lossy().is_empty() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)?;

    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => {
            let config: Config = serde_json::from_str(&content)?;
            info!("Loaded JSON configuration from: {}", path.display());
            Ok(config)
        }
        Some("toml") => {
            let config: Config = toml::from_str(&content)?;
            info!("Loaded TOML configuration from: {}", path.display());
            Ok(config)
        }
        _ => {
            // Default to YAML
            let config: Config = serde_yaml::from_str(&content)?;
            info!("Loaded YAML configuration from: {}", path.display());
            Ok(config)
        }
    }
}

/// Shows the effective configuration in the requested format.
pub fn show_config(
    config: &Config,
    format: ConfigFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };

    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.pattern.as_deref(), Some("firefox"));
        assert_eq!(cfg.proc_root, Some(PathBuf::from("/proc")));
        assert_eq!(cfg.enable_windows, Some(true));
        assert!(validate_effective_config(&cfg).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_pattern() {
        let cfg = Config {
            pattern: Some("  ".to_string()),
            ..Config::default()
        };
        assert!(validate_effective_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_max_processes() {
        let cfg = Config {
            max_processes: Some(0),
            ..Config::default()
        };
        assert!(validate_effective_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let cfg = Config {
            log_level: Some("verbose".to_string()),
            ..Config::default()
        };
        assert!(validate_effective_config(&cfg).is_err());
    }

    #[test]
    fn test_log_level_filter_off_silences_everything() {
        let cfg = Config {
            log_level: Some("off".to_string()),
            ..Config::default()
        };
        assert_eq!(log_level_filter(&cfg), LevelFilter::OFF);
    }

    #[test]
    fn test_log_level_filter_defaults_to_warn() {
        let cfg = Config {
            log_level: None,
            ..Config::default()
        };
        assert_eq!(log_level_filter(&cfg), LevelFilter::WARN);

        let cfg = Config {
            log_level: Some("debug".to_string()),
            ..Config::default()
        };
        assert_eq!(log_level_filter(&cfg), LevelFilter::DEBUG);
    }
}

//! CLI arguments for procscope.
//!
//! This module defines the command-line interface structure using the clap
//! library. The zero-argument invocation performs a default inspection;
//! every flag is an override on top of the config file.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log level options for CLI parsing
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Canonical lowercase name, as written in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Configuration format options for --show-config output
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

/// Main CLI arguments structure
#[derive(Parser, Debug)]
#[command(
    name = "procscope",
    about = "Report processes, resident memory, and open windows matching a name pattern",
    long_about = "Report processes, resident memory, and open windows matching a name pattern.\n\n\
                  Scans the process table for command lines containing the pattern \
                  (case-insensitive), sums their resident memory, and queries the \
                  window manager via wmctrl when available. Designed for eyeballing \
                  test environments that are expected to run a fixed number of \
                  browser instances.",
    version = "0.1.0"
)]
pub struct Args {
    /// Name pattern to match against process command lines
    pub pattern: Option<String>,

    /// Report output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log level (overrides the config file; default warn)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Config file (YAML/JSON/TOML)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Disable all config file loading
    #[arg(long)]
    pub no_config: bool,

    /// Print effective merged config and exit
    #[arg(long)]
    pub show_config: bool,

    /// Validate config and exit (return code 1 on error)
    #[arg(long)]
    pub check_config: bool,

    /// Output format for --show-config
    #[arg(long, value_enum, default_value = "yaml")]
    pub config_format: ConfigFormat,

    /// Proc filesystem root (override for testing)
    #[arg(long)]
    pub proc_root: Option<PathBuf>,

    /// Skip the window-manager query
    #[arg(long)]
    pub no_windows: bool,

    /// Cap the number of matching processes reported (lowest PIDs kept)
    #[arg(long)]
    pub max_processes: Option<usize>,

    /// Exclude processes matching these names (comma-separated)
    #[arg(long)]
    pub exclude_names: Option<String>,

    /// Parallel processing threads (0 = auto)
    #[arg(long)]
    pub parallelism: Option<usize>,
}

//! procscope - version 0.1.0
//!
//! One-shot process and window inspector. This is the entry point that
//! resolves configuration, wires the concrete providers together, runs a
//! single inspection pass, and prints the rendered report to stdout.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

use procscope::cli::{Args, OutputFormat};
use procscope::config::{
    log_level_filter, resolve_config, show_config, validate_effective_config, Config,
    DEFAULT_PATTERN, DEFAULT_PROC_ROOT,
};
use procscope::inspector::Inspector;
use procscope::process::ProcScanner;
use procscope::windows::{NoWindows, WindowQueryProvider, WmctrlWindows};

/// Initializes tracing logging with the effective log level
/// (CLI > config file > warn). Logs go to stderr so the report on
/// stdout stays clean; `off` suppresses all output.
fn setup_logging(config: &Config) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level_filter(config))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Builds the inspector from the effective configuration and runs one pass.
fn run_inspection(config: &Config) -> Result<String, procscope::InspectError> {
    let pattern = config
        .pattern
        .clone()
        .unwrap_or_else(|| DEFAULT_PATTERN.to_string());
    let proc_root = config
        .proc_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROC_ROOT));

    let scanner = ProcScanner::new(proc_root)
        .with_exclude_names(config.exclude_names.clone().unwrap_or_default())
        .with_max_processes(config.max_processes);

    let windows: Box<dyn WindowQueryProvider> = if config.enable_windows.unwrap_or(true) {
        Box::new(WmctrlWindows)
    } else {
        Box::new(NoWindows)
    };

    let inspector = Inspector::new(Box::new(scanner), windows);
    let report = inspector.run(&pattern)?;
    report.render(config.format.unwrap_or(OutputFormat::Text))
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Early config resolution for show/check modes
    if args.show_config || args.check_config {
        let config = match resolve_config(&args) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Configuration invalid: {}", e);
                return ExitCode::from(1);
            }
        };

        if args.check_config {
            if let Err(e) = validate_effective_config(&config) {
                eprintln!("❌ Configuration invalid: {}", e);
                return ExitCode::from(1);
            }
            println!("✅ Configuration is valid");
            return ExitCode::SUCCESS;
        }

        return match show_config(&config, args.config_format) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("❌ {}", e);
                ExitCode::from(1)
            }
        };
    }

    let config = match resolve_config(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ Configuration invalid: {}", e);
            return ExitCode::from(1);
        }
    };

    if let Err(e) = validate_effective_config(&config) {
        eprintln!("❌ Configuration invalid: {}", e);
        return ExitCode::from(1);
    }

    setup_logging(&config);

    // Configure parallel processing
    if let Some(threads) = config.parallelism {
        if threads > 0 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .unwrap_or_else(|e| error!("Failed to set rayon thread pool: {}", e));
        }
    }

    match run_inspection(&config) {
        Ok(rendered) => {
            // Structured renderers don't emit a trailing newline
            if rendered.ends_with('\n') {
                print!("{}", rendered);
            } else {
                println!("{}", rendered);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("procscope: {}", e);
            ExitCode::from(2)
        }
    }
}

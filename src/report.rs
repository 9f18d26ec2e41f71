//! Report construction and rendering.
//!
//! An [`InspectionReport`] is built once per invocation and is immutable
//! afterwards. Rendering is a pure function of the report: the text form
//! uses fixed section headers, and the structured forms go through serde.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

use crate::cli::OutputFormat;
use crate::error::InspectError;
use crate::process::ProcessRecord;

/// Sum of resident memory in MB. Order independent; 0.0 for an empty set.
pub fn summarize_memory(processes: &[ProcessRecord]) -> f64 {
    let kb: u64 = processes.iter().map(|p| p.resident_memory_kb).sum();
    kb as f64 / 1024.0
}

#[derive(Debug, Serialize)]
pub struct InspectionReport {
    pub pattern: String,
    pub matched_process_count: usize,
    pub processes: Vec<ProcessRecord>,
    pub total_memory_mb: f64,
    /// `None` means the window-manager capability is unavailable,
    /// which is distinct from zero matching windows.
    pub window_count: Option<u64>,
    pub generated_at: DateTime<Utc>,
}

impl InspectionReport {
    pub fn build(pattern: &str, processes: Vec<ProcessRecord>, window_count: Option<u64>) -> Self {
        let total_memory_mb = summarize_memory(&processes);
        Self {
            pattern: pattern.to_string(),
            matched_process_count: processes.len(),
            processes,
            total_memory_mb,
            window_count,
            generated_at: Utc::now(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, InspectError> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| InspectError::Render(e.to_string())),
            OutputFormat::Yaml => {
                serde_yaml::to_string(self).map_err(|e| InspectError::Render(e.to_string()))
            }
        }
    }

    /// Deterministic plain-text rendering with fixed section headers.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str("Process count\n");
        let _ = writeln!(
            out,
            "Total matching processes: {}",
            self.matched_process_count
        );
        out.push('\n');

        out.push_str("Detailed processes\n");
        if self.processes.is_empty() {
            out.push_str("(none)\n");
        } else {
            for p in &self.processes {
                let cmdline = if p.command_args.is_empty() {
                    p.command_name.clone()
                } else {
                    p.command_args.join(" ")
                };
                let _ = writeln!(out, "{:>8}  {:>9} kB  {}", p.pid, p.resident_memory_kb, cmdline);
            }
        }
        out.push('\n');

        out.push_str("Memory usage\n");
        let _ = writeln!(out, "Total Memory: {:.1} MB", self.total_memory_mb);
        out.push('\n');

        out.push_str("Window count\n");
        match self.window_count {
            Some(n) => {
                let _ = writeln!(out, "Open windows matching '{}': {}", self.pattern, n);
            }
            None => out.push_str("Window manager query unavailable\n"),
        }

        out
    }
}

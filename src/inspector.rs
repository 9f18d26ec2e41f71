//! One-shot inspection pass over injected capability providers.
//!
//! The inspector composes a process-table provider and a window-query
//! provider and runs the fixed linear sequence: list processes, summarize
//! memory, count windows, build the report. No state survives a run.

use tracing::{debug, info};

use crate::error::InspectError;
use crate::process::ProcessTableProvider;
use crate::report::InspectionReport;
use crate::windows::WindowQueryProvider;

pub struct Inspector {
    table: Box<dyn ProcessTableProvider>,
    windows: Box<dyn WindowQueryProvider>,
}

impl Inspector {
    pub fn new(table: Box<dyn ProcessTableProvider>, windows: Box<dyn WindowQueryProvider>) -> Self {
        Self { table, windows }
    }

    /// Runs a single inspection for `pattern`.
    ///
    /// A failed process-table query aborts the run; an absent window
    /// capability does not.
    pub fn run(&self, pattern: &str) -> Result<InspectionReport, InspectError> {
        let processes = self.table.list_processes(pattern)?;
        debug!("Process table query returned {} matches", processes.len());

        let window_count = self.windows.count_windows(pattern);
        if window_count.is_none() {
            debug!("Window query capability unavailable");
        }

        let report = InspectionReport::build(pattern, processes, window_count);
        info!(
            "Inspection complete: {} processes, {:.1} MB",
            report.matched_process_count, report.total_memory_mb
        );
        Ok(report)
    }
}

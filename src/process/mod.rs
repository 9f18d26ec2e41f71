//! Process-related modules for discovering and reading the process table.
//!
//! This module provides:
//! - `memory`: Resident-memory parsing from /proc/<pid>/status
//! - `scanner`: Process discovery and name-pattern filtering

pub mod memory;
pub mod scanner;

use serde::Serialize;

use crate::error::InspectError;

// Re-export commonly used types
pub use memory::{parse_kb_value, read_rss_kb};
pub use scanner::ProcScanner;

/// One entry from the OS process table, built fresh per query.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessRecord {
    pub pid: u32,
    pub command_name: String,
    pub resident_memory_kb: u64,
    pub command_args: Vec<String>,
}

/// Capability interface over the OS process table.
///
/// Implementations must be read-only and deterministic for a given
/// process-table snapshot. The concrete `/proc` scanner lives in
/// [`scanner`]; tests substitute in-memory fakes.
pub trait ProcessTableProvider {
    /// Returns all processes whose command line case-insensitively
    /// contains `pattern`, excluding the inspector's own process,
    /// sorted by PID.
    fn list_processes(&self, pattern: &str) -> Result<Vec<ProcessRecord>, InspectError>;
}

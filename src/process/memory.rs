//! Resident-memory parsing from the /proc filesystem.
//!
//! Resident set size comes from the `VmRSS:` line of `/proc/<pid>/status`,
//! with the `Rss:` total from `/proc/<pid>/smaps_rollup` as a fallback for
//! entries where status carries no VmRSS line.

use std::fs;
use std::path::Path;

/// Parses kilobyte values from "  1234 kB" style fields.
pub fn parse_kb_value(v: &str) -> Option<u64> {
    v.split_whitespace().next()?.parse().ok()
}

/// Reads resident memory in KB for one process directory.
///
/// Kernel threads have no VmRSS line; they report 0. An unreadable status
/// file is an error the caller decides how to handle (the scanner skips
/// the process, since it usually means the process exited mid-scan).
pub fn read_rss_kb(proc_path: &Path) -> Result<u64, std::io::Error> {
    let content = fs::read_to_string(proc_path.join("status"))?;
    for line in content.lines() {
        if let Some(v) = line.strip_prefix("VmRSS:") {
            if let Some(kb) = parse_kb_value(v) {
                return Ok(kb);
            }
        }
    }

    if let Ok(rollup) = fs::read_to_string(proc_path.join("smaps_rollup")) {
        for line in rollup.lines() {
            if let Some(v) = line.strip_prefix("Rss:") {
                if let Some(kb) = parse_kb_value(v) {
                    return Ok(kb);
                }
            }
        }
    }

    Ok(0)
}

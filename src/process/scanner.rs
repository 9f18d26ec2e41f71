//! Process discovery and filtering over a /proc-style directory tree.
//!
//! The scanner enumerates numeric PID directories, reads each process's
//! command line, and keeps entries whose command line case-insensitively
//! contains the requested pattern. The proc root is configurable so tests
//! can point the scanner at a synthetic tree.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::InspectError;
use crate::process::memory::read_rss_kb;
use crate::process::{ProcessRecord, ProcessTableProvider};

/// Process entry representing a directory in the proc filesystem.
#[derive(Debug, Clone)]
struct ProcEntry {
    pid: u32,
    proc_path: PathBuf,
}

/// Scanner over a /proc-style tree implementing [`ProcessTableProvider`].
pub struct ProcScanner {
    proc_root: PathBuf,
    self_pid: u32,
    exclude_names: Vec<String>,
    max_processes: Option<usize>,
}

impl ProcScanner {
    pub fn new(proc_root: impl Into<PathBuf>) -> Self {
        Self {
            proc_root: proc_root.into(),
            self_pid: std::process::id(),
            exclude_names: Vec::new(),
            max_processes: None,
        }
    }

    /// Processes whose command name contains any of these strings are
    /// dropped regardless of the pattern.
    pub fn with_exclude_names(mut self, names: Vec<String>) -> Self {
        self.exclude_names = names;
        self
    }

    /// Caps how many matching processes are reported. Applied after
    /// pattern filtering and PID sorting, so a cap keeps the lowest
    /// matching PIDs rather than whatever enumerates first.
    pub fn with_max_processes(mut self, max: Option<usize>) -> Self {
        self.max_processes = max;
        self
    }

    /// Scans the proc root for entries with numeric PIDs, excluding our
    /// own PID so the inspector never matches its own invocation.
    fn collect_proc_entries(&self) -> Result<Vec<ProcEntry>, InspectError> {
        let entries = fs::read_dir(&self.proc_root).map_err(|e| InspectError::Query {
            path: self.proc_root.clone(),
            source: e,
        })?;

        let mut out = Vec::new();
        for entry in entries.flatten() {
            let p = entry.path();
            let name = match p.file_name().and_then(|s| s.to_str()) {
                Some(v) => v,
                None => continue,
            };
            if !name.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            let pid: u32 = match name.parse() {
                Ok(v) => v,
                Err(_) => continue,
            };
            if pid == self.self_pid {
                continue;
            }
            out.push(ProcEntry { pid, proc_path: p });
        }
        Ok(out)
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.exclude_names.iter().any(|s| name.contains(s.as_str()))
    }
}

/// Reads command name and argument vector from cmdline, falling back to
/// comm for processes with an empty cmdline (kernel threads).
fn read_command(proc_path: &Path) -> Option<(String, Vec<String>)> {
    if let Ok(content) = fs::read(proc_path.join("cmdline")) {
        if !content.is_empty() {
            let args: Vec<String> = content
                .split(|&b| b == 0u8)
                .filter(|s| !s.is_empty())
                .filter_map(|s| std::str::from_utf8(s).ok())
                .map(|s| s.to_string())
                .collect();
            if let Some(first) = args.first() {
                let name = Path::new(first)
                    .file_name()
                    .and_then(|s| s.to_str())
                    .unwrap_or(first)
                    .to_string();
                return Some((name, args));
            }
        }
    }

    let comm = fs::read_to_string(proc_path.join("comm")).ok()?;
    let t = comm.trim();
    if t.is_empty() {
        return None;
    }
    Some((t.to_string(), Vec::new()))
}

/// Case-insensitive substring match against the command name and every
/// argument. `pattern_lower` must already be lowercased.
fn matches_pattern(name: &str, args: &[String], pattern_lower: &str) -> bool {
    if name.to_lowercase().contains(pattern_lower) {
        return true;
    }
    args.iter().any(|a| a.to_lowercase().contains(pattern_lower))
}

impl ProcessTableProvider for ProcScanner {
    fn list_processes(&self, pattern: &str) -> Result<Vec<ProcessRecord>, InspectError> {
        let entries = self.collect_proc_entries()?;
        let pattern_lower = pattern.to_lowercase();

        let mut records: Vec<ProcessRecord> = entries
            .par_iter()
            .filter_map(|entry| {
                let (name, args) = read_command(&entry.proc_path)?;
                if self.is_excluded(&name) {
                    return None;
                }
                if !matches_pattern(&name, &args, &pattern_lower) {
                    return None;
                }
                // The process may have exited between enumeration and read.
                let rss_kb = match read_rss_kb(&entry.proc_path) {
                    Ok(v) => v,
                    Err(e) => {
                        debug!("Skipping pid {}: {}", entry.pid, e);
                        return None;
                    }
                };
                Some(ProcessRecord {
                    pid: entry.pid,
                    command_name: name,
                    resident_memory_kb: rss_kb,
                    command_args: args,
                })
            })
            .collect();

        records.sort_by_key(|r| r.pid);
        if let Some(max) = self.max_processes {
            if records.len() > max {
                debug!("Capping {} matches to {}", records.len(), max);
                records.truncate(max);
            }
        }
        debug!(
            "Matched {} processes for pattern '{}'",
            records.len(),
            pattern
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Tests for matches_pattern
    // -------------------------------------------------------------------------

    #[test]
    fn test_matches_pattern_on_name() {
        assert!(matches_pattern("firefox", &[], "firefox"));
        assert!(matches_pattern("firefox-bin", &[], "firefox"));
        assert!(!matches_pattern("chromium", &[], "firefox"));
    }

    #[test]
    fn test_matches_pattern_is_case_insensitive() {
        assert!(matches_pattern("Firefox", &[], "firefox"));
        assert!(matches_pattern("FIREFOX-ESR", &[], "firefox"));
    }

    #[test]
    fn test_matches_pattern_checks_args() {
        let args = vec!["python3".to_string(), "run_firefox_suite.py".to_string()];
        assert!(matches_pattern("python3", &args, "firefox"));
        assert!(!matches_pattern("python3", &args, "chromium"));
    }
}

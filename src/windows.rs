//! Window-manager query capability.
//!
//! Counting open windows needs an external window-manager interface
//! (`wmctrl`). The capability is optional: a missing tool, a failed run,
//! or undecodable output all yield `None`, which the report renders as
//! "unavailable" rather than zero. It never affects the exit code.

use std::process::Command;
use tracing::debug;

/// Capability interface for enumerating open windows.
pub trait WindowQueryProvider {
    /// Returns the number of open windows whose title case-insensitively
    /// contains `pattern`, or `None` when no window-manager interface is
    /// available.
    fn count_windows(&self, pattern: &str) -> Option<u64>;
}

/// Counts lines of `wmctrl -l` output matching the pattern.
pub fn count_matching_titles(listing: &str, pattern: &str) -> u64 {
    let pattern_lower = pattern.to_lowercase();
    listing
        .lines()
        .filter(|l| l.to_lowercase().contains(&pattern_lower))
        .count() as u64
}

/// `wmctrl -l` based window query.
pub struct WmctrlWindows;

impl WindowQueryProvider for WmctrlWindows {
    fn count_windows(&self, pattern: &str) -> Option<u64> {
        let output = match Command::new("wmctrl").arg("-l").output() {
            Ok(o) => o,
            Err(e) => {
                debug!("wmctrl not available: {}", e);
                return None;
            }
        };
        if !output.status.success() {
            // wmctrl exits non-zero when no X display is reachable
            debug!("wmctrl exited with {}", output.status);
            return None;
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        Some(count_matching_titles(&stdout, pattern))
    }
}

/// Used when window queries are disabled by configuration.
pub struct NoWindows;

impl WindowQueryProvider for NoWindows {
    fn count_windows(&self, _pattern: &str) -> Option<u64> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "\
0x03000001  0 host Mozilla Firefox
0x03000002  0 host Example Domain — Mozilla Firefox
0x04000001  0 host Terminal
0x05000001  0 host firefox - Wikipedia";

    #[test]
    fn test_count_matching_titles() {
        assert_eq!(count_matching_titles(LISTING, "firefox"), 3);
        assert_eq!(count_matching_titles(LISTING, "terminal"), 1);
        assert_eq!(count_matching_titles(LISTING, "chromium"), 0);
    }

    #[test]
    fn test_count_matching_titles_empty_listing() {
        assert_eq!(count_matching_titles("", "firefox"), 0);
    }

    #[test]
    fn test_no_windows_provider_is_unavailable() {
        assert_eq!(NoWindows.count_windows("firefox"), None);
    }
}

//! procscope library
//!
//! Core building blocks for the procscope CLI: process-table scanning,
//! memory summarization, window-manager queries, and report rendering.
//! The binary wires concrete providers together; tests substitute fakes
//! through the capability traits.
//!
//! # Usage
//!
//! ```no_run
//! use procscope::{Inspector, ProcScanner, WmctrlWindows};
//!
//! let inspector = Inspector::new(
//!     Box::new(ProcScanner::new("/proc")),
//!     Box::new(WmctrlWindows),
//! );
//! let report = inspector.run("firefox").unwrap();
//! println!("{}", report.render_text());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod inspector;
pub mod process;
pub mod report;
pub mod windows;

// Re-export main types for convenience
pub use error::InspectError;
pub use inspector::Inspector;
pub use process::{ProcScanner, ProcessRecord, ProcessTableProvider};
pub use report::{summarize_memory, InspectionReport};
pub use windows::{NoWindows, WindowQueryProvider, WmctrlWindows};

//! Error taxonomy for procscope.
//!
//! Only two failure classes exist: the process table being unreadable
//! (fatal, non-zero exit) and report serialization failing. A missing
//! window manager is a capability gap, not an error, and is modeled as
//! `Option::None` by the window provider.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error("failed to read process table at {}: {source}", path.display())]
    Query {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render report: {0}")]
    Render(String),
}

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a segment renders as empty.
#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("failed to read state file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse state file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no active tracking entry")]
    NoActive,
}

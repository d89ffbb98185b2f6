//! Error types for records flattening.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for records operations.
pub type RecordsResult<T> = Result<T, RecordsError>;

/// Errors that can occur while flattening the records document.
#[derive(Error, Debug)]
pub enum RecordsError {
    #[error("Error reading records file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing records file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Error writing {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

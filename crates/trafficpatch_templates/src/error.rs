//! Error types for template resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while resolving templates.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Missing environment variable: {name} (referenced by {template:?})")]
    MissingVariable { name: String, template: PathBuf },

    #[error("Failed to read template {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write target file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

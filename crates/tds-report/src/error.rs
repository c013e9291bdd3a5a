//! Error types for table export.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Polars failed to serialize the table.
    #[error("failed to encode table: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Output could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

//! Error types for statement conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a conversion. Row and cell anomalies are never errors.
#[derive(Debug, Error)]
pub enum ConvertError {
    // === Intake Errors ===
    /// Failed to read the statement file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Statement is not valid UTF-8 text.
    #[error("statement is not valid UTF-8 text: {path}")]
    InvalidUtf8 { path: PathBuf },

    // === Parse Errors ===
    /// Section marker absent; input is not the expected report type.
    #[error("expected section marker '{marker}' not found in the statement")]
    MissingSection { marker: String },

    /// No column-header line anywhere in the section.
    #[error("header row not found in the statement")]
    MissingHeader,

    // === DataFrame Errors ===
    /// Failed DataFrame operation while assembling the table.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ConvertError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConvertError::MissingSection {
            marker: "^PART-I^".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "expected section marker '^PART-I^' not found in the statement"
        );
        assert_eq!(
            ConvertError::MissingHeader.to_string(),
            "header row not found in the statement"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let err: ConvertError = polars_err.into();
        assert!(matches!(err, ConvertError::DataFrame { .. }));
    }
}

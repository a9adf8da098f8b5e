//! Error types for workbook ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a workbook.
///
/// Both variants are non-fatal to the hosting process: callers degrade to a
/// "no data" state instead of crashing.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The workbook path does not resolve to a file.
    #[error("workbook not found: {path}")]
    ResourceNotFound { path: PathBuf },

    /// Any other open or parse failure (corrupt file, unsupported format,
    /// permission error), with the underlying diagnostic.
    #[error("failed to load workbook {path}: {message}")]
    LoadFailure { path: PathBuf, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LoadError::ResourceNotFound {
            path: PathBuf::from("indicators.xlsx"),
        };
        assert_eq!(err.to_string(), "workbook not found: indicators.xlsx");

        let err = LoadError::LoadFailure {
            path: PathBuf::from("indicators.xlsx"),
            message: "Zip error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to load workbook indicators.xlsx: Zip error"
        );
    }
}

//! Error types for NIC ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading NIC inputs.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// Malformed CSV.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Malformed JSON.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON is well-formed but not an array of objects.
    #[error("unsupported JSON layout in {path}: {reason}")]
    UnsupportedJson { path: PathBuf, reason: String },

    // === Selection Errors ===
    /// Selected column index or name does not exist.
    #[error("column '{column}' not found")]
    UnknownColumn { column: String },

    /// Row range could not be parsed.
    #[error("invalid row range '{value}' (expected START:END)")]
    InvalidRowRange { value: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/nics.txt"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/nics.txt");

        let err = IngestError::UnknownColumn {
            column: "NIC".to_string(),
        };
        assert_eq!(err.to_string(), "column 'NIC' not found");
    }
}

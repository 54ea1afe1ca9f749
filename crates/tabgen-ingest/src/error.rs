//! Error types for table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort ingestion. A table is never produced from partial input.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to open the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV or unreadable stream.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Header row does not name a required column.
    #[error("required column '{column}' not found in header")]
    MissingColumn { column: &'static str },

    /// A data row ends before a required column.
    #[error("record {record} has no '{column}' field")]
    MissingField { column: &'static str, record: u64 },

    /// A field contains a tab or line break, which would split table rows.
    #[error("record {record} has a tab or line break in '{column}'")]
    InvalidField { column: &'static str, record: u64 },

    /// A data row has an empty transliteration.
    #[error("record {record} has an empty transliteration")]
    EmptyKey { record: u64 },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

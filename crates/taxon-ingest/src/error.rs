//! Error types for CSV ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while decoding a CSV dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to open or read a file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tokenizer rejected a record.
    #[error("failed to parse CSV at record {record}: {message}")]
    CsvParse { record: usize, message: String },

    /// A record contains bytes that are not valid UTF-8.
    #[error("CSV record {record} is not valid UTF-8")]
    NotUtf8 { record: usize },
}

impl IngestError {
    pub(crate) fn from_csv(record: usize, err: &csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Utf8 { .. } => Self::NotUtf8 { record },
            _ => Self::CsvParse {
                record,
                message: err.to_string(),
            },
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

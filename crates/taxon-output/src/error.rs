use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// Delimiter and quote must each be a single ASCII character.
    #[error("{name} must be a single ASCII character, got {value:?}")]
    InvalidOption { name: &'static str, value: char },

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to flush CSV output: {0}")]
    Flush(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OutputError>;

//! Error types for request handling.

use thiserror::Error;

use taxon_ingest::IngestError;
use taxon_model::DatasetKind;
use taxon_output::OutputError;
use taxon_validate::ExportError;

#[derive(Debug, Error)]
pub enum CoreError {
    /// No uploaded file resolved to the role.
    #[error("no file provides the {role} dataset")]
    MissingRole { role: DatasetKind },

    /// More than one uploaded file resolved to the role.
    #[error("multiple files claim the {role} dataset: {}", .files.join(", "))]
    ConflictingRole {
        role: DatasetKind,
        files: Vec<String>,
    },

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

impl CoreError {
    /// Machine-readable code for export refusals.
    pub fn export_code(&self) -> Option<&'static str> {
        match self {
            Self::Export(err) => Some(err.code()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

//! Request and response shapes exchanged with the transport layer.

use serde::{Deserialize, Serialize};

use crate::mapping::HeaderMapping;
use crate::role::{DatasetKind, DetectedRole};
use crate::row::Row;
use crate::validation::InvalidRowRecord;

/// Default file name used for exports without one.
pub const DEFAULT_EXPORT_FILENAME: &str = "export.csv";

/// One decoded dataset: its headers and rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetPayload {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

/// Request to validate a strings dataset against a classifications dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateRequest {
    pub strings: DatasetPayload,
    pub classifications: DatasetPayload,
}

/// Header failure for one side of a validate request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderError {
    #[serde(rename = "type")]
    pub kind: DatasetKind,
    pub missing_required_headers: Vec<String>,
    pub reason: String,
}

/// JSON body of a validate response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValidateBody {
    HeaderErrors {
        valid: bool,
        #[serde(rename = "headerErrors")]
        header_errors: Vec<HeaderError>,
    },
    InvalidRows {
        valid: bool,
        #[serde(rename = "invalidRows")]
        invalid_rows: Vec<InvalidRowRecord>,
        #[serde(rename = "totalRows")]
        total_rows: usize,
        #[serde(rename = "invalidCount")]
        invalid_count: usize,
    },
    Valid {
        valid: bool,
    },
}

/// Status code plus body of a validate response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateResponse {
    pub status: u16,
    pub body: ValidateBody,
}

impl ValidateResponse {
    pub fn header_errors(header_errors: Vec<HeaderError>) -> Self {
        Self {
            status: 400,
            body: ValidateBody::HeaderErrors {
                valid: false,
                header_errors,
            },
        }
    }

    pub fn invalid_rows(invalid_rows: Vec<InvalidRowRecord>, total_rows: usize) -> Self {
        let invalid_count = invalid_rows.len();
        Self {
            status: 400,
            body: ValidateBody::InvalidRows {
                valid: false,
                invalid_rows,
                total_rows,
                invalid_count,
            },
        }
    }

    pub fn valid() -> Self {
        Self {
            status: 200,
            body: ValidateBody::Valid { valid: true },
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.body, ValidateBody::Valid { valid: true })
    }
}

/// Request to export rows as CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub rows: Vec<Row>,
    pub headers: Vec<String>,
    #[serde(default)]
    pub filename: Option<String>,
    /// Set by the caller once cross-dataset validation has passed.
    pub validation_passed: bool,
}

impl ExportRequest {
    pub fn filename(&self) -> &str {
        self.filename
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_EXPORT_FILENAME)
    }
}

/// Upload result for a file that decoded successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Canonical headers, in source order.
    pub headers: Vec<String>,
    /// Rows rewritten to canonical keys.
    pub rows: Vec<Row>,
    pub row_count: usize,
    pub is_strings_candidate: bool,
    pub is_classifications_candidate: bool,
    pub detected_role: DetectedRole,
    pub ambiguous: bool,
    pub header_valid: bool,
    pub missing_required_headers: Vec<String>,
    pub extra_headers: Vec<String>,
    #[serde(rename = "normalizedHeaderMap")]
    pub header_mapping: HeaderMapping,
}

/// Upload result for a file the decoder rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFailure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub error: String,
    pub parse_error: bool,
}

/// Per-file upload result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UploadOutcome {
    Parsed(Box<DatasetAnalysis>),
    Failed(UploadFailure),
}

impl UploadOutcome {
    pub fn failed(filename: Option<String>, error: impl Into<String>) -> Self {
        Self::Failed(UploadFailure {
            filename,
            error: error.into(),
            parse_error: true,
        })
    }

    pub fn analysis(&self) -> Option<&DatasetAnalysis> {
        match self {
            Self::Parsed(analysis) => Some(&**analysis),
            Self::Failed(_) => None,
        }
    }
}

//! Structural checks applied before rows are handed to the CSV writer.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use taxon_model::{ExportCheck, Row};

/// Warning attached to a header-only export.
pub const NO_ROWS_WARNING: &str = "No data rows to export";

/// Reasons an export attempt is refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("Rows must be an array")]
    RowsNotArray,

    #[error("Headers must be an array")]
    HeadersNotArray,

    #[error("Headers cannot be empty")]
    HeadersEmpty,

    /// A header entry is not a string.
    #[error("Header {index} must be a string")]
    InvalidHeader { index: usize },

    /// A row entry is not an object of string cells.
    #[error("Row {index} is malformed: {message}")]
    InvalidRow { index: usize, message: String },

    /// `row_index` is the first row whose keys differ from row 0.
    #[error("All rows must have consistent structure")]
    InconsistentStructure { row_index: usize },

    /// Export attempted without a passing cross-dataset validation.
    #[error("Export requires a successful validation")]
    ValidationRequired,
}

impl ExportError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RowsNotArray => "ROWS_NOT_ARRAY",
            Self::HeadersNotArray => "HEADERS_NOT_ARRAY",
            Self::HeadersEmpty => "HEADERS_EMPTY",
            Self::InvalidHeader { .. } => "INVALID_HEADER",
            Self::InvalidRow { .. } => "INVALID_ROW",
            Self::InconsistentStructure { .. } => "INCONSISTENT_STRUCTURE",
            Self::ValidationRequired => "VALIDATION_REQUIRED",
        }
    }

    /// True for the validation gate, as opposed to a shape problem.
    pub fn is_gate_violation(&self) -> bool {
        matches!(self, Self::ValidationRequired)
    }
}

/// Refuses export unless the caller reports a passing validation.
pub fn ensure_validation_passed(validation_passed: bool) -> Result<(), ExportError> {
    if validation_passed {
        Ok(())
    } else {
        Err(ExportError::ValidationRequired)
    }
}

/// Checks that a row/header pair is well formed.
///
/// Headers must be non-empty. No rows is accepted with a warning. Otherwise
/// every row must carry exactly the key set of the first row.
pub fn validate_export_data<S: AsRef<str>>(
    rows: &[Row],
    headers: &[S],
) -> Result<ExportCheck, ExportError> {
    if headers.is_empty() {
        return Err(ExportError::HeadersEmpty);
    }

    let Some(first) = rows.first() else {
        return Ok(ExportCheck {
            valid: true,
            warning: Some(NO_ROWS_WARNING.to_string()),
        });
    };

    if let Some(row_index) = rows.iter().position(|row| !row.same_keys(first)) {
        return Err(ExportError::InconsistentStructure { row_index });
    }

    Ok(ExportCheck {
        valid: true,
        warning: None,
    })
}

/// Decodes untyped `rows`/`headers` values, reporting shape problems in order:
/// rows not an array, headers not an array, headers empty, then bad entries.
pub fn decode_export_payload(
    rows: &Value,
    headers: &Value,
) -> Result<(Vec<Row>, Vec<String>), ExportError> {
    let Value::Array(raw_rows) = rows else {
        return Err(ExportError::RowsNotArray);
    };
    let Value::Array(raw_headers) = headers else {
        return Err(ExportError::HeadersNotArray);
    };
    if raw_headers.is_empty() {
        return Err(ExportError::HeadersEmpty);
    }

    let headers = raw_headers
        .iter()
        .enumerate()
        .map(|(index, header)| match header {
            Value::String(name) => Ok(name.clone()),
            _ => Err(ExportError::InvalidHeader { index }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let rows = raw_rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            Row::deserialize(row).map_err(|err| ExportError::InvalidRow {
                index,
                message: err.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((rows, headers))
}

/// [`decode_export_payload`] followed by [`validate_export_data`].
pub fn validate_export_value(rows: &Value, headers: &Value) -> Result<ExportCheck, ExportError> {
    let (rows, headers) = decode_export_payload(rows, headers)?;
    validate_export_data(&rows, &headers)
}

//! Result types produced by header and row validation.

use serde::{Deserialize, Serialize};

use crate::role::{DatasetKind, DetectedRole};
use crate::row::Row;

/// Outcome of checking a header set against one role's required fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderValidation {
    pub valid: bool,
    /// Missing required fields, by canonical display name.
    pub missing_required_headers: Vec<String>,
    /// Headers outside the required set, in normalized form.
    pub extra_headers: Vec<String>,
    pub reason: String,
}

impl HeaderValidation {
    /// Result for a role name that is not configured.
    pub fn invalid_role(role: &str) -> Self {
        Self {
            valid: false,
            missing_required_headers: Vec::new(),
            extra_headers: Vec::new(),
            reason: format!("Invalid role: {role}"),
        }
    }
}

/// Role detection verdict plus both underlying header checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDetection {
    pub detected_role: DetectedRole,
    pub ambiguous: bool,
    pub is_strings_candidate: bool,
    pub is_classifications_candidate: bool,
    pub strings_validation: HeaderValidation,
    pub classifications_validation: HeaderValidation,
}

impl RoleDetection {
    pub fn validation_for(&self, kind: DatasetKind) -> &HeaderValidation {
        match kind {
            DatasetKind::Strings => &self.strings_validation,
            DatasetKind::Classifications => &self.classifications_validation,
        }
    }

    /// Role whose header check best describes this file.
    ///
    /// The detected role when there is one, strings for an ambiguous file,
    /// and otherwise the role with fewer missing headers (strings on a tie).
    pub fn closest_kind(&self) -> DatasetKind {
        match self.detected_role {
            DetectedRole::Strings | DetectedRole::Ambiguous => DatasetKind::Strings,
            DetectedRole::Classifications => DatasetKind::Classifications,
            DetectedRole::Unknown => {
                let strings = self.strings_validation.missing_required_headers.len();
                let classifications = self
                    .classifications_validation
                    .missing_required_headers
                    .len();
                if classifications < strings {
                    DatasetKind::Classifications
                } else {
                    DatasetKind::Strings
                }
            }
        }
    }
}

/// A strings row that failed cross-dataset validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidRowRecord {
    /// Zero-based position in the validated strings rows.
    pub row_index: usize,
    pub row: Row,
    pub reason: String,
}

/// Outcome of validating strings rows against classifications rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossValidation {
    pub valid: bool,
    pub invalid_rows: Vec<InvalidRowRecord>,
}

impl CrossValidation {
    pub fn from_invalid_rows(invalid_rows: Vec<InvalidRowRecord>) -> Self {
        Self {
            valid: invalid_rows.is_empty(),
            invalid_rows,
        }
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid_rows.len()
    }
}

/// Outcome of checking that rows carry a set of required columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredColumnsCheck {
    pub valid: bool,
    pub missing_headers: Vec<String>,
    pub reason: String,
}

/// Successful structural export check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportCheck {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

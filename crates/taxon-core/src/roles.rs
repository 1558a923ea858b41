//! Deciding which uploaded file is which dataset.

use tracing::debug;

use taxon_model::{DatasetAnalysis, DatasetKind};

use crate::analysis::role_hint_from_filename;
use crate::error::{CoreError, Result};

/// An analyzed upload awaiting role assignment.
#[derive(Debug, Clone)]
pub struct UploadedDataset {
    pub name: String,
    pub analysis: DatasetAnalysis,
    /// Role chosen by the operator, overriding detection.
    pub forced_role: Option<DatasetKind>,
}

impl UploadedDataset {
    pub fn new(name: impl Into<String>, analysis: DatasetAnalysis) -> Self {
        Self {
            name: name.into(),
            analysis,
            forced_role: None,
        }
    }

    #[must_use]
    pub fn with_forced_role(mut self, role: DatasetKind) -> Self {
        self.forced_role = Some(role);
        self
    }

    /// Forced role, then a decisive detection, then the file name hint.
    pub fn resolved_role(&self) -> Option<DatasetKind> {
        self.forced_role
            .or_else(|| self.analysis.detected_role.kind())
            .or_else(|| role_hint_from_filename(&self.name))
    }
}

/// Positions of the strings and classifications files in the upload list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleAssignment {
    pub strings: usize,
    pub classifications: usize,
}

impl RoleAssignment {
    pub fn index_of(self, kind: DatasetKind) -> usize {
        match kind {
            DatasetKind::Strings => self.strings,
            DatasetKind::Classifications => self.classifications,
        }
    }
}

/// Assigns each role to exactly one uploaded file.
pub fn assign_roles(files: &[UploadedDataset]) -> Result<RoleAssignment> {
    let resolved: Vec<Option<DatasetKind>> =
        files.iter().map(UploadedDataset::resolved_role).collect();
    for (file, role) in files.iter().zip(&resolved) {
        debug!(file = %file.name, role = ?role, "resolved role");
    }

    let pick = |kind: DatasetKind| -> Result<usize> {
        let matches: Vec<usize> = resolved
            .iter()
            .enumerate()
            .filter(|(_, role)| **role == Some(kind))
            .map(|(index, _)| index)
            .collect();
        match matches.as_slice() {
            [] => Err(CoreError::MissingRole { role: kind }),
            [index] => Ok(*index),
            _ => Err(CoreError::ConflictingRole {
                role: kind,
                files: matches.iter().map(|&i| files[i].name.clone()).collect(),
            }),
        }
    };

    Ok(RoleAssignment {
        strings: pick(DatasetKind::Strings)?,
        classifications: pick(DatasetKind::Classifications)?,
    })
}

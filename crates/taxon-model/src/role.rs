//! Dataset roles and their required header sets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::field::CanonicalField;

const STRINGS_REQUIRED: &[CanonicalField] = &[
    CanonicalField::Tier,
    CanonicalField::Industry,
    CanonicalField::Topic,
    CanonicalField::SubTopic,
    CanonicalField::Prefix,
    CanonicalField::FuzzingIdx,
    CanonicalField::Prompt,
    CanonicalField::Risks,
    CanonicalField::Keywords,
];

const CLASSIFICATIONS_REQUIRED: &[CanonicalField] = &[
    CanonicalField::Topic,
    CanonicalField::SubTopic,
    CanonicalField::Industry,
    CanonicalField::Classification,
];

/// A role that a dataset can be validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    /// Rows describing prompts and risks keyed by topic/sub-topic/industry.
    Strings,
    /// The authoritative topic/sub-topic/industry taxonomy.
    Classifications,
}

impl DatasetKind {
    pub const fn all() -> &'static [Self] {
        &[Self::Strings, Self::Classifications]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strings => "strings",
            Self::Classifications => "classifications",
        }
    }

    /// Parse a role name (case-insensitive, surrounding whitespace ignored).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "strings" => Some(Self::Strings),
            "classifications" => Some(Self::Classifications),
            _ => None,
        }
    }

    /// Required canonical fields, in their configured order.
    pub const fn required_fields(self) -> &'static [CanonicalField] {
        match self {
            Self::Strings => STRINGS_REQUIRED,
            Self::Classifications => CLASSIFICATIONS_REQUIRED,
        }
    }

    /// The other known role.
    pub const fn other(self) -> Self {
        match self {
            Self::Strings => Self::Classifications,
            Self::Classifications => Self::Strings,
        }
    }

    /// Canonical fields an operator may assign when mapping headers by hand.
    ///
    /// Everything except the fields that only the other role requires.
    pub fn allowed_fields(self) -> Vec<CanonicalField> {
        let own = self.required_fields();
        let other = self.other().required_fields();
        CanonicalField::all()
            .iter()
            .copied()
            .filter(|field| own.contains(field) || !other.contains(field))
            .collect()
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ModelError::UnknownRole(s.to_string()))
    }
}

/// Verdict of role detection over a header set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedRole {
    Strings,
    Classifications,
    /// Headers satisfy both roles.
    Ambiguous,
    /// Headers satisfy neither role.
    Unknown,
}

impl DetectedRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strings => "strings",
            Self::Classifications => "classifications",
            Self::Ambiguous => "ambiguous",
            Self::Unknown => "unknown",
        }
    }

    /// The single role this verdict resolves to, if any.
    pub const fn kind(self) -> Option<DatasetKind> {
        match self {
            Self::Strings => Some(DatasetKind::Strings),
            Self::Classifications => Some(DatasetKind::Classifications),
            Self::Ambiguous | Self::Unknown => None,
        }
    }
}

impl From<DatasetKind> for DetectedRole {
    fn from(kind: DatasetKind) -> Self {
        match kind {
            DatasetKind::Strings => Self::Strings,
            DatasetKind::Classifications => Self::Classifications,
        }
    }
}

impl fmt::Display for DetectedRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

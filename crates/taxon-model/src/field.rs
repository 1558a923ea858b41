//! Canonical field names shared by both dataset roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A semantic column name that every recognized header spelling maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanonicalField {
    Tier,
    Industry,
    Topic,
    SubTopic,
    Prefix,
    #[serde(rename = "Fuzzing-Idx")]
    FuzzingIdx,
    Prompt,
    Risks,
    Keywords,
    Classification,
}

impl CanonicalField {
    /// Every canonical field, in display order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Tier,
            Self::Industry,
            Self::Topic,
            Self::SubTopic,
            Self::Prefix,
            Self::FuzzingIdx,
            Self::Prompt,
            Self::Risks,
            Self::Keywords,
            Self::Classification,
        ]
    }

    /// Display name, which is also the key used in canonical rows.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tier => "Tier",
            Self::Industry => "Industry",
            Self::Topic => "Topic",
            Self::SubTopic => "SubTopic",
            Self::Prefix => "Prefix",
            Self::FuzzingIdx => "Fuzzing-Idx",
            Self::Prompt => "Prompt",
            Self::Risks => "Risks",
            Self::Keywords => "Keywords",
            Self::Classification => "Classification",
        }
    }

    /// Exact (case-sensitive) lookup by display name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}

/// Fields that make up the composite classification key, in reporting order.
pub const KEY_FIELDS: [CanonicalField; 3] = [
    CanonicalField::Topic,
    CanonicalField::SubTopic,
    CanonicalField::Industry,
];

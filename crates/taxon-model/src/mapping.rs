//! Per-file mapping from raw headers to canonical names.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::field::CanonicalField;
use crate::role::DatasetKind;

/// Target of a single raw header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MappedHeader {
    /// The header was recognized as a canonical field.
    Canonical(CanonicalField),
    /// No canonical match; the raw header is kept as-is.
    PassThrough(String),
}

impl MappedHeader {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Canonical(field) => field.as_str(),
            Self::PassThrough(raw) => raw,
        }
    }

    pub fn canonical(&self) -> Option<CanonicalField> {
        match self {
            Self::Canonical(field) => Some(*field),
            Self::PassThrough(_) => None,
        }
    }
}

impl Serialize for MappedHeader {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Ordered raw header -> target mapping, built once per file.
///
/// Contains exactly one entry per distinct raw header, in order of first
/// occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMapping {
    entries: Vec<(String, MappedHeader)>,
}

impl HeaderMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry unless the raw header is already mapped.
    ///
    /// Returns `false` for a repeated raw header.
    pub fn insert(&mut self, raw: impl Into<String>, target: MappedHeader) -> bool {
        let raw = raw.into();
        if self.get(&raw).is_some() {
            return false;
        }
        self.entries.push((raw, target));
        true
    }

    pub fn get(&self, raw: &str) -> Option<&MappedHeader> {
        self.entries
            .iter()
            .find(|(header, _)| header == raw)
            .map(|(_, target)| target)
    }

    /// Target name for a raw header, falling back to the header itself.
    pub fn target_for<'a>(&'a self, raw: &'a str) -> &'a str {
        self.get(raw).map_or(raw, MappedHeader::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MappedHeader)> {
        self.entries
            .iter()
            .map(|(raw, target)| (raw.as_str(), target))
    }

    pub fn raw_headers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(raw, _)| raw.as_str())
    }

    /// Target names in header order, collapsing repeats.
    pub fn target_headers(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(self.entries.len());
        for (_, target) in &self.entries {
            if !out.iter().any(|existing| existing == target.as_str()) {
                out.push(target.as_str().to_string());
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_field(&self, field: CanonicalField) -> bool {
        self.entries
            .iter()
            .any(|(_, target)| target.canonical() == Some(field))
    }

    /// Required fields of `kind` that no header maps onto.
    pub fn missing_fields(&self, kind: DatasetKind) -> Vec<CanonicalField> {
        kind.required_fields()
            .iter()
            .copied()
            .filter(|field| !self.contains_field(*field))
            .collect()
    }

    /// Re-targets selected raw headers, as chosen in a manual mapping step.
    ///
    /// Overrides naming headers that are not part of this mapping are ignored.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, CanonicalField>) -> Self {
        for (raw, target) in &mut self.entries {
            if let Some(field) = overrides.get(raw.as_str()) {
                *target = MappedHeader::Canonical(*field);
            }
        }
        self
    }
}

impl Serialize for HeaderMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (raw, target) in &self.entries {
            map.serialize_entry(raw, target)?;
        }
        map.end()
    }
}

//! Decoded dataset rows.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Deserializer, Serialize};

use crate::field::CanonicalField;

/// A single record keyed by header name.
///
/// Keys are raw headers straight out of the decoder, or canonical field names
/// after canonicalization. Values are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: BTreeMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells.get(key).map(String::as_str)
    }

    /// Value stored under a canonical field name.
    pub fn field(&self, field: CanonicalField) -> Option<&str> {
        self.get(field.as_str())
    }

    /// Inserts a cell, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.cells.insert(key.into(), value.into())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.cells.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when both rows carry exactly the same key set.
    pub fn same_keys(&self, other: &Row) -> bool {
        self.cells.len() == other.cells.len() && self.cells.keys().all(|k| other.contains_key(k))
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl IntoIterator for Row {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

// JSON payloads may carry `null` cells; they read as empty strings.
impl<'de> Deserialize<'de> for Row {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Option<String>>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|(key, value)| (key, value.unwrap_or_default()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_keys_ignores_order_and_values() {
        let a: Row = [("Topic", "A"), ("Industry", "B")].into_iter().collect();
        let b: Row = [("Industry", "x"), ("Topic", "y")].into_iter().collect();
        let c: Row = [("Topic", "A")].into_iter().collect();
        assert!(a.same_keys(&b));
        assert!(!a.same_keys(&c));
        assert!(!c.same_keys(&a));
    }

    #[test]
    fn field_lookup_uses_display_name() {
        let row: Row = [("Fuzzing-Idx", "3")].into_iter().collect();
        assert_eq!(row.field(CanonicalField::FuzzingIdx), Some("3"));
        assert_eq!(row.field(CanonicalField::Topic), None);
    }
}

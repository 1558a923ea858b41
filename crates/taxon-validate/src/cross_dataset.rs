//! Cross-dataset check: every strings row must be backed by a classification.

use std::collections::HashSet;

use taxon_map::normalize_value;
use taxon_model::{CanonicalField, CrossValidation, InvalidRowRecord, KEY_FIELDS, Row};

/// Normalized (Topic, SubTopic, Industry) triple used for membership tests.
///
/// Components are trimmed and lower-cased. Kept as separate fields, so no
/// separator can collide with cell content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassificationKey {
    topic: String,
    sub_topic: String,
    industry: String,
}

impl ClassificationKey {
    pub fn from_row(row: &Row) -> Self {
        Self {
            topic: normalize_value(row.field(CanonicalField::Topic)),
            sub_topic: normalize_value(row.field(CanonicalField::SubTopic)),
            industry: normalize_value(row.field(CanonicalField::Industry)),
        }
    }

    /// True when all three components are empty.
    pub fn is_blank(&self) -> bool {
        self.topic.is_empty() && self.sub_topic.is_empty() && self.industry.is_empty()
    }
}

/// Set of classification keys built from the classifications dataset.
#[derive(Debug, Clone, Default)]
pub struct ClassificationIndex {
    keys: HashSet<ClassificationKey>,
}

impl ClassificationIndex {
    /// Indexes every classification row; all-blank keys are skipped so a blank
    /// classification row cannot vouch for blank strings rows.
    pub fn from_rows(rows: &[Row]) -> Self {
        let keys = rows
            .iter()
            .map(ClassificationKey::from_row)
            .filter(|key| !key.is_blank())
            .collect();
        Self { keys }
    }

    pub fn contains(&self, key: &ClassificationKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Key fields that are absent or empty in a canonical row, in reporting order.
///
/// A whitespace-only cell is present; it normalizes to an empty key component
/// during lookup.
pub fn missing_key_fields(row: &Row) -> Vec<CanonicalField> {
    KEY_FIELDS
        .iter()
        .copied()
        .filter(|field| row.field(*field).is_none_or(str::is_empty))
        .collect()
}

/// Validates canonical strings rows against canonical classifications rows.
///
/// Every failing row is reported in one pass; row indexes refer to positions
/// in `strings_rows`. Matching ignores case and surrounding whitespace, while
/// failure messages quote the original cell values.
pub fn validate_strings_against_classifications(
    strings_rows: &[Row],
    classifications_rows: &[Row],
) -> CrossValidation {
    let index = ClassificationIndex::from_rows(classifications_rows);
    validate_strings_against_index(strings_rows, &index)
}

/// Same as [`validate_strings_against_classifications`] with a prebuilt index.
pub fn validate_strings_against_index(
    strings_rows: &[Row],
    index: &ClassificationIndex,
) -> CrossValidation {
    let mut invalid_rows = Vec::new();

    for (row_index, row) in strings_rows.iter().enumerate() {
        let missing = missing_key_fields(row);
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|field| field.as_str()).collect();
            invalid_rows.push(InvalidRowRecord {
                row_index,
                row: row.clone(),
                reason: format!("Missing required fields: {}", names.join(", ")),
            });
            continue;
        }

        if !index.contains(&ClassificationKey::from_row(row)) {
            invalid_rows.push(InvalidRowRecord {
                row_index,
                row: row.clone(),
                reason: format!(
                    "No classification for Topic='{}', SubTopic='{}', Industry='{}'",
                    row.field(CanonicalField::Topic).unwrap_or_default(),
                    row.field(CanonicalField::SubTopic).unwrap_or_default(),
                    row.field(CanonicalField::Industry).unwrap_or_default(),
                ),
            });
        }
    }

    CrossValidation::from_invalid_rows(invalid_rows)
}

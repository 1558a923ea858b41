//! Static table of recognized header spellings.

use taxon_model::{CanonicalField, HeaderMapping, MappedHeader};

use crate::normalize::normalize_header;

/// Normalized header key -> canonical field.
pub static CANONICAL_FIELD_MAP: &[(&str, CanonicalField)] = &[
    ("tier", CanonicalField::Tier),
    ("industry", CanonicalField::Industry),
    ("topic", CanonicalField::Topic),
    ("subtopic", CanonicalField::SubTopic),
    ("prefix", CanonicalField::Prefix),
    ("fuzzingidx", CanonicalField::FuzzingIdx),
    ("prompt", CanonicalField::Prompt),
    ("risks", CanonicalField::Risks),
    ("keywords", CanonicalField::Keywords),
    ("classification", CanonicalField::Classification),
];

/// Looks up an already-normalized header key.
pub fn canonical_field(normalized: &str) -> Option<CanonicalField> {
    CANONICAL_FIELD_MAP
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, field)| *field)
}

/// Normalizes a raw header and looks it up.
pub fn canonical_field_for_header(raw: &str) -> Option<CanonicalField> {
    canonical_field(&normalize_header(raw))
}

/// Builds the raw header -> canonical name mapping for one file.
///
/// Unrecognized headers map to themselves so no column is dropped. A raw
/// header that repeats keeps its first entry.
pub fn create_header_mapping<S: AsRef<str>>(headers: &[S]) -> HeaderMapping {
    let mut mapping = HeaderMapping::new();
    for header in headers {
        let raw = header.as_ref();
        let target = match canonical_field_for_header(raw) {
            Some(field) => MappedHeader::Canonical(field),
            None => MappedHeader::PassThrough(raw.to_string()),
        };
        mapping.insert(raw, target);
    }
    mapping
}

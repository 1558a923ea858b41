//! Normalization of header names and cell values for comparison.

/// Canonicalizes a raw header into its comparison key.
///
/// Trims, lower-cases, and drops every whitespace, hyphen, and underscore
/// character, so `"Sub-Topic"`, `"sub_topic"` and `" Sub Topic "` all become
/// `"subtopic"`. Idempotent.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|ch| !is_header_separator(*ch))
        .collect()
}

/// Like [`normalize_header`], treating an absent header as empty.
pub fn normalize_optional_header(raw: Option<&str>) -> String {
    raw.map(normalize_header).unwrap_or_default()
}

/// Normalizes a cell value for matching: trimmed and lower-cased.
///
/// A missing cell normalizes to the empty string.
pub fn normalize_value(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_lowercase()).unwrap_or_default()
}

fn is_header_separator(ch: char) -> bool {
    ch == '-' || ch == '_' || ch.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header_variants() {
        assert_eq!(normalize_header("Sub-Topic"), "subtopic");
        assert_eq!(normalize_header("sub_topic"), "subtopic");
        assert_eq!(normalize_header("Sub Topic"), "subtopic");
        assert_eq!(normalize_header("Fuzzing-Idx"), "fuzzingidx");
        assert_eq!(normalize_header("fuzzing_idx"), "fuzzingidx");
        assert_eq!(normalize_header("classification"), "classification");
        assert_eq!(normalize_header("  Topic  "), "topic");
        assert_eq!(normalize_header("Sub - _ Topic"), "subtopic");
        assert_eq!(normalize_header("Sub\tTopic"), "subtopic");
    }

    #[test]
    fn test_normalize_header_empty() {
        assert_eq!(normalize_header(""), "");
        assert_eq!(normalize_header("   "), "");
        assert_eq!(normalize_header("-_-"), "");
        assert_eq!(normalize_optional_header(None), "");
    }

    #[test]
    fn test_normalize_value() {
        assert_eq!(normalize_value(Some("  Fintech  ")), "fintech");
        assert_eq!(normalize_value(Some("Payments")), "payments");
        assert_eq!(normalize_value(Some("Sub Topic")), "sub topic");
        assert_eq!(normalize_value(Some("")), "");
        assert_eq!(normalize_value(None), "");
    }
}

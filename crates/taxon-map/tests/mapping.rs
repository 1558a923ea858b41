use taxon_map::{create_header_mapping, map_row_to_canonical, map_rows_to_canonical};
use taxon_model::{CanonicalField, MappedHeader, Row};

fn row(cells: &[(&str, &str)]) -> Row {
    cells.iter().copied().collect()
}

#[test]
fn creates_mapping_for_known_headers() {
    let mapping = create_header_mapping(&["Topic", "Sub-Topic", "Industry", "Classification"]);
    let pairs: Vec<(&str, &str)> = mapping
        .iter()
        .map(|(raw, target)| (raw, target.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Topic", "Topic"),
            ("Sub-Topic", "SubTopic"),
            ("Industry", "Industry"),
            ("Classification", "Classification"),
        ]
    );
}

#[test]
fn unknown_headers_pass_through() {
    let mapping = create_header_mapping(&["Topic", "Unknown-Header", "Industry"]);
    assert_eq!(
        mapping.get("Unknown-Header"),
        Some(&MappedHeader::PassThrough("Unknown-Header".to_string()))
    );
    assert_eq!(mapping.len(), 3);
}

#[test]
fn mapping_domain_matches_header_list() {
    let headers = vec!["fuzzing_idx".to_string(), "TIER".to_string(), "Notes".to_string()];
    let mapping = create_header_mapping(&headers);
    let raw: Vec<&str> = mapping.raw_headers().collect();
    assert_eq!(raw, vec!["fuzzing_idx", "TIER", "Notes"]);
    assert_eq!(
        mapping.get("fuzzing_idx").and_then(MappedHeader::canonical),
        Some(CanonicalField::FuzzingIdx)
    );
}

#[test]
fn empty_header_list_gives_empty_mapping() {
    let headers: Vec<String> = Vec::new();
    assert!(create_header_mapping(&headers).is_empty());
}

#[test]
fn maps_row_keys_and_keeps_values() {
    let mapping = create_header_mapping(&["topic", "Sub Topic", "INDUSTRY", "Notes"]);
    let source = row(&[
        ("topic", " Payments "),
        ("Sub Topic", "ACH"),
        ("INDUSTRY", "Fintech"),
        ("Notes", "keep me"),
    ]);
    let mapped = map_row_to_canonical(&source, &mapping);
    assert_eq!(mapped.get("Topic"), Some(" Payments "));
    assert_eq!(mapped.get("SubTopic"), Some("ACH"));
    assert_eq!(mapped.get("Industry"), Some("Fintech"));
    assert_eq!(mapped.get("Notes"), Some("keep me"));
    assert_eq!(mapped.len(), 4);
}

#[test]
fn keys_missing_from_mapping_keep_their_name() {
    let mapping = create_header_mapping(&["Topic"]);
    let source = row(&[("Topic", "a"), ("column_1", "b")]);
    let mapped = map_row_to_canonical(&source, &mapping);
    assert_eq!(mapped.get("column_1"), Some("b"));
}

// Duplicate raw headers resolving to one canonical field: the later column wins.
#[test]
fn duplicate_canonical_targets_are_last_write_wins() {
    let mapping = create_header_mapping(&["Sub-Topic", "subtopic"]);
    let source = row(&[("Sub-Topic", "first"), ("subtopic", "second")]);
    let mapped = map_row_to_canonical(&source, &mapping);
    assert_eq!(mapped.len(), 1);
    assert_eq!(mapped.get("SubTopic"), Some("second"));

    let reversed = create_header_mapping(&["subtopic", "Sub-Topic"]);
    let mapped = map_row_to_canonical(&source, &reversed);
    assert_eq!(mapped.get("SubTopic"), Some("first"));
}

#[test]
fn maps_rows_in_order() {
    let mapping = create_header_mapping(&["topic"]);
    let rows = vec![row(&[("topic", "a")]), row(&[("topic", "b")]), Row::new()];
    let mapped = map_rows_to_canonical(&rows, &mapping);
    assert_eq!(mapped.len(), 3);
    assert_eq!(mapped[0].get("Topic"), Some("a"));
    assert_eq!(mapped[1].get("Topic"), Some("b"));
    assert!(mapped[2].is_empty());
}

use std::collections::BTreeMap;
use std::fs;

use taxon_core::{
    CoreError, UploadedDataset, analyze_dataset, analyze_dataset_with_overrides, assign_roles,
    load_upload,
};
use taxon_ingest::IngestOptions;
use taxon_model::{CanonicalField, DatasetKind, DetectedRole, Row, UploadOutcome};

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

fn row(cells: &[(&str, &str)]) -> Row {
    cells.iter().copied().collect()
}

#[test]
fn analysis_canonicalizes_headers_and_rows() {
    let raw = headers(&["topic", "Sub-Topic", "industry", "classification", "Notes"]);
    let rows = vec![row(&[
        ("topic", "Payments"),
        ("Sub-Topic", "ACH"),
        ("industry", "Fintech"),
        ("classification", "Restricted"),
        ("Notes", "  keep  "),
    ])];
    let analysis = analyze_dataset(Some("tax.csv"), &raw, &rows);
    assert_eq!(
        analysis.headers,
        vec!["Topic", "SubTopic", "Industry", "Classification", "Notes"]
    );
    assert_eq!(analysis.rows[0].get("SubTopic"), Some("ACH"));
    assert_eq!(analysis.rows[0].get("Notes"), Some("  keep  "));
    assert_eq!(analysis.detected_role, DetectedRole::Classifications);
    assert!(analysis.header_valid);
    assert_eq!(analysis.extra_headers, vec!["notes"]);
    assert_eq!(analysis.row_count, 1);
}

#[test]
fn unknown_file_reports_closest_role() {
    let raw = headers(&["Topic", "SubTopic", "Industry", "Label"]);
    let analysis = analyze_dataset(None, &raw, &[]);
    assert_eq!(analysis.detected_role, DetectedRole::Unknown);
    assert!(!analysis.header_valid);
    assert_eq!(analysis.missing_required_headers, vec!["Classification"]);

    let json = serde_json::to_value(&analysis).expect("encode analysis");
    assert_eq!(json["detectedRole"], "unknown");
    assert_eq!(json["normalizedHeaderMap"]["Label"], "Label");
    assert!(json.get("filename").is_none());
}

#[test]
fn overrides_complete_a_manual_mapping() {
    let raw = headers(&["Topic", "SubTopic", "Industry", "Label"]);
    let rows = vec![row(&[
        ("Topic", "a"),
        ("SubTopic", "b"),
        ("Industry", "c"),
        ("Label", "d"),
    ])];
    let mut overrides = BTreeMap::new();
    overrides.insert("Label".to_string(), CanonicalField::Classification);
    let analysis = analyze_dataset_with_overrides(None, &raw, &rows, &overrides);
    assert_eq!(analysis.detected_role, DetectedRole::Classifications);
    assert!(analysis.header_valid);
    assert_eq!(analysis.rows[0].get("Classification"), Some("d"));
}

#[test]
fn roles_follow_detection_then_hints() {
    let classifications = analyze_dataset(
        None,
        &headers(&["Topic", "SubTopic", "Industry", "Classification"]),
        &[],
    );
    let unknown = analyze_dataset(None, &headers(&["Column1"]), &[]);
    let files = vec![
        UploadedDataset::new("my_strings.csv", unknown.clone()),
        UploadedDataset::new("taxonomy.csv", classifications.clone()),
    ];
    let assignment = assign_roles(&files).expect("assign roles");
    assert_eq!(assignment.strings, 0);
    assert_eq!(assignment.index_of(DatasetKind::Classifications), 1);

    let files = vec![
        UploadedDataset::new("a.csv", classifications.clone())
            .with_forced_role(DatasetKind::Strings),
        UploadedDataset::new("b.csv", classifications),
    ];
    let assignment = assign_roles(&files).expect("forced role wins");
    assert_eq!(assignment.strings, 0);
    assert_eq!(assignment.classifications, 1);

    let files = vec![UploadedDataset::new("data.csv", unknown)];
    let err = assign_roles(&files).unwrap_err();
    assert!(matches!(
        err,
        CoreError::MissingRole {
            role: DatasetKind::Strings
        }
    ));
}

#[test]
fn duplicate_role_claims_are_rejected() {
    let classifications = analyze_dataset(
        None,
        &headers(&["Topic", "SubTopic", "Industry", "Classification"]),
        &[],
    );
    let files = vec![
        UploadedDataset::new("one.csv", classifications.clone()),
        UploadedDataset::new("two.csv", classifications),
    ];
    let err = assign_roles(&files).unwrap_err();
    assert_eq!(
        err.to_string(),
        "no file provides the strings dataset"
    );

    let strings_hint = analyze_dataset(None, &headers(&["x"]), &[]);
    let files = vec![
        UploadedDataset::new("strings_a.csv", strings_hint.clone()),
        UploadedDataset::new("strings_b.csv", strings_hint),
    ];
    let err = assign_roles(&files).unwrap_err();
    assert_eq!(
        err.to_string(),
        "multiple files claim the strings dataset: strings_a.csv, strings_b.csv"
    );
}

#[test]
fn load_upload_reads_and_analyzes_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("classifications.csv");
    fs::write(
        &path,
        "Topic,SubTopic,Industry,Classification\nPayments,ACH,Fintech,Restricted\n",
    )
    .expect("write csv");

    let outcome = load_upload(&path, &IngestOptions::default());
    let analysis = outcome.analysis().expect("parsed upload");
    assert_eq!(analysis.filename.as_deref(), Some("classifications.csv"));
    assert_eq!(analysis.detected_role, DetectedRole::Classifications);

    let bad = dir.path().join("broken.csv");
    fs::write(&bad, b"Topic\n\xff\n").expect("write csv");
    match load_upload(&bad, &IngestOptions::default()) {
        UploadOutcome::Failed(failure) => {
            assert!(failure.parse_error);
            assert_eq!(failure.filename.as_deref(), Some("broken.csv"));
        }
        UploadOutcome::Parsed(_) => panic!("expected a parse failure"),
    }
}

//! Per-file upload analysis.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info, warn};

use taxon_ingest::{IngestOptions, read_csv_table};
use taxon_map::{create_header_mapping, map_rows_to_canonical};
use taxon_model::{
    CanonicalField, DatasetAnalysis, DatasetKind, HeaderMapping, Row, UploadOutcome,
};
use taxon_validate::detect_role;

/// Role suggested by a file name, used when headers do not decide.
///
/// Checks for `string` before `classification`, case-insensitively.
pub fn role_hint_from_filename(name: &str) -> Option<DatasetKind> {
    let lower = name.to_lowercase();
    if lower.contains("string") {
        Some(DatasetKind::Strings)
    } else if lower.contains("classification") {
        Some(DatasetKind::Classifications)
    } else {
        None
    }
}

/// Canonicalizes one decoded file and reports what role it can play.
pub fn analyze_dataset(filename: Option<&str>, headers: &[String], rows: &[Row]) -> DatasetAnalysis {
    let mapping = create_header_mapping(headers);
    let analysis = build_analysis(filename, headers, rows, mapping);
    debug!(
        file = filename.unwrap_or("-"),
        role = %analysis.detected_role,
        rows = analysis.row_count,
        "analyzed dataset"
    );
    analysis
}

/// Re-runs analysis after an operator re-targeted some raw headers.
///
/// Detection runs on the re-targeted header names, so a mapping choice can
/// make a previously unknown file valid.
pub fn analyze_dataset_with_overrides(
    filename: Option<&str>,
    headers: &[String],
    rows: &[Row],
    overrides: &BTreeMap<String, CanonicalField>,
) -> DatasetAnalysis {
    let mapping = create_header_mapping(headers).with_overrides(overrides);
    let targets = mapping.target_headers();
    build_analysis(filename, &targets, rows, mapping)
}

fn build_analysis(
    filename: Option<&str>,
    detection_headers: &[String],
    rows: &[Row],
    mapping: HeaderMapping,
) -> DatasetAnalysis {
    let detection = detect_role(detection_headers);
    let closest = detection.validation_for(detection.closest_kind());
    DatasetAnalysis {
        filename: filename.map(str::to_string),
        headers: mapping.target_headers(),
        rows: map_rows_to_canonical(rows, &mapping),
        row_count: rows.len(),
        is_strings_candidate: detection.is_strings_candidate,
        is_classifications_candidate: detection.is_classifications_candidate,
        detected_role: detection.detected_role,
        ambiguous: detection.ambiguous,
        header_valid: closest.valid,
        missing_required_headers: closest.missing_required_headers.clone(),
        extra_headers: closest.extra_headers.clone(),
        header_mapping: mapping,
    }
}

/// Decodes and analyzes a CSV file. Decoding failures become a failed
/// outcome rather than an error.
pub fn load_upload(path: &Path, options: &IngestOptions) -> UploadOutcome {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    match read_csv_table(path, options) {
        Ok(table) => {
            let analysis = analyze_dataset(filename.as_deref(), &table.headers, &table.rows);
            info!(
                path = %path.display(),
                rows = analysis.row_count,
                role = %analysis.detected_role,
                "parsed upload"
            );
            UploadOutcome::Parsed(Box::new(analysis))
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to parse upload");
            UploadOutcome::failed(filename, err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_hint_prefers_strings() {
        assert_eq!(
            role_hint_from_filename("My_Strings.csv"),
            Some(DatasetKind::Strings)
        );
        assert_eq!(
            role_hint_from_filename("Classifications-2024.CSV"),
            Some(DatasetKind::Classifications)
        );
        assert_eq!(
            role_hint_from_filename("strings_classifications.csv"),
            Some(DatasetKind::Strings)
        );
        assert_eq!(role_hint_from_filename("data.csv"), None);
    }
}

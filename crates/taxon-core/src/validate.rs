//! Validate request handling.

use tracing::{info, info_span, warn};

use taxon_map::{create_header_mapping, map_rows_to_canonical};
use taxon_model::{
    DatasetKind, DatasetPayload, HeaderError, Row, ValidateRequest, ValidateResponse,
};
use taxon_validate::{validate_headers, validate_strings_against_classifications};

fn header_error(payload: &DatasetPayload, kind: DatasetKind) -> Option<HeaderError> {
    let validation = validate_headers(&payload.headers, kind);
    (!validation.valid).then(|| HeaderError {
        kind,
        missing_required_headers: validation.missing_required_headers,
        reason: validation.reason,
    })
}

fn canonical_rows(payload: &DatasetPayload) -> Vec<Row> {
    let mapping = create_header_mapping(&payload.headers);
    map_rows_to_canonical(&payload.rows, &mapping)
}

/// Checks both header sets, then every strings row against the
/// classifications.
///
/// Header failures on either side short-circuit before any row is looked at.
pub fn handle_validate(request: &ValidateRequest) -> ValidateResponse {
    let span = info_span!(
        "validate",
        strings_rows = request.strings.rows.len(),
        classification_rows = request.classifications.rows.len()
    );
    let _guard = span.enter();

    let header_errors: Vec<HeaderError> = [
        header_error(&request.strings, DatasetKind::Strings),
        header_error(&request.classifications, DatasetKind::Classifications),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !header_errors.is_empty() {
        for error in &header_errors {
            warn!(role = %error.kind, reason = %error.reason, "header check failed");
        }
        return ValidateResponse::header_errors(header_errors);
    }

    let strings = canonical_rows(&request.strings);
    let classifications = canonical_rows(&request.classifications);
    let result = validate_strings_against_classifications(&strings, &classifications);
    if result.valid {
        info!(rows = strings.len(), "validation passed");
        ValidateResponse::valid()
    } else {
        warn!(
            rows = strings.len(),
            invalid = result.invalid_count(),
            "validation failed"
        );
        ValidateResponse::invalid_rows(result.invalid_rows, strings.len())
    }
}

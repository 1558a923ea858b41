//! Dataset role detection from headers.

use taxon_model::{DatasetKind, DetectedRole, RoleDetection};

use crate::schema::validate_headers;

/// Decides which role a header set plays.
///
/// Both roles satisfied is ambiguous, neither is unknown. Never fails; an
/// empty header list is simply unknown.
pub fn detect_role<S: AsRef<str>>(headers: &[S]) -> RoleDetection {
    let strings_validation = validate_headers(headers, DatasetKind::Strings);
    let classifications_validation = validate_headers(headers, DatasetKind::Classifications);

    let detected_role = match (strings_validation.valid, classifications_validation.valid) {
        (true, true) => DetectedRole::Ambiguous,
        (true, false) => DetectedRole::Strings,
        (false, true) => DetectedRole::Classifications,
        (false, false) => DetectedRole::Unknown,
    };

    RoleDetection {
        detected_role,
        ambiguous: detected_role == DetectedRole::Ambiguous,
        is_strings_candidate: strings_validation.valid,
        is_classifications_candidate: classifications_validation.valid,
        strings_validation,
        classifications_validation,
    }
}

//! Header checks against a role's required field set.

use std::collections::BTreeSet;

use taxon_map::normalize_header;
use taxon_model::{DatasetKind, HeaderValidation};

/// Checks a header set against the required fields of `kind`.
///
/// Comparison runs on normalized keys, so casing, spacing, hyphens and
/// underscores never matter and header order is irrelevant. Missing fields are
/// reported by canonical name; extra headers in normalized form.
pub fn validate_headers<S: AsRef<str>>(headers: &[S], kind: DatasetKind) -> HeaderValidation {
    let present: Vec<String> = headers
        .iter()
        .map(|header| normalize_header(header.as_ref()))
        .collect();
    let present_set: BTreeSet<&str> = present.iter().map(String::as_str).collect();

    let required: Vec<(String, &'static str)> = kind
        .required_fields()
        .iter()
        .map(|field| (normalize_header(field.as_str()), field.as_str()))
        .collect();
    let required_set: BTreeSet<&str> = required.iter().map(|(key, _)| key.as_str()).collect();

    let missing: Vec<&(String, &'static str)> = required
        .iter()
        .filter(|(key, _)| !present_set.contains(key.as_str()))
        .collect();

    let mut extra: Vec<String> = Vec::new();
    for key in &present {
        if !required_set.contains(key.as_str()) && !extra.contains(key) {
            extra.push(key.clone());
        }
    }

    let reason = if missing.is_empty() {
        "All required headers present".to_string()
    } else {
        let keys: Vec<&str> = missing.iter().map(|(key, _)| key.as_str()).collect();
        format!("Missing required headers: {}", keys.join(", "))
    };

    HeaderValidation {
        valid: missing.is_empty(),
        missing_required_headers: missing.iter().map(|(_, name)| (*name).to_string()).collect(),
        extra_headers: extra,
        reason,
    }
}

/// Like [`validate_headers`], with the role given by name.
///
/// The name must match a configured role exactly; anything else yields an
/// invalid result whose reason names it.
pub fn validate_headers_by_name<S: AsRef<str>>(headers: &[S], role: &str) -> HeaderValidation {
    match DatasetKind::all().iter().find(|kind| kind.as_str() == role) {
        Some(kind) => validate_headers(headers, *kind),
        None => HeaderValidation::invalid_role(role),
    }
}

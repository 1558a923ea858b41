//! Validation engine for strings/classifications datasets.
//!
//! - **Schema**: header sets checked against each role's required fields
//! - **Role detection**: strings, classifications, ambiguous, or unknown
//! - **Cross-dataset**: every strings row must match a classification
//! - **Export**: structural checks and the validation gate
//!
//! All checks are pure functions of their inputs. Failures are returned as
//! structured results; nothing here logs or touches the filesystem.

#![deny(unsafe_code)]

mod cross_dataset;
mod export;
mod required;
mod role;
mod schema;

pub use cross_dataset::{
    ClassificationIndex, ClassificationKey, missing_key_fields,
    validate_strings_against_classifications, validate_strings_against_index,
};
pub use export::{
    ExportError, NO_ROWS_WARNING, decode_export_payload, ensure_validation_passed,
    validate_export_data, validate_export_value,
};
pub use required::validate_required_columns;
pub use role::detect_role;
pub use schema::{validate_headers, validate_headers_by_name};

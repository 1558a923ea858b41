//! Request-level orchestration over the validation engine.
//!
//! Ties decoding, canonicalization, role detection and validation together
//! into the operations a transport exposes: analyze an upload, decide which
//! file is which, validate the pair, and export once validation has passed.

pub mod analysis;
pub mod error;
pub mod export;
pub mod roles;
pub mod validate;

pub use analysis::{
    analyze_dataset, analyze_dataset_with_overrides, load_upload, role_hint_from_filename,
};
pub use error::{CoreError, Result};
pub use export::{
    CSV_CONTENT_TYPE, ExportedCsv, check_export, export_to_file, handle_export,
    parse_export_request,
};
pub use roles::{RoleAssignment, UploadedDataset, assign_roles};
pub use validate::handle_validate;

pub mod contract;
pub mod error;
pub mod field;
pub mod mapping;
pub mod role;
pub mod row;
pub mod validation;

pub use contract::{
    DEFAULT_EXPORT_FILENAME, DatasetAnalysis, DatasetPayload, ExportRequest, HeaderError,
    UploadFailure, UploadOutcome, ValidateBody, ValidateRequest, ValidateResponse,
};
pub use error::{ModelError, Result};
pub use field::{CanonicalField, KEY_FIELDS};
pub use mapping::{HeaderMapping, MappedHeader};
pub use role::{DatasetKind, DetectedRole};
pub use row::Row;
pub use validation::{
    CrossValidation, ExportCheck, HeaderValidation, InvalidRowRecord, RequiredColumnsCheck,
    RoleDetection,
};

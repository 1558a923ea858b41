//! Gated export requests.

use std::path::Path;

use serde_json::Value;
use tracing::{info, info_span, warn};

use taxon_model::{ExportCheck, ExportRequest};
use taxon_output::{CsvExportOptions, export_to_bytes, write_csv_file};
use taxon_validate::{
    decode_export_payload, ensure_validation_passed, validate_export_data,
};

use crate::error::Result;

pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Rendered export ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedCsv {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
    pub row_count: usize,
    pub warning: Option<String>,
}

/// Reads an export request from untyped JSON.
///
/// The validation gate is checked before the payload shape, so an unvalidated
/// request is refused with the gate error whatever its rows look like.
pub fn parse_export_request(body: &Value) -> Result<ExportRequest> {
    let validation_passed = body
        .get("validationPassed")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    ensure_validation_passed(validation_passed)?;

    let (rows, headers) = decode_export_payload(
        body.get("rows").unwrap_or(&Value::Null),
        body.get("headers").unwrap_or(&Value::Null),
    )?;
    let filename = body
        .get("filename")
        .and_then(Value::as_str)
        .map(str::to_string);
    Ok(ExportRequest {
        rows,
        headers,
        filename,
        validation_passed,
    })
}

/// Runs the gate and the structural checks without rendering anything.
pub fn check_export(request: &ExportRequest) -> Result<ExportCheck> {
    ensure_validation_passed(request.validation_passed)?;
    let check = validate_export_data(&request.rows, &request.headers)?;
    if let Some(warning) = &check.warning {
        warn!(filename = request.filename(), "{warning}");
    }
    Ok(check)
}

/// Checks and renders an export in memory.
pub fn handle_export(request: &ExportRequest, options: &CsvExportOptions) -> Result<ExportedCsv> {
    let span = info_span!("export", filename = request.filename());
    let _guard = span.enter();

    let check = check_export(request)?;
    let bytes = export_to_bytes(&request.rows, &request.headers, options)?;
    info!(
        rows = request.rows.len(),
        bytes = bytes.len(),
        "rendered export"
    );
    Ok(ExportedCsv {
        filename: request.filename().to_string(),
        content_type: CSV_CONTENT_TYPE,
        bytes,
        row_count: request.rows.len(),
        warning: check.warning,
    })
}

/// Checks an export and writes it to `path`.
pub fn export_to_file(
    request: &ExportRequest,
    path: &Path,
    options: &CsvExportOptions,
) -> Result<ExportCheck> {
    let span = info_span!("export", path = %path.display());
    let _guard = span.enter();

    let check = check_export(request)?;
    write_csv_file(path, &request.rows, &request.headers, options)?;
    Ok(check)
}

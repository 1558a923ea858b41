use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, info, info_span, trace, warn};

use taxon_core::{UploadedDataset, assign_roles, export_to_file, handle_validate, load_upload};
use taxon_ingest::IngestOptions;
use taxon_model::{
    DatasetAnalysis, DatasetKind, DatasetPayload, ExportCheck, ExportRequest, UploadOutcome,
    ValidateBody, ValidateRequest, ValidateResponse,
};
use taxon_output::CsvExportOptions;

use crate::cli::{DatasetArgs, DetectArgs, ExportArgs, ValidateArgs};
use crate::logging::redact_value;

/// Analyzed strings and classifications files.
#[derive(Debug, Clone)]
pub struct DatasetPair {
    pub strings: DatasetAnalysis,
    pub classifications: DatasetAnalysis,
}

impl DatasetPair {
    pub fn get(&self, kind: DatasetKind) -> &DatasetAnalysis {
        match kind {
            DatasetKind::Strings => &self.strings,
            DatasetKind::Classifications => &self.classifications,
        }
    }

    fn validate_request(&self) -> ValidateRequest {
        ValidateRequest {
            strings: payload(&self.strings),
            classifications: payload(&self.classifications),
        }
    }
}

fn payload(analysis: &DatasetAnalysis) -> DatasetPayload {
    DatasetPayload {
        headers: analysis.headers.clone(),
        rows: analysis.rows.clone(),
    }
}

#[derive(Debug, Clone)]
pub struct ValidateResult {
    pub pair: DatasetPair,
    pub response: ValidateResponse,
}

#[derive(Debug, Clone)]
pub struct ExportResult {
    pub dataset: DatasetKind,
    pub output: PathBuf,
    pub rows: usize,
    pub check: ExportCheck,
}

pub fn run_detect(args: &DetectArgs) -> Vec<(PathBuf, UploadOutcome)> {
    let options = IngestOptions::default();
    args.files
        .iter()
        .map(|path| (path.clone(), load_upload(path, &options)))
        .collect()
}

fn load_analysis(path: &Path, options: &IngestOptions) -> Result<DatasetAnalysis> {
    match load_upload(path, options) {
        UploadOutcome::Parsed(analysis) => Ok(*analysis),
        UploadOutcome::Failed(failure) => {
            Err(anyhow!("parse {}: {}", path.display(), failure.error))
        }
    }
}

fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

/// Loads the input files and decides which one is which.
pub fn load_pair(args: &DatasetArgs) -> Result<DatasetPair> {
    let options = IngestOptions::default();
    let mut inputs: Vec<(&Path, Option<DatasetKind>)> = Vec::new();
    if let Some(path) = &args.strings {
        inputs.push((path.as_path(), Some(DatasetKind::Strings)));
    }
    if let Some(path) = &args.classifications {
        inputs.push((path.as_path(), Some(DatasetKind::Classifications)));
    }
    inputs.extend(args.files.iter().map(|path| (path.as_path(), None)));
    if inputs.is_empty() {
        bail!("no input files given");
    }

    let mut uploads = Vec::with_capacity(inputs.len());
    for (path, forced) in inputs {
        let analysis = load_analysis(path, &options)?;
        let mut upload = UploadedDataset::new(display_name(path), analysis);
        if let Some(role) = forced {
            upload = upload.with_forced_role(role);
        }
        uploads.push(upload);
    }

    let assignment = assign_roles(&uploads).context("assign dataset roles")?;
    info!(
        strings = %uploads[assignment.strings].name,
        classifications = %uploads[assignment.classifications].name,
        "assigned roles"
    );
    Ok(DatasetPair {
        strings: uploads[assignment.strings].analysis.clone(),
        classifications: uploads[assignment.classifications].analysis.clone(),
    })
}

fn validate_pair(pair: &DatasetPair) -> ValidateResponse {
    let response = handle_validate(&pair.validate_request());
    if let ValidateBody::InvalidRows { invalid_rows, .. } = &response.body {
        for record in invalid_rows {
            debug!(
                row = record.row_index,
                reason = redact_value(&record.reason),
                "invalid row"
            );
            for (key, value) in &record.row {
                trace!(
                    row = record.row_index,
                    column = %key,
                    value = redact_value(value),
                    "invalid row cell"
                );
            }
        }
    }
    response
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateResult> {
    let span = info_span!("validate_command");
    let _guard = span.enter();
    let pair = load_pair(&args.datasets)?;
    let response = validate_pair(&pair);
    Ok(ValidateResult { pair, response })
}

pub fn run_export(args: &ExportArgs) -> Result<ExportResult> {
    let span = info_span!("export_command", output = %args.output.display());
    let _guard = span.enter();

    let pair = load_pair(&args.datasets)?;
    let response = validate_pair(&pair);
    if !response.is_valid() {
        warn!(status = response.status, "validation did not pass; export will be refused");
    }

    let dataset = DatasetKind::from(args.dataset);
    let analysis = pair.get(dataset);
    let request = ExportRequest {
        rows: analysis.rows.clone(),
        headers: analysis.headers.clone(),
        filename: Some(display_name(&args.output)),
        validation_passed: response.is_valid(),
    };
    let options = CsvExportOptions::default()
        .with_delimiter(args.delimiter)
        .with_write_headers(!args.no_headers);
    let check = export_to_file(&request, &args.output, &options)
        .with_context(|| format!("export {dataset} to {}", args.output.display()))?;
    Ok(ExportResult {
        dataset,
        output: args.output.clone(),
        rows: request.rows.len(),
        check,
    })
}

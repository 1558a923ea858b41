//! CSV decoding into a header row plus string-cell rows.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use tracing::debug;

use taxon_model::Row;

use crate::error::{IngestError, Result};

/// Decoding options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    /// Trim surrounding whitespace from data cells.
    pub trim_cells: bool,
    /// Drop records whose cells are all empty.
    pub skip_empty_rows: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            trim_cells: true,
            skip_empty_rows: true,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_trim_cells(mut self, trim_cells: bool) -> Self {
        self.trim_cells = trim_cells;
        self
    }

    #[must_use]
    pub fn with_skip_empty_rows(mut self, skip_empty_rows: bool) -> Self {
        self.skip_empty_rows = skip_empty_rows;
        self
    }
}

/// A decoded file: raw headers in column order and one keyed row per record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl CsvTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

fn overflow_key(index: usize) -> String {
    format!("column_{index}")
}

pub fn read_csv_table(path: &Path, options: &IngestOptions) -> Result<CsvTable> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_csv_from_reader(file, options)?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "decoded csv"
    );
    Ok(table)
}

/// Decodes CSV from any reader.
///
/// The first non-empty record is the header row. Cells beyond the header
/// width are keyed `column_<index>`; short records lack the trailing keys.
pub fn read_csv_from_reader<R: Read>(reader: R, options: &IngestOptions) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|err| IngestError::from_csv(index, &err))?;
        let blank = record.iter().all(|value| value.trim().is_empty());

        let Some(header_row) = headers.as_ref() else {
            if !blank {
                headers = Some(record.iter().map(normalize_header).collect());
            }
            continue;
        };

        if blank && options.skip_empty_rows {
            skipped += 1;
            continue;
        }

        let row: Row = record
            .iter()
            .enumerate()
            .map(|(col, value)| {
                let key = header_row
                    .get(col)
                    .cloned()
                    .unwrap_or_else(|| overflow_key(col));
                let value = if options.trim_cells {
                    value.trim()
                } else {
                    value
                };
                (key, value.to_string())
            })
            .collect();
        rows.push(row);
    }

    if skipped > 0 {
        debug!(skipped, "skipped empty records");
    }
    Ok(CsvTable {
        headers: headers.unwrap_or_default(),
        rows,
    })
}

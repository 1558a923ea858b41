//! CSV rendering of exported rows.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use taxon_model::Row;

use crate::error::{OutputError, Result};

/// Formatting options for CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvExportOptions {
    pub delimiter: char,
    pub quote: char,
    /// Emit the header row before the data.
    pub write_headers: bool,
}

impl Default for CsvExportOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            write_headers: true,
        }
    }
}

impl CsvExportOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    #[must_use]
    pub fn with_write_headers(mut self, write_headers: bool) -> Self {
        self.write_headers = write_headers;
        self
    }

    fn builder(&self) -> Result<WriterBuilder> {
        let mut builder = WriterBuilder::new();
        builder
            .delimiter(ascii_byte("delimiter", self.delimiter)?)
            .quote(ascii_byte("quote", self.quote)?)
            .has_headers(false);
        Ok(builder)
    }
}

fn ascii_byte(name: &'static str, value: char) -> Result<u8> {
    u8::try_from(value)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(OutputError::InvalidOption { name, value })
}

/// Column order for an export: the given headers, or the first row's keys
/// when none are given.
pub fn export_columns<S: AsRef<str>>(rows: &[Row], headers: &[S]) -> Vec<String> {
    if headers.is_empty() {
        rows.first()
            .map(|row| row.keys().map(str::to_string).collect())
            .unwrap_or_default()
    } else {
        headers
            .iter()
            .map(|header| header.as_ref().to_string())
            .collect()
    }
}

/// Writes `rows` as CSV in header order, filling absent cells with "".
///
/// Returns the number of data rows written. With neither headers nor rows
/// nothing is written.
pub fn write_csv<W: Write, S: AsRef<str>>(
    writer: W,
    rows: &[Row],
    headers: &[S],
    options: &CsvExportOptions,
) -> Result<usize> {
    let columns = export_columns(rows, headers);
    if columns.is_empty() {
        debug!("nothing to export");
        return Ok(0);
    }

    let mut out = options.builder()?.from_writer(writer);
    if options.write_headers {
        out.write_record(&columns)?;
    }
    for row in rows {
        out.write_record(columns.iter().map(|column| row.get(column).unwrap_or("")))?;
    }
    out.flush().map_err(OutputError::Flush)?;
    debug!(columns = columns.len(), rows = rows.len(), "wrote csv");
    Ok(rows.len())
}

/// Renders an export into an in-memory buffer.
pub fn export_to_bytes<S: AsRef<str>>(
    rows: &[Row],
    headers: &[S],
    options: &CsvExportOptions,
) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, rows, headers, options)?;
    Ok(buffer)
}

/// Writes an export to `path`, creating parent directories as needed.
pub fn write_csv_file<S: AsRef<str>>(
    path: &Path,
    rows: &[Row],
    headers: &[S],
    options: &CsvExportOptions,
) -> Result<usize> {
    let io_error = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let file = File::create(path).map_err(io_error)?;
    let written = write_csv(file, rows, headers, options)?;
    info!(path = %path.display(), rows = written, "exported csv");
    Ok(written)
}

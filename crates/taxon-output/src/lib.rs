//! CSV export for validated datasets.

pub mod error;
pub mod writer;

pub use error::{OutputError, Result};
pub use writer::{CsvExportOptions, export_columns, export_to_bytes, write_csv, write_csv_file};

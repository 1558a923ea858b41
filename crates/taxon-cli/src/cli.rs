//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use taxon_model::DatasetKind;

#[derive(Parser)]
#[command(
    name = "taxon",
    version,
    about = "Detect, validate and export strings/classifications datasets",
    long_about = "Detect which uploaded CSV is the strings dataset and which is the \
                  classifications taxonomy, check that every strings row has a matching \
                  classification, and export validated data."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow cell values (prompts, risks) to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the canonical fields and which roles require them.
    Fields,

    /// Report the detected role of each file.
    Detect(DetectArgs),

    /// Validate a strings file against a classifications file.
    Validate(ValidateArgs),

    /// Validate, then export one of the datasets as CSV.
    Export(ExportArgs),
}

#[derive(Args)]
pub struct DetectArgs {
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Print the upload analysis as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// Input files; explicit role flags override detection.
#[derive(Args, Clone, Default)]
pub struct DatasetArgs {
    /// Files whose roles are detected from headers or file names.
    #[arg(value_name = "FILE", num_args = 0..=2)]
    pub files: Vec<PathBuf>,

    /// Use this file as the strings dataset.
    #[arg(long = "strings", value_name = "PATH")]
    pub strings: Option<PathBuf>,

    /// Use this file as the classifications dataset.
    #[arg(long = "classifications", value_name = "PATH")]
    pub classifications: Option<PathBuf>,
}

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub datasets: DatasetArgs,

    /// Print the validate response as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub datasets: DatasetArgs,

    /// Which dataset to export.
    #[arg(long = "dataset", value_enum, default_value = "strings")]
    pub dataset: DatasetArg,

    /// Output CSV path.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: PathBuf,

    /// Field delimiter.
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,

    /// Omit the header row.
    #[arg(long = "no-headers")]
    pub no_headers: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DatasetArg {
    Strings,
    Classifications,
}

impl From<DatasetArg> for DatasetKind {
    fn from(arg: DatasetArg) -> Self {
        match arg {
            DatasetArg::Strings => Self::Strings,
            DatasetArg::Classifications => Self::Classifications,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

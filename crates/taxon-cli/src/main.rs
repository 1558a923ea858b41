//! `taxon` command-line interface.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use taxon_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use taxon_cli::commands::{run_detect, run_export, run_validate};
use taxon_cli::logging::{LogConfig, LogFormat, init_logging};

mod summary;

use crate::summary::{print_detection, print_export, print_fields, print_validation};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Fields => {
            print_fields();
            0
        }
        Command::Detect(args) => {
            let results = run_detect(&args);
            let failed = results
                .iter()
                .any(|(_, outcome)| outcome.analysis().is_none());
            match print_detection(&results, args.json) {
                Ok(()) => i32::from(failed),
                Err(error) => report(&error),
            }
        }
        Command::Validate(args) => match run_validate(&args) {
            Ok(result) => match print_validation(&result, args.json) {
                Ok(()) => i32::from(!result.response.is_valid()),
                Err(error) => report(&error),
            },
            Err(error) => report(&error),
        },
        Command::Export(args) => match run_export(&args) {
            Ok(result) => {
                print_export(&result);
                0
            }
            Err(error) => report(&error),
        },
    };
    std::process::exit(exit_code);
}

fn report(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

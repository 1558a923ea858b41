//! CLI library components for the `taxon` binary.

pub mod cli;
pub mod commands;
pub mod logging;

//! Command-line argument definitions for `tintlog`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::level::Level;

/// Write leveled, colorized log records.
///
/// Logs MESSAGE as a single record, or every stdin line as its own record
/// when no MESSAGE is given. Records go to stderr unless `--output` is set.
/// A fatal record ends the process with exit status 1.
#[derive(Debug, Parser)]
#[command(name = "tintlog", version, about, long_about = None)]
pub struct Cli {
    /// Severity of the written records.
    #[arg(short = 'l', long, default_value = "info", value_parser = parse_level_arg)]
    pub level: Level,

    /// Append records to this file instead of stderr.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Message words, joined by single spaces.
    #[arg(trailing_var_arg = true)]
    pub message: Vec<String>,
}

/// Parse level argument as case-insensitive string.
fn parse_level_arg(s: &str) -> Result<Level, String> {
    s.parse::<Level>().map_err(|e| e.to_string())
}

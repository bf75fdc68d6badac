//! Runtime configuration for the `tintlog` binary.
//!
//! Built from CLI flags only; there is no config file and no environment
//! lookup.

use std::fs::{File, OpenOptions};
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::LogError;
use crate::level::Level;

/// Where a run reads its messages from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A single message given on the command line.
    Message(String),
    /// One message per stdin line.
    Stdin,
}

/// Runtime configuration derived from CLI arguments.
///
/// Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults (useful in tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Severity of every record written in this run.
    pub level: Level,
    /// File to append records to; `None` writes to stderr.
    pub output: Option<PathBuf>,
    /// Message source.
    pub source: Source,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::Info,
            output: None,
            source: Source::Stdin,
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        let source = if cli.message.is_empty() {
            Source::Stdin
        } else {
            Source::Message(cli.message.join(" "))
        };

        Self {
            level: cli.level,
            output: cli.output.clone(),
            source,
        }
    }

    /// Open the output file for appending, creating it if needed.
    ///
    /// Returns `None` when records should go to stderr.
    pub fn open_output(&self) -> Result<Option<File>, LogError> {
        let Some(path) = &self.output else {
            return Ok(None);
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LogError::Config(format!("cannot open output file {}: {e}", path.display())))?;
        Ok(Some(file))
    }
}

//! Error types for `tintlog`.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Errors that can occur in `tintlog`.
///
/// The level operations on [`Log`](crate::Log) never return these; they
/// surface only through [`Logger::try_log`](crate::Logger::try_log), level
/// parsing, [`init`](crate::init), and the binary.
#[derive(Debug, Error)]
pub enum LogError {
    /// Configuration error (unusable output path).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while writing a record or reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecognized level name.
    #[error("invalid level '{0}': expected one of debug, info, warn, error, fatal")]
    UnknownLevel(String),

    /// Another `log` backend was installed first.
    #[error("a global logger is already installed")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

//! `tintlog` — Minimal leveled console logger.
//!
//! Each call formats one record, a colorized 4-character level tag followed
//! by a 12-hour timestamp and the message, and writes it to a byte-stream
//! sink:
//!
//! ```text
//! \x1b[32mINFO\x1b[0m[01:30:23.607883616 PM] listening on :8080
//! ```
//!
//! Build a [`Logger`] around any sink, or use the free functions and the
//! `*f!` macros that write to a shared stderr logger.
//!
//! # Example
//!
//! ```
//! use tintlog::{Log, Logger, infof};
//!
//! let mut logger = Logger::new(Vec::<u8>::new());
//! logger.info("hello");
//! logger.warnf(format_args!("{} retries left", 2));
//! infof!(logger: &mut logger, "port {}", 8080);
//!
//! let written = String::from_utf8(logger.into_inner()).unwrap();
//! assert_eq!(written.lines().count(), 3);
//!
//! let record = tintlog::format_record(tintlog::Level::Info, "hello");
//! assert!(record.contains("INFO"));
//! assert!(record.ends_with("hello\n"));
//! ```

pub mod bridge;
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod global;
pub mod level;
pub mod logger;
pub mod timestamp;

// Re-export primary API types for convenience.
pub use bridge::init;
pub use error::LogError;
pub use formatter::{format_record, write_record};
pub use global::{
    debug, debugf, default_logger, error, errorf, fatal, fatalf, info, infof, log, warn, warnf,
};
pub use level::{Level, RESET};
pub use logger::{FATAL_EXIT_CODE, Log, Logger, terminate};
pub use timestamp::Timestamp;

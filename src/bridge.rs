//! Backend for the [`log`] facade.
//!
//! Lets libraries that emit through `log::info!` and friends write
//! `tintlog` records. Every record is written; there is no level filter.

use std::io::Write;

use crate::error::LogError;
use crate::global::default_logger;
use crate::level::Level;
use crate::logger::{Log, Logger};

impl From<log::Level> for Level {
    /// `Trace` has no counterpart and folds into [`Level::Debug`].
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Self::Debug,
            log::Level::Info => Self::Info,
            log::Level::Warn => Self::Warn,
            log::Level::Error => Self::Error,
        }
    }
}

impl<W> log::Log for Logger<W>
where
    W: Send + Sync,
    for<'a> &'a W: Write,
{
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let mut shared = self;
        Log::log(&mut shared, Level::from(record.level()), record.args());
    }

    fn flush(&self) {
        let mut sink = self.get_ref();
        let _ = sink.flush();
    }
}

/// Install the default stderr logger as the global `log` backend.
///
/// Fails with [`LogError::AlreadyInstalled`] if a backend is already set.
pub fn init() -> Result<(), LogError> {
    log::set_logger(default_logger())?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

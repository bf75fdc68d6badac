//! Leveled logger bound to a byte-stream sink.

use std::fmt;
use std::io::Write;

use crate::error::LogError;
use crate::formatter::format_record;
use crate::level::Level;

/// Exit status used when a fatal record terminates the process.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Terminate the process with [`FATAL_EXIT_CODE`].
///
/// No cleanup hooks run beyond what [`std::process::exit`] does.
pub fn terminate() -> ! {
    std::process::exit(FATAL_EXIT_CODE)
}

/// The leveled logging operations.
///
/// Implementors provide [`log`](Self::log); every per-level method is built
/// on it. `fatal` and `fatalf` write the record and then call
/// [`terminate`], so they must only be used from top-level application
/// code. Log at [`Level::Fatal`] through [`log`](Self::log) to get the
/// record without the exit.
pub trait Log {
    /// Write one record at `level`. Never fails; delivery is best-effort.
    fn log(&mut self, level: Level, message: impl fmt::Display);

    fn debug(&mut self, message: impl fmt::Display) {
        self.log(Level::Debug, message);
    }

    fn debugf(&mut self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    fn info(&mut self, message: impl fmt::Display) {
        self.log(Level::Info, message);
    }

    fn infof(&mut self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    fn warn(&mut self, message: impl fmt::Display) {
        self.log(Level::Warn, message);
    }

    fn warnf(&mut self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    fn error(&mut self, message: impl fmt::Display) {
        self.log(Level::Error, message);
    }

    fn errorf(&mut self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    /// Write a fatal record, then exit with status 1.
    fn fatal(&mut self, message: impl fmt::Display) -> ! {
        self.log(Level::Fatal, message);
        terminate()
    }

    /// Formatted variant of [`fatal`](Self::fatal).
    fn fatalf(&mut self, args: fmt::Arguments<'_>) -> ! {
        self.log(Level::Fatal, args);
        terminate()
    }
}

/// Format one record and hand it to `sink` in a single `write_all`.
fn write_to(mut sink: impl Write, level: Level, message: impl fmt::Display) -> Result<(), LogError> {
    let record = format_record(level, message);
    sink.write_all(record.as_bytes())?;
    Ok(())
}

/// Logger writing formatted records to a single sink.
///
/// Any [`Write`] sink works: `Vec<u8>`, files, sockets, buffered writers,
/// `Box<dyn Write>`. The logger holds no state besides the sink and takes no
/// locks. Each record reaches the sink in one `write_all` call; whether
/// concurrent records can interleave is up to the sink.
///
/// A shared `&Logger<W>` also implements [`Log`] when `&W` is [`Write`]
/// (stderr, stdout, files), which is how the process-wide default logger
/// is used.
///
/// Write errors are dropped by the [`Log`] methods. Use
/// [`try_log`](Self::try_log) when the caller needs to know.
#[derive(Debug)]
pub struct Logger<W> {
    sink: W,
}

impl<W: Write> Logger<W> {
    /// Create a logger that writes to `sink`.
    pub const fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Write one record, returning the sink's error if the write fails.
    pub fn try_log(&mut self, level: Level, message: impl fmt::Display) -> Result<(), LogError> {
        write_to(&mut self.sink, level, message)
    }
}

impl<W> Logger<W> {
    /// Borrow the sink.
    pub const fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Mutably borrow the sink.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Unwrap the logger, returning the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> Log for Logger<W> {
    fn log(&mut self, level: Level, message: impl fmt::Display) {
        let _ = self.try_log(level, message);
    }
}

impl<W> Log for &Logger<W>
where
    for<'a> &'a W: Write,
{
    fn log(&mut self, level: Level, message: impl fmt::Display) {
        let _ = write_to(&self.sink, level, message);
    }
}

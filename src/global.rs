//! Process-wide default logger writing to standard error.
//!
//! The default logger is created on first use and never replaced or dropped.
//! The free functions here forward to it. Code that needs another sink, or
//! several independent streams, should build its own [`Logger`] instead.

use std::fmt;
use std::io::{self, Stderr};
use std::sync::LazyLock;

use crate::level::Level;
use crate::logger::{Log, Logger};

static DEFAULT: LazyLock<Logger<Stderr>> = LazyLock::new(|| Logger::new(io::stderr()));

/// The shared stderr logger.
pub fn default_logger() -> &'static Logger<Stderr> {
    &DEFAULT
}

/// Write a record at `level` to stderr.
pub fn log(level: Level, message: impl fmt::Display) {
    default_logger().log(level, message);
}

/// Write a debug record to stderr.
pub fn debug(message: impl fmt::Display) {
    default_logger().debug(message);
}

/// Write a formatted debug record to stderr.
pub fn debugf(args: fmt::Arguments<'_>) {
    default_logger().debugf(args);
}

/// Write an info record to stderr.
pub fn info(message: impl fmt::Display) {
    default_logger().info(message);
}

/// Write a formatted info record to stderr.
pub fn infof(args: fmt::Arguments<'_>) {
    default_logger().infof(args);
}

/// Write a warning record to stderr.
pub fn warn(message: impl fmt::Display) {
    default_logger().warn(message);
}

/// Write a formatted warning record to stderr.
pub fn warnf(args: fmt::Arguments<'_>) {
    default_logger().warnf(args);
}

/// Write an error record to stderr.
pub fn error(message: impl fmt::Display) {
    default_logger().error(message);
}

/// Write a formatted error record to stderr.
pub fn errorf(args: fmt::Arguments<'_>) {
    default_logger().errorf(args);
}

/// Write a fatal record to stderr and exit with status 1.
pub fn fatal(message: impl fmt::Display) -> ! {
    default_logger().fatal(message)
}

/// Formatted variant of [`fatal`].
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    default_logger().fatalf(args)
}

/// Log a formatted debug record.
///
/// Writes to the default logger, or to `logger` when the first argument is
/// `logger: <expr>` with `<expr>` a mutable reference to a [`Logger`].
///
/// ```
/// use tintlog::{Logger, debugf};
///
/// debugf!("cache warmed in {} ms", 12);
///
/// let mut logger = Logger::new(std::io::sink());
/// debugf!(logger: &mut logger, "{} entries", 3);
/// ```
#[macro_export]
macro_rules! debugf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::Log::debugf($logger, ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::debugf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted info record. See [`debugf!`].
#[macro_export]
macro_rules! infof {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::Log::infof($logger, ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::infof(::std::format_args!($($arg)+))
    };
}

/// Log a formatted warning record. See [`debugf!`].
#[macro_export]
macro_rules! warnf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::Log::warnf($logger, ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::warnf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted error record. See [`debugf!`].
#[macro_export]
macro_rules! errorf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::Log::errorf($logger, ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::errorf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted fatal record, then exit with status 1.
#[macro_export]
macro_rules! fatalf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::Log::fatalf($logger, ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::fatalf(::std::format_args!($($arg)+))
    };
}

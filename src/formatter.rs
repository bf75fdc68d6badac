//! Record formatter.
//!
//! A record is the colorized level tag, a reset, the bracketed timestamp and
//! the message, terminated by a newline:
//!
//! ```text
//! \x1b[32mINFO\x1b[0m[01:30:23.607883616 PM] server started
//! ```

use std::fmt::{self, Write};

use crate::level::{Level, RESET};
use crate::timestamp::Timestamp;

/// Format a record for `level` stamped with the current local time.
///
/// `message` is anything [`Display`](fmt::Display); pass
/// `format_args!(...)` for the formatted variants.
pub fn format_record(level: Level, message: impl fmt::Display) -> String {
    let mut out = String::with_capacity(64);
    write_record(&mut out, level, &Timestamp::now(), message);
    out
}

/// Append a record for `level` at `ts` to `out`.
pub fn write_record(out: &mut String, level: Level, ts: &Timestamp, message: impl fmt::Display) {
    out.push_str(level.color());
    out.push_str(level.tag());
    out.push_str(RESET);
    // Writing into a String only fails if a Display impl reports an error.
    let _ = write!(out, "[{ts}] {message}");
    out.push('\n');
}

//! Wall-clock timestamps for log records.
//!
//! Records carry a 12-hour clock with nanosecond precision, rendered as
//! `HH:MM:SS.nnnnnnnnn AM` or `... PM`.

use std::fmt;

/// Time of day stamped onto a record.
///
/// Wraps a [`jiff::civil::Time`] taken from the local wall clock. Hours
/// `12..=23` render as `hour - 12` with `PM`, so both midnight and noon
/// print as `00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    /// Local time of day.
    pub value: jiff::civil::Time,
}

impl Timestamp {
    /// Current local time.
    pub fn now() -> Self {
        Self {
            value: jiff::Zoned::now().time(),
        }
    }

    /// Wrap an explicit time of day.
    pub const fn from_time(value: jiff::civil::Time) -> Self {
        Self { value }
    }

    /// Hour on the 12-hour dial (`0..=11`) and its day part.
    pub fn twelve_hour(&self) -> (i8, &'static str) {
        let hour = self.value.hour();
        if hour >= 12 {
            (hour - 12, "PM")
        } else {
            (hour, "AM")
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, day_part) = self.twelve_hour();
        write!(
            f,
            "{hour:02}:{:02}:{:02}.{:09} {day_part}",
            self.value.minute(),
            self.value.second(),
            self.value.subsec_nanosecond()
        )
    }
}

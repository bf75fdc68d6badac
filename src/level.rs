//! Log level representation with display tags and ANSI colors.
//!
//! Each level renders as a fixed 4-character tag wrapped in an SGR color
//! sequence, e.g. `"\x1b[32mINFO\x1b[0m"`.

use std::fmt;
use std::str::FromStr;

use crate::error::LogError;

/// SGR sequence that resets all attributes after a colored tag.
pub const RESET: &str = "\x1b[0m";

/// Canonical log level enumeration.
///
/// Ordered by severity (ascending) via [`Ord`]. Levels only select the tag
/// and color of a record; nothing is filtered by level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl Level {
    /// All levels, least severe first.
    pub const ALL: [Self; 5] = [Self::Debug, Self::Info, Self::Warn, Self::Error, Self::Fatal];

    /// 4-character display tag (e.g., `"DBUG"`, `"EROR"`).
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Debug => "DBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "EROR",
            Self::Fatal => "FATL",
        }
    }

    /// Raw SGR parameters for this level's color.
    ///
    /// - Debug: cyan (`36`)
    /// - Info: green (`32`)
    /// - Warn: yellow/orange (`33`)
    /// - Error: red (`31`)
    /// - Fatal: bold red (`1;31`)
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Debug => "36",
            Self::Info => "32",
            Self::Warn => "33",
            Self::Error => "31",
            Self::Fatal => "1;31",
        }
    }

    /// Full escape sequence that switches the terminal to this level's color.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Debug => "\x1b[36m",
            Self::Info => "\x1b[32m",
            Self::Warn => "\x1b[33m",
            Self::Error => "\x1b[31m",
            Self::Fatal => "\x1b[1;31m",
        }
    }

    /// Look up a level by its discriminant.
    ///
    /// Returns `None` for anything outside `0..=4`.
    pub const fn from_repr(n: u8) -> Option<Self> {
        match n {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warn),
            3 => Some(Self::Error),
            4 => Some(Self::Fatal),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Level {
    type Err = LogError;

    /// Parse a level name or tag, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" | "dbug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "eror" => Ok(Self::Error),
            "fatal" | "fatl" => Ok(Self::Fatal),
            _ => Err(LogError::UnknownLevel(s.to_string())),
        }
    }
}

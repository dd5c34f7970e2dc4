//! Severity level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder name returned for severity values outside the defined set.
pub const UNKNOWN_LEVEL_NAME: &str = "^?^";

/// Severity of a log record, doubling as the logger threshold.
///
/// The numeric encoding is part of the contract: a higher threshold value
/// admits *more* (less severe) records. A record at level `s` is emitted iff
/// `threshold != Off && threshold >= s`. `Off` is only meaningful as a
/// threshold and blocks everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Level {
    Off = 0,
    Panic = 1,
    Fatal = 2,
    Error = 3,
    Warn = 4,
    Info = 5,
    Debug = 6,
    Print = 7,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Off => "OFF",
            Level::Panic => "PANIC",
            Level::Fatal => "FATAL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Print => "PRINT",
        }
    }

    /// Decode a raw severity value.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Level::Off),
            1 => Some(Level::Panic),
            2 => Some(Level::Fatal),
            3 => Some(Level::Error),
            4 => Some(Level::Warn),
            5 => Some(Level::Info),
            6 => Some(Level::Debug),
            7 => Some(Level::Print),
            _ => None,
        }
    }

    /// Display name for a raw severity value, [`UNKNOWN_LEVEL_NAME`] if the
    /// value is out of range.
    pub fn name(value: u8) -> &'static str {
        Level::from_value(value).map_or(UNKNOWN_LEVEL_NAME, |l| l.as_str())
    }

    /// Whether a threshold set to `self` admits a record at `record`.
    #[inline]
    pub fn admits(self, record: Level) -> bool {
        self != Level::Off && self >= record
    }

    /// Panic and fatal records are written synchronously and are followed by
    /// process termination or an unwind.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Level::Panic | Level::Fatal)
    }
}

impl Default for Level {
    /// The most verbose threshold: everything is admitted.
    fn default() -> Self {
        Level::Print
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" => Ok(Level::Off),
            "PANIC" => Ok(Level::Panic),
            "FATAL" => Ok(Level::Fatal),
            "ERROR" => Ok(Level::Error),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "INFO" => Ok(Level::Info),
            "DEBUG" => Ok(Level::Debug),
            "PRINT" => Ok(Level::Print),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

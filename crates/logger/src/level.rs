//! Severity levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record. Higher means more severe.
///
/// The registry attaches no filtering meaning to a level; it is handed to the
/// log core as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    /// Very fine-grained diagnostics
    Trace,
    /// Debugging information
    Debug,
    /// Normal operation
    Info,
    /// Something unexpected but recoverable
    Warn,
    /// An operation failed
    Error,
    /// The process cannot continue
    Fatal,
}

impl Level {
    /// All levels, least severe first
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
    ];

    /// Upper-case name of the level
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string does not name a level
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
        assert_eq!(Level::ALL.iter().max(), Some(&Level::Fatal));
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("info".parse::<Level>(), Ok(Level::Info));
        assert_eq!("WARN".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("Fatal".parse::<Level>(), Ok(Level::Fatal));
        assert!("verbose".parse::<Level>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Level::Debug.to_string(), "DEBUG");
        assert_eq!(format!("{:<6}|", Level::Info), "INFO  |");
    }
}

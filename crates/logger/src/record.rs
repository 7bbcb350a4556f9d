//! Record handed from a logger handle to its core

use crate::Level;
use std::borrow::Cow;
use std::error::Error as StdError;

/// A log record - borrowed so building one never allocates
#[derive(Debug, Clone)]
pub struct Record<'a> {
    /// Log level
    pub level: Level,
    /// Name of the logger that produced the record
    pub logger: &'a str,
    /// The log message
    pub message: Cow<'a, str>,
    /// Error attached to the record, if any
    pub error: Option<&'a (dyn StdError + 'static)>,
    /// Originating module path, when known
    pub target: Option<&'a str>,
    /// File location
    pub file: Option<&'a str>,
    /// Line number
    pub line: Option<u32>,
}

impl<'a> Record<'a> {
    /// Create a new record for the named logger
    #[inline]
    pub fn new(level: Level, logger: &'a str, message: impl Into<Cow<'a, str>>) -> Self {
        Self {
            level,
            logger,
            message: message.into(),
            error: None,
            target: None,
            file: None,
            line: None,
        }
    }

    /// Builder-style method for attaching an error
    #[inline]
    #[must_use]
    pub fn with_error(mut self, error: &'a (dyn StdError + 'static)) -> Self {
        self.error = Some(error);
        self
    }

    /// Builder-style method for setting target
    #[inline]
    #[must_use]
    pub const fn with_target(mut self, target: &'a str) -> Self {
        self.target = Some(target);
        self
    }

    /// Builder-style method for setting location
    #[inline]
    #[must_use]
    pub const fn with_location(mut self, file: &'a str, line: u32) -> Self {
        self.file = Some(file);
        self.line = Some(line);
        self
    }

    /// Convert to owned version (for keeping past the emitting call)
    #[must_use]
    pub fn to_owned_record(&self) -> OwnedRecord {
        OwnedRecord {
            level: self.level,
            logger: self.logger.to_string(),
            message: self.message.clone().into_owned(),
            error: self.error.map(ToString::to_string),
            target: self.target.map(str::to_string),
            file: self.file.map(str::to_string),
            line: self.line,
        }
    }
}

/// Owned version of [`Record`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedRecord {
    /// Log level
    pub level: Level,
    /// Logger name
    pub logger: String,
    /// The log message
    pub message: String,
    /// Rendered error, if one was attached
    pub error: Option<String>,
    /// Originating module path
    pub target: Option<String>,
    /// File location
    pub file: Option<String>,
    /// Line number
    pub line: Option<u32>,
}

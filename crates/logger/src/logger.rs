//! Named logger handle

use crate::{Level, LogCore, Record};
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A named logger.
///
/// Handles are created by a [`LoggerRegistry`](crate::LoggerRegistry) and
/// shared as `Arc<Logger>`. Two handles are the same logger if their names
/// are equal; within one registry they are also the same allocation.
pub struct Logger {
    name: Arc<str>,
    core: Arc<dyn LogCore>,
}

impl Logger {
    pub(crate) fn new(name: Arc<str>, core: Arc<dyn LogCore>) -> Self {
        Self { name, core }
    }

    /// Name of the logger
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the core will emit at this level
    #[inline]
    #[must_use]
    pub fn is_enabled(&self, level: Level) -> bool {
        self.core.is_enabled(level)
    }

    /// Is this logger enabled for [`Level::Trace`]?
    #[must_use]
    pub fn is_trace_enabled(&self) -> bool {
        self.is_enabled(Level::Trace)
    }

    /// Is this logger enabled for [`Level::Debug`]?
    #[must_use]
    pub fn is_debug_enabled(&self) -> bool {
        self.is_enabled(Level::Debug)
    }

    /// Is this logger enabled for [`Level::Info`]?
    #[must_use]
    pub fn is_info_enabled(&self) -> bool {
        self.is_enabled(Level::Info)
    }

    /// Is this logger enabled for [`Level::Warn`]?
    #[must_use]
    pub fn is_warn_enabled(&self) -> bool {
        self.is_enabled(Level::Warn)
    }

    /// Is this logger enabled for [`Level::Error`]?
    #[must_use]
    pub fn is_error_enabled(&self) -> bool {
        self.is_enabled(Level::Error)
    }

    /// Is this logger enabled for [`Level::Fatal`]?
    #[must_use]
    pub fn is_fatal_enabled(&self) -> bool {
        self.is_enabled(Level::Fatal)
    }

    /// Log a message
    pub fn log<'a>(&self, level: Level, message: impl Into<Cow<'a, str>>) {
        if self.is_enabled(level) {
            let message = message.into();
            self.core.log(&Record::new(level, self.name(), message));
        }
    }

    /// Log a message together with the error that caused it
    pub fn log_error<'a>(
        &self,
        level: Level,
        error: &(dyn StdError + 'static),
        message: impl Into<Cow<'a, str>>,
    ) {
        if self.is_enabled(level) {
            let message = message.into();
            self.core
                .log(&Record::new(level, self.name(), message).with_error(error));
        }
    }

    /// Log a lazily built message; `f` only runs if the level is enabled
    pub fn log_with<F, M>(&self, level: Level, f: F)
    where
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>,
    {
        if self.is_enabled(level) {
            let message: Cow<'static, str> = f().into();
            self.core.log(&Record::new(level, self.name(), message));
        }
    }

    /// Pass a fully built record to the core.
    ///
    /// The record's `logger` field is replaced with this logger's name.
    pub fn log_record(&self, record: Record<'_>) {
        if self.is_enabled(record.level) {
            let record = Record {
                logger: self.name(),
                ..record
            };
            self.core.log(&record);
        }
    }

    /// Log trace
    pub fn trace<'a>(&self, message: impl Into<Cow<'a, str>>) {
        self.log(Level::Trace, message);
    }

    /// Log debug
    pub fn debug<'a>(&self, message: impl Into<Cow<'a, str>>) {
        self.log(Level::Debug, message);
    }

    /// Log info
    pub fn info<'a>(&self, message: impl Into<Cow<'a, str>>) {
        self.log(Level::Info, message);
    }

    /// Log a warning
    pub fn warn<'a>(&self, message: impl Into<Cow<'a, str>>) {
        self.log(Level::Warn, message);
    }

    /// Log an error
    pub fn error<'a>(&self, message: impl Into<Cow<'a, str>>) {
        self.log(Level::Error, message);
    }

    /// Log a fatal condition
    pub fn fatal<'a>(&self, message: impl Into<Cow<'a, str>>) {
        self.log(Level::Fatal, message);
    }

    /// Flush the core
    pub fn flush(&self) {
        self.core.flush();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("name", &self.name).finish_non_exhaustive()
    }
}

impl PartialEq for Logger {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Logger {}

impl Hash for Logger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

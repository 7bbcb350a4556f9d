//! Bridge from the `log` crate to a logger registry
//!
//! Each `log` record is routed to the registry logger named after the
//! record's target, so `log::info!(target: "billing", ...)` and a direct
//! `registry.get_logger("billing")` share one handle.

use crate::{Level, LoggerRegistry, Record};
use log::{Log, Metadata, Record as LogRecord};
use std::borrow::Cow;

/// Wrapper to implement the log crate's Log trait
#[derive(Debug, Clone)]
pub struct LogBridge {
    registry: LoggerRegistry,
}

impl LogBridge {
    /// Create a new log bridge
    #[must_use]
    pub const fn new(registry: LoggerRegistry) -> Self {
        Self { registry }
    }

    /// The registry records are routed through
    #[must_use]
    pub const fn registry(&self) -> &LoggerRegistry {
        &self.registry
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.registry
            .get_logger_or_default(Some(metadata.target()))
            .is_enabled(map_level(metadata.level()))
    }

    fn log(&self, record: &LogRecord) {
        let logger = self.registry.get_logger_or_default(Some(record.target()));
        let level = map_level(record.level());

        if !logger.is_enabled(level) {
            return;
        }

        let message = record
            .args()
            .as_str()
            .map_or_else(|| Cow::Owned(record.args().to_string()), Cow::Borrowed);

        let mut bridged = Record::new(level, logger.name(), message)
            .with_target(record.module_path().unwrap_or_else(|| record.target()));

        if let (Some(file), Some(line)) = (record.file(), record.line()) {
            bridged = bridged.with_location(file, line);
        }

        logger.log_record(bridged);
    }

    fn flush(&self) {
        for name in self.registry.names() {
            self.registry.get_logger(name).flush();
        }
    }
}

/// Map log levels to our levels
const fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info => Level::Info,
        log::Level::Debug => Level::Debug,
        log::Level::Trace => Level::Trace,
    }
}

/// Initialize the log crate to route through `registry`
///
/// This will capture all logs from crates using the `log` crate macros.
///
/// # Example
/// ```no_run
/// use proven_logger::{LoggerRegistry, compat::init_log_bridge};
///
/// let registry = LoggerRegistry::default();
/// init_log_bridge(registry.clone()).expect("Failed to set log bridge");
/// ```
///
/// # Errors
///
/// Returns [`log::SetLoggerError`] if a `log` logger is already installed.
pub fn init_log_bridge(registry: LoggerRegistry) -> Result<(), log::SetLoggerError> {
    // log::set_logger requires 'static
    let bridge = Box::leak(Box::new(LogBridge::new(registry)));

    log::set_logger(bridge)?;

    // Filtering belongs to each logger's core
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

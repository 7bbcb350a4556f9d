//! Test support utilities
//!
//! This module provides a log core that captures records in memory.
//! It's only available in this crate's tests or when the `test-support`
//! feature is enabled.

use crate::{Level, LogCore, LogCoreFactory, OwnedRecord, Record};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// A core that captures every record in memory.
///
/// Clones share the same buffer, so one `CaptureCore` can serve as the
/// factory for a whole registry and still be inspected afterwards.
#[derive(Clone, Debug)]
pub struct CaptureCore {
    records: Arc<Mutex<Vec<OwnedRecord>>>,
    created: Arc<AtomicUsize>,
    min_level: Level,
}

impl CaptureCore {
    /// Create a new capture core
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            created: Arc::new(AtomicUsize::new(0)),
            min_level: Level::Trace,
        }
    }

    /// Only capture records at or above `level`
    #[must_use]
    pub const fn with_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// All captured records, oldest first
    #[must_use]
    pub fn records(&self) -> Vec<OwnedRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Records emitted by the named logger
    #[must_use]
    pub fn records_for(&self, logger: &str) -> Vec<OwnedRecord> {
        self.records()
            .into_iter()
            .filter(|record| record.logger == logger)
            .collect()
    }

    /// Check if any captured message contains `text`
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|record| record.message.contains(text))
    }

    /// Clear captured records
    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// How many cores this capture has handed out as a factory
    #[must_use]
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl Default for CaptureCore {
    fn default() -> Self {
        Self::new()
    }
}

impl LogCore for CaptureCore {
    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.to_owned_record());
    }

    #[inline]
    fn is_enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }
}

impl LogCoreFactory for CaptureCore {
    fn create(&self, _name: &str) -> Arc<dyn LogCore> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Arc::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoggerRegistry;

    #[test]
    fn test_records_survive_poisoned_buffer() {
        let capture = CaptureCore::new();
        let registry = LoggerRegistry::new(capture.clone());
        let logger = registry.get_logger("auditing");

        let records = Arc::clone(&capture.records);
        let poisoner = std::thread::spawn(move || {
            let _guard = records.lock().unwrap();
            panic!("poison the buffer");
        });
        assert!(poisoner.join().is_err());
        assert!(capture.records.is_poisoned());

        logger.info("after the panic");

        assert!(capture.contains("after the panic"));
        assert_eq!(capture.created(), 1);
    }
}

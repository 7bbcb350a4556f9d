//! Seam to the log core that performs actual emission

use crate::{Level, Record};
use std::sync::Arc;

/// Emission backend wrapped by a [`Logger`](crate::Logger) handle.
///
/// Formatting, filtering and delivery all live behind this trait; the
/// registry never looks at what passes through it.
pub trait LogCore: Send + Sync + 'static {
    /// Emit a record
    fn log(&self, record: &Record<'_>);

    /// Check if a level is enabled (for skipping expensive messages)
    #[inline]
    fn is_enabled(&self, _level: Level) -> bool {
        true
    }

    /// Flush any buffered records
    fn flush(&self) {}
}

/// Builds one [`LogCore`] per logger name.
///
/// Called by the registry at most once for each distinct name, while the
/// registry holds a lock on that name's shard. A factory must not look up
/// loggers from the same registry.
pub trait LogCoreFactory: Send + Sync + 'static {
    /// Create the core for the logger called `name`
    fn create(&self, name: &str) -> Arc<dyn LogCore>;
}

impl<F> LogCoreFactory for F
where
    F: Fn(&str) -> Arc<dyn LogCore> + Send + Sync + 'static,
{
    fn create(&self, name: &str) -> Arc<dyn LogCore> {
        self(name)
    }
}

/// Core that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCore;

impl LogCore for NoOpCore {
    fn log(&self, _record: &Record<'_>) {}

    #[inline(always)]
    fn is_enabled(&self, _level: Level) -> bool {
        false
    }
}

impl LogCoreFactory for NoOpCore {
    fn create(&self, _name: &str) -> Arc<dyn LogCore> {
        Arc::new(Self)
    }
}

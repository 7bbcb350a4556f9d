//! Log core that forwards records to `tracing`

use crate::{Level, LogCore, LogCoreFactory, Record};
use std::sync::Arc;

/// Core that turns each record into a `tracing` event.
///
/// The logger name, source location and any attached error become event
/// fields; level filtering is left to the installed subscriber.
///
/// Every event carries the target `proven_logger::tracing_core`, not the
/// logger name, so directives such as `auditing=debug` never match. Filter
/// on the `logger` field instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingCore;

/// Factory handing out [`TracingCore`]s; the registry default
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingCoreFactory;

macro_rules! forward {
    ($event:ident, $record:expr) => {{
        let record = $record;
        tracing::$event!(
            logger = record.logger,
            module = record.target,
            file = record.file,
            line = record.line,
            error = record.error.map(tracing::field::display),
            fatal = record.level == Level::Fatal,
            "{}",
            record.message
        )
    }};
}

impl LogCore for TracingCore {
    fn log(&self, record: &Record<'_>) {
        match record.level {
            Level::Trace => forward!(trace, record),
            Level::Debug => forward!(debug, record),
            Level::Info => forward!(info, record),
            Level::Warn => forward!(warn, record),
            // tracing has nothing above ERROR
            Level::Error | Level::Fatal => forward!(error, record),
        }
    }

    fn is_enabled(&self, level: Level) -> bool {
        match level {
            Level::Trace => tracing::enabled!(tracing::Level::TRACE),
            Level::Debug => tracing::enabled!(tracing::Level::DEBUG),
            Level::Info => tracing::enabled!(tracing::Level::INFO),
            Level::Warn => tracing::enabled!(tracing::Level::WARN),
            Level::Error | Level::Fatal => tracing::enabled!(tracing::Level::ERROR),
        }
    }
}

impl LogCoreFactory for TracingCoreFactory {
    fn create(&self, _name: &str) -> Arc<dyn LogCore> {
        Arc::new(TracingCore)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoggerRegistry;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_records_become_events() {
        let registry = LoggerRegistry::default();

        registry.get_logger("billing").warn("card declined");

        assert!(logs_contain("card declined"));
        assert!(logs_contain("billing"));
        assert!(logs_contain("WARN"));
    }

    #[test]
    #[traced_test]
    fn test_fatal_maps_to_error() {
        let logger = LoggerRegistry::default().get_logger("core");

        logger.fatal("out of memory");

        assert!(logs_contain("ERROR"));
        assert!(logs_contain("fatal=true"));
    }

    #[test]
    #[traced_test]
    fn test_error_is_a_field() {
        let logger = LoggerRegistry::default().get_logger("io");
        let err = std::io::Error::other("disk gone");

        logger.log_error(Level::Error, &err, "write failed");

        assert!(logs_contain("write failed"));
        assert!(logs_contain("error=disk gone"));
    }

    #[test]
    #[traced_test]
    fn test_target_is_core_module() {
        LoggerRegistry::default().get_logger("auditing").info("user signed in");

        logs_assert(|lines: &[&str]| {
            match lines
                .iter()
                .find(|line| line.contains("user signed in"))
            {
                Some(line)
                    if line.contains("proven_logger::tracing_core")
                        && line.contains("auditing") =>
                {
                    Ok(())
                }
                other => Err(format!("unexpected event line: {other:?}")),
            }
        });
    }

    #[test]
    #[traced_test]
    fn test_enabled_follows_subscriber() {
        let logger = LoggerRegistry::default().get_logger("anything");

        // traced_test installs a subscriber that accepts everything from
        // this crate
        assert!(logger.is_trace_enabled());
        assert!(logger.is_fatal_enabled());
    }
}

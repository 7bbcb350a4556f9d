//! Routing the `log` facade through a registry

#![cfg(feature = "log-compat")]

use proven_logger::{Level, LogCore, LoggerRegistry, OwnedRecord, Record, compat};
use serial_test::serial;
use std::sync::{Arc, Mutex, OnceLock};

type Captured = Arc<Mutex<Vec<OwnedRecord>>>;

struct Capture(Captured);

impl LogCore for Capture {
    fn log(&self, record: &Record<'_>) {
        self.0.lock().unwrap().push(record.to_owned_record());
    }

    fn is_enabled(&self, level: Level) -> bool {
        level >= Level::Debug
    }
}

/// The `log` logger can only be set once per process
fn installed() -> &'static (LoggerRegistry, Captured) {
    static INSTALLED: OnceLock<(LoggerRegistry, Captured)> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        let captured: Captured = Arc::default();
        let sink = captured.clone();
        let registry = LoggerRegistry::new(move |_name: &str| -> Arc<dyn LogCore> {
            Arc::new(Capture(sink.clone()))
        });
        compat::init_log_bridge(registry.clone()).expect("Failed to set log bridge");
        (registry, captured)
    })
}

fn take() -> Vec<OwnedRecord> {
    std::mem::take(&mut *installed().1.lock().unwrap())
}

#[test]
#[serial]
fn test_log_macros_reach_named_logger() {
    let (registry, _) = installed();
    take();

    log::info!(target: "billing", "charged {} cents", 250);
    log::warn!(target: "billing", "card expiring");

    let records = take();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.logger == "billing"));
    assert_eq!(records[0].message, "charged 250 cents");
    assert_eq!(records[1].level, Level::Warn);
    assert!(registry.contains("billing"));
}

#[test]
#[serial]
fn test_default_target_is_module_path() {
    let (registry, _) = installed();
    take();

    log::error!("something broke");

    let records = take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].logger, module_path!());
    assert!(records[0].line.is_some());
    assert!(registry.contains(module_path!()));
}

#[test]
#[serial]
fn test_core_filtering_applies() {
    let _ = installed();
    take();

    log::trace!(target: "auditing", "too fine");
    log::debug!(target: "auditing", "kept");

    let records = take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "kept");
    assert!(!log::log_enabled!(target: "auditing", log::Level::Trace));
}

#[test]
#[serial]
fn test_bridge_and_registry_share_handles() {
    let (registry, _) = installed();
    take();

    let direct = registry.get_logger("payments");
    log::info!(target: "payments", "via log");
    direct.info("via handle");

    let records = take();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.logger == "payments"));
    assert!(Arc::ptr_eq(&direct, &registry.get_logger("payments")));
}

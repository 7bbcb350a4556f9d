//! Process-wide registry, installed explicitly.
//!
//! Nothing is created behind the caller's back: until [`init`] runs, every
//! lookup here fails with [`Error::NotInitialized`]. Code that can take a
//! [`LoggerRegistry`] as a parameter should prefer that.

use crate::{Error, Logger, LoggerRegistry, Result, TypeIdentifier};
use std::sync::{Arc, OnceLock};
use tracing::info;

static GLOBAL: OnceLock<LoggerRegistry> = OnceLock::new();

/// Install `registry` as the process-wide registry.
///
/// # Errors
///
/// Returns [`Error::AlreadyInitialized`] if a registry is already installed;
/// the installed one is kept.
pub fn init(registry: LoggerRegistry) -> Result<()> {
    GLOBAL
        .set(registry)
        .map_err(|_| Error::AlreadyInitialized)?;

    info!("Global logger registry installed");
    Ok(())
}

/// The installed registry, if any
pub fn registry() -> Option<&'static LoggerRegistry> {
    GLOBAL.get()
}

fn installed() -> Result<&'static LoggerRegistry> {
    registry().ok_or(Error::NotInitialized)
}

/// Get a logger by name from the installed registry.
///
/// # Errors
///
/// Returns [`Error::NotInitialized`] if [`init`] has not been called.
pub fn logger(name: impl AsRef<str>) -> Result<Arc<Logger>> {
    Ok(installed()?.get_logger(name))
}

/// Get the logger named after type `T` from the installed registry.
///
/// # Errors
///
/// Returns [`Error::NotInitialized`] if [`init`] has not been called, or
/// [`Error::InvalidIdentifier`] if `T` has no usable name.
pub fn logger_for<T: ?Sized>() -> Result<Arc<Logger>> {
    installed()?.logger_for_type(TypeIdentifier::of::<T>())
}

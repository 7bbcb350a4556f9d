//! Registry of named loggers for Proven Network
//!
//! A [`LoggerRegistry`] hands out one shared [`Logger`] per name: the first
//! lookup creates it, every later lookup (from any thread) returns the same
//! `Arc`. Loggers can also be named after a Rust type with
//! [`LoggerRegistry::logger_for`].
//!
//! Emission is delegated to a [`LogCore`] built per logger by a
//! [`LogCoreFactory`]. The default factory forwards to `tracing`.
//!
//! # Example
//! ```
//! use proven_logger::LoggerRegistry;
//! use std::sync::Arc;
//!
//! struct ThingDoer;
//!
//! let registry = LoggerRegistry::default();
//!
//! let auditing = registry.get_logger("auditing");
//! assert!(Arc::ptr_eq(&auditing, &registry.get_logger("auditing")));
//!
//! let logger = registry.logger_for::<ThingDoer>().unwrap();
//! assert!(logger.name().ends_with("ThingDoer"));
//! logger.info("doing the thing");
//! ```
#![warn(missing_docs, unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod level;
mod log_core;
mod logger;
mod record;
mod registry;
mod tracing_core;
mod type_name;

pub mod compat;
pub mod global;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::{DEFAULT_LOGGER_NAME, RegistryConfig, RegistryConfigBuilder};
pub use error::{Error, Result};
pub use level::{Level, ParseLevelError};
pub use log_core::{LogCore, LogCoreFactory, NoOpCore};
pub use logger::Logger;
pub use record::{OwnedRecord, Record};
pub use registry::LoggerRegistry;
pub use tracing_core::{TracingCore, TracingCoreFactory};
pub use type_name::TypeIdentifier;

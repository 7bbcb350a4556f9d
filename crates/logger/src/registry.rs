//! Registry of named loggers

use crate::{
    LogCoreFactory, Logger, RegistryConfig, Result, TracingCoreFactory, TypeIdentifier,
};
use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Registry mapping logger names to shared [`Logger`] handles.
///
/// The first lookup of a name creates its handle; every later lookup, from
/// any thread, returns that same `Arc`. Cloning a registry shares its
/// handles.
#[derive(Clone)]
pub struct LoggerRegistry {
    /// Handles by name
    handles: Arc<DashMap<Arc<str>, Arc<Logger>>>,
    /// Builds the core for each new handle
    factory: Arc<dyn LogCoreFactory>,
    config: Arc<RegistryConfig>,
}

impl LoggerRegistry {
    /// Create a registry whose handles use cores built by `factory`
    pub fn new(factory: impl LogCoreFactory) -> Self {
        Self::with_config(factory, RegistryConfig::default())
    }

    /// Create a registry with explicit configuration
    pub fn with_config(factory: impl LogCoreFactory, config: RegistryConfig) -> Self {
        Self {
            handles: Arc::new(DashMap::with_capacity(config.initial_capacity)),
            factory: Arc::new(factory),
            config: Arc::new(config),
        }
    }

    /// Configuration this registry was built with
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Get the logger called `name`, creating it on first use.
    ///
    /// Any string is accepted, including the empty string.
    pub fn get_logger(&self, name: impl AsRef<str>) -> Arc<Logger> {
        let name = name.as_ref();

        // Present names only need a shard read lock
        let existing = self.handles.get(name).map(|entry| Arc::clone(entry.value()));
        if let Some(logger) = existing {
            return logger;
        }

        // The shard write lock is held across check and insert, so racing
        // first lookups agree on one handle and the factory runs once
        let key: Arc<str> = Arc::from(name);
        let mut created = false;
        let logger = {
            let entry = self.handles.entry(Arc::clone(&key)).or_insert_with(|| {
                created = true;
                let core = self.factory.create(name);
                Arc::new(Logger::new(key, core))
            });
            Arc::clone(entry.value())
        };

        // Only after the shard lock is released: a subscriber may route this
        // event back into the registry
        if created {
            debug!(logger = name, "Created logger");
        }

        logger
    }

    /// Get a logger, substituting the configured default name for `None`
    /// or an empty name
    pub fn get_logger_or_default(&self, name: Option<&str>) -> Arc<Logger> {
        match name {
            Some(name) if !name.is_empty() => self.get_logger(name),
            _ => self.get_logger(&self.config.default_name),
        }
    }

    /// Get the logger named after type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`](crate::Error::InvalidIdentifier)
    /// if `T` is anonymous, such as a closure.
    pub fn logger_for<T: ?Sized>(&self) -> Result<Arc<Logger>> {
        self.logger_for_type(TypeIdentifier::of::<T>())
    }

    /// Get the logger named after the identified type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`](crate::Error::InvalidIdentifier)
    /// if no canonical name can be derived.
    pub fn logger_for_type(&self, id: TypeIdentifier) -> Result<Arc<Logger>> {
        let name = id.canonical_name()?;
        Ok(self.get_logger(name))
    }

    /// Check if a logger with this name has been created
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.handles.contains_key(name)
    }

    /// Number of loggers created so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Check if no logger has been created yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Names of all created loggers, sorted
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .handles
            .iter()
            .map(|entry| entry.key().to_string())
            .collect();
        names.sort_unstable();
        names
    }

    /// Drop every handle held by the registry.
    ///
    /// Handles already given out keep working, but later lookups create new
    /// ones. Intended for test isolation.
    pub fn clear(&self) {
        self.handles.clear();
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new(TracingCoreFactory)
    }
}

impl fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("loggers", &self.handles.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

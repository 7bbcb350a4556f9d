//! Registry configuration

use crate::Result;
use serde::{Deserialize, Serialize};

/// Name used when a caller asks for a logger without one
pub const DEFAULT_LOGGER_NAME: &str = "Logger";

/// Configuration for a [`LoggerRegistry`](crate::LoggerRegistry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Logger name substituted for a missing or empty name
    pub default_name: String,
    /// Number of handles to reserve space for up front
    pub initial_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_LOGGER_NAME.to_string(),
            initial_capacity: 0,
        }
    }
}

impl RegistryConfig {
    /// Start building a configuration from the defaults
    #[must_use]
    pub fn builder() -> RegistryConfigBuilder {
        RegistryConfigBuilder::default()
    }

    /// Parse a configuration from TOML; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the text is not
    /// valid TOML or a key has the wrong type.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

/// Builder for [`RegistryConfig`]
#[derive(Debug, Default)]
pub struct RegistryConfigBuilder {
    config: RegistryConfig,
}

impl RegistryConfigBuilder {
    /// Set the fallback logger name
    #[must_use]
    pub fn default_name(mut self, name: impl Into<String>) -> Self {
        self.config.default_name = name.into();
        self
    }

    /// Set the initial handle capacity
    #[must_use]
    pub const fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> RegistryConfig {
        self.config
    }
}

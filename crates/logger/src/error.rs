//! Error types for the logger registry

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when resolving loggers
#[derive(Debug, Error)]
pub enum Error {
    /// No canonical logger name can be derived from a type
    #[error("Cannot derive a logger name from type `{type_name}`")]
    InvalidIdentifier {
        /// The raw type name that was rejected
        type_name: String,
    },

    /// A global registry has already been installed
    #[error("Global logger registry already initialized")]
    AlreadyInitialized,

    /// No global registry has been installed yet
    #[error("Global logger registry not initialized")]
    NotInitialized,

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

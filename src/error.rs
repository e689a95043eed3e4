//! Error types for store devtools configuration.

use thiserror::Error;

/// Errors raised while loading settings or setting up logging.
///
/// Normalizing options never fails on its own; these cover the plumbing around it.
#[derive(Debug, Error)]
pub enum DevtoolsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for DevtoolsError {
    fn from(err: config::ConfigError) -> Self {
        DevtoolsError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for DevtoolsError {
    fn from(err: serde_json::Error) -> Self {
        DevtoolsError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for DevtoolsError {
    fn from(err: toml::ser::Error) -> Self {
        DevtoolsError::Serialization(err.to_string())
    }
}

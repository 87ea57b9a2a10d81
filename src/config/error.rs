//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Cannot read pricing table {path}: {source}")]
    RatesUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed pricing table {path}: {source}")]
    RatesMalformed {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Session idle timeout must be positive")]
    InvalidSessionIdle,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid pricing table: {0}")]
    InvalidPricingTable(#[from] crate::domain::foundation::ValidationError),
}

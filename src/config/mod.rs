//! Application configuration module
//!
//! Configuration is read from environment variables with the
//! `QUOTE_QUALIFIER` prefix; nested values use double underscores.
//! Every section has defaults, so an empty environment yields a
//! development setup with in-memory storage and the built-in rate table.
//!
//! # Example
//!
//! ```no_run
//! use quote_qualifier::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod pricing;
mod server;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use pricing::PricingConfig;
pub use server::{Environment, LogFormat, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Where finished records are stored
    #[serde(default)]
    pub storage: StorageConfig,

    /// Rate table source
    #[serde(default)]
    pub pricing: PricingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `QUOTE_QUALIFIER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `QUOTE_QUALIFIER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `QUOTE_QUALIFIER__STORAGE__BACKEND=file` -> `storage.backend = file`
    /// - `QUOTE_QUALIFIER__PRICING__RATES_PATH=...` -> `pricing.rates_path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("QUOTE_QUALIFIER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.storage.validate()?;
        self.pricing.validate()?;
        Ok(())
    }
}

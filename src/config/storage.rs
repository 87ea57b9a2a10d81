//! Storage configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where finished qualification records are kept
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Base directory for the file backend
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Seconds an untouched session is kept before it counts as abandoned
    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Lost on restart; development and tests
    #[default]
    Memory,
    /// One YAML file per quote under `data_dir`
    File,
}

impl StorageConfig {
    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.session_idle_secs == 0 {
            return Err(ValidationError::InvalidSessionIdle);
        }
        if self.backend == StorageBackend::File && self.data_dir.trim().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            session_idle_secs: default_session_idle_secs(),
        }
    }
}

fn default_data_dir() -> String {
    "./data/qualifications".to_string()
}

fn default_session_idle_secs() -> u64 {
    60 * 60
}

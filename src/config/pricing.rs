//! Pricing configuration

use serde::Deserialize;

use crate::domain::pricing::PricingTable;

use super::error::{ConfigError, ValidationError};

/// Rate table source
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PricingConfig {
    /// YAML rate table; the built-in table is used when unset.
    /// Keys missing from the file keep their built-in value.
    pub rates_path: Option<String>,
}

impl PricingConfig {
    /// Loads and validates the rate table.
    ///
    /// # Errors
    ///
    /// - `RatesUnreadable` if the file cannot be read
    /// - `RatesMalformed` if it is not a valid rate table
    /// - `ValidationFailed` if a rate is out of range
    pub fn load_table(&self) -> Result<PricingTable, ConfigError> {
        let table = match self.rates_path.as_deref() {
            None => PricingTable::default(),
            Some(path) => {
                let yaml =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::RatesUnreadable {
                        path: path.to_string(),
                        source,
                    })?;
                serde_yaml::from_str(&yaml).map_err(|source| ConfigError::RatesMalformed {
                    path: path.to_string(),
                    source,
                })?
            }
        };

        table.validate().map_err(ValidationError::from)?;
        Ok(table)
    }

    /// Validate pricing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.rates_path {
            if path.trim().is_empty() {
                return Err(ValidationError::MissingRequired("pricing.rates_path"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn rates_file(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    fn config_for(file: &NamedTempFile) -> PricingConfig {
        PricingConfig {
            rates_path: Some(file.path().display().to_string()),
        }
    }

    #[test]
    fn no_path_uses_builtin_table() {
        let table = PricingConfig::default().load_table().unwrap();
        assert_eq!(table, PricingTable::default());
    }

    #[test]
    fn file_overrides_selected_rates() {
        let file = rates_file("urgency:\n  urgent: 1.4\n");
        let table = config_for(&file).load_table().unwrap();
        assert_eq!(table.urgency.urgent, 1.4);
        assert_eq!(table.showcase, PricingTable::default().showcase);
    }

    #[test]
    fn missing_file_is_unreadable() {
        let config = PricingConfig {
            rates_path: Some("/nonexistent/rates.yaml".to_string()),
        };
        assert!(matches!(
            config.load_table(),
            Err(ConfigError::RatesUnreadable { .. })
        ));
    }

    #[test]
    fn malformed_file_is_rejected() {
        let file = rates_file("urgency: [1, 2\n");
        assert!(matches!(
            config_for(&file).load_table(),
            Err(ConfigError::RatesMalformed { .. })
        ));
    }

    #[test]
    fn out_of_range_rate_fails_validation() {
        let file = rates_file("urgency:\n  urgent: 0.5\n");
        assert!(matches!(
            config_for(&file).load_table(),
            Err(ConfigError::ValidationFailed(
                ValidationError::InvalidPricingTable(_)
            ))
        ));
    }

    #[test]
    fn blank_path_fails_validation() {
        let config = PricingConfig {
            rates_path: Some("  ".to_string()),
        };
        assert!(config.validate().is_err());
    }
}

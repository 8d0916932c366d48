//! Configuration structures for the locnav workspace.
//!
//! This module provides configuration types for the controller and CLI:
//!
//! - [`ServiceConfig`] - Data service settings (dataset path, channel sizing)
//! - [`ScreenConfig`] - Per-screen settings (filter field schema)
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`] with the values the
//! location listing screen ships with. Configuration files are JSON and
//! every section is optional thanks to `#[serde(default)]`.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::FieldSpec;

/// Configuration for the data service backing the controller.
///
/// # Examples
///
/// ```
/// use locnav_core::ServiceConfig;
///
/// let config = ServiceConfig::default();
/// assert_eq!(config.channel_capacity, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Path to the JSON dataset file (CLI data service).
    pub dataset_path: Utf8PathBuf,

    /// Capacity of the fetch-completion event channel.
    pub channel_capacity: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            dataset_path: Utf8PathBuf::new(),
            channel_capacity: 64,
        }
    }
}

/// Per-screen configuration for the location listing.
///
/// The filter schema is supplied here rather than hardcoded in the filter
/// form so other screens can reuse the form logic over a different set of
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Declarative schema of the filter form fields.
    pub filter_fields: Vec<FieldSpec>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            filter_fields: vec![
                FieldSpec::new("name", "Name", "Enter a name"),
                FieldSpec::new("CIAM", "CIAM", "Enter a CIAM code"),
                FieldSpec::new("parent_location", "Parent location", "Enter the parent"),
            ],
        }
    }
}

/// Root configuration for the locnav workspace.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data service settings.
    pub service: ServiceConfig,

    /// Location listing screen settings.
    pub screen: ScreenConfig,
}

impl Config {
    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, fails to
    /// parse, or fails validation.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_owned()));
        }
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel capacity is zero or the filter
    /// schema contains empty or duplicate keys.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service.channel_capacity == 0 {
            return Err(ConfigError::InvalidOption {
                option: "service.channel_capacity".to_owned(),
                reason: "must be positive".to_owned(),
            });
        }

        let mut seen = crate::hash::FxHashSet::default();
        for field in &self.screen.filter_fields {
            if field.key.is_empty() {
                return Err(ConfigError::InvalidOption {
                    option: "screen.filter_fields".to_owned(),
                    reason: "field key must not be empty".to_owned(),
                });
            }
            if !seen.insert(field.key.as_str()) {
                return Err(ConfigError::InvalidOption {
                    option: "screen.filter_fields".to_owned(),
                    reason: format!("duplicate field key '{}'", field.key),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.screen.filter_fields.len(), 3);
    }

    #[test]
    fn test_default_filter_schema_keys() {
        let config = Config::default();
        let keys: Vec<&str> = config
            .screen
            .filter_fields
            .iter()
            .map(|f| f.key.as_str())
            .collect();
        assert_eq!(keys, ["name", "CIAM", "parent_location"]);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut config = Config::default();
        config.service.channel_capacity = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidOption { .. })
        ));
    }

    #[test]
    fn test_duplicate_filter_key_rejected() {
        let mut config = Config::default();
        config
            .screen
            .filter_fields
            .push(FieldSpec::new("name", "Name again", ""));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"service": {}}"#).unwrap();
        assert_eq!(config.service.channel_capacity, 64);
        assert_eq!(config.screen.filter_fields.len(), 3);
    }
}

//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading settings from
//! a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::PayPeriodStartDay;
use crate::storage::JsonFileStore;

use super::types::{AppConfig, SettingsFile};

/// Loads and provides access to application configuration.
///
/// # File Format
///
/// ```text
/// storage_path: /home/me/.local/share/shifts/schedule.json
/// default_pay_period_start_day: 16
/// ```
///
/// Both keys are optional.
///
/// # Example
///
/// ```no_run
/// use shift_rotation_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./settings.yaml")?;
/// let store = loader.open_store();
/// # Ok::<(), shift_rotation_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file cannot be read
    /// - [`EngineError::ConfigParseError`] if the file is not valid YAML for the settings
    /// - [`EngineError::InvalidPayPeriodStartDay`] if the default start day is outside 1..=28
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|err| match err {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        // An empty document is valid: every key is optional.
        let settings = if content.trim().is_empty() {
            SettingsFile::default()
        } else {
            serde_yaml::from_str::<SettingsFile>(content).map_err(|e| {
                EngineError::ConfigParseError {
                    path: "<inline>".to_string(),
                    message: e.to_string(),
                }
            })?
        };

        Self::from_settings(settings)
    }

    /// Validates a parsed settings file.
    pub fn from_settings(settings: SettingsFile) -> EngineResult<Self> {
        let defaults = AppConfig::default();

        let default_pay_period_start_day = match settings.default_pay_period_start_day {
            Some(day) => PayPeriodStartDay::new(day)?,
            None => defaults.default_pay_period_start_day,
        };

        Ok(Self {
            config: AppConfig {
                storage_path: settings.storage_path.unwrap_or(defaults.storage_path),
                default_pay_period_start_day,
            },
        })
    }

    /// Wraps an already validated configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the schedule storage path.
    pub fn storage_path(&self) -> &Path {
        &self.config.storage_path
    }

    /// Returns the pay period start day assumed for records without one.
    pub fn default_pay_period_start_day(&self) -> PayPeriodStartDay {
        self.config.default_pay_period_start_day
    }

    /// Opens the JSON file store described by this configuration.
    pub fn open_store(&self) -> JsonFileStore {
        JsonFileStore::new(
            self.config.storage_path.clone(),
            self.config.default_pay_period_start_day,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_full_settings() {
        let loader = ConfigLoader::from_yaml_str(
            "storage_path: /tmp/schedule.json\ndefault_pay_period_start_day: 21\n",
        )
        .unwrap();
        assert_eq!(loader.storage_path(), Path::new("/tmp/schedule.json"));
        assert_eq!(loader.default_pay_period_start_day().day(), 21);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let loader = ConfigLoader::from_yaml_str("").unwrap();
        assert_eq!(loader.config(), &AppConfig::default());
        assert_eq!(loader.default_pay_period_start_day().day(), 16);
    }

    #[test]
    fn test_partial_settings() {
        let loader = ConfigLoader::from_yaml_str("default_pay_period_start_day: 1").unwrap();
        assert_eq!(
            loader.storage_path(),
            PathBuf::from(crate::config::DEFAULT_STORAGE_PATH).as_path()
        );
        assert_eq!(loader.default_pay_period_start_day().day(), 1);
    }

    #[test]
    fn test_out_of_range_start_day() {
        match ConfigLoader::from_yaml_str("default_pay_period_start_day: 30") {
            Err(EngineError::InvalidPayPeriodStartDay { day }) => assert_eq!(day, 30),
            other => panic!("Expected InvalidPayPeriodStartDay, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        assert!(matches!(
            ConfigLoader::from_yaml_str("storage: here"),
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/path/settings.yaml") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("settings.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_reports_file_path_on_parse_error() {
        let path = std::env::temp_dir().join(format!("settings-{}.yaml", uuid::Uuid::new_v4()));
        fs::write(&path, "default_pay_period_start_day: [1, 2]").unwrap();

        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).unwrap();

        match result {
            Err(EngineError::ConfigParseError { path: p, .. }) => {
                assert_eq!(p, path.display().to_string())
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("settings-{}.yaml", uuid::Uuid::new_v4()));
        fs::write(&path, "default_pay_period_start_day: 5\n").unwrap();

        let loader = ConfigLoader::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loader.default_pay_period_start_day().day(), 5);
    }
}

//! Configuration management for rolodex.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "rolodex";

/// Default store file name.
const DATA_FILE_NAME: &str = "customers.json";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `ROLODEX_`, `__` between keys)
/// 2. TOML config file at `~/.config/rolodex/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Search configuration.
    pub search: SearchConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the customer store file.
    /// Defaults to `~/.local/share/rolodex/customers.json`
    pub data_path: Option<PathBuf>,
}

/// Search-related configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Minimum query length before a search is run.
    ///
    /// This gates the presentation layer only; the search engine itself
    /// accepts any non-empty query.
    pub min_query_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_length: 2,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails, or if
    /// the resulting configuration is invalid.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("ROLODEX_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.search.min_query_length == 0 {
            return Err(Error::ConfigValidation {
                message: "min_query_length must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Get the store path, resolving defaults if not set.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.storage
            .data_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATA_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.storage.data_path.is_none());
        assert_eq!(config.search.min_query_length, 2);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_min_query_length() {
        let mut config = Config::default();
        config.search.min_query_length = 0;

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("min_query_length"));
    }

    #[test]
    fn test_data_path_default() {
        let config = Config::default();
        assert!(config
            .data_path()
            .to_string_lossy()
            .contains("customers.json"));
    }

    #[test]
    fn test_data_path_custom() {
        let mut config = Config::default();
        config.storage.data_path = Some(PathBuf::from("/custom/path/db.json"));

        assert_eq!(config.data_path(), PathBuf::from("/custom/path/db.json"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("rolodex"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_default_data_dir() {
        let path = Config::default_data_dir();
        assert!(path.to_string_lossy().contains("rolodex"));
    }

    fn temp_config_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "rolodex_config_test_{}_{}.toml",
            tag,
            std::process::id()
        ))
    }

    #[test]
    fn test_load_reads_toml_file() {
        let path = temp_config_path("load");
        std::fs::write(
            &path,
            "[storage]\ndata_path = \"/elsewhere/customers.json\"\n\n[search]\nmin_query_length = 5\n",
        )
        .unwrap();

        let config = Config::load_from(Some(path.clone())).unwrap();
        assert_eq!(
            config.storage.data_path,
            Some(PathBuf::from("/elsewhere/customers.json"))
        );
        assert_eq!(config.search.min_query_length, 5);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_partial_toml_keeps_other_defaults() {
        let path = temp_config_path("partial");
        std::fs::write(&path, "[search]\nmin_query_length = 3\n").unwrap();

        let config = Config::load_from(Some(path.clone())).unwrap();
        assert_eq!(config.search.min_query_length, 3);
        assert!(config.storage.data_path.is_none());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_invalid_toml_values() {
        let path = temp_config_path("invalid");
        std::fs::write(&path, "[search]\nmin_query_length = 0\n").unwrap();

        let result = Config::load_from(Some(path.clone()));
        assert!(result.is_err());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_nonexistent_config_uses_defaults() {
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), Config::default());
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("min_query_length"));
        assert!(json.contains("data_path"));
    }

    #[test]
    fn test_search_config_deserialize() {
        let json = r#"{"min_query_length": 3}"#;
        let search: SearchConfig = serde_json::from_str(json).unwrap();
        assert_eq!(search.min_query_length, 3);
    }
}

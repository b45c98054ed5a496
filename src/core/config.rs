//! Loads the optional `config.toml` from the data directory.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::persist::DEFAULT_STORAGE_KEY;
use crate::api::StoreError;

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Settings read from `config.toml`. Every field is optional on disk.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Key the document is stored under.
    pub storage_key: String,
    /// Storage file, relative to the data directory unless absolute.
    pub data_file: PathBuf,
    /// Default log filter, e.g. `warn` or `prompt_manager=debug`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_file: PathBuf::from("data.json"),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Read `<base_dir>/config.toml`, falling back to defaults if it is absent.
    pub fn load(base_dir: &Path) -> Result<Self, StoreError> {
        let config_path = base_dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            StoreError::Configuration(format!("Failed to read {}: {}", config_path.display(), e))
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, StoreError> {
        let config: Config = toml::from_str(content)
            .map_err(|e| StoreError::Configuration(format!("Failed to parse config.toml: {}", e)))?;
        if config.storage_key.trim().is_empty() {
            return Err(StoreError::Configuration(
                "storage_key cannot be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Absolute location of the storage file.
    pub fn data_path(&self, base_dir: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            base_dir.join(&self.data_file)
        }
    }
}

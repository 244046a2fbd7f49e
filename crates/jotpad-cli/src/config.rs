//! Persistent CLI configuration.

use std::env;
use std::path::{Path, PathBuf};

use jotpad_core::repository::DEFAULT_STORAGE_KEY;
use jotpad_core::util::normalize_text_option;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub storage_key: Option<String>,
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: None,
            confirm_delete: default_confirm_delete(),
        }
    }
}

const fn default_confirm_delete() -> bool {
    true
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jotpad")
        .join(CONFIG_FILE_NAME)
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jotpad")
}

/// Config file to read: `--config`, then `JOTPAD_CONFIG`, then the default location.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| env::var_os("JOTPAD_CONFIG").map(PathBuf::from))
        .unwrap_or_else(default_config_path)
}

impl CliConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|error| format!("Failed to read config at {}: {}", path.display(), error))?;
        serde_json::from_str::<Self>(&raw)
            .map_err(|error| format!("Failed to parse config at {}: {}", path.display(), error))
    }

    /// Store directory: `--data-dir`, then `JOTPAD_DATA_DIR`, then the config file, then the platform data dir.
    pub fn resolve_data_dir(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| env::var_os("JOTPAD_DATA_DIR").map(PathBuf::from))
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(default_data_dir)
    }

    /// Storage key: `--key`, then the config file, then the default key.
    pub fn resolve_storage_key(&self, explicit: Option<String>) -> String {
        normalize_text_option(explicit)
            .or_else(|| normalize_text_option(self.storage_key.clone()))
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string())
    }
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Task file used when --storage is not given. Relative paths resolve
    /// against the working directory.
    #[serde(default = "default_storage_file")]
    pub file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            file: default_storage_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Print the startup banner (--no-banner still suppresses it)
    #[serde(default = "default_true")]
    pub banner: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { banner: true }
    }
}

fn default_storage_file() -> PathBuf {
    PathBuf::from("storage.json")
}

fn default_true() -> bool {
    true
}

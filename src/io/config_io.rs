use std::fs;
use std::path::{Path, PathBuf};

use crate::model::AppConfig;

/// Config file path, respecting XDG_CONFIG_HOME
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join("td").join("config.toml")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read the config from a specific path.
/// A missing or unreadable file means defaults; a malformed file warns on
/// stderr and falls back to defaults rather than blocking startup.
pub fn read_config_from(path: &Path) -> AppConfig {
    if !path.exists() {
        return AppConfig::default();
    }
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: could not parse {}: {}", path.display(), e);
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}

/// Read the config from the default location.
pub fn read_config() -> AppConfig {
    read_config_from(&config_path())
}

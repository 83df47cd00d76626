//! Configuration module
//!
//! Handles loading and saving of bikelog.toml configuration files.

mod types;

pub use types::Config;

use crate::error::{BikelogError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "bikelog.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        BikelogError::Config(format!(
            "Cannot read config from '{}': {}. Run 'bikelog config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Load the given config file, or fall back to bikelog.toml and then defaults
///
/// An explicitly requested file must exist.
pub fn load_or_default(path: Option<PathBuf>) -> Result<Config> {
    if let Some(path) = path {
        return load(&path);
    }

    let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
    if fallback.exists() {
        load(&fallback)
    } else {
        tracing::debug!("no {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
        Ok(Config::default())
    }
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| BikelogError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

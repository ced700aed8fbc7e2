//! Default paths and configuration file management

use crate::config::LexiconConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get the data directory for phonolex
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(base.join("phonolex"))
}

/// Get the default configuration file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// Load configuration, falling back to defaults if the file does not exist
pub fn load_config(path: &Path) -> Result<LexiconConfig> {
    if !path.exists() {
        return Ok(LexiconConfig::default());
    }

    LexiconConfig::load(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))
}

/// Save configuration, creating parent directories
pub fn save_config(config: &LexiconConfig, path: &Path) -> Result<()> {
    validate_config_path(path)?;
    config
        .save(path)
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}

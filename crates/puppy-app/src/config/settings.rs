//! Settings loading

use std::path::{Path, PathBuf};

use puppy_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";

/// `~/.config/puppies` (or the platform equivalent)
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("puppies")
}

pub fn settings_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILENAME)
}

/// Load settings from `config_dir/config.toml`.
///
/// A missing, unreadable or malformed file yields defaults.
pub fn load_settings(config_dir: &Path) -> Settings {
    match try_load_settings(config_dir) {
        Ok(Some(settings)) => settings,
        Ok(None) => Settings::default(),
        Err(e) => {
            warn!("Ignoring settings in {:?}: {}", config_dir, e);
            Settings::default()
        }
    }
}

/// Load settings, reporting read and parse failures
pub fn try_load_settings(config_dir: &Path) -> Result<Option<Settings>> {
    let path = settings_path(config_dir);

    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let settings = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {}", path.display(), e)))?;
    debug!("Loaded settings from {:?}", path);
    Ok(Some(settings))
}

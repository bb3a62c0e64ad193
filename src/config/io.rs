//! Reading and writing config files.
//!
//! A config file holds a partial config (any subset of the fields). Loading
//! merges it over the defaults, the same way a preset is applied.

use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::merge::merge_configs;
use super::types::{SidekickConfig, SidekickOverrides};

pub const ENV_MODEL: &str = "SIDEKICK_MODEL";
pub const ENV_BASE_URL: &str = "SIDEKICK_BASE_URL";
pub const ENV_TEMPERATURE: &str = "SIDEKICK_TEMPERATURE";
pub const ENV_MAX_TOKENS: &str = "SIDEKICK_MAX_TOKENS";

const APP_DIR: &str = "sidekick";
const CONFIG_FILE: &str = "config.json";

/// Default config file location: `$XDG_CONFIG_HOME/sidekick/config.json`,
/// else `~/.config/sidekick/config.json`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(base.join(APP_DIR).join(CONFIG_FILE))
}

/// Read a partial config from a JSON file.
pub fn read_overrides(path: &Path) -> Result<SidekickOverrides, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let overrides = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), "Read config overrides");
    Ok(overrides)
}

/// Load a config file and merge it over the defaults.
pub fn load_config(path: &Path) -> Result<SidekickConfig, ConfigError> {
    let overrides = read_overrides(path)?;
    Ok(merge_configs(&SidekickConfig::default(), &overrides))
}

/// Load the default config file, or the defaults if it does not exist.
pub fn load_or_default() -> Result<SidekickConfig, ConfigError> {
    let path = default_config_path()?;
    if path.exists() {
        load_config(&path)
    } else {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        Ok(SidekickConfig::default())
    }
}

/// Pretty JSON for a config (export / debugging).
pub fn export_json(config: &SidekickConfig) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Write a config as pretty JSON, creating parent directories.
pub fn save_config(path: &Path, config: &SidekickConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, export_json(config)?)?;
    tracing::debug!(path = %path.display(), "Saved config");
    Ok(())
}

/// Overrides taken from `SIDEKICK_*` environment variables.
///
/// Numbers that fail to parse are ignored.
pub fn env_overrides() -> SidekickOverrides {
    fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
        let raw = std::env::var(key).ok()?;
        match raw.trim().parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(var = key, value = %raw, "Ignoring unparseable environment value");
                None
            }
        }
    }

    SidekickOverrides {
        model: std::env::var(ENV_MODEL).ok(),
        base_url: std::env::var(ENV_BASE_URL).ok(),
        temperature: parsed(ENV_TEMPERATURE),
        max_tokens: parsed(ENV_MAX_TOKENS),
        ..Default::default()
    }
}

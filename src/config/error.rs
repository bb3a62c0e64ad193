use thiserror::Error;

/// Errors that can occur while loading or selecting configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
    #[error("Could not locate a config directory (no XDG_CONFIG_HOME and no home directory)")]
    ConfigDirNotFound,
}

//! Configuration management.
//!
//! This module handles:
//! - The `SidekickConfig` value and its sub-configs
//! - One-level-deep merging of partial overrides
//! - Named presets (always applied over the defaults)
//! - Reading/writing JSON config files and `SIDEKICK_*` env overrides

mod error;
mod io;
mod merge;
mod presets;
mod store;
mod types;

pub use error::ConfigError;
pub use io::{
    default_config_path, env_overrides, export_json, load_config, load_or_default,
    read_overrides, save_config, ENV_BASE_URL, ENV_MAX_TOKENS, ENV_MODEL, ENV_TEMPERATURE,
};
pub use merge::{merge_configs, merge_overrides};
pub use presets::Preset;
pub use store::ConfigStore;
pub use types::{
    FeaturesConfig, FrameworkIntegrationConfig, IntegrationConfig, ModelConfig, Position,
    RateLimit, SecurityConfig, SidekickConfig, SidekickOverrides, Theme, UiConfig,
    DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};

//! Active configuration holder.

use super::merge::merge_configs;
use super::presets::Preset;
use super::types::{ModelConfig, SidekickConfig, SidekickOverrides};

/// Owns the active `SidekickConfig`.
///
/// Every change produces a new config value; the previous one is dropped,
/// never edited.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    current: SidekickConfig,
    preset: Option<Preset>,
}

impl ConfigStore {
    /// Create a store holding the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `config`.
    pub fn with_config(config: SidekickConfig) -> Self {
        Self {
            current: config,
            preset: None,
        }
    }

    /// Create a store with a preset applied.
    pub fn from_preset(preset: Preset) -> Self {
        let mut store = Self::new();
        store.apply_preset(preset);
        store
    }

    /// Get the active config.
    pub fn current(&self) -> &SidekickConfig {
        &self.current
    }

    /// Get an owned copy of the active config.
    pub fn snapshot(&self) -> SidekickConfig {
        self.current.clone()
    }

    /// The model sub-config, as handed to the resolver.
    pub fn model_config(&self) -> &ModelConfig {
        &self.current.model_config
    }

    /// The preset the active config still matches.
    ///
    /// Cleared by `update` and `reset`.
    pub fn preset(&self) -> Option<Preset> {
        self.preset
    }

    /// Merge `over` onto the active config.
    ///
    /// A non-empty override detaches the store from its preset.
    pub fn update(&mut self, over: &SidekickOverrides) -> &SidekickConfig {
        if over.is_empty() {
            return &self.current;
        }
        self.current = merge_configs(&self.current, over);
        self.preset = None;
        tracing::debug!(model = %self.current.model, "Config updated");
        &self.current
    }

    /// Replace the active config with the defaults plus `preset`.
    ///
    /// Earlier updates are discarded.
    pub fn apply_preset(&mut self, preset: Preset) -> &SidekickConfig {
        self.current = preset.config();
        self.preset = Some(preset);
        tracing::debug!(preset = %preset, model = %self.current.model, "Applied config preset");
        &self.current
    }

    /// Return to the default config.
    pub fn reset(&mut self) {
        self.current = SidekickConfig::default();
        self.preset = None;
    }
}

//! Sidekick Library
//!
//! Configuration and model-selection core for AI chat interfaces.
//!
//! ## Main Components
//!
//! - [`config`] - `SidekickConfig`, merging, presets, config files
//! - [`models`] - Model catalog, gateway registration, allow-list resolution
//! - [`workflows`] - Workflow definitions and handler dispatch
//! - [`message`] - Chat message value and version history
//! - [`logging`] - Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```
//! use sidekick::{ConfigStore, ModelCatalog, ModelResolver, Preset};
//!
//! let store = ConfigStore::from_preset(Preset::Standard);
//! let catalog = ModelCatalog::new();
//! let resolver = ModelResolver::new(&catalog);
//!
//! let view = resolver.selector_view(Some(store.model_config()), None);
//! assert!(!view.models.is_empty());
//! assert!(resolver.is_model_allowed("openai/gpt-4.1", Some(store.model_config())));
//! ```

pub mod config;
pub mod logging;
pub mod message;
pub mod models;
pub mod workflows;

// Re-export commonly used types
pub use config::{
    merge_configs, ConfigError, ConfigStore, ModelConfig, Preset, SidekickConfig,
    SidekickOverrides,
};
pub use logging::{init_tracing, LogLevel};
pub use message::{Message, MessageError, Role};
pub use models::{
    filter_models, ModelCatalog, ModelDescriptor, ModelListPolicy, ModelResolver, ProviderId,
    SelectorView, DEFAULT_MODEL_ID,
};
pub use workflows::{WorkflowDefinition, WorkflowError, WorkflowHandler, WorkflowRegistry};

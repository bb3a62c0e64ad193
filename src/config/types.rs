//! Configuration value types.
//!
//! `SidekickConfig` is the root value. Its five sub-configs contain only
//! optional fields so that a field absent from both sides of a merge stays
//! absent. All types serialize to the camelCase JSON shape used by config
//! files.

use serde::{Deserialize, Serialize};

use crate::models::{ModelDescriptor, ModelListPolicy, DEFAULT_MODEL_ID};
use crate::workflows::WorkflowDefinition;

/// Default endpoint path for the chat backend.
pub const DEFAULT_BASE_URL: &str = "/api/ai";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

/// Root configuration.
///
/// Treat values as immutable: produce new ones with
/// [`merge_configs`](super::merge_configs) instead of editing in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidekickConfig {
    /// Default model id (`provider/name`)
    pub model: String,
    /// Passed through to the AI SDK
    pub temperature: f64,
    /// Passed through to the AI SDK
    pub max_tokens: u32,
    /// Chat backend endpoint
    pub base_url: String,
    #[serde(default)]
    pub model_config: ModelConfig,
    #[serde(default)]
    pub features_config: FeaturesConfig,
    #[serde(default)]
    pub ui_config: UiConfig,
    #[serde(default)]
    pub security_config: SecurityConfig,
    #[serde(default)]
    pub framework_config: FrameworkIntegrationConfig,
}

impl Default for SidekickConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL_ID.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            base_url: DEFAULT_BASE_URL.to_string(),
            model_config: ModelConfig {
                allowed_models: Some(ModelListPolicy::AllowAll),
                default_model: Some(DEFAULT_MODEL_ID.to_string()),
                custom_models: None,
                hide_if_single_model: Some(false),
                group_by_provider: Some(true),
                allow_model_change: Some(true),
                show_model_info: Some(true),
            },
            features_config: FeaturesConfig {
                reasoning: Some(true),
                sources: Some(true),
                suggestions: Some(true),
                file_upload: Some(false),
                web_search: Some(false),
                voice_input: Some(false),
                code_highlighting: Some(true),
                markdown: Some(true),
                conversation_branching: Some(false),
                message_actions: Some(true),
                export_chat: Some(false),
                workflows: None,
            },
            ui_config: UiConfig {
                theme: Some(Theme::System),
                position: Some(Position::BottomRight),
                width: Some(400),
                height: Some(600),
                title: Some("AI Assistant".to_string()),
                subtitle: None,
                placeholder: Some("Ask me anything...".to_string()),
                welcome_message: Some("Hi! How can I help you today?".to_string()),
                show_avatars: Some(true),
                show_timestamps: Some(false),
                show_model_selector: Some(true),
                animations: Some(true),
                compact_mode: Some(false),
                suggestions: None,
            },
            security_config: SecurityConfig {
                rate_limit: Some(RateLimit {
                    requests: 20,
                    window_ms: 60_000,
                }),
                max_message_length: Some(4000),
                allowed_domains: None,
                sanitize_input: Some(true),
                content_filter: Some(false),
                require_auth: Some(false),
                max_file_size: Some(10 * 1024 * 1024),
                allowed_file_types: None,
            },
            framework_config: FrameworkIntegrationConfig::default(),
        }
    }
}

/// Partial root configuration used as a merge override.
///
/// A `None` field leaves the base value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidekickOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_config: Option<ModelConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features_config: Option<FeaturesConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_config: Option<UiConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_config: Option<SecurityConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework_config: Option<FrameworkIntegrationConfig>,
}

impl SidekickOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the override changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Which models a surface may offer and how the selector behaves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_models: Option<ModelListPolicy>,
    /// Fallback model, also the only model under `"none"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
    /// Replaces the global catalog when non-empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_models: Option<Vec<ModelDescriptor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_if_single_model: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by_provider: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_model_change: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_model_info: Option<bool>,
}

impl ModelConfig {
    /// Config with only an allow-list policy set.
    pub fn allowing(policy: ModelListPolicy) -> Self {
        Self {
            allowed_models: Some(policy),
            ..Default::default()
        }
    }

    /// The configured default model, or the crate-wide default.
    pub fn default_model_or_fallback(&self) -> &str {
        self.default_model.as_deref().unwrap_or(DEFAULT_MODEL_ID)
    }
}

/// Feature toggles for chat surfaces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_upload: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_search: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_input: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_highlighting: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_branching: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_actions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_chat: Option<bool>,
    /// Workflows offered to the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflows: Option<Vec<WorkflowDefinition>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

/// Screen corner for floating widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

/// Presentation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub welcome_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_avatars: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_timestamps: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_model_selector: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animations: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compact_mode: Option<bool>,
    /// Starter prompts shown on an empty conversation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimit {
    pub requests: u32,
    pub window_ms: u64,
}

/// Input limits and access rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<RateLimit>,
    /// In characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_message_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_domains: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sanitize_input: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_filter: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_auth: Option<bool>,
    /// In bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_file_types: Option<Vec<String>>,
}

impl SecurityConfig {
    /// Check a message against `max_message_length`.
    pub fn message_within_limit(&self, text: &str) -> bool {
        match self.max_message_length {
            Some(limit) => text.chars().count() <= limit,
            None => true,
        }
    }
}

/// One external framework integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl IntegrationConfig {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }
}

/// Integrations with agent frameworks.
///
/// Each integration is replaced wholesale on merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkIntegrationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub langchain: Option<IntegrationConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llamaindex: Option<IntegrationConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vercel_ai: Option<IntegrationConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcp: Option<IntegrationConfig>,
}

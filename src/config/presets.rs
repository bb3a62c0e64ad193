//! Named configuration presets.
//!
//! A preset is a partial config applied over the defaults. Applying one
//! always starts from [`SidekickConfig::default`], never from whatever is
//! currently active.

use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;
use super::merge::merge_configs;
use super::types::{
    FeaturesConfig, FrameworkIntegrationConfig, IntegrationConfig, ModelConfig, RateLimit,
    SecurityConfig, SidekickConfig, SidekickOverrides, Theme, UiConfig,
};
use crate::models::ModelListPolicy;
use crate::workflows::builtin_workflows;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Single fixed model, no extras
    Minimal,
    /// The defaults with a curated model list
    Standard,
    /// Everything on, all models
    Advanced,
    /// Tight limits, no uploads
    Secure,
    /// Coding-focused models and workflows
    CodingAssistant,
}

impl Preset {
    pub fn all() -> &'static [Preset] {
        &[
            Preset::Minimal,
            Preset::Standard,
            Preset::Advanced,
            Preset::Secure,
            Preset::CodingAssistant,
        ]
    }

    /// The partial config this preset applies.
    pub fn overrides(&self) -> SidekickOverrides {
        match self {
            Preset::Minimal => minimal(),
            Preset::Standard => standard(),
            Preset::Advanced => advanced(),
            Preset::Secure => secure(),
            Preset::CodingAssistant => coding_assistant(),
        }
    }

    /// Defaults with this preset applied.
    pub fn config(&self) -> SidekickConfig {
        merge_configs(&SidekickConfig::default(), &self.overrides())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Minimal => "minimal",
            Self::Standard => "standard",
            Self::Advanced => "advanced",
            Self::Secure => "secure",
            Self::CodingAssistant => "codingAssistant",
        };
        f.write_str(s)
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "minimal" => Ok(Self::Minimal),
            "standard" => Ok(Self::Standard),
            "advanced" => Ok(Self::Advanced),
            "secure" => Ok(Self::Secure),
            "codingassistant" => Ok(Self::CodingAssistant),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}

fn minimal() -> SidekickOverrides {
    SidekickOverrides {
        model_config: Some(ModelConfig {
            allowed_models: Some(ModelListPolicy::AllowNone),
            hide_if_single_model: Some(true),
            allow_model_change: Some(false),
            ..Default::default()
        }),
        features_config: Some(FeaturesConfig {
            reasoning: Some(false),
            sources: Some(false),
            suggestions: Some(false),
            message_actions: Some(false),
            ..Default::default()
        }),
        ui_config: Some(UiConfig {
            show_model_selector: Some(false),
            animations: Some(false),
            compact_mode: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn standard() -> SidekickOverrides {
    SidekickOverrides {
        model_config: Some(ModelConfig {
            allowed_models: Some(ModelListPolicy::list([
                "openai/gpt-4.1-mini",
                "openai/gpt-4.1",
                "anthropic/claude-sonnet-4.5",
                "google/gemini-2.5-flash",
            ])),
            group_by_provider: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn advanced() -> SidekickOverrides {
    SidekickOverrides {
        max_tokens: Some(8192),
        model_config: Some(ModelConfig {
            allowed_models: Some(ModelListPolicy::AllowAll),
            group_by_provider: Some(true),
            show_model_info: Some(true),
            ..Default::default()
        }),
        features_config: Some(FeaturesConfig {
            reasoning: Some(true),
            sources: Some(true),
            file_upload: Some(true),
            web_search: Some(true),
            voice_input: Some(true),
            conversation_branching: Some(true),
            export_chat: Some(true),
            workflows: Some(builtin_workflows()),
            ..Default::default()
        }),
        ui_config: Some(UiConfig {
            show_timestamps: Some(true),
            width: Some(480),
            height: Some(720),
            ..Default::default()
        }),
        framework_config: Some(FrameworkIntegrationConfig {
            mcp: Some(IntegrationConfig::enabled()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn secure() -> SidekickOverrides {
    SidekickOverrides {
        temperature: Some(0.3),
        model_config: Some(ModelConfig {
            allowed_models: Some(ModelListPolicy::list([
                "openai/gpt-4.1-mini",
                "anthropic/claude-haiku-4.5",
            ])),
            allow_model_change: Some(false),
            ..Default::default()
        }),
        features_config: Some(FeaturesConfig {
            file_upload: Some(false),
            web_search: Some(false),
            voice_input: Some(false),
            export_chat: Some(false),
            ..Default::default()
        }),
        security_config: Some(SecurityConfig {
            rate_limit: Some(RateLimit {
                requests: 10,
                window_ms: 60_000,
            }),
            max_message_length: Some(2000),
            sanitize_input: Some(true),
            content_filter: Some(true),
            require_auth: Some(true),
            max_file_size: Some(0),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn coding_assistant() -> SidekickOverrides {
    let workflows = builtin_workflows()
        .into_iter()
        .filter(|w| w.category.as_deref() == Some("code"))
        .collect();

    SidekickOverrides {
        model: Some("anthropic/claude-sonnet-4.5".to_string()),
        temperature: Some(0.2),
        max_tokens: Some(8192),
        model_config: Some(ModelConfig {
            allowed_models: Some(ModelListPolicy::list([
                "anthropic/claude-sonnet-4.5",
                "anthropic/claude-opus-4.5",
                "openai/gpt-5",
                "openai/gpt-4.1",
                "deepseek/deepseek-r1",
            ])),
            default_model: Some("anthropic/claude-sonnet-4.5".to_string()),
            group_by_provider: Some(true),
            ..Default::default()
        }),
        features_config: Some(FeaturesConfig {
            reasoning: Some(true),
            code_highlighting: Some(true),
            file_upload: Some(true),
            workflows: Some(workflows),
            ..Default::default()
        }),
        ui_config: Some(UiConfig {
            theme: Some(Theme::Dark),
            title: Some("Coding Assistant".to_string()),
            placeholder: Some("Paste code or describe a task...".to_string()),
            suggestions: Some(vec![
                "Review this function".to_string(),
                "Write tests for this module".to_string(),
                "Explain this error".to_string(),
            ]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

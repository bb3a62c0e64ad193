//! Catalog entry types.
//!
//! This module provides:
//! - `ProviderId` newtype for open-ended provider names
//! - `ModelPricing` for per-million-token prices
//! - `ModelDescriptor` describing one selectable model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Provider identifier (the `openai` in `openai/gpt-4.1`).
///
/// Any string is a valid provider. Known providers get a label and logo from
/// [`super::providers`]; unknown ones simply have neither.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Derive the provider from a `provider/name` model id.
    ///
    /// Ids without a `/` are treated as being their own provider.
    pub fn from_model_id(model_id: &str) -> Self {
        let provider = model_id
            .split_once('/')
            .map(|(provider, _)| provider)
            .unwrap_or(model_id);
        Self(provider.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl PartialEq<str> for ProviderId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProviderId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Model pricing in USD per million tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelPricing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<f64>,
    /// Gateway-specific keys (cache reads, images, ...) kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ModelPricing {
    /// Cost of a request, if both prices are known.
    pub fn estimate(&self, input_tokens: u32, output_tokens: u32) -> Option<f64> {
        let input = self.input?;
        let output = self.output?;
        Some(
            (input_tokens as f64) * input / 1_000_000.0
                + (output_tokens as f64) * output / 1_000_000.0,
        )
    }
}

/// A selectable model.
///
/// `id` is unique within a catalog and has the form `provider/name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    pub id: String,
    pub name: String,
    pub provider: ProviderId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u64>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<ModelPricing>,
}

impl ModelDescriptor {
    /// Create a descriptor with the provider derived from `id`.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let id = id.into();
        let provider = ProviderId::from_model_id(&id);
        Self {
            id,
            name: name.into(),
            provider,
            description: None,
            context_window: None,
            capabilities: Vec::new(),
            logo: None,
            model_type: None,
            pricing: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_context_window(mut self, tokens: u64) -> Self {
        self.context_window = Some(tokens);
        self
    }

    pub fn with_capabilities(mut self, capabilities: &[&str]) -> Self {
        self.capabilities = capabilities.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    pub fn with_pricing(mut self, input: f64, output: f64) -> Self {
        self.pricing = Some(ModelPricing {
            input: Some(input),
            output: Some(output),
            extra: Map::new(),
        });
        self
    }

    /// Check if the model advertises a capability (case-insensitive).
    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities
            .iter()
            .any(|c| c.eq_ignore_ascii_case(capability))
    }
}

/// Display name for a model id, synthesized when the id is not in `models`.
///
/// Unknown ids render as their part after the provider prefix.
pub fn display_name_for(model_id: &str, models: &[ModelDescriptor]) -> String {
    models
        .iter()
        .find(|m| m.id == model_id)
        .map(|m| m.name.clone())
        .unwrap_or_else(|| {
            model_id
                .split_once('/')
                .map(|(_, name)| name)
                .unwrap_or(model_id)
                .to_string()
        })
}

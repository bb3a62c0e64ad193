//! Model catalog for the built-in and gateway-registered models.
//!
//! This module provides `ModelCatalog` which handles:
//! - Serving the current catalog in insertion order
//! - Appending models (first registration of an id wins)
//! - Adapting a gateway's model listing into catalog entries
//! - Provider and free-text queries
//!
//! The catalog is append-only. Writers copy the backing list under the lock
//! and swap it in; readers take an `Arc` snapshot and never block writers for
//! longer than the swap.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use serde::Deserialize;
use serde_json::Value;

use super::defaults::default_models;
use super::descriptor::{ModelDescriptor, ModelPricing, ProviderId};
use super::providers::provider_logo;

/// One entry of a gateway model listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayModel {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub context_window: Option<u64>,
    #[serde(default)]
    pub capabilities: Option<Vec<String>>,
    #[serde(default)]
    pub model_type: Option<String>,
    #[serde(default)]
    pub pricing: Option<ModelPricing>,
}

impl From<GatewayModel> for ModelDescriptor {
    fn from(raw: GatewayModel) -> Self {
        let provider = ProviderId::from_model_id(&raw.id);
        let name = raw.name.unwrap_or_else(|| {
            raw.id
                .split_once('/')
                .map(|(_, name)| name.to_string())
                .unwrap_or_else(|| raw.id.clone())
        });
        let logo = provider_logo(&provider).map(str::to_string);
        ModelDescriptor {
            id: raw.id,
            name,
            provider,
            description: raw.description,
            context_window: raw.context_window,
            capabilities: raw.capabilities.unwrap_or_default(),
            logo,
            model_type: raw.model_type,
            pricing: raw.pricing,
        }
    }
}

/// Registry of selectable models.
///
/// Cloning a `ModelCatalog` shares the same registry.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    defaults: Arc<Vec<ModelDescriptor>>,
    models: Arc<RwLock<Arc<Vec<ModelDescriptor>>>>,
}

impl ModelCatalog {
    /// Create a catalog seeded with the built-in defaults.
    pub fn new() -> Self {
        Self::with_defaults(default_models())
    }

    /// Create a catalog with no models at all.
    pub fn empty() -> Self {
        Self::with_defaults(Vec::new())
    }

    /// Create a catalog seeded with the given defaults.
    ///
    /// Duplicate ids in `defaults` keep their first occurrence.
    pub fn with_defaults(defaults: Vec<ModelDescriptor>) -> Self {
        let mut seen = HashSet::new();
        let defaults: Vec<ModelDescriptor> = defaults
            .into_iter()
            .filter(|m| seen.insert(m.id.clone()))
            .collect();

        tracing::debug!(default_models = defaults.len(), "ModelCatalog initialized");

        let defaults = Arc::new(defaults);
        Self {
            models: Arc::new(RwLock::new(Arc::clone(&defaults))),
            defaults,
        }
    }

    fn snapshot(&self) -> Arc<Vec<ModelDescriptor>> {
        match self.models.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    /// Get the full catalog (defaults plus registered models), in insertion order.
    pub fn get_available_models(&self) -> Vec<ModelDescriptor> {
        self.snapshot().to_vec()
    }

    /// Append models whose id is not already present.
    ///
    /// Existing entries are never overwritten. Returns the number of models
    /// actually added.
    pub fn register_models(&self, models: Vec<ModelDescriptor>) -> usize {
        let mut guard = match self.models.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let mut seen: HashSet<String> = guard.iter().map(|m| m.id.clone()).collect();
        let mut next: Vec<ModelDescriptor> = guard.to_vec();
        let mut added = 0;

        for model in models {
            if seen.insert(model.id.clone()) {
                tracing::debug!(model = %model.id, provider = %model.provider, "Registered model");
                next.push(model);
                added += 1;
            } else {
                tracing::debug!(model = %model.id, "Skipping already registered model");
            }
        }

        if added > 0 {
            *guard = Arc::new(next);
        }

        tracing::debug!(added, total_models = guard.len(), "register_models finished");
        added
    }

    /// Adapt a gateway model listing and register it.
    ///
    /// Entries that are not objects with a string `id` are skipped.
    pub fn register_gateway_models(&self, raw: &[Value]) -> usize {
        let models: Vec<ModelDescriptor> = raw
            .iter()
            .filter_map(|entry| match GatewayModel::deserialize(entry) {
                Ok(model) => Some(ModelDescriptor::from(model)),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping malformed gateway model entry");
                    None
                }
            })
            .collect();

        tracing::debug!(
            received = raw.len(),
            adapted = models.len(),
            "Adapted gateway model listing"
        );

        self.register_models(models)
    }

    /// Look up a model among the built-in defaults.
    ///
    /// Models added through registration are not considered here.
    pub fn get_model_by_id(&self, id: &str) -> Option<ModelDescriptor> {
        self.defaults.iter().find(|m| m.id == id).cloned()
    }

    /// Check if any catalog entry (default or registered) has this id.
    pub fn contains(&self, id: &str) -> bool {
        self.snapshot().iter().any(|m| m.id == id)
    }

    /// Get all catalog models from one provider.
    pub fn get_models_by_provider(&self, provider: &str) -> Vec<ModelDescriptor> {
        self.snapshot()
            .iter()
            .filter(|m| m.provider == provider)
            .cloned()
            .collect()
    }

    /// Distinct providers in the catalog, in order of first appearance.
    pub fn providers(&self) -> Vec<ProviderId> {
        let mut seen = HashSet::new();
        self.snapshot()
            .iter()
            .filter(|m| seen.insert(m.provider.clone()))
            .map(|m| m.provider.clone())
            .collect()
    }

    /// Number of models in the catalog.
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter models by a case-insensitive substring of name, description or provider.
///
/// Input order is preserved. An empty query matches everything; callers that
/// want "no filter" semantics should skip the call.
pub fn filter_models(models: &[ModelDescriptor], query: &str) -> Vec<ModelDescriptor> {
    let needle = query.to_lowercase();
    models
        .iter()
        .filter(|m| {
            m.name.to_lowercase().contains(&needle)
                || m
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
                || m.provider.as_str().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

//! Allow-list resolution.
//!
//! Turns a `ModelConfig` and a catalog into the concrete list of models a UI
//! surface may offer, plus the grouped/hidden view a model selector renders.
//! Nothing here fails: an empty result is a valid answer and must be shown
//! as such, not widened to "all models".

use std::collections::HashMap;

use serde::Serialize;

use super::catalog::ModelCatalog;
use super::descriptor::{ModelDescriptor, ProviderId};
use super::policy::ModelListPolicy;
use super::providers::provider_label_or_id;
use crate::config::ModelConfig;

/// Models from one provider, for grouped selectors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderGroup {
    pub provider: ProviderId,
    pub label: String,
    pub models: Vec<ModelDescriptor>,
}

/// What a model selector should render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorView {
    /// Allowed models, catalog order
    pub models: Vec<ModelDescriptor>,
    /// Present only when `groupByProvider` is set
    pub groups: Option<Vec<ProviderGroup>>,
    /// No selector needed: exactly one model and `hideIfSingleModel`
    pub hidden: bool,
    /// The model in use
    pub active: Option<ModelDescriptor>,
    /// Whether the user may change the model (`allowModelChange`)
    pub interactive: bool,
}

impl SelectorView {
    /// Check if there is nothing to choose from.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Partition models by provider.
///
/// Groups appear in order of their first model; providers with no models
/// never get a group.
pub fn group_by_provider(models: &[ModelDescriptor]) -> Vec<ProviderGroup> {
    let mut index: HashMap<&ProviderId, usize> = HashMap::new();
    let mut groups: Vec<ProviderGroup> = Vec::new();

    for model in models {
        let slot = *index.entry(&model.provider).or_insert_with(|| {
            groups.push(ProviderGroup {
                provider: model.provider.clone(),
                label: provider_label_or_id(&model.provider),
                models: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].models.push(model.clone());
    }

    groups
}

/// Resolves allow-list policies against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct ModelResolver<'a> {
    catalog: &'a ModelCatalog,
}

impl<'a> ModelResolver<'a> {
    pub fn new(catalog: &'a ModelCatalog) -> Self {
        Self { catalog }
    }

    /// Custom models when configured, else the whole catalog.
    fn effective_catalog(&self, config: Option<&ModelConfig>) -> Vec<ModelDescriptor> {
        match config.and_then(|c| c.custom_models.as_ref()) {
            Some(custom) if !custom.is_empty() => custom.clone(),
            _ => self.catalog.get_available_models(),
        }
    }

    /// Models a surface configured with `config` may offer, in catalog order.
    pub fn resolve_allowed_models(&self, config: Option<&ModelConfig>) -> Vec<ModelDescriptor> {
        let models = self.effective_catalog(config);
        let policy = config.and_then(|c| c.allowed_models.as_ref());

        let resolved: Vec<ModelDescriptor> = match policy {
            None | Some(ModelListPolicy::AllowAll) => models,
            Some(ModelListPolicy::AllowList(ids)) if ids.is_empty() => models,
            Some(ModelListPolicy::AllowNone) => {
                let default_id = config
                    .map(ModelConfig::default_model_or_fallback)
                    .unwrap_or(super::DEFAULT_MODEL_ID);
                models.into_iter().filter(|m| m.id == default_id).collect()
            }
            Some(ModelListPolicy::AllowList(ids)) => models
                .into_iter()
                .filter(|m| ids.iter().any(|id| *id == m.id))
                .collect(),
        };

        tracing::debug!(
            policy = ?policy,
            allowed = resolved.len(),
            "Resolved allowed models"
        );
        resolved
    }

    /// Check if `model_id` is among the resolved models.
    pub fn is_model_allowed(&self, model_id: &str, config: Option<&ModelConfig>) -> bool {
        self.resolve_allowed_models(config)
            .iter()
            .any(|m| m.id == model_id)
    }

    /// The allowed descriptor for `model_id`, if the choice is permitted.
    pub fn validate_selection(
        &self,
        model_id: &str,
        config: Option<&ModelConfig>,
    ) -> Option<ModelDescriptor> {
        self.resolve_allowed_models(config)
            .into_iter()
            .find(|m| m.id == model_id)
    }

    /// Allowed models grouped by provider.
    pub fn grouped_models(&self, config: Option<&ModelConfig>) -> Vec<ProviderGroup> {
        group_by_provider(&self.resolve_allowed_models(config))
    }

    /// Build the selector view.
    ///
    /// `active` is the requested selection if allowed, else the configured
    /// default if allowed, else the first allowed model. `hidden` and
    /// `interactive` are independent of each other.
    pub fn selector_view(
        &self,
        config: Option<&ModelConfig>,
        selected: Option<&str>,
    ) -> SelectorView {
        let models = self.resolve_allowed_models(config);
        let find = |id: &str| models.iter().find(|m| m.id == id).cloned();

        let default_id = config
            .map(ModelConfig::default_model_or_fallback)
            .unwrap_or(super::DEFAULT_MODEL_ID);
        let active = selected
            .and_then(find)
            .or_else(|| find(default_id))
            .or_else(|| models.first().cloned());

        let hide_if_single = config.and_then(|c| c.hide_if_single_model).unwrap_or(false);
        let group = config.and_then(|c| c.group_by_provider).unwrap_or(false);
        let interactive = config.and_then(|c| c.allow_model_change).unwrap_or(true);

        SelectorView {
            groups: group.then(|| group_by_provider(&models)),
            hidden: hide_if_single && models.len() == 1,
            active,
            interactive,
            models,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::defaults::DEFAULT_MODEL_ID;

    fn small_catalog() -> ModelCatalog {
        ModelCatalog::with_defaults(vec![
            ModelDescriptor::new("openai/gpt-4.1-mini", "GPT-4.1 Mini"),
            ModelDescriptor::new("anthropic/claude-opus-4.5", "Claude Opus 4.5"),
            ModelDescriptor::new("xai/grok-4", "Grok 4"),
        ])
    }

    fn ids(models: &[ModelDescriptor]) -> Vec<&str> {
        models.iter().map(|m| m.id.as_str()).collect()
    }

    fn config(policy: ModelListPolicy) -> ModelConfig {
        ModelConfig::allowing(policy)
    }

    // =========================================================================
    // resolve_allowed_models Tests
    // =========================================================================

    #[test]
    fn test_absent_and_star_equal_full_catalog() {
        let catalog = ModelCatalog::new();
        let resolver = ModelResolver::new(&catalog);
        let full = catalog.get_available_models();

        assert_eq!(resolver.resolve_allowed_models(None), full);
        assert_eq!(resolver.resolve_allowed_models(Some(&ModelConfig::default())), full);
        assert_eq!(
            resolver.resolve_allowed_models(Some(&config(ModelListPolicy::AllowAll))),
            full
        );
    }

    #[test]
    fn test_empty_list_equals_full_catalog() {
        let catalog = small_catalog();
        let resolver = ModelResolver::new(&catalog);
        let parsed: ModelConfig = serde_json::from_str(r#"{"allowedModels": []}"#).unwrap();
        assert_eq!(
            resolver.resolve_allowed_models(Some(&parsed)),
            catalog.get_available_models()
        );
    }

    #[test]
    fn test_empty_list_variant_equals_full_catalog() {
        let catalog = ModelCatalog::new();
        let resolver = ModelResolver::new(&catalog);
        let cfg = config(ModelListPolicy::AllowList(Vec::new()));
        assert_eq!(
            resolver.resolve_allowed_models(Some(&cfg)),
            catalog.get_available_models()
        );
        assert!(resolver.is_model_allowed("xai/grok-4", Some(&cfg)));
    }

    #[test]
    fn test_non_string_list_allows_nothing() {
        let catalog = ModelCatalog::new();
        let resolver = ModelResolver::new(&catalog);
        let parsed: ModelConfig = serde_json::from_str(r#"{"allowedModels": [1, 2]}"#).unwrap();
        assert!(resolver.resolve_allowed_models(Some(&parsed)).is_empty());
    }

    #[test]
    fn test_unknown_policy_string_equals_full_catalog() {
        let catalog = small_catalog();
        let resolver = ModelResolver::new(&catalog);
        let parsed: ModelConfig = serde_json::from_str(r#"{"allowedModels": "some"}"#).unwrap();
        assert_eq!(resolver.resolve_allowed_models(Some(&parsed)).len(), 3);
    }

    #[test]
    fn test_none_returns_only_default() {
        let catalog = ModelCatalog::new();
        let resolver = ModelResolver::new(&catalog);
        let mut cfg = config(ModelListPolicy::AllowNone);
        cfg.default_model = Some("openai/gpt-4.1-mini".into());

        let resolved = resolver.resolve_allowed_models(Some(&cfg));
        assert_eq!(ids(&resolved), vec!["openai/gpt-4.1-mini"]);
    }

    #[test]
    fn test_none_without_default_uses_fallback() {
        let catalog = small_catalog();
        let resolver = ModelResolver::new(&catalog);
        let resolved = resolver.resolve_allowed_models(Some(&config(ModelListPolicy::AllowNone)));
        assert_eq!(ids(&resolved), vec![DEFAULT_MODEL_ID]);
    }

    #[test]
    fn test_none_with_unknown_default_is_empty() {
        let catalog = small_catalog();
        let resolver = ModelResolver::new(&catalog);
        let mut cfg = config(ModelListPolicy::AllowNone);
        cfg.default_model = Some("acme/rocket-1".into());
        assert!(resolver.resolve_allowed_models(Some(&cfg)).is_empty());
    }

    #[test]
    fn test_list_keeps_catalog_order_and_drops_unknown() {
        let catalog = ModelCatalog::new();
        let resolver = ModelResolver::new(&catalog);
        let cfg = config(ModelListPolicy::list([
            "anthropic/claude-opus-4.5",
            "acme/not-real",
            "openai/gpt-4.1",
        ]));

        let resolved = resolver.resolve_allowed_models(Some(&cfg));
        assert_eq!(ids(&resolved), vec!["openai/gpt-4.1", "anthropic/claude-opus-4.5"]);
    }

    #[test]
    fn test_list_of_unknown_ids_is_empty() {
        let catalog = small_catalog();
        let resolver = ModelResolver::new(&catalog);
        let cfg = config(ModelListPolicy::list(["nope/a", "nope/b"]));
        assert!(resolver.resolve_allowed_models(Some(&cfg)).is_empty());
    }

    #[test]
    fn test_custom_models_replace_catalog() {
        let catalog = small_catalog();
        let resolver = ModelResolver::new(&catalog);
        let cfg = ModelConfig {
            custom_models: Some(vec![ModelDescriptor::new("local/llama", "Local Llama")]),
            ..Default::default()
        };
        assert_eq!(ids(&resolver.resolve_allowed_models(Some(&cfg))), vec!["local/llama"]);
    }

    #[test]
    fn test_empty_custom_models_fall_back_to_catalog() {
        let catalog = small_catalog();
        let resolver = ModelResolver::new(&catalog);
        let cfg = ModelConfig {
            custom_models: Some(Vec::new()),
            allowed_models: Some(ModelListPolicy::list(["xai/grok-4"])),
            ..Default::default()
        };
        assert_eq!(ids(&resolver.resolve_allowed_models(Some(&cfg))), vec!["xai/grok-4"]);
    }

    #[test]
    fn test_registered_models_are_resolved() {
        let catalog = small_catalog();
        catalog.register_models(vec![ModelDescriptor::new("acme/rocket-1", "Rocket")]);
        let resolver = ModelResolver::new(&catalog);
        let cfg = config(ModelListPolicy::list(["acme/rocket-1"]));
        assert_eq!(ids(&resolver.resolve_allowed_models(Some(&cfg))), vec!["acme/rocket-1"]);
    }

    // =========================================================================
    // is_model_allowed Tests
    // =========================================================================

    #[test]
    fn test_is_model_allowed_matches_resolve() {
        let catalog = ModelCatalog::new();
        catalog.register_models(vec![ModelDescriptor::new("acme/rocket-1", "Rocket")]);
        let resolver = ModelResolver::new(&catalog);

        let mut none = config(ModelListPolicy::AllowNone);
        none.default_model = Some("xai/grok-4".into());
        let configs = vec![
            None,
            Some(config(ModelListPolicy::AllowAll)),
            Some(none),
            Some(config(ModelListPolicy::list(["openai/gpt-4.1", "acme/rocket-1"]))),
            Some(config(ModelListPolicy::list(["ghost/model"]))),
        ];
        let candidates = [
            "openai/gpt-4.1",
            "openai/gpt-4.1-mini",
            "xai/grok-4",
            "acme/rocket-1",
            "ghost/model",
            "",
        ];

        for cfg in &configs {
            let resolved = resolver.resolve_allowed_models(cfg.as_ref());
            for id in candidates {
                assert_eq!(
                    resolver.is_model_allowed(id, cfg.as_ref()),
                    resolved.iter().any(|m| m.id == id),
                    "mismatch for {id} under {cfg:?}"
                );
            }
        }
    }

    #[test]
    fn test_validate_selection() {
        let catalog = small_catalog();
        let resolver = ModelResolver::new(&catalog);
        let cfg = config(ModelListPolicy::list(["xai/grok-4"]));

        assert_eq!(
            resolver.validate_selection("xai/grok-4", Some(&cfg)).map(|m| m.name),
            Some("Grok 4".to_string())
        );
        assert!(resolver
            .validate_selection("openai/gpt-4.1-mini", Some(&cfg))
            .is_none());
    }

    // =========================================================================
    // Grouping Tests
    // =========================================================================

    #[test]
    fn test_group_by_provider_first_appearance_order() {
        let models = vec![
            ModelDescriptor::new("b/one", "One"),
            ModelDescriptor::new("a/two", "Two"),
            ModelDescriptor::new("b/three", "Three"),
        ];
        let groups = group_by_provider(&models);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].provider, "b");
        assert_eq!(ids(&groups[0].models), vec!["b/one", "b/three"]);
        assert_eq!(groups[1].provider, "a");
    }

    #[test]
    fn test_group_labels() {
        let groups = group_by_provider(&[
            ModelDescriptor::new("openai/gpt-4.1", "GPT-4.1"),
            ModelDescriptor::new("acme/rocket-1", "Rocket"),
        ]);
        assert_eq!(groups[0].label, "OpenAI");
        assert_eq!(groups[1].label, "acme");
    }

    #[test]
    fn test_group_empty_input() {
        assert!(group_by_provider(&[]).is_empty());
    }

    // =========================================================================
    // Selector View / End-to-end Tests
    // =========================================================================

    #[test]
    fn test_grouped_view_has_no_empty_groups() {
        let catalog = small_catalog();
        let resolver = ModelResolver::new(&catalog);
        let cfg = ModelConfig {
            allowed_models: Some(ModelListPolicy::list(["openai/gpt-4.1-mini", "xai/grok-4"])),
            group_by_provider: Some(true),
            ..Default::default()
        };

        let view = resolver.selector_view(Some(&cfg), None);
        assert_eq!(view.models.len(), 2);

        let groups = view.groups.unwrap();
        let providers: Vec<&str> = groups.iter().map(|g| g.provider.as_str()).collect();
        assert_eq!(providers, vec!["openai", "xai"]);
        assert!(groups.iter().all(|g| g.models.len() == 1));
        assert!(!providers.contains(&"anthropic"));
    }

    #[test]
    fn test_hide_if_single_model() {
        let catalog = small_catalog();
        let resolver = ModelResolver::new(&catalog);
        let cfg = ModelConfig {
            allowed_models: Some(ModelListPolicy::list(["openai/gpt-4.1-mini"])),
            hide_if_single_model: Some(true),
            ..Default::default()
        };

        let view = resolver.selector_view(Some(&cfg), Some("xai/grok-4"));
        assert_eq!(view.models.len(), 1);
        assert!(view.hidden);
        assert_eq!(view.active.unwrap().id, "openai/gpt-4.1-mini");
    }

    #[test]
    fn test_hide_flag_ignored_with_several_models() {
        let catalog = small_catalog();
        let resolver = ModelResolver::new(&catalog);
        let cfg = ModelConfig {
            hide_if_single_model: Some(true),
            ..Default::default()
        };
        assert!(!resolver.selector_view(Some(&cfg), None).hidden);
    }

    #[test]
    fn test_hidden_and_interactive_are_independent() {
        let catalog = small_catalog();
        let resolver = ModelResolver::new(&catalog);
        let cfg = ModelConfig {
            allowed_models: Some(ModelListPolicy::list(["xai/grok-4"])),
            hide_if_single_model: Some(true),
            allow_model_change: Some(true),
            ..Default::default()
        };

        let view = resolver.selector_view(Some(&cfg), None);
        assert!(view.hidden);
        assert!(view.interactive);
    }

    #[test]
    fn test_active_selection_precedence() {
        let catalog = small_catalog();
        let resolver = ModelResolver::new(&catalog);
        let cfg = ModelConfig {
            allowed_models: Some(ModelListPolicy::list([
                "anthropic/claude-opus-4.5",
                "xai/grok-4",
            ])),
            default_model: Some("xai/grok-4".into()),
            ..Default::default()
        };

        let chosen = resolver.selector_view(Some(&cfg), Some("anthropic/claude-opus-4.5"));
        assert_eq!(chosen.active.unwrap().id, "anthropic/claude-opus-4.5");

        let disallowed = resolver.selector_view(Some(&cfg), Some("openai/gpt-4.1-mini"));
        assert_eq!(disallowed.active.unwrap().id, "xai/grok-4");

        let mut no_default = cfg.clone();
        no_default.default_model = Some("ghost/model".into());
        let fallback = resolver.selector_view(Some(&no_default), None);
        assert_eq!(fallback.active.unwrap().id, "anthropic/claude-opus-4.5");
    }

    #[test]
    fn test_empty_view() {
        let catalog = small_catalog();
        let resolver = ModelResolver::new(&catalog);
        let cfg = ModelConfig {
            allowed_models: Some(ModelListPolicy::list(["ghost/model"])),
            hide_if_single_model: Some(true),
            group_by_provider: Some(true),
            ..Default::default()
        };

        let view = resolver.selector_view(Some(&cfg), None);
        assert!(view.is_empty());
        assert!(!view.hidden);
        assert!(view.active.is_none());
        assert_eq!(view.groups, Some(Vec::new()));
    }

    #[test]
    fn test_groups_absent_unless_requested() {
        let catalog = small_catalog();
        let resolver = ModelResolver::new(&catalog);
        assert!(resolver.selector_view(None, None).groups.is_none());
        assert!(resolver.selector_view(None, None).interactive);
    }
}

//! End-to-end: config -> catalog -> resolver -> selector view.

use serde_json::json;
use sidekick::config::{load_config, save_config, ModelConfig};
use sidekick::{
    merge_configs, ConfigStore, ModelCatalog, ModelDescriptor, ModelListPolicy, ModelResolver,
    Preset, SidekickOverrides,
};

fn three_model_catalog() -> ModelCatalog {
    ModelCatalog::with_defaults(vec![
        ModelDescriptor::new("openai/gpt-4.1-mini", "GPT-4.1 Mini"),
        ModelDescriptor::new("anthropic/claude-opus-4.5", "Claude Opus 4.5"),
        ModelDescriptor::new("xai/grok-4", "Grok 4"),
    ])
}

#[test]
fn grouped_selector_only_shows_allowed_providers() {
    let catalog = three_model_catalog();
    let resolver = ModelResolver::new(&catalog);

    let mut store = ConfigStore::new();
    store.update(&SidekickOverrides {
        model_config: Some(ModelConfig {
            allowed_models: Some(ModelListPolicy::list(["openai/gpt-4.1-mini", "xai/grok-4"])),
            group_by_provider: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    });

    let resolved = resolver.resolve_allowed_models(Some(store.model_config()));
    assert_eq!(resolved.len(), 2);

    let view = resolver.selector_view(Some(store.model_config()), None);
    let groups = view.groups.expect("grouping requested");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].provider.as_str(), "openai");
    assert_eq!(groups[1].provider.as_str(), "xai");
    assert!(groups.iter().all(|g| g.models.len() == 1));
}

#[test]
fn single_allowed_model_hides_selector() {
    let catalog = three_model_catalog();
    let resolver = ModelResolver::new(&catalog);
    let config = ModelConfig {
        allowed_models: Some(ModelListPolicy::list(["openai/gpt-4.1-mini"])),
        hide_if_single_model: Some(true),
        ..Default::default()
    };

    let view = resolver.selector_view(Some(&config), None);
    assert_eq!(view.models.len(), 1);
    assert!(view.hidden);
    assert_eq!(view.active.map(|m| m.id).as_deref(), Some("openai/gpt-4.1-mini"));
}

#[test]
fn gateway_models_become_selectable() {
    let catalog = ModelCatalog::new();
    catalog.register_gateway_models(&[
        json!({"id": "acme/rocket-1", "name": "Rocket 1", "contextWindow": 32000}),
        json!({"id": "openai/gpt-4.1", "name": "Shadowed"}),
    ]);

    let resolver = ModelResolver::new(&catalog);
    let config = ModelConfig::allowing(ModelListPolicy::list(["acme/rocket-1", "openai/gpt-4.1"]));
    let allowed = resolver.resolve_allowed_models(Some(&config));

    let names: Vec<&str> = allowed.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["GPT-4.1", "Rocket 1"]);
    assert!(resolver.is_model_allowed("acme/rocket-1", Some(&config)));
}

#[test]
fn config_file_round_trip_feeds_resolver() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("config.json");

    let config = merge_configs(
        &Preset::Secure.config(),
        &SidekickOverrides {
            max_tokens: Some(512),
            ..Default::default()
        },
    );
    save_config(&path, &config).unwrap();
    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded, config);

    let catalog = ModelCatalog::new();
    let resolver = ModelResolver::new(&catalog);
    let view = resolver.selector_view(Some(&loaded.model_config), None);
    assert_eq!(view.models.len(), 2);
    assert!(!view.interactive);
}

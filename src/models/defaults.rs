//! Default model catalog.
//!
//! These are the models every catalog starts with. Gateways may append more
//! at runtime via [`super::ModelCatalog::register_gateway_models`].

use super::descriptor::ModelDescriptor;
use super::providers::provider_logo;

/// Model used when a config names none.
pub const DEFAULT_MODEL_ID: &str = "openai/gpt-4.1-mini";

fn model(id: &str, name: &str, description: &str) -> ModelDescriptor {
    let model = ModelDescriptor::new(id, name).with_description(description);
    match provider_logo(&model.provider) {
        Some(logo) => model.with_logo(logo),
        None => model,
    }
}

/// Get the default model catalog, in display order.
pub fn default_models() -> Vec<ModelDescriptor> {
    vec![
        // OpenAI models
        model(
            "openai/gpt-4.1-mini",
            "GPT-4.1 Mini",
            "Fast and affordable general-purpose model",
        )
        .with_context_window(1_047_576)
        .with_capabilities(&["text", "vision", "tools"])
        .with_pricing(0.4, 1.6),
        model(
            "openai/gpt-4.1",
            "GPT-4.1",
            "OpenAI's flagship model for complex tasks",
        )
        .with_context_window(1_047_576)
        .with_capabilities(&["text", "vision", "tools"])
        .with_pricing(2.0, 8.0),
        model("openai/gpt-5", "GPT-5", "Reasoning model for coding and agentic tasks")
            .with_context_window(400_000)
            .with_capabilities(&["text", "vision", "tools", "reasoning"])
            .with_pricing(1.25, 10.0),
        model("openai/o4-mini", "o4-mini", "Efficient reasoning model")
            .with_context_window(200_000)
            .with_capabilities(&["text", "vision", "tools", "reasoning"])
            .with_pricing(1.1, 4.4),
        // Anthropic models
        model(
            "anthropic/claude-opus-4.5",
            "Claude Opus 4.5",
            "Anthropic's most capable model",
        )
        .with_context_window(200_000)
        .with_capabilities(&["text", "vision", "tools", "reasoning"])
        .with_pricing(5.0, 25.0),
        model(
            "anthropic/claude-sonnet-4.5",
            "Claude Sonnet 4.5",
            "Balanced performance for coding and agents",
        )
        .with_context_window(200_000)
        .with_capabilities(&["text", "vision", "tools", "reasoning"])
        .with_pricing(3.0, 15.0),
        model(
            "anthropic/claude-haiku-4.5",
            "Claude Haiku 4.5",
            "Fast, compact model",
        )
        .with_context_window(200_000)
        .with_capabilities(&["text", "vision", "tools"])
        .with_pricing(1.0, 5.0),
        // Google models
        model(
            "google/gemini-2.5-pro",
            "Gemini 2.5 Pro",
            "Google's most capable thinking model",
        )
        .with_context_window(1_048_576)
        .with_capabilities(&["text", "vision", "tools", "reasoning"])
        .with_pricing(1.25, 10.0),
        model(
            "google/gemini-2.5-flash",
            "Gemini 2.5 Flash",
            "Fast multimodal model",
        )
        .with_context_window(1_048_576)
        .with_capabilities(&["text", "vision", "tools"])
        .with_pricing(0.3, 2.5),
        // xAI models
        model("xai/grok-4", "Grok 4", "xAI's flagship reasoning model")
            .with_context_window(256_000)
            .with_capabilities(&["text", "vision", "tools", "reasoning"])
            .with_pricing(3.0, 15.0),
        // Open-weight models
        model(
            "meta/llama-4-maverick",
            "Llama 4 Maverick",
            "Open-weight multimodal mixture-of-experts",
        )
        .with_context_window(1_000_000)
        .with_capabilities(&["text", "vision"]),
        model(
            "mistral/mistral-large",
            "Mistral Large",
            "Mistral's top-tier model",
        )
        .with_context_window(128_000)
        .with_capabilities(&["text", "tools"]),
        model(
            "deepseek/deepseek-r1",
            "DeepSeek R1",
            "Open reasoning model",
        )
        .with_context_window(128_000)
        .with_capabilities(&["text", "reasoning"]),
    ]
}

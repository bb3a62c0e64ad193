//! Static provider lookup tables.
//!
//! Providers are open-ended strings; these tables only decorate the ones we
//! know about. Unknown providers get `None` rather than an error.

use super::descriptor::ProviderId;

/// (provider id, display label, logo asset path)
const KNOWN_PROVIDERS: &[(&str, &str, &str)] = &[
    ("openai", "OpenAI", "/logos/openai.svg"),
    ("anthropic", "Anthropic", "/logos/anthropic.svg"),
    ("google", "Google", "/logos/google.svg"),
    ("xai", "xAI", "/logos/xai.svg"),
    ("meta", "Meta", "/logos/meta.svg"),
    ("mistral", "Mistral", "/logos/mistral.svg"),
    ("deepseek", "DeepSeek", "/logos/deepseek.svg"),
    ("groq", "Groq", "/logos/groq.svg"),
    ("perplexity", "Perplexity", "/logos/perplexity.svg"),
    ("cohere", "Cohere", "/logos/cohere.svg"),
    ("amazon", "Amazon", "/logos/amazon.svg"),
    ("alibaba", "Alibaba", "/logos/alibaba.svg"),
];

fn lookup(provider: &ProviderId) -> Option<&'static (&'static str, &'static str, &'static str)> {
    KNOWN_PROVIDERS
        .iter()
        .find(|(id, _, _)| provider.as_str().eq_ignore_ascii_case(id))
}

/// Human-readable provider label.
pub fn provider_label(provider: &ProviderId) -> Option<&'static str> {
    lookup(provider).map(|(_, label, _)| *label)
}

/// Logo asset path for a provider.
pub fn provider_logo(provider: &ProviderId) -> Option<&'static str> {
    lookup(provider).map(|(_, _, logo)| *logo)
}

/// Label for display, falling back to the raw provider id.
pub fn provider_label_or_id(provider: &ProviderId) -> String {
    provider_label(provider)
        .map(str::to_string)
        .unwrap_or_else(|| provider.to_string())
}

//! Config merging.
//!
//! Top-level scalars: the override wins when present. Sub-configs: merged one
//! level deep, field by field. Nested values (an integration, a list of
//! workflows) are replaced wholesale, never merged element-wise.

use super::types::{
    FeaturesConfig, FrameworkIntegrationConfig, ModelConfig, SecurityConfig, SidekickConfig,
    SidekickOverrides, UiConfig,
};

/// Field-wise `over.field.or(base.field)` for structs of `Option` fields.
///
/// Listing every field keeps the struct literal exhaustive, so adding a field
/// without merging it fails to compile.
macro_rules! overlay {
    ($base:expr, $over:expr; $($field:ident),+ $(,)?) => {
        Self {
            $($field: $over.$field.clone().or_else(|| $base.$field.clone()),)+
        }
    };
}

impl ModelConfig {
    /// Merge `over` onto `self`, returning a new value.
    pub fn merged(&self, over: &Self) -> Self {
        overlay!(self, over;
            allowed_models,
            default_model,
            custom_models,
            hide_if_single_model,
            group_by_provider,
            allow_model_change,
            show_model_info,
        )
    }
}

impl FeaturesConfig {
    /// Merge `over` onto `self`, returning a new value.
    pub fn merged(&self, over: &Self) -> Self {
        overlay!(self, over;
            reasoning,
            sources,
            suggestions,
            file_upload,
            web_search,
            voice_input,
            code_highlighting,
            markdown,
            conversation_branching,
            message_actions,
            export_chat,
            workflows,
        )
    }
}

impl UiConfig {
    /// Merge `over` onto `self`, returning a new value.
    pub fn merged(&self, over: &Self) -> Self {
        overlay!(self, over;
            theme,
            position,
            width,
            height,
            title,
            subtitle,
            placeholder,
            welcome_message,
            show_avatars,
            show_timestamps,
            show_model_selector,
            animations,
            compact_mode,
            suggestions,
        )
    }
}

impl SecurityConfig {
    /// Merge `over` onto `self`, returning a new value.
    pub fn merged(&self, over: &Self) -> Self {
        overlay!(self, over;
            rate_limit,
            max_message_length,
            allowed_domains,
            sanitize_input,
            content_filter,
            require_auth,
            max_file_size,
            allowed_file_types,
        )
    }
}

impl FrameworkIntegrationConfig {
    /// Merge `over` onto `self`, returning a new value.
    pub fn merged(&self, over: &Self) -> Self {
        overlay!(self, over; langchain, llamaindex, vercel_ai, mcp)
    }
}

fn merge_sub<T: Clone>(base: &T, over: Option<&T>, merge: fn(&T, &T) -> T) -> T {
    match over {
        Some(over) => merge(base, over),
        None => base.clone(),
    }
}

/// Merge an override onto a base config.
///
/// Neither input is modified; the result owns fresh copies of every
/// sub-config.
pub fn merge_configs(base: &SidekickConfig, over: &SidekickOverrides) -> SidekickConfig {
    SidekickConfig {
        model: over.model.clone().unwrap_or_else(|| base.model.clone()),
        temperature: over.temperature.unwrap_or(base.temperature),
        max_tokens: over.max_tokens.unwrap_or(base.max_tokens),
        base_url: over.base_url.clone().unwrap_or_else(|| base.base_url.clone()),
        model_config: merge_sub(
            &base.model_config,
            over.model_config.as_ref(),
            ModelConfig::merged,
        ),
        features_config: merge_sub(
            &base.features_config,
            over.features_config.as_ref(),
            FeaturesConfig::merged,
        ),
        ui_config: merge_sub(&base.ui_config, over.ui_config.as_ref(), UiConfig::merged),
        security_config: merge_sub(
            &base.security_config,
            over.security_config.as_ref(),
            SecurityConfig::merged,
        ),
        framework_config: merge_sub(
            &base.framework_config,
            over.framework_config.as_ref(),
            FrameworkIntegrationConfig::merged,
        ),
    }
}

fn merge_sub_overrides<T: Clone>(
    base: &Option<T>,
    over: &Option<T>,
    merge: fn(&T, &T) -> T,
) -> Option<T> {
    match (base, over) {
        (Some(base), Some(over)) => Some(merge(base, over)),
        (None, Some(v)) | (Some(v), None) => Some(v.clone()),
        (None, None) => None,
    }
}

/// Combine two overrides; fields in `over` win, with the same one-level
/// sub-config merge as [`merge_configs`].
pub fn merge_overrides(base: &SidekickOverrides, over: &SidekickOverrides) -> SidekickOverrides {
    SidekickOverrides {
        model: over.model.clone().or_else(|| base.model.clone()),
        temperature: over.temperature.or(base.temperature),
        max_tokens: over.max_tokens.or(base.max_tokens),
        base_url: over.base_url.clone().or_else(|| base.base_url.clone()),
        model_config: merge_sub_overrides(
            &base.model_config,
            &over.model_config,
            ModelConfig::merged,
        ),
        features_config: merge_sub_overrides(
            &base.features_config,
            &over.features_config,
            FeaturesConfig::merged,
        ),
        ui_config: merge_sub_overrides(&base.ui_config, &over.ui_config, UiConfig::merged),
        security_config: merge_sub_overrides(
            &base.security_config,
            &over.security_config,
            SecurityConfig::merged,
        ),
        framework_config: merge_sub_overrides(
            &base.framework_config,
            &over.framework_config,
            FrameworkIntegrationConfig::merged,
        ),
    }
}

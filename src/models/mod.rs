//! Model catalog and allow-list resolution.
//!
//! This module handles:
//! - Catalog entry types and provider lookup tables
//! - The default model catalog and runtime (gateway) registration
//! - `allowedModels` policies and the resolver that applies them

pub mod catalog;
pub mod defaults;
pub mod descriptor;
pub mod policy;
pub mod providers;
pub mod resolver;

pub use catalog::{filter_models, GatewayModel, ModelCatalog};
pub use defaults::{default_models, DEFAULT_MODEL_ID};
pub use descriptor::{display_name_for, ModelDescriptor, ModelPricing, ProviderId};
pub use policy::ModelListPolicy;
pub use providers::{provider_label, provider_label_or_id, provider_logo};
pub use resolver::{group_by_provider, ModelResolver, ProviderGroup, SelectorView};

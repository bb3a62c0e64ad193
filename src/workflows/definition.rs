//! Workflow definitions and the handler trait.
//!
//! A definition is plain data and serializes into config files. Executable
//! behaviour lives in a [`WorkflowHandler`] registered separately by id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named, reusable chat task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinition {
    /// Unique identifier (e.g., "code-review")
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    /// Tool names the workflow may use
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl WorkflowDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            system_prompt: None,
            tools: Vec::new(),
            category: None,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_tools(mut self, tools: &[&str]) -> Self {
        self.tools = tools.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Executes a workflow.
///
/// Handlers are looked up by workflow id, so one implementation can be
/// swapped for another without touching the definition.
#[async_trait]
pub trait WorkflowHandler: Send + Sync {
    /// Transform caller-supplied input into a result.
    async fn execute(
        &self,
        definition: &WorkflowDefinition,
        input: Value,
    ) -> anyhow::Result<Value>;
}

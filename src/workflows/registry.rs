//! Workflow registry and dispatch.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};
use thiserror::Error;

use super::builtin::builtin_workflows;
use super::definition::{WorkflowDefinition, WorkflowHandler};

/// Workflow-related errors.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Unknown workflow: {0}")]
    UnknownWorkflow(String),
    #[error("Workflow {0} has no handler and no system prompt")]
    NoHandler(String),
    #[error("Failed to read workflow file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse workflow file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Execution(#[from] anyhow::Error),
}

/// Shared handler for dynamic dispatch.
pub type ArcHandler = Arc<dyn WorkflowHandler>;

/// Workflow registry: definitions in insertion order plus a handler side
/// table keyed by workflow id.
#[derive(Default)]
pub struct WorkflowRegistry {
    definitions: Vec<WorkflowDefinition>,
    handlers: HashMap<String, ArcHandler>,
}

impl WorkflowRegistry {
    /// Create a registry with the built-in workflows.
    pub fn new() -> Self {
        Self::with_definitions(builtin_workflows())
    }

    /// Create a registry with no workflows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a registry from caller-supplied definitions.
    pub fn with_definitions(definitions: Vec<WorkflowDefinition>) -> Self {
        let mut registry = Self::empty();
        for def in definitions {
            registry.register(def);
        }
        registry
    }

    /// Append a definition. Returns `false` if the id is already taken; the
    /// existing definition is kept.
    pub fn register(&mut self, definition: WorkflowDefinition) -> bool {
        if self.exists(&definition.id) {
            tracing::debug!(workflow = %definition.id, "Skipping duplicate workflow");
            return false;
        }
        tracing::debug!(workflow = %definition.id, "Registered workflow");
        self.definitions.push(definition);
        true
    }

    /// Attach (or replace) the handler for a workflow id.
    pub fn register_handler(&mut self, id: impl Into<String>, handler: ArcHandler) {
        let id = id.into();
        if self.handlers.insert(id.clone(), handler).is_some() {
            tracing::debug!(workflow = %id, "Replaced workflow handler");
        }
    }

    /// Append definitions from a JSON file holding an array of workflows.
    ///
    /// Returns the number of new workflows.
    pub fn load_file(&mut self, path: &Path) -> Result<usize, WorkflowError> {
        let content = std::fs::read_to_string(path)?;
        let definitions: Vec<WorkflowDefinition> = serde_json::from_str(&content)?;
        let added = definitions
            .into_iter()
            .filter(|def| !def.id.is_empty())
            .map(|def| self.register(def))
            .filter(|added| *added)
            .count();
        tracing::info!(path = %path.display(), added, "Loaded workflows");
        Ok(added)
    }

    /// Get a workflow by id.
    pub fn get(&self, id: &str) -> Option<&WorkflowDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }

    /// Check if a workflow exists.
    pub fn exists(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Check if a handler is attached to a workflow id.
    pub fn has_handler(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    /// List all workflows, in registration order.
    pub fn list(&self) -> &[WorkflowDefinition] {
        &self.definitions
    }

    /// Workflows in a category.
    pub fn by_category(&self, category: &str) -> Vec<&WorkflowDefinition> {
        self.definitions
            .iter()
            .filter(|d| d.category.as_deref() == Some(category))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Run a workflow.
    ///
    /// With a handler attached the handler's result is returned. Without one,
    /// a workflow that has a system prompt yields the prepared request
    /// (`workflowId`, `systemPrompt`, `input`) for the chat layer to send.
    pub async fn execute(&self, id: &str, input: Value) -> Result<Value, WorkflowError> {
        let definition = self
            .get(id)
            .ok_or_else(|| WorkflowError::UnknownWorkflow(id.to_string()))?;

        if let Some(handler) = self.handlers.get(id) {
            tracing::debug!(workflow = %id, "Dispatching workflow to handler");
            return Ok(handler.execute(definition, input).await?);
        }

        match &definition.system_prompt {
            Some(prompt) => {
                tracing::debug!(workflow = %id, "Preparing prompt-only workflow");
                Ok(json!({
                    "workflowId": definition.id,
                    "systemPrompt": prompt,
                    "input": input,
                }))
            }
            None => Err(WorkflowError::NoHandler(id.to_string())),
        }
    }
}

impl std::fmt::Debug for WorkflowRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut handler_ids: Vec<&String> = self.handlers.keys().collect();
        handler_ids.sort();
        f.debug_struct("WorkflowRegistry")
            .field("definitions", &self.definitions)
            .field("handlers", &handler_ids)
            .finish()
    }
}

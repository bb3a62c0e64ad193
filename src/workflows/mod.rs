//! Workflows: reusable chat tasks looked up by id.

mod builtin;
mod definition;
mod registry;

pub use builtin::builtin_workflows;
pub use definition::{WorkflowDefinition, WorkflowHandler};
pub use registry::{ArcHandler, WorkflowError, WorkflowRegistry};

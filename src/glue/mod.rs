//! Glue workflows
//!
//! The workflow graph model, the service seam, and the extract/load stages
//! built on them.

mod extractor;
mod loader;
mod model;
mod service;

pub use extractor::WorkflowExtractor;
pub use loader::WorkflowLoader;
pub use model::{
    Action, Condition, EventBatching, GraphNode, NodeKind, Predicate, Trigger, TriggerType,
    WorkflowDefinition,
};
pub use service::WorkflowService;

//! Glue Workflow Clone
//!
//! Copies AWS Glue workflows, trigger graph included, across regions or
//! under a name prefix.

pub mod cli;
pub mod client;
pub mod cloner;
pub mod config;
pub mod etl;
pub mod glue;
pub mod transform;

// Re-exports for convenience
pub use client::GlueClient;
pub use cloner::{CloneReport, clone_workflow};
pub use config::{CopyConfig, DuplicateConfig};
pub use etl::{Extractor, Loader, Pipeline, Transformer};
pub use glue::{WorkflowDefinition, WorkflowService};
pub use transform::{NameMapping, Replacer, WorkflowRenamer};

//! Transform implementations for workflow definitions

mod renamer;
mod replacer;

pub use renamer::{NameMapping, WorkflowRenamer};
pub use replacer::Replacer;

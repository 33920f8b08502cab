//! The workflow service seam
//!
//! Everything the cloner needs from Glue. [`crate::client::GlueClient`] is the
//! real implementation; tests use an in-memory one.

use super::{Trigger, WorkflowDefinition};
use eyre::Result;
use std::future::Future;

/// Remote operations on Glue workflows
///
/// Every method maps to exactly one API call (or one paginated listing).
/// Implementations must not retry: the first error aborts the clone.
pub trait WorkflowService: Send + Sync {
    /// Region (or other location) the service operates in, if known.
    ///
    /// Two services with the same region share the same workflow namespace.
    fn region(&self) -> Option<&str>;

    /// Names of every workflow visible to this service
    fn list_workflows(&self) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Fetch a workflow including its graph
    fn get_workflow(&self, name: &str) -> impl Future<Output = Result<WorkflowDefinition>> + Send;

    fn delete_trigger(&self, name: &str) -> impl Future<Output = Result<()>> + Send;

    fn delete_workflow(&self, name: &str) -> impl Future<Output = Result<()>> + Send;

    /// Create the workflow shell: name, description, default run properties
    /// and max concurrent runs. The graph is ignored.
    fn create_workflow(
        &self,
        workflow: &WorkflowDefinition,
    ) -> impl Future<Output = Result<()>> + Send;

    fn create_trigger(
        &self,
        trigger: &Trigger,
        start_on_creation: bool,
    ) -> impl Future<Output = Result<()>> + Send;
}

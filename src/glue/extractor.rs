//! Workflow extractor
//!
//! Reads the source workflow, graph included, from a [`WorkflowService`].

use super::{WorkflowDefinition, WorkflowService};
use crate::etl::Extractor;
use eyre::{Context, Result};
use owo_colors::OwoColorize;

/// Extractor for a single Glue workflow
///
/// # Example
/// ```no_run
/// use glue_workflow_clone::client::GlueClient;
/// use glue_workflow_clone::etl::Extractor;
/// use glue_workflow_clone::glue::WorkflowExtractor;
///
/// # async fn example() -> eyre::Result<()> {
/// let client = GlueClient::connect(Some("eu-west-1"), None).await;
/// let extractor = WorkflowExtractor::new(client, "nightly-etl");
/// let workflows = extractor.extract().await?;
/// assert_eq!(workflows.len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct WorkflowExtractor<S> {
    service: S,
    workflow_name: String,
}

impl<S: WorkflowService> WorkflowExtractor<S> {
    /// Create a new workflow extractor
    ///
    /// # Arguments
    /// * `service` - Service holding the source workflow
    /// * `workflow_name` - Name of the workflow to read
    pub fn new(service: S, workflow_name: impl Into<String>) -> Self {
        Self {
            service,
            workflow_name: workflow_name.into(),
        }
    }
}

impl<S: WorkflowService> Extractor for WorkflowExtractor<S> {
    type Item = WorkflowDefinition;

    async fn extract(&self) -> Result<Vec<Self::Item>> {
        log::debug!("Fetching workflow {}", self.workflow_name.cyan());

        let workflow = self
            .service
            .get_workflow(&self.workflow_name)
            .await
            .with_context(|| format!("Failed to fetch source workflow '{}'", self.workflow_name))?;

        log::info!(
            "Fetched workflow {} ({} node(s), {} trigger(s))",
            workflow.name.cyan(),
            workflow.nodes.len(),
            workflow.trigger_count()
        );

        Ok(vec![workflow])
    }
}

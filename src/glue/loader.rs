//! Workflow loader
//!
//! Materializes renamed workflow definitions in the target service: the
//! workflow shell first, then one trigger per trigger node.

use super::{WorkflowDefinition, WorkflowService};
use crate::etl::Loader;
use eyre::{Context, Result};
use owo_colors::OwoColorize;

/// Loader for Glue workflows
///
/// The loader never updates in place. Call [`WorkflowLoader::remove_existing`]
/// before loading when the target name may already be taken.
pub struct WorkflowLoader<S> {
    service: S,
    dry_run: bool,
}

impl<S: WorkflowService> WorkflowLoader<S> {
    /// Create a new workflow loader
    ///
    /// # Arguments
    /// * `service` - Service to create workflows in
    pub fn new(service: S) -> Self {
        Self {
            service,
            dry_run: false,
        }
    }

    /// Log what would be deleted and created instead of calling the service
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Delete `name` and its triggers if the target already has it.
    ///
    /// Triggers go first: Glue refuses to delete a workflow whose triggers
    /// still exist. Returns `true` if a workflow was found.
    pub async fn remove_existing(&self, name: &str) -> Result<bool> {
        let existing = self
            .service
            .list_workflows()
            .await
            .wrap_err("Failed to list target workflows")?;

        if !existing.iter().any(|w| w == name) {
            log::debug!("No workflow named {} in target", name.cyan());
            return Ok(false);
        }

        log::info!("Workflow {} already exists in target, removing", name.cyan());

        let workflow = self
            .service
            .get_workflow(name)
            .await
            .with_context(|| format!("Failed to fetch existing workflow '{}'", name))?;

        for trigger in workflow.triggers() {
            if self.dry_run {
                log::info!("[dry-run] Would delete trigger {}", trigger.name.cyan());
                continue;
            }
            self.service
                .delete_trigger(&trigger.name)
                .await
                .with_context(|| format!("Failed to delete trigger '{}'", trigger.name))?;
            log::debug!("Deleted trigger {}", trigger.name.cyan());
        }

        if self.dry_run {
            log::info!("[dry-run] Would delete workflow {}", name.cyan());
        } else {
            self.service
                .delete_workflow(name)
                .await
                .with_context(|| format!("Failed to delete workflow '{}'", name))?;
            log::info!("Deleted workflow {}", name.cyan());
        }

        Ok(true)
    }

    /// Create one workflow and all of its triggers
    async fn create(&self, workflow: &WorkflowDefinition) -> Result<()> {
        for node in &workflow.nodes {
            log::debug!("Node: {}", node.name);
        }

        if self.dry_run {
            let yaml = serde_yaml::to_string(workflow)
                .wrap_err("Failed to serialize workflow definition")?;
            log::info!(
                "[dry-run] Would create workflow {}:\n{}",
                workflow.name.cyan(),
                yaml
            );
            return Ok(());
        }

        self.service
            .create_workflow(workflow)
            .await
            .with_context(|| format!("Failed to create workflow '{}'", workflow.name))?;
        log::info!("Created workflow {}", workflow.name.cyan());

        for trigger in workflow.triggers() {
            let start = trigger.trigger_type.starts_on_creation();
            self.service
                .create_trigger(trigger, start)
                .await
                .with_context(|| format!("Failed to create trigger '{}'", trigger.name))?;
            log::info!(
                "Created {} trigger {}{}",
                trigger.trigger_type.to_string().bright_black(),
                trigger.name.cyan(),
                if start { " (started)" } else { "" }
            );
        }

        Ok(())
    }
}

impl<S: WorkflowService> Loader for WorkflowLoader<S> {
    type Item = WorkflowDefinition;

    async fn load(&self, items: Vec<Self::Item>) -> Result<usize> {
        let mut count = 0;

        for workflow in items {
            self.create(&workflow).await?;
            count += 1;
        }

        Ok(count)
    }
}

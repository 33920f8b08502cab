//! Workflow cloning
//!
//! Ties the stages together in the order Glue needs them:
//! list/delete the target, get the source, rename, create.

use crate::etl::Pipeline;
use crate::glue::{WorkflowExtractor, WorkflowLoader, WorkflowService};
use crate::transform::{NameMapping, WorkflowRenamer};
use eyre::Result;
use owo_colors::OwoColorize;

/// Outcome of a clone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneReport {
    pub source_name: String,
    pub target_name: String,
    /// A workflow with the target name existed and was deleted first
    pub replaced_existing: bool,
    pub dry_run: bool,
    /// Number of workflows created (0 in dry-run mode)
    pub created: usize,
}

/// Clone `workflow_name` from `source` into `target`.
///
/// `source` and `target` may be the same service (prefixed duplication).
/// The first failing call aborts the clone; nothing is rolled back.
///
/// Fails without calling either service when the clone would keep the
/// source name in the source region, since replacing the existing target
/// would delete the source.
pub async fn clone_workflow<S, T>(
    source: S,
    target: T,
    mapping: NameMapping,
    workflow_name: &str,
    dry_run: bool,
) -> Result<CloneReport>
where
    S: WorkflowService,
    T: WorkflowService,
{
    let target_name = mapping.workflow_name(workflow_name);
    if target_name == workflow_name && source.region() == target.region() {
        eyre::bail!(
            "Refusing to clone workflow '{}' onto itself in region {}",
            workflow_name,
            source.region().unwrap_or("<default>")
        );
    }

    log::info!(
        "Cloning workflow {} as {}{}",
        workflow_name.cyan(),
        target_name.cyan(),
        if dry_run { " (dry-run)" } else { "" }
    );

    let loader = WorkflowLoader::new(target).dry_run(dry_run);
    let replaced_existing = loader.remove_existing(&target_name).await?;

    let pipeline = Pipeline::new(
        WorkflowExtractor::new(source, workflow_name),
        WorkflowRenamer::new(mapping),
        loader,
    );
    let loaded = pipeline.run().await?;

    Ok(CloneReport {
        source_name: workflow_name.to_string(),
        target_name,
        replaced_existing,
        dry_run,
        created: if dry_run { 0 } else { loaded },
    })
}

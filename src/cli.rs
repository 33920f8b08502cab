//! CLI helper functions

use crate::{
    client::GlueClient,
    cloner::{CloneReport, clone_workflow},
    config::{CopyConfig, DuplicateConfig},
    glue::WorkflowService,
};
use eyre::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

/// Source a dotenv file if it exists
///
/// AWS settings such as `AWS_PROFILE` or `AWS_REGION` can be kept in it.
/// Returns whether a file was loaded.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    if !path.is_file() {
        log::debug!("No env file at {}", path.display());
        return Ok(false);
    }

    dotenvy::from_filename(path)
        .with_context(|| format!("Failed to load env file: {}", path.display()))?;
    log::debug!("Loaded env file {}", path.display());
    Ok(true)
}

fn log_config<C: Serialize>(config: &C) {
    match serde_json::to_string_pretty(config) {
        Ok(json) => log::info!("Using the following configuration:\n{}", json),
        Err(e) => log::warn!("Failed to render configuration: {}", e),
    }
}

async fn connect(region: Option<&str>, profile: Option<&str>) -> Result<GlueClient> {
    let client = GlueClient::connect(region, profile).await;
    if client.region().is_none() {
        eyre::bail!("No AWS region configured: set one in the configuration file or AWS_REGION");
    }
    Ok(client)
}

/// Copy a workflow from one region to another
///
/// Reads a [`CopyConfig`] from `conf`, then clones the workflow from
/// `workflow_region` into `workflow_target_region`, renaming everything
/// through the replacer.
pub async fn copy_workflow(
    conf: impl AsRef<Path>,
    profile: Option<&str>,
    dry_run: bool,
) -> Result<CloneReport> {
    let config = CopyConfig::read(conf)?;
    log_config(&config);

    log::info!(
        "Connecting to Glue in {} and {}...",
        config.workflow_region.bright_black(),
        config.workflow_target_region.bright_black()
    );
    let source = connect(Some(config.workflow_region.as_str()), profile).await?;
    let target = connect(Some(config.workflow_target_region.as_str()), profile).await?;

    let report = clone_workflow(
        source,
        target,
        config.name_mapping(),
        &config.workflow_name,
        dry_run,
    )
    .await?;

    log_report(&report);
    Ok(report)
}

/// Duplicate a workflow in place under a prefixed name
///
/// Reads a [`DuplicateConfig`] from `conf`. Source and target are the same
/// region.
pub async fn duplicate_workflow(
    conf: impl AsRef<Path>,
    profile: Option<&str>,
    dry_run: bool,
) -> Result<CloneReport> {
    let config = DuplicateConfig::read(conf)?;
    log_config(&config);

    log::info!("Connecting to Glue...");
    let client = connect(config.region(), profile).await?;
    if let Some(region) = client.region() {
        log::info!("Using region: {}", region.bright_black());
    }

    let report = clone_workflow(
        client.clone(),
        client,
        config.name_mapping(),
        &config.workflow_name,
        dry_run,
    )
    .await?;

    log_report(&report);
    Ok(report)
}

fn log_report(report: &CloneReport) {
    if report.dry_run {
        log::info!(
            "✓ Dry run for {} -> {} complete, nothing was changed",
            report.source_name.cyan(),
            report.target_name.cyan()
        );
        return;
    }

    log::info!(
        "✓ Cloned {} -> {}{}",
        report.source_name.cyan(),
        report.target_name.cyan(),
        if report.replaced_existing {
            " (replaced existing)"
        } else {
            ""
        }
    );
}

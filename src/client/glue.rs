//! Glue client module
//!
//! Provides `GlueClient`, the `aws-sdk-glue` backed [`WorkflowService`].

use super::convert::{
    action_to_sdk, event_batching_to_sdk, predicate_to_sdk, to_hash, trigger_type_to_sdk,
    workflow_from_sdk,
};
use crate::glue::{Trigger, WorkflowDefinition, WorkflowService};
use aws_config::BehaviorVersion;
use aws_sdk_glue::Client;
use aws_sdk_glue::config::Region;
use aws_sdk_glue::config::retry::RetryConfig;
use aws_sdk_glue::error::DisplayErrorContext;
use eyre::{Result, eyre};

/// Glue client for one region.
///
/// Retries are disabled: a failed call is reported immediately.
///
/// # Example
/// ```no_run
/// use glue_workflow_clone::client::GlueClient;
/// use glue_workflow_clone::glue::WorkflowService;
///
/// # async fn example() -> eyre::Result<()> {
/// let client = GlueClient::connect(Some("eu-west-1"), None).await;
/// for name in client.list_workflows().await? {
///     println!("{}", name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct GlueClient {
    client: Client,
    region: Option<String>,
}

impl GlueClient {
    /// Build a client from the AWS default credential chain.
    ///
    /// # Arguments
    /// * `region` - Region to talk to. `None` uses the default region chain
    ///   (`AWS_REGION`, profile, IMDS).
    /// * `profile` - Named profile from the shared config files
    pub async fn connect(region: Option<&str>, profile: Option<&str>) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());

        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_string()));
        }
        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }

        let sdk_config = loader.load().await;
        let region = sdk_config.region().map(|r| r.to_string());
        log::debug!("Glue client region: {:?}", region);

        Self {
            client: Client::new(&sdk_config),
            region,
        }
    }

    /// Wrap an already configured SDK client
    pub fn from_client(client: Client) -> Self {
        let region = client.config().region().map(|r| r.to_string());
        Self { client, region }
    }
}

fn sdk_error<E: std::error::Error>(operation: &str, err: E) -> eyre::Report {
    eyre!("{} failed: {}", operation, DisplayErrorContext(err))
}

impl WorkflowService for GlueClient {
    /// Region the client resolved to, if any
    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    async fn list_workflows(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let output = self
                .client
                .list_workflows()
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|e| sdk_error("ListWorkflows", e))?;

            names.extend(output.workflows().iter().cloned());

            match output.next_token() {
                Some(token) if !token.is_empty() => next_token = Some(token.to_string()),
                _ => break,
            }
        }

        log::debug!("Listed {} workflow(s)", names.len());
        Ok(names)
    }

    async fn get_workflow(&self, name: &str) -> Result<WorkflowDefinition> {
        let output = self
            .client
            .get_workflow()
            .name(name)
            .include_graph(true)
            .send()
            .await
            .map_err(|e| sdk_error("GetWorkflow", e))?;

        let workflow = output
            .workflow()
            .ok_or_else(|| eyre!("GetWorkflow returned no workflow for '{}'", name))?;

        workflow_from_sdk(workflow)
    }

    async fn delete_trigger(&self, name: &str) -> Result<()> {
        self.client
            .delete_trigger()
            .name(name)
            .send()
            .await
            .map_err(|e| sdk_error("DeleteTrigger", e))?;
        Ok(())
    }

    async fn delete_workflow(&self, name: &str) -> Result<()> {
        self.client
            .delete_workflow()
            .name(name)
            .send()
            .await
            .map_err(|e| sdk_error("DeleteWorkflow", e))?;
        Ok(())
    }

    async fn create_workflow(&self, workflow: &WorkflowDefinition) -> Result<()> {
        self.client
            .create_workflow()
            .name(workflow.name.as_str())
            .set_description(workflow.description.clone())
            .set_default_run_properties(to_hash(&workflow.default_run_properties))
            .set_max_concurrent_runs(workflow.max_concurrent_runs)
            .send()
            .await
            .map_err(|e| sdk_error("CreateWorkflow", e))?;
        Ok(())
    }

    async fn create_trigger(&self, trigger: &Trigger, start_on_creation: bool) -> Result<()> {
        let event_batching = trigger
            .event_batching
            .as_ref()
            .map(event_batching_to_sdk)
            .transpose()?;

        self.client
            .create_trigger()
            .name(trigger.name.as_str())
            .set_workflow_name(trigger.workflow_name.clone())
            .r#type(trigger_type_to_sdk(trigger.trigger_type))
            .set_description(trigger.description.clone())
            .set_schedule(trigger.schedule.clone())
            .set_actions(Some(trigger.actions.iter().map(action_to_sdk).collect()))
            .set_predicate(trigger.predicate.as_ref().map(predicate_to_sdk))
            .set_event_batching_condition(event_batching)
            .start_on_creation(start_on_creation)
            .send()
            .await
            .map_err(|e| sdk_error("CreateTrigger", e))?;
        Ok(())
    }
}

//! In-memory Glue workflow service shared by the integration tests

#![allow(dead_code)]

use eyre::{Result, eyre};
use glue_workflow_clone::glue::{
    Action, Condition, GraphNode, Predicate, Trigger, TriggerType, WorkflowDefinition,
    WorkflowService,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct State {
    workflows: BTreeMap<String, WorkflowDefinition>,
    /// trigger name -> start_on_creation
    started: BTreeMap<String, bool>,
    calls: Vec<String>,
    fail_on: Option<String>,
}

/// Behaves like one Glue region. Clones share the same state.
#[derive(Clone, Default)]
pub struct MemoryGlue {
    region: Option<String>,
    state: Arc<Mutex<State>>,
}

impl MemoryGlue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_region(region: &str) -> Self {
        Self {
            region: Some(region.to_string()),
            ..Self::default()
        }
    }

    pub fn with_workflow(self, workflow: WorkflowDefinition) -> Self {
        self.insert(workflow);
        self
    }

    pub fn insert(&self, workflow: WorkflowDefinition) {
        let mut state = self.state.lock().unwrap();
        state.workflows.insert(workflow.name.clone(), workflow);
    }

    /// Make every call to `call` (e.g. `"CreateTrigger"`) fail
    pub fn fail_on(&self, call: &str) {
        self.state.lock().unwrap().fail_on = Some(call.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn workflow(&self, name: &str) -> Option<WorkflowDefinition> {
        self.state.lock().unwrap().workflows.get(name).cloned()
    }

    pub fn workflow_names(&self) -> Vec<String> {
        self.state.lock().unwrap().workflows.keys().cloned().collect()
    }

    pub fn started(&self, trigger: &str) -> Option<bool> {
        self.state.lock().unwrap().started.get(trigger).copied()
    }

    fn record(&self, call: &str, arg: &str) -> Result<std::sync::MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("{} {}", call, arg).trim_end().to_string());
        if state.fail_on.as_deref() == Some(call) {
            return Err(eyre!("{} failed: InternalServiceException", call));
        }
        Ok(state)
    }
}

impl WorkflowService for MemoryGlue {
    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    async fn list_workflows(&self) -> Result<Vec<String>> {
        let state = self.record("ListWorkflows", "")?;
        Ok(state.workflows.keys().cloned().collect())
    }

    async fn get_workflow(&self, name: &str) -> Result<WorkflowDefinition> {
        let state = self.record("GetWorkflow", name)?;
        state
            .workflows
            .get(name)
            .cloned()
            .ok_or_else(|| eyre!("EntityNotFoundException: workflow {} not found", name))
    }

    async fn delete_trigger(&self, name: &str) -> Result<()> {
        let mut state = self.record("DeleteTrigger", name)?;
        let mut found = false;
        for workflow in state.workflows.values_mut() {
            let before = workflow.nodes.len();
            workflow
                .nodes
                .retain(|n| n.trigger.as_ref().is_none_or(|t| t.name != name));
            found |= workflow.nodes.len() != before;
        }
        state.started.remove(name);
        if !found {
            return Err(eyre!("EntityNotFoundException: trigger {} not found", name));
        }
        Ok(())
    }

    async fn delete_workflow(&self, name: &str) -> Result<()> {
        let mut state = self.record("DeleteWorkflow", name)?;
        state.workflows.remove(name);
        Ok(())
    }

    async fn create_workflow(&self, workflow: &WorkflowDefinition) -> Result<()> {
        let mut state = self.record("CreateWorkflow", &workflow.name)?;
        if state.workflows.contains_key(&workflow.name) {
            return Err(eyre!("AlreadyExistsException: {}", workflow.name));
        }
        let shell = WorkflowDefinition {
            nodes: Vec::new(),
            ..workflow.clone()
        };
        state.workflows.insert(workflow.name.clone(), shell);
        Ok(())
    }

    async fn create_trigger(&self, trigger: &Trigger, start_on_creation: bool) -> Result<()> {
        let mut state = self.record("CreateTrigger", &trigger.name)?;
        if state.started.contains_key(&trigger.name) {
            return Err(eyre!("AlreadyExistsException: {}", trigger.name));
        }
        let workflow_name = trigger
            .workflow_name
            .clone()
            .ok_or_else(|| eyre!("InvalidInputException: trigger without workflow"))?;
        let workflow = state
            .workflows
            .get_mut(&workflow_name)
            .ok_or_else(|| eyre!("EntityNotFoundException: workflow {}", workflow_name))?;
        workflow.nodes.push(GraphNode::trigger(trigger.clone()));
        state.started.insert(trigger.name.clone(), start_on_creation);
        Ok(())
    }
}

/// A three-trigger workflow touching jobs and crawlers
pub fn sample_workflow(name: &str) -> WorkflowDefinition {
    let mut workflow = WorkflowDefinition::new(name)
        .with_node(GraphNode::trigger(
            Trigger::new("dev-start", TriggerType::OnDemand)
                .with_action(Action::job("dev-extract"))
                .with_action(Action::crawler("dev-raw-crawler")),
        ))
        .with_node(GraphNode::job("dev-extract"))
        .with_node(GraphNode::crawler("dev-raw-crawler"))
        .with_node(GraphNode::trigger(
            Trigger::new("dev-after-extract", TriggerType::Conditional)
                .with_action(Action::job("dev-load"))
                .with_predicate(Predicate {
                    logical: Some("AND".to_string()),
                    conditions: vec![
                        Condition::job("dev-extract", "SUCCEEDED"),
                        Condition::crawler("dev-raw-crawler", "SUCCEEDED"),
                    ],
                }),
        ))
        .with_node(GraphNode::job("dev-load"))
        .with_node(GraphNode::trigger(
            Trigger::new("dev-nightly", TriggerType::Scheduled)
                .with_schedule("cron(0 2 * * ? *)")
                .with_action(Action::job("dev-extract")),
        ));

    workflow.description = Some("Nightly dev ETL".to_string());
    workflow.max_concurrent_runs = Some(1);
    workflow
        .default_run_properties
        .insert("bucket".to_string(), "dev-bucket".to_string());

    for trigger in workflow.nodes.iter_mut().filter_map(|n| n.trigger.as_mut()) {
        trigger.workflow_name = Some(name.to_string());
    }
    workflow
}

//! Workflow graph model
//!
//! A service-independent copy of the parts of a Glue workflow that a clone
//! carries over. The SDK types are converted into these at the client edge so
//! the renaming and loading logic never touches the SDK directly.

use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A workflow together with its graph
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkflowDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub default_run_properties: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_runs: Option<i32>,
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
}

impl WorkflowDefinition {
    /// Create an empty workflow with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Append a node to the graph
    pub fn with_node(mut self, node: GraphNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Triggers in graph order
    pub fn triggers(&self) -> impl Iterator<Item = &Trigger> {
        self.nodes.iter().filter_map(|n| n.trigger.as_ref())
    }

    /// Number of trigger nodes in the graph
    pub fn trigger_count(&self) -> usize {
        self.triggers().count()
    }
}

/// Kind of node in a workflow graph
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Trigger,
    Job,
    Crawler,
}

/// A node of the workflow graph
///
/// Job and crawler nodes are only references; the clone does not create
/// jobs or crawlers. Only trigger nodes carry details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphNode {
    pub name: String,
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Trigger>,
}

impl GraphNode {
    pub fn trigger(trigger: Trigger) -> Self {
        Self {
            name: trigger.name.clone(),
            kind: NodeKind::Trigger,
            trigger: Some(trigger),
        }
    }

    pub fn job(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Job,
            trigger: None,
        }
    }

    pub fn crawler(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Crawler,
            trigger: None,
        }
    }
}

/// Glue trigger types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerType {
    Scheduled,
    Conditional,
    OnDemand,
    Event,
}

impl TriggerType {
    /// Wire name used by the Glue API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Conditional => "CONDITIONAL",
            Self::OnDemand => "ON_DEMAND",
            Self::Event => "EVENT",
        }
    }

    /// Whether a trigger of this type is started as soon as it is created.
    ///
    /// On-demand triggers cannot be started, every other type is activated.
    pub fn starts_on_creation(&self) -> bool {
        !matches!(self, Self::OnDemand)
    }
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriggerType {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SCHEDULED" => Ok(Self::Scheduled),
            "CONDITIONAL" => Ok(Self::Conditional),
            "ON_DEMAND" => Ok(Self::OnDemand),
            "EVENT" => Ok(Self::Event),
            other => Err(eyre!("Unknown trigger type: {}", other)),
        }
    }
}

/// A trigger and everything needed to recreate it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trigger {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_name: Option<String>,
    #[serde(rename = "type")]
    pub trigger_type: TriggerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicate: Option<Predicate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_batching: Option<EventBatching>,
}

impl Trigger {
    pub fn new(name: impl Into<String>, trigger_type: TriggerType) -> Self {
        Self {
            name: name.into(),
            workflow_name: None,
            trigger_type,
            description: None,
            schedule: None,
            actions: Vec::new(),
            predicate: None,
            event_batching: None,
        }
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    pub fn with_schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = Some(schedule.into());
        self
    }
}

/// Something a trigger starts: a job or a crawler
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Action {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crawler_name: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub arguments: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_configuration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_delay_after: Option<i32>,
}

impl Action {
    pub fn job(name: impl Into<String>) -> Self {
        Self {
            job_name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn crawler(name: impl Into<String>) -> Self {
        Self {
            crawler_name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// Conditions a conditional trigger waits on
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Predicate {
    /// `AND` or `ANY`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical: Option<String>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_operator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crawler_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crawl_state: Option<String>,
}

impl Condition {
    /// Condition on a job reaching `state`
    pub fn job(name: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            logical_operator: Some("EQUALS".to_string()),
            job_name: Some(name.into()),
            state: Some(state.into()),
            ..Default::default()
        }
    }

    /// Condition on a crawler reaching `crawl_state`
    pub fn crawler(name: impl Into<String>, crawl_state: impl Into<String>) -> Self {
        Self {
            logical_operator: Some("EQUALS".to_string()),
            crawler_name: Some(name.into()),
            crawl_state: Some(crawl_state.into()),
            ..Default::default()
        }
    }
}

/// Batching settings of an event trigger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventBatching {
    pub batch_size: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_window: Option<i32>,
}

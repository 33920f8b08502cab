//! Conversions between `aws-sdk-glue` types and the workflow model

use crate::glue::{
    Action, Condition, EventBatching, GraphNode, NodeKind, Predicate, Trigger, TriggerType,
    WorkflowDefinition,
};
use aws_sdk_glue::types as sdk;
use eyre::{Result, eyre};
use std::collections::{BTreeMap, HashMap};

pub(crate) fn workflow_from_sdk(workflow: &sdk::Workflow) -> Result<WorkflowDefinition> {
    let name = workflow
        .name()
        .ok_or_else(|| eyre!("Workflow in response has no name"))?;

    let mut nodes = Vec::new();
    if let Some(graph) = workflow.graph() {
        for node in graph.nodes() {
            if let Some(node) = node_from_sdk(node)? {
                nodes.push(node);
            }
        }
    } else {
        log::warn!("Workflow {} was returned without a graph", name);
    }

    Ok(WorkflowDefinition {
        name: name.to_string(),
        description: workflow.description().map(str::to_string),
        default_run_properties: workflow
            .default_run_properties()
            .map(to_btree)
            .unwrap_or_default(),
        max_concurrent_runs: workflow.max_concurrent_runs(),
        nodes,
    })
}

/// Nodes that cannot be recreated (unknown type, trigger without details)
/// are skipped.
fn node_from_sdk(node: &sdk::Node) -> Result<Option<GraphNode>> {
    if let Some(trigger) = node.trigger_details().and_then(|d| d.trigger()) {
        let trigger = trigger_from_sdk(trigger)?;
        let name = node.name().unwrap_or(trigger.name.as_str()).to_string();
        return Ok(Some(GraphNode {
            name,
            kind: NodeKind::Trigger,
            trigger: Some(trigger),
        }));
    }

    let name = node.name().unwrap_or_default().to_string();
    let kind = match node.r#type() {
        Some(sdk::NodeType::Job) => NodeKind::Job,
        Some(sdk::NodeType::Crawler) => NodeKind::Crawler,
        other => {
            log::warn!("Skipping node {} of type {:?}", name, other);
            return Ok(None);
        }
    };

    Ok(Some(GraphNode {
        name,
        kind,
        trigger: None,
    }))
}

fn trigger_from_sdk(trigger: &sdk::Trigger) -> Result<Trigger> {
    let name = trigger
        .name()
        .ok_or_else(|| eyre!("Trigger in workflow graph has no name"))?;
    let trigger_type: TriggerType = trigger
        .r#type()
        .ok_or_else(|| eyre!("Trigger '{}' has no type", name))?
        .as_str()
        .parse()?;

    Ok(Trigger {
        name: name.to_string(),
        workflow_name: trigger.workflow_name().map(str::to_string),
        trigger_type,
        description: trigger.description().map(str::to_string),
        schedule: trigger.schedule().map(str::to_string),
        actions: trigger.actions().iter().map(action_from_sdk).collect(),
        predicate: trigger.predicate().map(predicate_from_sdk),
        event_batching: trigger
            .event_batching_condition()
            .map(|e| EventBatching {
                batch_size: e.batch_size(),
                batch_window: e.batch_window(),
            }),
    })
}

fn action_from_sdk(action: &sdk::Action) -> Action {
    Action {
        job_name: action.job_name().map(str::to_string),
        crawler_name: action.crawler_name().map(str::to_string),
        arguments: action.arguments().map(to_btree).unwrap_or_default(),
        timeout: action.timeout(),
        security_configuration: action.security_configuration().map(str::to_string),
        notify_delay_after: action
            .notification_property()
            .and_then(|n| n.notify_delay_after()),
    }
}

fn predicate_from_sdk(predicate: &sdk::Predicate) -> Predicate {
    Predicate {
        logical: predicate.logical().map(|l| l.as_str().to_string()),
        conditions: predicate
            .conditions()
            .iter()
            .map(|c| Condition {
                logical_operator: c.logical_operator().map(|o| o.as_str().to_string()),
                job_name: c.job_name().map(str::to_string),
                state: c.state().map(|s| s.as_str().to_string()),
                crawler_name: c.crawler_name().map(str::to_string),
                crawl_state: c.crawl_state().map(|s| s.as_str().to_string()),
            })
            .collect(),
    }
}

pub(crate) fn action_to_sdk(action: &Action) -> sdk::Action {
    sdk::Action::builder()
        .set_job_name(action.job_name.clone())
        .set_crawler_name(action.crawler_name.clone())
        .set_arguments(to_hash(&action.arguments))
        .set_timeout(action.timeout)
        .set_security_configuration(action.security_configuration.clone())
        .set_notification_property(action.notify_delay_after.map(|delay| {
            sdk::NotificationProperty::builder()
                .notify_delay_after(delay)
                .build()
        }))
        .build()
}

pub(crate) fn predicate_to_sdk(predicate: &Predicate) -> sdk::Predicate {
    let conditions = predicate
        .conditions
        .iter()
        .map(|c| {
            sdk::Condition::builder()
                .set_logical_operator(
                    c.logical_operator.as_deref().map(sdk::LogicalOperator::from),
                )
                .set_job_name(c.job_name.clone())
                .set_state(c.state.as_deref().map(sdk::JobRunState::from))
                .set_crawler_name(c.crawler_name.clone())
                .set_crawl_state(c.crawl_state.as_deref().map(sdk::CrawlState::from))
                .build()
        })
        .collect();

    sdk::Predicate::builder()
        .set_logical(predicate.logical.as_deref().map(sdk::Logical::from))
        .set_conditions(Some(conditions))
        .build()
}

pub(crate) fn event_batching_to_sdk(
    batching: &EventBatching,
) -> Result<sdk::EventBatchingCondition> {
    sdk::EventBatchingCondition::builder()
        .batch_size(batching.batch_size)
        .set_batch_window(batching.batch_window)
        .build()
        .map_err(|e| eyre!("Invalid event batching condition: {}", e))
}

pub(crate) fn trigger_type_to_sdk(trigger_type: TriggerType) -> sdk::TriggerType {
    sdk::TriggerType::from(trigger_type.as_str())
}

fn to_btree(map: &HashMap<String, String>) -> BTreeMap<String, String> {
    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

/// Empty maps are sent as absent
pub(crate) fn to_hash(map: &BTreeMap<String, String>) -> Option<HashMap<String, String>> {
    if map.is_empty() {
        return None;
    }
    Some(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
}

//! Workflow renaming
//!
//! Rewrites every name in a workflow graph so the clone does not collide
//! with the original.

use super::Replacer;
use crate::etl::Transformer;
use crate::glue::{NodeKind, Trigger, WorkflowDefinition};
use eyre::Result;

/// How new names are derived from the original ones
#[derive(Debug, Clone)]
pub enum NameMapping {
    /// Every name goes through the replacer (cross-region copy)
    Replace(Replacer),
    /// Workflow and trigger names get a prefix. Job and crawler names go
    /// through the replacer.
    Prefix { prefix: String, replacer: Replacer },
}

impl NameMapping {
    pub fn workflow_name(&self, name: &str) -> String {
        match self {
            Self::Replace(replacer) => replacer.replace(name),
            Self::Prefix { prefix, .. } => format!("{}{}", prefix, name),
        }
    }

    pub fn trigger_name(&self, name: &str) -> String {
        match self {
            Self::Replace(replacer) => replacer.replace(name),
            Self::Prefix { prefix, .. } => format!("{}{}", prefix, name),
        }
    }

    pub fn job_name(&self, name: &str) -> String {
        self.replacer().replace(name)
    }

    pub fn crawler_name(&self, name: &str) -> String {
        self.replacer().replace(name)
    }

    fn replacer(&self) -> &Replacer {
        match self {
            Self::Replace(replacer) => replacer,
            Self::Prefix { replacer, .. } => replacer,
        }
    }
}

/// Transformer that renames a workflow and everything in its graph
///
/// # Example
/// ```
/// use glue_workflow_clone::etl::Transformer;
/// use glue_workflow_clone::glue::{Action, GraphNode, Trigger, TriggerType, WorkflowDefinition};
/// use glue_workflow_clone::transform::{NameMapping, Replacer, WorkflowRenamer};
///
/// let renamer = WorkflowRenamer::new(NameMapping::Prefix {
///     prefix: "test_".to_string(),
///     replacer: Replacer::new([("prod", "test")]),
/// });
///
/// let workflow = WorkflowDefinition::new("etl").with_node(GraphNode::trigger(
///     Trigger::new("start", TriggerType::OnDemand).with_action(Action::job("prod-load")),
/// ));
///
/// let renamed = renamer.transform(workflow).unwrap();
/// let trigger = renamed.triggers().next().unwrap();
/// assert_eq!(renamed.name, "test_etl");
/// assert_eq!(trigger.name, "test_start");
/// assert_eq!(trigger.workflow_name.as_deref(), Some("test_etl"));
/// assert_eq!(trigger.actions[0].job_name.as_deref(), Some("test-load"));
/// ```
pub struct WorkflowRenamer {
    mapping: NameMapping,
}

impl WorkflowRenamer {
    pub fn new(mapping: NameMapping) -> Self {
        Self { mapping }
    }

    fn rename_trigger(&self, trigger: &mut Trigger, workflow_name: &str) {
        trigger.name = self.mapping.trigger_name(&trigger.name);
        trigger.workflow_name = Some(workflow_name.to_string());

        for action in &mut trigger.actions {
            rename_opt(&mut action.job_name, |n| self.mapping.job_name(n));
            rename_opt(&mut action.crawler_name, |n| self.mapping.crawler_name(n));
        }

        if let Some(predicate) = &mut trigger.predicate {
            for condition in &mut predicate.conditions {
                rename_opt(&mut condition.job_name, |n| self.mapping.job_name(n));
                rename_opt(&mut condition.crawler_name, |n| self.mapping.crawler_name(n));
            }
        }
    }
}

fn rename_opt(name: &mut Option<String>, f: impl Fn(&str) -> String) {
    if let Some(n) = name {
        *n = f(n);
    }
}

impl Transformer for WorkflowRenamer {
    type Input = WorkflowDefinition;
    type Output = WorkflowDefinition;

    fn transform(&self, mut input: Self::Input) -> Result<Self::Output> {
        let original = std::mem::take(&mut input.name);
        input.name = self.mapping.workflow_name(&original);
        log::debug!("Renaming workflow {} -> {}", original, input.name);

        for node in &mut input.nodes {
            node.name = match node.kind {
                NodeKind::Trigger => self.mapping.trigger_name(&node.name),
                NodeKind::Job => self.mapping.job_name(&node.name),
                NodeKind::Crawler => self.mapping.crawler_name(&node.name),
            };

            if let Some(trigger) = &mut node.trigger {
                self.rename_trigger(trigger, &input.name);
            }
        }

        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glue::{Action, Condition, GraphNode, Predicate, TriggerType};

    fn sample() -> WorkflowDefinition {
        WorkflowDefinition::new("dev-etl")
            .with_node(GraphNode::trigger(
                Trigger::new("dev-start", TriggerType::OnDemand)
                    .with_action(Action::job("dev-extract"))
                    .with_action(Action::crawler("dev-crawler")),
            ))
            .with_node(GraphNode::job("dev-extract"))
            .with_node(GraphNode::crawler("dev-crawler"))
            .with_node(GraphNode::trigger(
                Trigger::new("dev-after", TriggerType::Conditional)
                    .with_action(Action::job("dev-load"))
                    .with_predicate(Predicate {
                        logical: Some("AND".to_string()),
                        conditions: vec![
                            Condition::job("dev-extract", "SUCCEEDED"),
                            Condition::crawler("dev-crawler", "SUCCEEDED"),
                        ],
                    }),
            ))
    }

    #[test]
    fn test_replace_mapping_renames_everything() {
        let renamer = WorkflowRenamer::new(NameMapping::Replace(Replacer::new([("dev", "prd")])));
        let wf = renamer.transform(sample()).unwrap();

        assert_eq!(wf.name, "prd-etl");
        let names: Vec<_> = wf.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["prd-start", "prd-extract", "prd-crawler", "prd-after"]);

        let triggers: Vec<_> = wf.triggers().collect();
        assert_eq!(triggers[0].name, "prd-start");
        assert_eq!(triggers[0].workflow_name.as_deref(), Some("prd-etl"));
        assert_eq!(triggers[0].actions[0].job_name.as_deref(), Some("prd-extract"));
        assert_eq!(triggers[0].actions[1].crawler_name.as_deref(), Some("prd-crawler"));

        let conditions = &triggers[1].predicate.as_ref().unwrap().conditions;
        assert_eq!(conditions[0].job_name.as_deref(), Some("prd-extract"));
        assert_eq!(conditions[1].crawler_name.as_deref(), Some("prd-crawler"));
        assert_eq!(conditions[0].state.as_deref(), Some("SUCCEEDED"));
    }

    #[test]
    fn test_prefix_mapping_only_replaces_jobs_and_crawlers() {
        let renamer = WorkflowRenamer::new(NameMapping::Prefix {
            prefix: "copy_".to_string(),
            replacer: Replacer::new([("dev", "qa")]),
        });
        let wf = renamer.transform(sample()).unwrap();

        assert_eq!(wf.name, "copy_dev-etl");
        let names: Vec<_> = wf.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["copy_dev-start", "qa-extract", "qa-crawler", "copy_dev-after"]);

        let after = wf.triggers().nth(1).unwrap();
        assert_eq!(after.name, "copy_dev-after");
        assert_eq!(after.workflow_name.as_deref(), Some("copy_dev-etl"));
        assert_eq!(after.actions[0].job_name.as_deref(), Some("qa-load"));
    }

    #[test]
    fn test_substitution_is_applied_once() {
        // A second pass would turn "a" into "c"
        let renamer =
            WorkflowRenamer::new(NameMapping::Replace(Replacer::new([("a", "b"), ("b", "c")])));
        let wf = WorkflowDefinition::new("wf").with_node(GraphNode::trigger(
            Trigger::new("t", TriggerType::OnDemand).with_action(Action::job("a")),
        ));

        let wf = renamer.transform(wf).unwrap();
        let trigger = wf.triggers().next().unwrap();
        assert_eq!(trigger.actions[0].job_name.as_deref(), Some("b"));
    }

    #[test]
    fn test_properties_are_kept() {
        let mut wf = sample();
        wf.description = Some("nightly".to_string());
        wf.max_concurrent_runs = Some(2);
        wf.default_run_properties
            .insert("env".to_string(), "dev".to_string());

        let renamer = WorkflowRenamer::new(NameMapping::Replace(Replacer::new([("dev", "prd")])));
        let out = renamer.transform(wf).unwrap();

        assert_eq!(out.description.as_deref(), Some("nightly"));
        assert_eq!(out.max_concurrent_runs, Some(2));
        // Run property values are copied verbatim
        assert_eq!(out.default_run_properties["env"], "dev");
    }
}

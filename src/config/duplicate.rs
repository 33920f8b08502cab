//! Same-account prefixed duplication configuration

use super::{read_file, require, validate_replacer};
use crate::transform::{NameMapping, Replacer};
use eyre::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Configuration of `glue-clone duplicate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DuplicateConfig {
    /// Workflow to duplicate
    pub workflow_name: String,
    /// Region of the workflow. Falls back to the AWS default region when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Prepended to the workflow name and every trigger name
    pub prefix: String,
    /// Literal `find -> replace` pairs applied to job and crawler names only
    #[serde(default)]
    pub replacer: BTreeMap<String, String>,
}

impl DuplicateConfig {
    /// Read and validate a configuration file
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = read_file(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        require("workflow_name", &self.workflow_name)?;
        require("prefix", &self.prefix)?;
        validate_replacer(&self.replacer)
    }

    /// Configured region, with blank treated as absent
    pub fn region(&self) -> Option<&str> {
        self.region
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }

    pub fn name_mapping(&self) -> NameMapping {
        NameMapping::Prefix {
            prefix: self.prefix.clone(),
            replacer: Replacer::from_map(&self.replacer),
        }
    }

    pub fn target_workflow_name(&self) -> String {
        self.name_mapping().workflow_name(&self.workflow_name)
    }
}

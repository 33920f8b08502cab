//! Cross-region copy configuration

use super::{read_file, require, validate_replacer};
use crate::transform::{NameMapping, Replacer};
use eyre::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Configuration of `glue-clone copy`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CopyConfig {
    /// Workflow to copy, as named in the source region
    pub workflow_name: String,
    /// Region holding the source workflow
    pub workflow_region: String,
    /// Region to create the copy in
    pub workflow_target_region: String,
    /// Literal `find -> replace` pairs applied to every name
    #[serde(default)]
    pub replacer: BTreeMap<String, String>,
}

impl CopyConfig {
    /// Read and validate a configuration file
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = read_file(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        require("workflow_name", &self.workflow_name)?;
        require("workflow_region", &self.workflow_region)?;
        require("workflow_target_region", &self.workflow_target_region)?;
        validate_replacer(&self.replacer)?;

        if self.workflow_region.trim() == self.workflow_target_region.trim()
            && self.target_workflow_name() == self.workflow_name
        {
            eyre::bail!(
                "Copying '{}' within {} needs a replacer that changes the workflow name",
                self.workflow_name,
                self.workflow_region
            );
        }
        Ok(())
    }

    pub fn name_mapping(&self) -> NameMapping {
        NameMapping::Replace(Replacer::from_map(&self.replacer))
    }

    /// Name the copy will have in the target region
    pub fn target_workflow_name(&self) -> String {
        self.name_mapping().workflow_name(&self.workflow_name)
    }
}

//! Clone configuration files
//!
//! Both variants read a small JSON (or YAML) file. JSON files are parsed as
//! JSON5 so comments and trailing commas are accepted.
//!
//! Example cross-region configuration:
//! ```json
//! {
//!   "workflow_name": "dev-nightly",
//!   "workflow_region": "eu-west-1",
//!   "workflow_target_region": "us-east-1",
//!   "replacer": { "dev": "prd" }
//! }
//! ```

mod copy;
mod duplicate;

pub use copy::CopyConfig;
pub use duplicate::DuplicateConfig;

use eyre::{Context, Result};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::Path;

/// Read and parse a configuration file by extension
///
/// `.yml` and `.yaml` are YAML, everything else is JSON5.
pub(crate) fn read_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.is_file() {
        eyre::bail!("File [{}] not found!", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration: {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("yml") | Some("yaml") => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML configuration: {}", path.display())),
        _ => json5::from_str(&content)
            .with_context(|| format!("Failed to parse JSON configuration: {}", path.display())),
    }
}

/// Fail with `"<field> parameter not provided"` when `value` is blank
pub(crate) fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        eyre::bail!("{} parameter not provided", field);
    }
    Ok(())
}

pub(crate) fn validate_replacer(replacer: &BTreeMap<String, String>) -> Result<()> {
    if replacer.keys().any(|k| k.is_empty()) {
        eyre::bail!("replacer keys must not be empty");
    }
    Ok(())
}

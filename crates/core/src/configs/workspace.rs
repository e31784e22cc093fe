use std::collections::BTreeMap;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::configs::tasks::TaskConfig;
use crate::types::{DevError, DevResult};

/// File name looked up at the workspace root
pub const CONFIG_FILE_NAME: &str = "devtasks.yml";

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkspaceConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Environment variables set for every command a task runs.
    pub env: Option<BTreeMap<String, String>>,
    /// Extra tasks available next to the built-in ones.
    pub tasks: Option<Vec<TaskConfig>>,
}

pub fn parse_workspace_config(yaml_str: &str) -> DevResult<WorkspaceConfig> {
    // An empty file is a valid, empty configuration
    if yaml_str.trim().is_empty() {
        return Ok(WorkspaceConfig::default());
    }
    let config: WorkspaceConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}

/// Read `devtasks.yml` from `workspace_root`, falling back to defaults when absent
pub fn load_workspace_config(workspace_root: &Path) -> DevResult<WorkspaceConfig> {
    let config_path = workspace_root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(WorkspaceConfig::default());
    }

    let content = std::fs::read_to_string(&config_path)?;

    let config = parse_workspace_config(&content).map_err(|e| {
        DevError::Config(format!(
            "Failed to parse config {}: {}",
            config_path.display(),
            e
        ))
    })?;
    debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// JSON schema of the configuration file
pub fn workspace_config_schema() -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(schemars::schema_for!(WorkspaceConfig))
}

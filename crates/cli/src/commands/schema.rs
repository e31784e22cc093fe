use anyhow::{Context, Result};
use devtasks_core::configs::workspace::workspace_config_schema;

pub fn execute() -> Result<()> {
    let schema = workspace_config_schema().context("Failed to build config schema")?;
    let schema =
        serde_json::to_string_pretty(&schema).context("Failed to serialize config schema")?;
    println!("{}", schema);
    Ok(())
}

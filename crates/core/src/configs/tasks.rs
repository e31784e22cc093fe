use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::execution::command::CommandSpec;
use crate::tasks::{Task, TaskSource};
use crate::types::{DevError, DevResult};

/// A single command entry: a shell line or an argv list
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Command {
    Shell(String),
    Argv(Vec<String>),
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TaskConfig {
    pub name: String,
    pub description: Option<String>,
    pub commands: Vec<Command>,
}

impl TaskConfig {
    pub fn to_task(&self) -> DevResult<Task> {
        let commands = self
            .commands
            .iter()
            .map(|command| match command {
                Command::Shell(line) => Ok(CommandSpec::shell(line.clone())),
                Command::Argv(argv) => CommandSpec::from_argv(argv).ok_or_else(|| {
                    DevError::Config(format!("Task '{}' has an empty command", self.name))
                }),
            })
            .collect::<DevResult<Vec<_>>>()?;

        Ok(Task {
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            commands,
            source: TaskSource::Config,
        })
    }
}

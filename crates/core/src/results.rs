//! Result types for task manager operations

use crate::execution::command::CommandSpec;
use crate::tasks::{Task, TaskSource};

/// Summary of an available task
#[derive(Debug, Clone)]
pub struct TaskInfo {
    pub name: String,
    pub description: String,
    pub source: TaskSource,
    pub command_count: usize,
}

/// The commands a task would run, in order
#[derive(Debug, Clone)]
pub struct TaskPlan {
    pub task_name: String,
    pub source: TaskSource,
    pub commands: Vec<CommandSpec>,
}

impl From<&Task> for TaskInfo {
    fn from(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            description: task.description.clone(),
            source: task.source,
            command_count: task.commands.len(),
        }
    }
}

impl From<&Task> for TaskPlan {
    fn from(task: &Task) -> Self {
        Self {
            task_name: task.name.clone(),
            source: task.source,
            commands: task.commands.clone(),
        }
    }
}

//! Built-in task catalogue
//!
//! The `dev` namespace tasks that install tooling and drive `buf`, plus the
//! [`TaskCatalog`] that merges them with tasks declared in `devtasks.yml`.

use crate::configs::tasks::TaskConfig;
use crate::execution::command::CommandSpec;
use crate::types::{DevError, DevResult};

/// Namespace prefix accepted in front of task names (`dev:buf-build`)
pub const NAMESPACE: &str = "dev";

/// Where a task was defined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSource {
    Builtin,
    Config,
}

impl TaskSource {
    pub fn label(&self) -> &'static str {
        match self {
            TaskSource::Builtin => "builtin",
            TaskSource::Config => "devtasks.yml",
        }
    }
}

/// A named, ordered group of external commands
#[derive(Debug, Clone)]
pub struct Task {
    pub name: String,
    pub description: String,
    pub commands: Vec<CommandSpec>,
    pub source: TaskSource,
}

impl Task {
    fn builtin(name: &str, description: &str, commands: Vec<CommandSpec>) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            commands,
            source: TaskSource::Builtin,
        }
    }
}

pub fn install_dependencies() -> Task {
    Task::builtin(
        "install-dependencies",
        "Install the development tools required by the project",
        vec![
            CommandSpec::new("brew", ["install", "pre-commit"]),
            CommandSpec::new("brew", ["install", "bufbuild/buf/buf"]),
            CommandSpec::new("pre-commit", ["install"]),
        ],
    )
}

pub fn buf_generate() -> Task {
    Task::builtin(
        "buf-generate",
        "Build the image and generate code according to buf.gen.yaml",
        vec![CommandSpec::new("buf", ["generate"])],
    )
}

pub fn buf_build() -> Task {
    Task::builtin(
        "buf-build",
        "Compile the protobuf files, checking that types and imports resolve",
        vec![CommandSpec::new("buf", ["build"])],
    )
}

pub fn builtin_tasks() -> Vec<Task> {
    vec![install_dependencies(), buf_generate(), buf_build()]
}

/// Strip the optional `dev:` namespace from a task name
pub fn normalize_task_name(name: &str) -> &str {
    name.strip_prefix(NAMESPACE)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(name)
}

/// Every task available in a workspace, built-ins first
#[derive(Debug, Clone)]
pub struct TaskCatalog {
    tasks: Vec<Task>,
}

impl TaskCatalog {
    /// Merge the built-in tasks with custom ones from configuration
    pub fn new(custom: &[TaskConfig]) -> DevResult<Self> {
        let mut tasks = builtin_tasks();

        for config in custom {
            if config.name.trim().is_empty() {
                return Err(DevError::Config("Task name must not be empty".to_string()));
            }
            // Lookups strip the namespace, so a prefixed name could never be reached
            if normalize_task_name(&config.name) != config.name {
                return Err(DevError::Config(format!(
                    "Task '{}' must not carry the '{}:' prefix",
                    config.name, NAMESPACE
                )));
            }
            if tasks.iter().any(|t| t.name == config.name) {
                let reason = if builtin_tasks().iter().any(|t| t.name == config.name) {
                    "shadows a built-in task"
                } else {
                    "is defined more than once"
                };
                return Err(DevError::Config(format!(
                    "Task '{}' {}",
                    config.name, reason
                )));
            }
            tasks.push(config.to_task()?);
        }

        Ok(Self { tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, name: &str) -> Option<&Task> {
        let name = normalize_task_name(name);
        self.tasks.iter().find(|t| t.name == name)
    }

    /// Like [`TaskCatalog::get`], but an unknown name is an error
    pub fn require(&self, name: &str) -> DevResult<&Task> {
        self.get(name)
            .ok_or_else(|| DevError::Task(format!("Task '{}' not found", name)))
    }
}

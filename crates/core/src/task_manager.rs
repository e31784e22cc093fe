//! High-level task management interface
//!
//! This module provides the [`TaskManager`], the primary interface used by the
//! CLI. It loads `devtasks.yml` from the workspace root, merges the custom tasks
//! it declares with the built-in ones, and runs tasks as subprocesses rooted in
//! the workspace.
//!
//! ## Example
//!
//! ```rust,no_run
//! use devtasks_core::task_manager::{TaskManager, TaskManagerConfig};
//! use std::path::PathBuf;
//!
//! # fn example() -> devtasks_core::types::DevResult<()> {
//! let manager = TaskManager::new(TaskManagerConfig {
//!     workspace_root: PathBuf::from("."),
//!     ..Default::default()
//! })?;
//!
//! // Show what a task would do
//! let plan = manager.get_task_plan("buf-build")?;
//!
//! // Run it
//! manager.buf_build()?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tracing::debug;

use crate::configs::workspace::{load_workspace_config, WorkspaceConfig};
use crate::execution::command::{CommandRunner, OutputMode, SystemCommandRunner};
use crate::execution::runner::TaskRunner;
use crate::results::{TaskInfo, TaskPlan};
use crate::tasks::TaskCatalog;
use crate::types::DevResult;

/// Configuration for initializing a task manager
#[derive(Debug, Clone)]
pub struct TaskManagerConfig {
    pub workspace_root: PathBuf,
    pub output: OutputMode,
}

impl Default for TaskManagerConfig {
    fn default() -> Self {
        Self {
            workspace_root: PathBuf::from("."),
            output: OutputMode::default(),
        }
    }
}

/// Loads the workspace configuration and runs tasks against it
pub struct TaskManager<R = SystemCommandRunner> {
    pub workspace_config: WorkspaceConfig,
    catalog: TaskCatalog,
    runner: TaskRunner<R>,
}

impl TaskManager<SystemCommandRunner> {
    /// Initialize a task manager that launches real subprocesses
    pub fn new(config: TaskManagerConfig) -> DevResult<Self> {
        let workspace_config = load_workspace_config(&config.workspace_root)?;

        let runner = SystemCommandRunner::new()
            .working_dir(&config.workspace_root)
            .envs(workspace_config.env.clone().unwrap_or_default())
            .output(config.output);

        Self::with_runner(workspace_config, runner)
    }
}

impl<R: CommandRunner> TaskManager<R> {
    /// Initialize a task manager over an already loaded configuration
    pub fn with_runner(workspace_config: WorkspaceConfig, runner: R) -> DevResult<Self> {
        let custom_tasks = workspace_config.tasks.clone().unwrap_or_default();
        let catalog = TaskCatalog::new(&custom_tasks)?;
        debug!(tasks = catalog.tasks().len(), "task catalog ready");

        Ok(Self {
            workspace_config,
            catalog,
            runner: TaskRunner::new(runner),
        })
    }

    /// List every available task
    pub fn list_tasks(&self) -> Vec<TaskInfo> {
        self.catalog.tasks().iter().map(TaskInfo::from).collect()
    }

    /// Describe the commands a task would run, without running them
    pub fn get_task_plan(&self, name: &str) -> DevResult<TaskPlan> {
        self.catalog.require(name).map(TaskPlan::from)
    }

    /// Run any task by name (built-in or from `devtasks.yml`)
    pub fn run_task(&self, name: &str) -> DevResult<()> {
        let task = self.catalog.require(name)?;
        self.runner.run_task(task)
    }

    pub fn install_dependencies(&self) -> DevResult<()> {
        self.runner.install_dependencies()
    }

    pub fn buf_generate(&self) -> DevResult<()> {
        self.runner.buf_generate()
    }

    pub fn buf_build(&self) -> DevResult<()> {
        self.runner.buf_build()
    }
}

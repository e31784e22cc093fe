//! devtasks Core Library
//!
//! Development task runner for protobuf projects. Tasks are ordered lists of
//! external commands (`brew`, `pre-commit`, `buf`) that run synchronously and
//! stop at the first failure.
//!
//! ## Architecture
//!
//! - [`task_manager`] - High-level interface used by the CLI
//! - [`execution`] - Command launching and the fail-fast task runner
//! - [`tasks`] - Built-in tasks and the task catalogue
//! - [`configs`] - Parsing of the optional `devtasks.yml`
//! - [`results`] - Result types for listing and planning
//! - [`types`] - Error types and type aliases
//!
//! ## Usage
//!
//! ```rust,no_run
//! use devtasks_core::execution::{SystemCommandRunner, TaskRunner};
//!
//! # fn example() -> devtasks_core::types::DevResult<()> {
//! let runner = TaskRunner::new(SystemCommandRunner::new());
//! runner.buf_generate()?;
//! # Ok(())
//! # }
//! ```

pub mod configs;
pub mod execution;
pub mod results;
pub mod task_manager;
pub mod tasks;
pub mod types;

// Re-export the main types for easier usage
pub use task_manager::{TaskManager, TaskManagerConfig};
pub use types::{CommandFailure, DevError, DevResult};

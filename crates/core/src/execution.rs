//! Task execution module
//!
//! This module handles the actual execution of tasks: launching external
//! commands and running a task's commands in order.

pub mod command;
pub mod runner;

pub use command::{CommandRunner, CommandSpec, OutputMode, SystemCommandRunner};
pub use runner::TaskRunner;

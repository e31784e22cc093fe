use thiserror::Error;

use crate::execution::command::CommandSpec;

/// Why a single external command did not complete successfully
#[derive(Debug, Error)]
pub enum CommandFailure {
    /// The process could not be started (not found, permission denied, ...)
    #[error("{0}")]
    Launch(#[from] std::io::Error),

    /// The process ran but did not exit cleanly. `code` is `None` when it was
    /// terminated by a signal.
    #[error("{}", describe_exit(.code))]
    Exit { code: Option<i32> },
}

impl CommandFailure {
    pub fn is_launch(&self) -> bool {
        matches!(self, CommandFailure::Launch(_))
    }

    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CommandFailure::Exit { code } => *code,
            CommandFailure::Launch(_) => None,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status: {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// The main error type for devtasks operations
#[derive(Debug, Error)]
pub enum DevError {
    #[error("failed to run {command}: {source}")]
    Command {
        command: CommandSpec,
        #[source]
        source: CommandFailure,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Task error: {0}")]
    Task(String),
}

/// Result type alias for devtasks operations
pub type DevResult<T> = Result<T, DevError>;

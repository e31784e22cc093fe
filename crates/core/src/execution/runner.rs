//! High-level task runner
//!
//! Runs the commands of a [`Task`] one after another and stops at the first
//! failure, wrapping it with the command that caused it.

use colored::*;
use tracing::{debug, info};

use crate::execution::command::CommandRunner;
use crate::tasks::{self, Task};
use crate::types::{DevError, DevResult};

/// Sequential, fail-fast task runner over a [`CommandRunner`]
pub struct TaskRunner<R> {
    runner: R,
}

impl<R: CommandRunner> TaskRunner<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Install the development tools required by the project
    pub fn install_dependencies(&self) -> DevResult<()> {
        self.run_task(&tasks::install_dependencies())
    }

    /// Generate code according to `buf.gen.yaml`
    pub fn buf_generate(&self) -> DevResult<()> {
        self.run_task(&tasks::buf_generate())
    }

    /// Build the protobuf definitions, checking that they resolve
    pub fn buf_build(&self) -> DevResult<()> {
        self.run_task(&tasks::buf_build())
    }

    /// Run every command of `task` in order
    pub fn run_task(&self, task: &Task) -> DevResult<()> {
        debug!(task = %task.name, commands = task.commands.len(), "starting task");

        for command in &task.commands {
            println!("{} {}", "Running:".bright_black(), command.to_string().bold());

            self.runner
                .run(command)
                .map_err(|source| DevError::Command {
                    command: command.clone(),
                    source,
                })?;
        }

        info!(task = %task.name, "task finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::execution::command::{CommandSpec, OutputMode, SystemCommandRunner};
    use crate::tasks::TaskSource;
    use crate::types::CommandFailure;

    /// Records every command it is asked to run and fails on a chosen one
    #[derive(Default)]
    struct RecordingRunner {
        executed: RefCell<Vec<String>>,
        fail_on: Option<(String, CommandFailure)>,
    }

    impl RecordingRunner {
        fn failing_on(command: &str, failure: CommandFailure) -> Self {
            Self {
                executed: RefCell::new(Vec::new()),
                fail_on: Some((command.to_string(), failure)),
            }
        }

        fn executed(&self) -> Vec<String> {
            self.executed.borrow().clone()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, spec: &CommandSpec) -> Result<(), CommandFailure> {
            let line = spec.to_string();
            self.executed.borrow_mut().push(line.clone());

            match &self.fail_on {
                Some((target, CommandFailure::Exit { code })) if *target == line => {
                    Err(CommandFailure::Exit { code: *code })
                }
                Some((target, CommandFailure::Launch(io))) if *target == line => Err(
                    CommandFailure::Launch(std::io::Error::new(io.kind(), io.to_string())),
                ),
                _ => Ok(()),
            }
        }
    }

    #[test]
    fn test_install_dependencies_runs_all_commands_in_order() {
        let recorder = RecordingRunner::default();
        let runner = TaskRunner::new(&recorder);

        runner.install_dependencies().unwrap();

        assert_eq!(
            recorder.executed(),
            vec![
                "brew install pre-commit",
                "brew install bufbuild/buf/buf",
                "pre-commit install",
            ]
        );
    }

    #[test]
    fn test_install_dependencies_stops_after_failing_command() {
        let recorder = RecordingRunner::failing_on(
            "brew install bufbuild/buf/buf",
            CommandFailure::Exit { code: Some(1) },
        );
        let runner = TaskRunner::new(&recorder);

        let err = runner.install_dependencies().unwrap_err();

        assert_eq!(
            recorder.executed(),
            vec!["brew install pre-commit", "brew install bufbuild/buf/buf"],
            "commands after the failing one must not run"
        );
        assert!(err.to_string().contains("brew install bufbuild/buf/buf"));
    }

    #[test]
    fn test_pre_commit_install_failure_is_reported() {
        let recorder = RecordingRunner::failing_on(
            "pre-commit install",
            CommandFailure::Exit { code: Some(1) },
        );
        let runner = TaskRunner::new(&recorder);

        let err = runner.install_dependencies().unwrap_err();

        assert_eq!(recorder.executed().last().unwrap(), "pre-commit install");
        assert_eq!(recorder.executed().len(), 3);
        match err {
            DevError::Command { command, source } => {
                assert_eq!(command, CommandSpec::new("pre-commit", ["install"]));
                assert_eq!(source.exit_code(), Some(1));
            }
            other => panic!("expected command error, got {:?}", other),
        }
    }

    #[test]
    fn test_first_failure_skips_everything_else() {
        let recorder = RecordingRunner::failing_on(
            "brew install pre-commit",
            CommandFailure::Launch(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "brew not found",
            )),
        );
        let runner = TaskRunner::new(&recorder);

        let err = runner.install_dependencies().unwrap_err();

        assert_eq!(recorder.executed(), vec!["brew install pre-commit"]);
        assert!(err.to_string().starts_with("failed to run brew install pre-commit"));
    }

    #[test]
    fn test_buf_tasks_run_single_command() {
        let recorder = RecordingRunner::default();
        let runner = TaskRunner::new(&recorder);

        runner.buf_generate().unwrap();
        runner.buf_build().unwrap();

        assert_eq!(recorder.executed(), vec!["buf generate", "buf build"]);
    }

    #[test]
    fn test_buf_generate_failure_is_wrapped() {
        let recorder =
            RecordingRunner::failing_on("buf generate", CommandFailure::Exit { code: Some(100) });
        let runner = TaskRunner::new(&recorder);

        let err = runner.buf_generate().unwrap_err();
        assert_eq!(err.to_string(), "failed to run buf generate: exit status: 100");
    }

    #[test]
    fn test_empty_task_succeeds() {
        let recorder = RecordingRunner::default();
        let runner = TaskRunner::new(&recorder);
        let task = Task {
            name: "noop".to_string(),
            description: String::new(),
            commands: Vec::new(),
            source: TaskSource::Config,
        };

        assert!(runner.run_task(&task).is_ok());
        assert!(recorder.executed().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_buf_build_without_buf_on_path_is_a_launch_failure() {
        let empty_path = tempfile::tempdir().unwrap();
        let runner = TaskRunner::new(
            SystemCommandRunner::new()
                .envs([("PATH", empty_path.path().display().to_string())])
                .output(OutputMode::Quiet),
        );

        let err = runner.buf_build().unwrap_err();
        match err {
            DevError::Command { command, source } => {
                assert_eq!(command.to_string(), "buf build");
                assert!(source.is_launch(), "expected launch failure, got {:?}", source);
            }
            other => panic!("expected command error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_real_processes_stop_at_first_failure() {
        let temp_dir = tempfile::tempdir().unwrap();
        let runner = TaskRunner::new(
            SystemCommandRunner::new()
                .working_dir(temp_dir.path())
                .output(OutputMode::Quiet),
        );
        let task = Task {
            name: "sequence".to_string(),
            description: String::new(),
            commands: vec![
                CommandSpec::shell("touch first"),
                CommandSpec::shell("exit 1"),
                CommandSpec::shell("touch third"),
            ],
            source: TaskSource::Config,
        };

        let err = runner.run_task(&task).unwrap_err();

        assert!(err.to_string().contains("sh -c exit 1"));
        assert!(temp_dir.path().join("first").exists());
        assert!(!temp_dir.path().join("third").exists());
    }
}

//! Command execution utilities
//!
//! This module defines the [`CommandSpec`] value executed by tasks and the
//! [`CommandRunner`] seam that actually launches processes, with a
//! [`SystemCommandRunner`] implementation built on `std::process::Command`.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::types::CommandFailure;

/// An executable name plus its ordered argument list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a spec from an argv-style list. Returns `None` for an empty list.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.iter().cloned()))
    }

    /// A shell command line, run through `sh -c`
    pub fn shell(cmd: impl Into<String>) -> Self {
        Self::new("sh", ["-c".to_string(), cmd.into()])
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Launches a single command and waits for it to finish
pub trait CommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<(), CommandFailure>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, spec: &CommandSpec) -> Result<(), CommandFailure> {
        (**self).run(spec)
    }
}

/// Where the child's stdout/stderr go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Share the terminal with the child
    #[default]
    Inherit,
    /// Discard child output
    Quiet,
}

/// Runs commands as real subprocesses, resolved through the search path
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner {
    working_dir: Option<PathBuf>,
    env: BTreeMap<String, String>,
    output: OutputMode,
}

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    fn build(&self, spec: &CommandSpec) -> Command {
        let mut command = Command::new(spec.program());
        command.args(spec.args());

        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        command.envs(&self.env);

        if self.output == OutputMode::Quiet {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        }
        command
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<(), CommandFailure> {
        debug!(command = %spec, cwd = ?self.working_dir, "spawning");

        let status = self.build(spec).status()?;
        debug!(command = %spec, %status, "process exited");

        if !status.success() {
            return Err(CommandFailure::Exit {
                code: status.code(),
            });
        }
        Ok(())
    }
}

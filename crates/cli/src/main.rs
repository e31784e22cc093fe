use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use devtasks_core::execution::OutputMode;
use devtasks_core::task_manager::{TaskManager, TaskManagerConfig};
use tracing_subscriber::EnvFilter;

mod commands;

/// devtasks - development tasks for protobuf projects
#[derive(Parser)]
#[command(name = "devtasks")]
#[command(about = "Install development tools and drive buf code generation")]
#[command(version)]
struct Cli {
    /// Path to the workspace root (defaults to current directory)
    #[arg(short, long, global = true, default_value = ".")]
    workspace: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Discard the output of the commands a task runs
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the development tools required by the project
    InstallDependencies,
    /// Build the image and generate code according to buf.gen.yaml
    BufGenerate,
    /// Compile the protobuf files, checking that types and imports resolve
    BufBuild,
    /// Run a task by name
    Run {
        /// Task name, optionally prefixed with "dev:"
        task: String,
    },
    /// List available tasks
    List,
    /// Show the commands a task would run without running them
    Plan {
        /// Task name, optionally prefixed with "dev:"
        task: String,
    },
    /// Print the JSON schema of devtasks.yml
    Schema,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let workspace_root = cli.workspace;
    let output = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Inherit
    };
    // `schema` runs without loading a workspace
    let load_manager = || {
        TaskManager::new(TaskManagerConfig {
            workspace_root: workspace_root.clone(),
            output,
        })
        .map_err(|e| anyhow::anyhow!("Failed to initialize workspace: {}", e))
    };

    // Execute command (CLI layer only handles presentation)
    match cli.command {
        Commands::InstallDependencies => {
            let manager = load_manager()?;
            commands::run::execute_with("install-dependencies", || {
                manager.install_dependencies()
            })
        }
        Commands::BufGenerate => {
            let manager = load_manager()?;
            commands::run::execute_with("buf-generate", || manager.buf_generate())
        }
        Commands::BufBuild => {
            let manager = load_manager()?;
            commands::run::execute_with("buf-build", || manager.buf_build())
        }
        Commands::Run { task } => commands::run::execute(&load_manager()?, &task),
        Commands::List => commands::list::execute(&load_manager()?),
        Commands::Plan { task } => commands::plan::execute(&load_manager()?, &task),
        Commands::Schema => commands::schema::execute(),
    }
}

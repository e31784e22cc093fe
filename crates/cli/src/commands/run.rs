use anyhow::Result;
use colored::*;
use devtasks_core::task_manager::TaskManager;
use devtasks_core::types::DevResult;

pub fn execute(manager: &TaskManager, task: &str) -> Result<()> {
    execute_with(task, || manager.run_task(task))
}

/// Print the task header, run `run_task`, and report the outcome
pub fn execute_with<F>(task: &str, run_task: F) -> Result<()>
where
    F: FnOnce() -> DevResult<()>,
{
    println!("{} {}", "Running task".bold(), task.cyan());
    println!();

    run_task().map_err(|e| anyhow::anyhow!("Task '{}' failed: {}", task, e))?;

    println!();
    println!(
        "{} {}",
        "✓".green().bold(),
        format!("Task '{}' completed successfully!", task).green().bold()
    );

    Ok(())
}

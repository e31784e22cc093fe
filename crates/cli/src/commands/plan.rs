use anyhow::Result;
use colored::*;
use devtasks_core::task_manager::TaskManager;

pub fn execute(manager: &TaskManager, task: &str) -> Result<()> {
    let plan = manager
        .get_task_plan(task)
        .map_err(|e| anyhow::anyhow!("Failed to get task plan: {}", e))?;

    println!(
        "{} {} {}",
        "Execution plan for".bold(),
        plan.task_name.cyan(),
        format!("({})", plan.source.label()).dimmed()
    );

    println!("\n{}:", "Commands".bold());
    for (i, command) in plan.commands.iter().enumerate() {
        println!("  {}. {}", i + 1, command);
    }

    if plan.commands.is_empty() {
        println!("  {}", "Nothing to run".dimmed());
    }

    Ok(())
}

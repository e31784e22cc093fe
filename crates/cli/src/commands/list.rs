use anyhow::Result;
use colored::*;
use devtasks_core::results::TaskInfo;
use devtasks_core::task_manager::TaskManager;
use devtasks_core::tasks::{TaskSource, NAMESPACE};

pub fn execute(manager: &TaskManager) -> Result<()> {
    let tasks = manager.list_tasks();
    let config = &manager.workspace_config;

    let heading = match &config.name {
        Some(name) => format!("Tasks ({})", name),
        None => "Tasks".to_string(),
    };
    println!("{}", heading.bold().underline());
    if let Some(description) = &config.description {
        println!("{}", description.dimmed());
    }

    let width = tasks.iter().map(|t| t.name.len()).max().unwrap_or(0);
    for task in &tasks {
        let name = format!("{:width$}", task.name, width = width);
        let name = match task.source {
            TaskSource::Builtin => name.blue().bold(),
            TaskSource::Config => name.cyan(),
        };
        println!(
            "  {}  {} {}",
            name,
            task.description,
            format!("[{}]", task_details(task)).dimmed()
        );
    }

    println!();
    println!(
        "{}",
        format!("Tasks may also be addressed as {}:<task>", NAMESPACE).dimmed()
    );

    Ok(())
}

/// Source and command count shown next to each task
fn task_details(task: &TaskInfo) -> String {
    let noun = if task.command_count == 1 {
        "command"
    } else {
        "commands"
    };
    format!(
        "{}, {} {}",
        task.source.label(),
        task.command_count,
        noun
    )
}

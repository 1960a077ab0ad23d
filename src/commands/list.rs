use super::failure;
use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::libs::task::{Task, TaskFilter, TaskStatus};
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show tasks with this status (done or not_done)
    #[arg(short, long)]
    status: Option<TaskStatus>,
    /// Print the tasks as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(service: &TaskService, args: ListArgs) -> Result<()> {
    let filter = match args.status {
        Some(status) => TaskFilter::ByStatus(status),
        None => TaskFilter::All,
    };
    let tasks = service.list(filter).map_err(failure)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    show_tasks(filter, &tasks);
    Ok(())
}

pub(crate) fn show_tasks(filter: TaskFilter, tasks: &[Task]) {
    if tasks.is_empty() {
        match filter {
            TaskFilter::All => msg_info!(Message::NoTasksFound),
            TaskFilter::ByStatus(status) => msg_info!(Message::NoTasksWithStatus(status.to_string())),
        }
        return;
    }

    match filter {
        TaskFilter::All => msg_print!(Message::TasksHeader, true),
        TaskFilter::ByStatus(status) => msg_print!(Message::TasksWithStatusHeader(status.to_string()), true),
    }
    View::tasks(tasks);
}

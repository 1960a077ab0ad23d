use super::{failure, list, prompts};
use crate::libs::messages::Message;
use crate::libs::service::{StatusChange, TaskService};
use crate::libs::task::{TaskFilter, TaskStatus};
use crate::{msg_error_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Task ID
    id: i64,
    /// New status: done or not_done; chosen from a list if omitted
    status: Option<String>,
}

pub fn cmd(service: &TaskService, args: StatusArgs) -> Result<()> {
    let status = match args.status {
        Some(status) => status,
        None => {
            let current = current_status(service, args.id)?;
            prompts::status(Message::PromptNewStatus, toggled(current))?.to_string()
        }
    };

    let change = service.change_status(args.id, &status).map_err(failure)?;
    report(service, args.id, change)
}

pub(crate) fn report(service: &TaskService, id: i64, change: StatusChange) -> Result<()> {
    match change {
        StatusChange::Updated => {
            let status = service.get(id).map_err(failure)?.map(|t| t.status).unwrap_or_default();
            msg_success!(Message::TaskStatusUpdated(id, status.to_string()));
            let tasks = service.list(TaskFilter::All).map_err(failure)?;
            list::show_tasks(TaskFilter::All, &tasks);
            Ok(())
        }
        StatusChange::NotFound => Err(msg_error_anyhow!(Message::TaskNotFoundWithId(id))),
    }
}

/// Status of task `id`; an unknown id fails before anything is prompted.
pub fn current_status(service: &TaskService, id: i64) -> Result<TaskStatus> {
    service
        .get(id)
        .map_err(failure)?
        .map(|task| task.status)
        .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFoundWithId(id)))
}

/// The status a user most likely wants next.
pub fn toggled(status: TaskStatus) -> TaskStatus {
    match status {
        TaskStatus::NotDone => TaskStatus::Done,
        TaskStatus::Done => TaskStatus::NotDone,
    }
}

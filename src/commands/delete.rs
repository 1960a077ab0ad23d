use super::{failure, list, prompts};
use crate::libs::messages::Message;
use crate::libs::service::{DeleteOutcome, TaskService};
use crate::libs::task::{TaskFilter, TaskStatus};
use crate::{msg_error_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(service: &TaskService, args: DeleteArgs) -> Result<()> {
    delete(service, args.id, args.yes)
}

pub(crate) fn delete(service: &TaskService, id: i64, skip_confirmation: bool) -> Result<()> {
    let task = service
        .get(id)
        .map_err(failure)?
        .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFoundWithId(id)))?;

    if task.status == TaskStatus::Done {
        return Err(msg_error_anyhow!(Message::TaskDeleteRefusedDone(id)));
    }

    if !skip_confirmation && !prompts::confirm(Message::ConfirmDeleteTask(id, task.name))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    match service.delete(id).map_err(failure)? {
        DeleteOutcome::Deleted => {
            msg_success!(Message::TaskDeleted(id));
            let tasks = service.list(TaskFilter::All).map_err(failure)?;
            list::show_tasks(TaskFilter::All, &tasks);
            Ok(())
        }
        DeleteOutcome::Completed => Err(msg_error_anyhow!(Message::TaskDeleteRefusedDone(id))),
        DeleteOutcome::NotFound => Err(msg_error_anyhow!(Message::TaskNotFoundWithId(id))),
    }
}

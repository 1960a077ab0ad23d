use super::failure;
use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task ID
    id: i64,
}

pub fn cmd(service: &TaskService, args: ShowArgs) -> Result<()> {
    let task = service
        .get(args.id)
        .map_err(failure)?
        .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFoundWithId(args.id)))?;

    msg_print!(Message::TaskDetailsHeader(task.id), true);
    View::task(&task);
    Ok(())
}

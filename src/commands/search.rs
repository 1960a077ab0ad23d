use super::{failure, list, prompts};
use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text the task name must contain (case-insensitive); prompted if omitted
    term: Option<String>,
}

pub fn cmd(service: &TaskService, args: SearchArgs) -> Result<()> {
    let term = match args.term {
        Some(term) => term,
        None => prompts::optional_text(Message::PromptSearchTerm)?,
    };
    search(service, &term)
}

/// A blank term shows every task.
pub(crate) fn search(service: &TaskService, term: &str) -> Result<()> {
    let tasks = service.search(term).map_err(failure)?;
    let term = term.trim();

    if term.is_empty() {
        list::show_tasks(TaskFilter::All, &tasks);
        return Ok(());
    }

    if tasks.is_empty() {
        msg_info!(Message::NoTasksMatchingName(term.to_string()));
        return Ok(());
    }

    msg_print!(Message::SearchResults(term.to_string()), true);
    View::tasks(&tasks);
    Ok(())
}

//! Interactive mode: a menu loop over the same operations as the subcommands.
//!
//! Failures of a single action are reported and the loop continues; only
//! leaving the menu (Quit, Esc or `q`) ends it.

use super::{add, delete, failure, list, prompts, search, status};
use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::libs::task::TaskFilter;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Register,
    ListAll,
    FilterByStatus,
    Search,
    ChangeStatus,
    Delete,
    Quit,
}

impl Action {
    const ALL: [Action; 7] = [
        Action::Register,
        Action::ListAll,
        Action::FilterByStatus,
        Action::Search,
        Action::ChangeStatus,
        Action::Delete,
        Action::Quit,
    ];

    fn label(&self) -> Message {
        match self {
            Action::Register => Message::MenuRegister,
            Action::ListAll => Message::MenuListAll,
            Action::FilterByStatus => Message::MenuFilterByStatus,
            Action::Search => Message::MenuSearch,
            Action::ChangeStatus => Message::MenuChangeStatus,
            Action::Delete => Message::MenuDelete,
            Action::Quit => Message::MenuQuit,
        }
    }
}

pub fn cmd(service: &TaskService) -> Result<()> {
    list::show_tasks(TaskFilter::All, &service.list(TaskFilter::All).map_err(failure)?);

    let labels: Vec<String> = Action::ALL.iter().map(|a| a.label().to_string()).collect();
    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectAction.to_string())
            .items(&labels)
            .default(0)
            .interact_opt()?;

        let action = match selection {
            Some(index) => Action::ALL[index],
            None => Action::Quit,
        };
        if action == Action::Quit {
            return Ok(());
        }

        if let Err(e) = run(service, action) {
            msg_print!(e);
        }
    }
}

fn run(service: &TaskService, action: Action) -> Result<()> {
    match action {
        Action::Register => {
            let request = prompts::registration()?;
            add::register(service, &request)?;
        }
        Action::ListAll => {
            list::show_tasks(TaskFilter::All, &service.list(TaskFilter::All).map_err(failure)?);
        }
        Action::FilterByStatus => {
            let filter = prompts::status_filter()?;
            list::show_tasks(filter, &service.list(filter).map_err(failure)?);
        }
        Action::Search => {
            let term = prompts::optional_text(Message::PromptSearchTerm)?;
            search::search(service, &term)?;
        }
        Action::ChangeStatus => {
            if let Some(id) = prompts::select_task(service)? {
                let current = status::current_status(service, id)?;
                let new_status = prompts::status(Message::PromptNewStatus, status::toggled(current))?;
                let change = service.set_status(id, new_status).map_err(failure)?;
                status::report(service, id, change)?;
            }
        }
        Action::Delete => {
            if let Some(id) = prompts::select_task(service)? {
                delete::delete(service, id, false)?;
            }
        }
        Action::Quit => {}
    }
    Ok(())
}

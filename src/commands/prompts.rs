//! Interactive prompts shared by the subcommands and the menu.

use crate::libs::dates::parse_human_date;
use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::libs::task::{TaskFilter, TaskStatus};
use crate::libs::validation::RegistrationRequest;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// Required free-text field.
pub fn text(prompt: Message) -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .interact_text()?)
}

pub fn optional_text(prompt: Message) -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .allow_empty(true)
        .interact_text()?)
}

/// Date field; asks again until the text parses as `DD/MM/YYYY HH:MM`.
pub fn date(prompt: Message) -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            parse_human_date(input)
                .map(|_| ())
                .map_err(|e| Message::InvalidDate(e.to_string()).to_string())
        })
        .interact_text()?)
}

pub fn status(prompt: Message, current: TaskStatus) -> Result<TaskStatus> {
    let labels: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.as_str()).collect();
    let default = TaskStatus::ALL.iter().position(|s| *s == current).unwrap_or(0);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(TaskStatus::ALL[selection])
}

pub fn status_filter() -> Result<TaskFilter> {
    let mut labels = vec![Message::FilterAll.to_string()];
    labels.extend(TaskStatus::ALL.iter().map(|s| s.to_string()));
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectStatusFilter.to_string())
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => TaskFilter::All,
        n => TaskFilter::ByStatus(TaskStatus::ALL[n - 1]),
    })
}

/// Lets the user pick a task from the full list. `None` if there are no tasks.
pub fn select_task(service: &TaskService) -> Result<Option<i64>> {
    let tasks = service.list(TaskFilter::All)?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(None);
    }

    let labels: Vec<String> = tasks.iter().map(View::task_label).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTask.to_string())
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|index| tasks[index].id))
}

pub fn confirm(prompt: Message) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}

/// Collects every registration field, in form order.
pub fn registration() -> Result<RegistrationRequest> {
    msg_print!(Message::MenuRegister, true);
    Ok(RegistrationRequest {
        name: text(Message::PromptTaskName)?,
        task_type: text(Message::PromptTaskType)?,
        start: date(Message::PromptTaskStart)?,
        end: date(Message::PromptTaskEnd)?,
        description: optional_text(Message::PromptTaskDescription)?,
        status: status(Message::PromptTaskStatus, TaskStatus::default())?.to_string(),
    })
}

use super::{failure, list, prompts};
use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::libs::task::{Task, TaskFilter};
use crate::libs::validation::RegistrationRequest;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

/// Fields left out on the command line are prompted for.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task name
    #[arg(short, long)]
    name: Option<String>,
    /// Task type, a free-form category such as "work"
    #[arg(short = 't', long = "type")]
    task_type: Option<String>,
    /// Start, as DD/MM/YYYY HH:MM
    #[arg(short, long)]
    start: Option<String>,
    /// End, as DD/MM/YYYY HH:MM; not earlier than the start
    #[arg(short, long)]
    end: Option<String>,
    /// Optional description
    #[arg(short, long)]
    description: Option<String>,
    /// Initial status: not_done or done
    #[arg(long, default_value = "not_done")]
    status: String,
}

pub fn cmd(service: &TaskService, args: AddArgs) -> Result<()> {
    let request = RegistrationRequest {
        name: provided_or(args.name, || prompts::text(Message::PromptTaskName))?,
        task_type: provided_or(args.task_type, || prompts::text(Message::PromptTaskType))?,
        start: provided_or(args.start, || prompts::date(Message::PromptTaskStart))?,
        end: provided_or(args.end, || prompts::date(Message::PromptTaskEnd))?,
        description: args.description.unwrap_or_default(),
        status: args.status,
    };

    register(service, &request)?;
    Ok(())
}

/// Stores the task and redisplays the full list.
pub(crate) fn register(service: &TaskService, request: &RegistrationRequest) -> Result<Task> {
    let task = service.register(request).map_err(failure)?;
    msg_success!(Message::TaskRegistered(task.id));

    let tasks = service.list(TaskFilter::All).map_err(failure)?;
    list::show_tasks(TaskFilter::All, &tasks);
    Ok(task)
}

fn provided_or(value: Option<String>, prompt: impl FnOnce() -> Result<String>) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => prompt(),
    }
}

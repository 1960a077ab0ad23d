pub mod add;
pub mod delete;
pub mod init;
pub mod list;
pub mod menu;
pub mod prompts;
pub mod search;
pub mod show;
pub mod status;

use crate::db::tasks::Tasks;
use crate::libs::error::AgendaError;
use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure where tasks are stored")]
    Init(init::InitArgs),
    #[command(about = "Register a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks, optionally only those with a given status")]
    List(list::ListArgs),
    #[command(about = "Search tasks by name")]
    Search(search::SearchArgs),
    #[command(about = "Show one task")]
    Show(show::ShowArgs),
    #[command(about = "Change the status of a task")]
    Status(status::StatusArgs),
    #[command(about = "Delete a task that is not done yet")]
    Delete(delete::DeleteArgs),
}

/// Without a subcommand, agenda opens the interactive menu.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Init(args)) => init::cmd(args),
            Some(Commands::Add(args)) => add::cmd(&service()?, args),
            Some(Commands::List(args)) => list::cmd(&service()?, args),
            Some(Commands::Search(args)) => search::cmd(&service()?, args),
            Some(Commands::Show(args)) => show::cmd(&service()?, args),
            Some(Commands::Status(args)) => status::cmd(&service()?, args),
            Some(Commands::Delete(args)) => delete::cmd(&service()?, args),
            None => menu::cmd(&service()?),
        }
    }
}

fn service() -> Result<TaskService> {
    Ok(TaskService::new(Tasks::new()?))
}

/// Turns a service error into the message shown on exit.
pub(crate) fn failure(err: AgendaError) -> anyhow::Error {
    match err {
        AgendaError::Validation(e) => msg_error_anyhow!(Message::ValidationFailed(e.to_string())),
        AgendaError::Store(e) => msg_error_anyhow!(Message::StorageFailed(e.to_string())),
    }
}

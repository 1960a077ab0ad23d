//! Text for every [`Message`] variant.
//!
//! All user-facing wording is defined here so commands never format
//! messages inline.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskRegistered(id) => format!("Task #{} registered", id),
            Message::TaskStatusUpdated(id, status) => format!("Task #{} is now '{}'", id, status),
            Message::TaskDeleted(id) => format!("Task #{} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskDeleteRefusedDone(id) => {
                format!("Task #{} is 'done' and cannot be deleted. Set it back to 'not_done' first.", id)
            }
            Message::TasksHeader => "Tasks:".to_string(),
            Message::TasksWithStatusHeader(status) => format!("Tasks with status '{}':", status),
            Message::NoTasksFound => "No tasks registered yet.".to_string(),
            Message::NoTasksWithStatus(status) => format!("No tasks with status '{}'.", status),
            Message::NoTasksMatchingName(term) => format!("No task name contains '{}'.", term),
            Message::SearchResults(term) => format!("Tasks whose name contains '{}':", term),
            Message::ConfirmDeleteTask(id, name) => format!("Delete task #{} '{}'?", id, name),
            Message::TaskDetailsHeader(id) => format!("Task #{}", id),

            // === PROMPTS ===
            Message::PromptTaskName => "Name".to_string(),
            Message::PromptTaskType => "Type".to_string(),
            Message::PromptTaskStart => "Start (DD/MM/YYYY HH:MM)".to_string(),
            Message::PromptTaskEnd => "End (DD/MM/YYYY HH:MM)".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskStatus => "Status".to_string(),
            Message::PromptNewStatus => "New status".to_string(),
            Message::PromptSearchTerm => "Name contains".to_string(),
            Message::PromptDbPath => "Database file".to_string(),
            Message::SelectTask => "Select a task".to_string(),
            Message::SelectStatusFilter => "Show tasks with status".to_string(),
            Message::SelectAction => "What do you want to do?".to_string(),

            // === MENU ENTRIES ===
            Message::MenuRegister => "Register task".to_string(),
            Message::MenuListAll => "List all tasks".to_string(),
            Message::MenuFilterByStatus => "Filter by status".to_string(),
            Message::MenuSearch => "Search by name".to_string(),
            Message::MenuChangeStatus => "Change status".to_string(),
            Message::MenuDelete => "Delete task (only 'not_done')".to_string(),
            Message::MenuQuit => "Quit".to_string(),
            Message::FilterAll => "all".to_string(),

            // === VALIDATION / ERRORS ===
            Message::ValidationFailed(reason) => format!("Cannot save task: {}", reason),
            Message::InvalidDate(reason) => reason.clone(),
            Message::StorageFailed(error) => format!("Database operation failed: {}", error),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::DatabaseLocation(path) => format!("Tasks are stored in {}", path),

            // === MIGRATION MESSAGES ===
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
        };
        write!(f, "{}", text)
    }
}

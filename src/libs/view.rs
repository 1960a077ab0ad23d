//! Terminal rendering of tasks with `prettytable`.
//!
//! Dates are shown in the human `DD/MM/YYYY HH:MM` form through
//! [`crate::libs::dates::Timestamp`]'s `Display`.

use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DESCRIPTION", "START", "END", "TYPE", "STATUS"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.name,
                task.description,
                task.start,
                task.end,
                task.task_type,
                task.status
            ]);
        }
        table.printstd();
    }

    pub fn task(task: &Task) {
        let mut table = Table::new();

        table.add_row(row!["Name", task.name]);
        table.add_row(row!["Description", task.description]);
        table.add_row(row!["Start", task.start]);
        table.add_row(row!["End", task.end]);
        table.add_row(row!["Type", task.task_type]);
        table.add_row(row!["Status", task.status]);
        table.printstd();
    }

    /// One-line label used in selection lists.
    pub fn task_label(task: &Task) -> String {
        format!("#{} {} [{}] {} - {} ({})", task.id, task.name, task.task_type, task.start, task.end, task.status)
    }
}

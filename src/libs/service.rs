//! Task operations as the command layer sees them.
//!
//! [`TaskService`] takes raw user input, runs it through
//! [`crate::libs::validation`] and drives [`Tasks`]. Negative outcomes that
//! are part of normal use (unknown id, completed task) are returned as
//! [`StatusChange`] / [`DeleteOutcome`] values rather than errors.

use super::error::AgendaError;
use super::task::{Task, TaskFilter, TaskStatus};
use super::validation::{validate_registration, RegistrationRequest};
use crate::db::tasks::Tasks;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    Updated,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    /// The task is `done` and therefore protected.
    Completed,
}

pub struct TaskService {
    store: Tasks,
}

impl TaskService {
    pub fn new(store: Tasks) -> Self {
        Self { store }
    }

    /// Validates `request` (stopping at the first problem), stores it and
    /// returns the stored task.
    pub fn register(&self, request: &RegistrationRequest) -> Result<Task, AgendaError> {
        let new_task = validate_registration(request)?;
        let id = self.store.insert(&new_task)?;
        debug!(id, "task registered");

        Ok(Task {
            id,
            name: new_task.name,
            description: new_task.description,
            start: new_task.start,
            end: new_task.end,
            task_type: new_task.task_type,
            status: new_task.status,
        })
    }

    pub fn get(&self, id: i64) -> Result<Option<Task>, AgendaError> {
        Ok(self.store.get(id)?)
    }

    pub fn list(&self, filter: TaskFilter) -> Result<Vec<Task>, AgendaError> {
        Ok(self.store.fetch(filter)?)
    }

    /// Tasks whose name contains `term`; a blank term lists everything.
    pub fn search(&self, term: &str) -> Result<Vec<Task>, AgendaError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(self.store.list_all()?);
        }
        Ok(self.store.search_by_name(term)?)
    }

    /// Parses `status` (`done` / `not_done`, any case) and applies it to task `id`.
    pub fn change_status(&self, id: i64, status: &str) -> Result<StatusChange, AgendaError> {
        let status: TaskStatus = status.parse()?;
        self.set_status(id, status)
    }

    pub fn set_status(&self, id: i64, status: TaskStatus) -> Result<StatusChange, AgendaError> {
        if self.store.set_status(id, status)? {
            Ok(StatusChange::Updated)
        } else {
            Ok(StatusChange::NotFound)
        }
    }

    /// Deletes task `id` if it is still `not_done`.
    ///
    /// The guard is evaluated by the store in the delete itself; the task is
    /// only looked up afterwards to explain a refusal.
    pub fn delete(&self, id: i64) -> Result<DeleteOutcome, AgendaError> {
        if self.store.delete_if_not_done(id)? {
            return Ok(DeleteOutcome::Deleted);
        }

        match self.store.get(id)? {
            Some(_) => Ok(DeleteOutcome::Completed),
            None => Ok(DeleteOutcome::NotFound),
        }
    }
}

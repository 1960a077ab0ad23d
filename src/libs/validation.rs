//! Checks applied to raw user input before anything reaches the database.
//!
//! A [`RegistrationRequest`] carries the six form fields exactly as typed.
//! [`validate_registration`] trims them, checks them in a fixed order and
//! returns the first failure, or a [`NewTask`] ready for insertion:
//!
//! 1. name is not empty
//! 2. type is not empty
//! 3. start is present and parses as `DD/MM/YYYY HH:MM`
//! 4. end is present and parses as `DD/MM/YYYY HH:MM`
//! 5. status is `done` or `not_done` (empty means `not_done`)
//! 6. end is not earlier than start

use super::dates::parse_human_date;
use super::error::ValidationError;
use super::task::{NewTask, TaskStatus};
use serde::Deserialize;

/// Raw registration fields as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start: String,
    pub end: String,
    #[serde(rename = "type")]
    pub task_type: String,
    #[serde(default)]
    pub status: String,
}

pub fn validate_registration(request: &RegistrationRequest) -> Result<NewTask, ValidationError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }

    let task_type = request.task_type.trim();
    if task_type.is_empty() {
        return Err(ValidationError::MissingType);
    }

    let start = match request.start.trim() {
        "" => return Err(ValidationError::MissingStart),
        text => parse_human_date(text).map_err(ValidationError::InvalidStart)?,
    };

    let end = match request.end.trim() {
        "" => return Err(ValidationError::MissingEnd),
        text => parse_human_date(text).map_err(ValidationError::InvalidEnd)?,
    };

    let status = validate_status(&request.status)?;

    if end < start {
        return Err(ValidationError::EndBeforeStart);
    }

    Ok(NewTask {
        name: name.to_string(),
        description: request.description.trim().to_string(),
        start,
        end,
        task_type: task_type.to_string(),
        status,
    })
}

/// Reads a status field; an empty field selects the default, `not_done`.
pub fn validate_status(text: &str) -> Result<TaskStatus, ValidationError> {
    if text.trim().is_empty() {
        return Ok(TaskStatus::default());
    }
    text.parse()
}

//! # Agenda - personal task list
//!
//! A command-line utility for keeping a personal list of tasks in a local
//! SQLite database.
//!
//! ## Features
//!
//! - **Registration**: name, description, type, start/end time and status,
//!   validated before anything is stored
//! - **Listing**: all tasks or only `done` / `not_done` ones
//! - **Search**: case-insensitive substring match on the task name
//! - **Status changes**: mark tasks done or reopen them
//! - **Guarded deletion**: only tasks that are not done can be deleted
//!
//! ## Usage
//!
//! ```rust,no_run
//! use agenda::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;

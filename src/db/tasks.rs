//! Task store: the only code that reads or writes the `tasks` table.
//!
//! The store keeps the database path, not a connection. Each operation
//! opens a connection, runs a single statement and drops the connection
//! before returning. Business rules are enforced by
//! [`crate::libs::validation`]; the store only relies on the schema's
//! `NOT NULL` and status `CHECK` constraints.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use agenda::db::tasks::Tasks;
//! use agenda::libs::task::TaskStatus;
//!
//! let tasks = Tasks::new().unwrap();
//! for task in tasks.list_by_status(TaskStatus::NotDone).unwrap() {
//!     println!("{} {}", task.id, task.name);
//! }
//! ```

use super::db::Db;
use crate::libs::error::StoreError;
use crate::libs::task::{NewTask, Task, TaskFilter, TaskStatus};
use rusqlite::{params, Connection, OptionalExtension, Params, Row};
use std::path::{Path, PathBuf};
use tracing::debug;

const INSERT_TASK: &str =
    "INSERT INTO tasks (name, description, \"start\", \"end\", \"type\", status) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_TASKS: &str = "SELECT id, name, description, \"start\", \"end\", \"type\", status FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_STATUS: &str = "WHERE status = ?1";
// LIKE ignores ASCII case.
const WHERE_NAME_LIKE: &str = "WHERE name LIKE ?1 ESCAPE '\\'";
const ORDER_BY_ID: &str = "ORDER BY id";
const UPDATE_STATUS: &str = "UPDATE tasks SET status = ?2 WHERE id = ?1";
const DELETE_NOT_DONE: &str = "DELETE FROM tasks WHERE id = ?1 AND status = 'not_done'";

pub struct Tasks {
    path: PathBuf,
}

impl Tasks {
    /// Store backed by the configured database location.
    pub fn new() -> anyhow::Result<Tasks> {
        let path = Db::default_path()?;
        Ok(Self::open(path)?)
    }

    /// Store backed by `path`; the file and schema are created if missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Tasks, StoreError> {
        let tasks = Tasks { path: path.into() };
        tasks.initialize()?;
        Ok(tasks)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensures the database file, its directory and the schema exist. Idempotent.
    pub fn initialize(&self) -> Result<(), StoreError> {
        Db::open(&self.path)?;
        Ok(())
    }

    /// Appends a task and returns its new id.
    pub fn insert(&self, task: &NewTask) -> Result<i64, StoreError> {
        let conn = self.connect()?;
        conn.execute(
            INSERT_TASK,
            params![task.name, task.description, task.start, task.end, task.task_type, task.status],
        )?;
        let id = conn.last_insert_rowid();
        debug!(id, name = %task.name, "task inserted");

        Ok(id)
    }

    pub fn get(&self, id: i64) -> Result<Option<Task>, StoreError> {
        let conn = self.connect()?;
        let task = conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], map_task)
            .optional()?;

        Ok(task)
    }

    /// Every task, ascending by id.
    pub fn list_all(&self) -> Result<Vec<Task>, StoreError> {
        self.query(&format!("{} {}", SELECT_TASKS, ORDER_BY_ID), [])
    }

    pub fn list_by_status(&self, status: TaskStatus) -> Result<Vec<Task>, StoreError> {
        self.query(&format!("{} {} {}", SELECT_TASKS, WHERE_STATUS, ORDER_BY_ID), params![status])
    }

    pub fn fetch(&self, filter: TaskFilter) -> Result<Vec<Task>, StoreError> {
        match filter {
            TaskFilter::All => self.list_all(),
            TaskFilter::ByStatus(status) => self.list_by_status(status),
        }
    }

    /// Tasks whose name contains `term`, ignoring ASCII case.
    ///
    /// The term is matched literally: `%` and `_` are not wildcards. An
    /// empty term matches every task.
    pub fn search_by_name(&self, term: &str) -> Result<Vec<Task>, StoreError> {
        let pattern = format!("%{}%", escape_like(term));
        self.query(&format!("{} {} {}", SELECT_TASKS, WHERE_NAME_LIKE, ORDER_BY_ID), params![pattern])
    }

    /// Sets the status of task `id`. Returns `false` if no such task exists.
    pub fn set_status(&self, id: i64, status: TaskStatus) -> Result<bool, StoreError> {
        let conn = self.connect()?;
        let rows = conn.execute(UPDATE_STATUS, params![id, status])?;
        debug!(id, %status, rows, "task status set");

        Ok(rows > 0)
    }

    /// Deletes task `id` only if it exists and is `not_done`.
    ///
    /// The status check and the deletion are one statement, so the guard
    /// cannot be bypassed by a status change in between.
    pub fn delete_if_not_done(&self, id: i64) -> Result<bool, StoreError> {
        let conn = self.connect()?;
        let rows = conn.execute(DELETE_NOT_DONE, params![id])?;
        debug!(id, rows, "guarded delete");

        Ok(rows > 0)
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Db::connect(&self.path)
    }

    fn query<P: Params>(&self, sql: &str, params: P) -> Result<Vec<Task>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(sql)?;
        let tasks = stmt.query_map(params, map_task)?.collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }
}

fn map_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        start: row.get(3)?,
        end: row.get(4)?,
        task_type: row.get(5)?,
        status: row.get(6)?,
    })
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

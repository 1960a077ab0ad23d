//! Database layer for agenda.
//!
//! A single SQLite file holds the `tasks` table plus the `migrations`
//! bookkeeping table.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use agenda::db::tasks::Tasks;
//!
//! let tasks = Tasks::open("/tmp/agenda.db").unwrap();
//! println!("{} tasks", tasks.list_all().unwrap().len());
//! ```

/// Connection opening and database location.
pub mod db;

/// Versioned schema creation.
pub mod migrations;

/// Task store operations.
pub mod tasks;

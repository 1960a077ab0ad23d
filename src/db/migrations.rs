//! Versioned schema management.
//!
//! Every schema change is a numbered migration applied inside a transaction
//! and recorded in the `migrations` table, so opening a database is
//! idempotent: an up-to-date file is left untouched.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use agenda::db::migrations::{init_with_migrations, get_db_version};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("agenda.db").unwrap();
//! init_with_migrations(&mut conn).unwrap();
//! let version = get_db_version(&conn).unwrap();
//! ```

use crate::libs::error::StoreError;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use rusqlite::{params, Connection, OptionalExtension, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Task table. `start`, `end` and `type` are quoted since they are SQL keywords.
const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT,
    \"start\" TEXT NOT NULL,
    \"end\" TEXT NOT NULL,
    \"type\" TEXT NOT NULL,
    status TEXT NOT NULL CHECK(status IN ('done', 'not_done'))
)";

const INDEX_TASKS_STATUS: &str = "CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks(status)";

struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> rusqlite::Result<()>,
}

pub struct MigrationManager {
    /// Registered in ascending version order.
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        self.add_migration(1, "create_tasks_table", |tx| {
            tx.execute(SCHEMA_TASKS, [])?;
            Ok(())
        });

        self.add_migration(2, "index_tasks_status", |tx| {
            tx.execute(INDEX_TASKS_STATUS, [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> rusqlite::Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the database's current version.
    ///
    /// Pending migrations run in one transaction; a failure leaves the
    /// database at its previous version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<(), StoreError> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        let tx = conn.transaction()?;

        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            if let Err(e) = (migration.up)(&tx) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e.into());
            }

            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32, StoreError> {
        let version: Option<u32> = conn
            .query_row("SELECT MAX(version) FROM migrations", [], |row| row.get::<_, Option<u32>>(0))
            .optional()?
            .flatten();

        Ok(version.unwrap_or(0))
    }

    /// Applied migrations as `(version, name, applied_at)`, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>, StoreError> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }

    fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<(), StoreError> {
    MigrationManager::new().run_migrations(conn)
}

/// Current schema version, 0 for a database that has never been initialized.
pub fn get_db_version(conn: &Connection) -> Result<u32, StoreError> {
    conn.execute(MIGRATIONS_TABLE, [])?;
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool, StoreError> {
    let manager = MigrationManager::new();
    let current = get_db_version(conn)?;
    Ok(current < manager.latest_version())
}

use super::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::error::StoreError;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "agenda.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens `path`, creating the file and its directory if missing, and applies migrations.
    pub fn open(path: &Path) -> Result<Db, StoreError> {
        let mut conn = Self::connect(path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    pub fn new_without_migrations(path: &Path) -> Result<Connection, StoreError> {
        Self::connect(path)
    }

    /// Plain connection without schema checks.
    pub fn connect(path: &Path) -> Result<Connection, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Connection::open(path)?)
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        Config::read()?.resolve_db_path()
    }
}

//! Configuration file handling.
//!
//! The configuration lives in `config.json` inside the application data
//! directory and currently holds a single setting: where the task database
//! is stored. A missing file means defaults.
//!
//! The database location is resolved in this order:
//!
//! 1. the `AGENDA_DB` environment variable (a `.env` file is honored)
//! 2. `db_path` from the configuration file
//! 3. `agenda.db` in the application data directory

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable that overrides the database location.
pub const DB_PATH_ENV: &str = "AGENDA_DB";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Database file; `None` selects the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Succeeds if there is none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Interactive setup, starting from the current configuration.
    pub fn init() -> Result<Self> {
        let mut config = Config::read()?;
        let current = config.resolve_db_path()?;

        let db_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDbPath.to_string())
            .default(current.display().to_string())
            .interact_text()?;

        config.db_path = Some(PathBuf::from(db_path.trim()));
        Ok(config)
    }

    /// Database file this configuration points at, after environment overrides.
    pub fn resolve_db_path(&self) -> Result<PathBuf> {
        if let Ok(path) = env::var(DB_PATH_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path.trim()));
            }
        }
        if let Some(path) = &self.db_path {
            return Ok(path.clone());
        }
        Ok(DataStorage::new().get_path(DB_FILE_NAME)?)
    }
}

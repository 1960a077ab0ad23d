//! Configuration command.
//!
//! Asks where the task database should live and stores the answer in the
//! configuration file. `--delete` removes the file, returning to the
//! default location.

use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message},
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        if Config::delete()? {
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_warning!(Message::ConfigNotFound);
        }
        return Ok(());
    }

    let config = Config::init()?;
    config.save()?;
    msg_success!(Message::ConfigSaved);

    // Create the database now so a bad location is reported immediately.
    let tasks = Tasks::open(config.resolve_db_path()?)?;
    msg_info!(Message::DatabaseLocation(tasks.path().display().to_string()));
    Ok(())
}

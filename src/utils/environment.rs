use std::path::PathBuf;

use anyhow::{Context, Result};

const BACKUP_DIR_NAME: &str = "sms-backups";

/// Get the default backup folder (~/sms-backups)
pub fn default_backup_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(BACKUP_DIR_NAME))
}

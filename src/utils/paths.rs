use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;

use crate::formatter::OutputFormat;

// Maximum size of a dump file accepted by `convert`: 64MB
const MAX_DUMP_SIZE_BYTES: u64 = 64 * 1024 * 1024;

const BACKUP_FILE_PREFIX: &str = "sms_backup";

/// Builds the backup file name for a run started at `started_at`
///
/// Names sort chronologically.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use sms_backup::formatter::OutputFormat;
/// use sms_backup::utils::backup_file_name;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(7, 5, 0).unwrap();
/// assert_eq!(backup_file_name(&at, OutputFormat::Text), "sms_backup_2024-03-09_07-05-00.txt");
/// ```
pub fn backup_file_name(started_at: &NaiveDateTime, format: OutputFormat) -> String {
    format!(
        "{}_{}.{}",
        BACKUP_FILE_PREFIX,
        started_at.format("%Y-%m-%d_%H-%M-%S"),
        format.extension()
    )
}

/// Validates that a file's size is within acceptable limits (64MB)
///
/// Takes an open file handle so the checked file is the one that gets read.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 64MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_DUMP_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_DUMP_SIZE_BYTES
        );
    }

    Ok(())
}

/// Reads a saved provider dump, replacing invalid UTF-8 sequences
pub fn read_dump_file(path: &Path) -> Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open dump file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read dump file: {}", path.display()))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes `contents` to `file_name` inside `dir`, creating the directory if needed
///
/// Returns the full path of the written file.
pub fn write_backup(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create backup directory: {}", dir.display()))?;

    let path = dir.join(file_name);
    fs::write(&path, contents)
        .with_context(|| format!("Failed to write backup file: {}", path.display()))?;

    Ok(path)
}

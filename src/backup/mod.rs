//! Backup pipeline: device query, dump conversion, file output.
//!
//! # Error Handling Strategy
//!
//! - **Bridge errors**: A missing `adb`, a failing command or an unusable device aborts
//!   the backup with context attached.
//! - **Row-level problems**: Handled by the parser, which drops malformed rows. The
//!   pipeline only logs the totals.
//! - **Suspicious dumps**: If every row was dropped, the device probably changed its dump
//!   layout. This is logged as a warning and the (empty) backup is still written so the
//!   run leaves a trace.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::device::{DeviceBridge, select_device};
use crate::formatter::{OutputFormat, RenderZone, render};
use crate::parsers::{DumpParse, parse_dump_with_stats};
use crate::utils::{backup_file_name, write_backup};

/// Result of converting one dump
#[derive(Debug, Clone)]
pub struct Conversion {
    pub output: String,
    pub blocks: usize,
    pub records: usize,
    pub dropped: usize,
}

/// Parse `raw` and render it, logging row statistics
pub fn convert_dump(raw: &str, zone: RenderZone, format: OutputFormat) -> Result<Conversion> {
    let parse = parse_dump_with_stats(raw);
    report_parse(&parse);

    let output = render(&parse.records, zone, format)?;
    Ok(Conversion {
        output,
        blocks: parse.blocks,
        records: parse.records.len(),
        dropped: parse.dropped,
    })
}

fn report_parse(parse: &DumpParse) {
    if parse.blocks == 0 {
        warn!("Dump contains no rows; the SMS provider returned nothing");
    } else if parse.all_dropped() {
        warn!(rows = parse.blocks, "None of the rows could be parsed; the dump format may have changed");
    } else if parse.dropped > 0 {
        warn!(rows = parse.blocks, dropped = parse.dropped, "Skipped malformed rows");
    }
    debug!(rows = parse.blocks, messages = parse.records.len(), "Parsed dump");
}

/// Settings for one backup run
#[derive(Debug, Clone)]
pub struct BackupOptions {
    pub serial: Option<String>,
    pub output_dir: PathBuf,
    pub zone: RenderZone,
    pub format: OutputFormat,
}

/// What a backup run produced
#[derive(Debug, Clone)]
pub struct BackupSummary {
    pub serial: String,
    pub path: PathBuf,
    pub records: usize,
    pub dropped: usize,
}

/// Back up the SMS table of one device
///
/// Starts the bridge server, selects the device, dumps `content://sms`, converts it and
/// writes a file named after `started_at` into the output directory.
///
/// # Errors
///
/// Returns an error if the bridge fails, no suitable device is attached, or the file
/// cannot be written.
pub fn run_backup(
    bridge: &dyn DeviceBridge,
    options: &BackupOptions,
    started_at: NaiveDateTime,
) -> Result<BackupSummary> {
    bridge.start_server()?;

    let devices = bridge.list_devices()?;
    let device = select_device(&devices, options.serial.as_deref())?;
    info!(serial = %device.serial, "Querying SMS provider");

    let raw = bridge.query_sms(&device.serial)?;
    debug!(bytes = raw.len(), "Received dump");

    let conversion = convert_dump(&raw, options.zone, options.format)
        .with_context(|| format!("Failed to convert dump from {}", device.serial))?;

    let file_name = backup_file_name(&started_at, options.format);
    let path = write_backup(&options.output_dir, &file_name, &conversion.output)?;
    info!(path = %path.display(), messages = conversion.records, "Backup written");

    Ok(BackupSummary {
        serial: device.serial.clone(),
        path,
        records: conversion.records,
        dropped: conversion.dropped,
    })
}

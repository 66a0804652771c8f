use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::backup::{BackupOptions, convert_dump, run_backup};
use crate::device::{AdbBridge, DeviceBridge};
use crate::formatter::{OutputFormat, RenderZone};
use crate::utils::{default_backup_dir, read_dump_file};

#[derive(Parser)]
#[command(name = "sms-backup")]
#[command(version = "0.1.0")]
#[command(about = "Back up SMS messages from an Android device over adb", long_about = None)]
pub struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the adb executable
    #[arg(long, global = true, env = "SMS_BACKUP_ADB", default_value = "adb")]
    pub adb: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List attached devices
    Devices,
    /// Dump the SMS table of a device into a timestamped backup file
    Backup {
        /// Serial of the device to back up (required when several are attached)
        #[arg(short, long)]
        serial: Option<String>,

        /// Folder receiving the backup file [default: ~/sms-backups]
        #[arg(short, long, env = "SMS_BACKUP_DIR")]
        output_dir: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },
    /// Convert a saved `content query` dump
    Convert {
        /// Dump file produced by `adb shell content query --uri content://sms`
        dump: PathBuf,

        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },
}

#[derive(Args)]
pub struct RenderArgs {
    /// Timezone for message dates: local, utc, or an offset like +02:00
    #[arg(long, env = "SMS_BACKUP_TZ", default_value = "local")]
    pub timezone: RenderZone,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Some(Commands::Devices) => {
            list_devices(&AdbBridge::new(&cli.adb))?;
        }
        Some(Commands::Backup { serial, output_dir, render }) => {
            backup(&AdbBridge::new(&cli.adb), serial.clone(), output_dir.clone(), render)?;
        }
        Some(Commands::Convert { dump, output, render }) => {
            convert(dump, output.as_deref(), render)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn list_devices(bridge: &dyn DeviceBridge) -> Result<()> {
    bridge.start_server()?;
    let devices = bridge.list_devices()?;

    if devices.is_empty() {
        println!("No devices attached");
        return Ok(());
    }

    for device in devices {
        println!("{}\t{}", device.serial, device.state);
    }

    Ok(())
}

fn backup(
    bridge: &dyn DeviceBridge,
    serial: Option<String>,
    output_dir: Option<PathBuf>,
    render: &RenderArgs,
) -> Result<()> {
    let output_dir = match output_dir {
        Some(dir) => dir,
        None => default_backup_dir()?,
    };
    debug!(dir = %output_dir.display(), timezone = %render.timezone, "Starting backup");

    let options = BackupOptions { serial, output_dir, zone: render.timezone, format: render.format };
    let summary = run_backup(bridge, &options, Local::now().naive_local())?;

    println!(
        "Backed up {} messages from {} to {}",
        summary.records,
        summary.serial,
        summary.path.display()
    );
    if summary.dropped > 0 {
        println!("Skipped {} malformed rows", summary.dropped);
    }

    Ok(())
}

fn convert(dump: &Path, output: Option<&Path>, render: &RenderArgs) -> Result<()> {
    let raw = read_dump_file(dump)?;
    let conversion = convert_dump(&raw, render.timezone, render.format)?;

    match output {
        Some(path) => {
            fs::write(path, &conversion.output)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            println!("Converted {} messages to {}", conversion.records, path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(conversion.output.as_bytes()).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result, bail};

use crate::device::{DeviceBridge, SMS_CONTENT_URI, parse_device_list};
use crate::models::DeviceInfo;

/// Device bridge backed by the `adb` executable
pub struct AdbBridge {
    program: PathBuf,
}

impl AdbBridge {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    fn run<I, S>(&self, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .with_context(|| format!("Failed to run {}; is adb installed?", self.program.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("{} exited with {}: {}", self.program.display(), output.status, stderr.trim());
        }

        // Devices may emit invalid UTF-8 in message bodies
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for AdbBridge {
    fn default() -> Self {
        Self::new("adb")
    }
}

impl DeviceBridge for AdbBridge {
    fn start_server(&self) -> Result<()> {
        self.run(["start-server"]).context("Failed to start adb server")?;
        Ok(())
    }

    fn list_devices(&self) -> Result<Vec<DeviceInfo>> {
        let output = self.run(["devices"]).context("Failed to list devices")?;
        Ok(parse_device_list(&output))
    }

    fn query_sms(&self, serial: &str) -> Result<String> {
        self.run(["-s", serial, "shell", "content", "query", "--uri", SMS_CONTENT_URI])
            .with_context(|| format!("Failed to query SMS provider on {}", serial))
    }
}

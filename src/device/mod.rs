//! Access to Android devices through the `adb` bridge tool
//!
//! [`DeviceBridge`] is the seam between the backup pipeline and the device. The real
//! implementation, [`AdbBridge`], shells out to `adb`; tests substitute an in-memory
//! bridge returning canned dumps.

pub mod adb;

use anyhow::{Result, bail};

use crate::models::DeviceInfo;

pub use adb::AdbBridge;

/// Content provider URI of the SMS table
pub const SMS_CONTENT_URI: &str = "content://sms";

/// Operations the backup needs from a device bridge
pub trait DeviceBridge {
    /// Make sure the bridge daemon is running
    fn start_server(&self) -> Result<()>;

    /// List attached devices, ready or not
    fn list_devices(&self) -> Result<Vec<DeviceInfo>>;

    /// Run the SMS content query on `serial` and return its raw standard output
    fn query_sms(&self, serial: &str) -> Result<String>;
}

/// Parse the output of `adb devices`
///
/// Skips the `List of devices attached` header, daemon status lines (`* daemon ...`)
/// and blank lines. Each remaining line is `<serial>` followed by whitespace and a state.
pub fn parse_device_list(output: &str) -> Vec<DeviceInfo> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with("List of devices") && !line.starts_with('*'))
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let serial = parts.next()?;
            let state = parts.next()?;
            Some(DeviceInfo { serial: serial.to_string(), state: state.to_string() })
        })
        .collect()
}

/// Pick the device to back up
///
/// With an explicit serial, that device must be attached and ready. Without one, there
/// must be exactly one ready device.
///
/// # Errors
///
/// Returns an error if:
/// - The requested serial is not attached or not ready
/// - No device is ready
/// - Several devices are ready and no serial was given
pub fn select_device<'a>(devices: &'a [DeviceInfo], serial: Option<&str>) -> Result<&'a DeviceInfo> {
    if let Some(serial) = serial {
        let Some(device) = devices.iter().find(|d| d.serial == serial) else {
            bail!("Device {} is not attached", serial);
        };
        if !device.is_ready() {
            bail!("Device {} is not ready (state: {})", serial, device.state);
        }
        return Ok(device);
    }

    let ready: Vec<&DeviceInfo> = devices.iter().filter(|d| d.is_ready()).collect();
    match ready.as_slice() {
        [] => {
            if let Some(device) = devices.first() {
                bail!(
                    "No ready device found ({} is {}); check USB debugging authorization",
                    device.serial,
                    device.state
                );
            }
            bail!("No device found; connect a phone with USB debugging enabled");
        }
        [device] => Ok(*device),
        several => {
            let serials: Vec<&str> = several.iter().map(|d| d.serial.as_str()).collect();
            bail!("Several devices attached ({}); choose one with --serial", serials.join(", "));
        }
    }
}

/// A device reported by `adb devices`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub serial: String,
    pub state: String,
}

impl DeviceInfo {
    /// `unauthorized` and `offline` devices cannot run shell commands
    pub fn is_ready(&self) -> bool {
        self.state == "device"
    }
}

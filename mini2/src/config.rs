//! Connection settings.

use std::fmt;
use std::time::Duration;

use crate::protocol::CoreModel;

/// Vendor id shared by all Mini2 cores.
pub const VENDOR_ID: u16 = 0x3474;

/// Default control transfer timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// A USB vendor/product pair to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceId {
    pub vendor_id: u16,
    pub product_id: u16,
    pub model: CoreModel,
}

impl DeviceId {
    pub const fn new(vendor_id: u16, product_id: u16, model: CoreModel) -> Self {
        DeviceId {
            vendor_id,
            product_id,
            model,
        }
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}:{:04x}", self.vendor_id, self.product_id)
    }
}

/// The modules this crate knows about, in search order.
pub const KNOWN_DEVICES: [DeviceId; 3] = [
    DeviceId::new(VENDOR_ID, 0x43C1, CoreModel::Core256),
    DeviceId::new(VENDOR_ID, 0x43D1, CoreModel::Core384),
    DeviceId::new(VENDOR_ID, 0x43E1, CoreModel::Core640),
];

/// How to find and talk to a camera.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Candidate ids; the first one with an attached device wins.
    pub devices: Vec<DeviceId>,
    /// Timeout for each control transfer.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            devices: KNOWN_DEVICES.to_vec(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Adds a candidate id after the existing ones.
    pub fn with_device(mut self, device: DeviceId) -> Self {
        self.devices.push(device);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The search list as `vid:pid, vid:pid, ...`.
    pub(crate) fn describe_devices(&self) -> String {
        self.devices
            .iter()
            .map(DeviceId::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_searches_known_cores_in_order() {
        let config = Config::default();
        let pids: Vec<u16> = config.devices.iter().map(|d| d.product_id).collect();
        assert_eq!(pids, vec![0x43C1, 0x43D1, 0x43E1]);
        assert_eq!(config.timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_builder() {
        let extra = DeviceId::new(0x1234, 0x5678, CoreModel::Unknown);
        let config = Config::default()
            .with_device(extra)
            .with_timeout(Duration::from_millis(250));
        assert_eq!(config.devices.last(), Some(&extra));
        assert_eq!(config.timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_describe_devices() {
        let config = Config {
            devices: vec![KNOWN_DEVICES[0], KNOWN_DEVICES[2]],
            ..Config::default()
        };
        assert_eq!(config.describe_devices(), "3474:43c1, 3474:43e1");
    }
}

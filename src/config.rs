use std::time::Duration;

use bluest::Uuid;

/// The default time spent scanning for the motor controller, in seconds
pub const SCAN_TIMEOUT_SECONDS: u64 = 5;

/// The log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Identifies the peripheral and the characteristic that accepts motor commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    pub name: String,
    pub service: Uuid,
    pub characteristic: Uuid,
}

impl Default for DeviceIdentity {
    fn default() -> Self {
        Self {
            name: crate::DEVICE_NAME.to_string(),
            service: crate::MOTOR_SERVICE,
            characteristic: crate::MOTOR_CHARACTERISTIC,
        }
    }
}

/// Settings for a single run of the client. Everything is compiled in.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub identity: DeviceIdentity,
    /// How long discovery waits for a matching advertisement
    pub scan_timeout: Duration,
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            identity: DeviceIdentity::default(),
            scan_timeout: Duration::from_secs(SCAN_TIMEOUT_SECONDS),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_identity_matches_sketch() {
        let identity = DeviceIdentity::default();
        assert_eq!(identity.name, "Arduino_Motor_Controller");
        assert_eq!(
            identity.service.to_string(),
            "19b10000-e8f2-537e-4f6c-d104768a1214"
        );
        assert_eq!(
            identity.characteristic.to_string(),
            "19b10002-e8f2-537e-4f6c-d104768a1214"
        );
    }

    #[test]
    fn default_scan_window() {
        assert_eq!(ClientConfig::default().scan_timeout, Duration::from_secs(5));
    }
}

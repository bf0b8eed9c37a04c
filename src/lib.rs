pub mod client;
pub mod commands;
pub mod config;
pub mod devices;
pub mod errors;
pub mod logging;
pub mod report;

use bluest::Uuid;

/// The advertised name of the motor controller sketch
pub const DEVICE_NAME: &str = "Arduino_Motor_Controller";

/// The BLE GATT Service that the motor controller provides
pub const MOTOR_SERVICE: Uuid = Uuid::from_u128(0x19b10000_e8f2_537e_4f6c_d104768a1214);

/// The motor command GATT characteristic
pub const MOTOR_CHARACTERISTIC: Uuid = Uuid::from_u128(0x19b10002_e8f2_537e_4f6c_d104768a1214);

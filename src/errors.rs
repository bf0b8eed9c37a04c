use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("No bluetooth adapter is available")]
    NoBluetoothAdapter,
    #[error("Bluetooth error: {0}")]
    Bluetooth(#[source] bluest::Error),
    #[error("Could not find a device named {0}")]
    DeviceNotFound(String),
    #[error("Failed to connect to the device: {0}")]
    ConnectionFailed(#[source] bluest::Error),
    #[error("The device does not provide the motor service")]
    ServiceNotFound,
    #[error("The device does not provide the motor characteristic")]
    CharacteristicNotFound,
    #[error("Failed to send the command: {0}")]
    TransportError(#[source] bluest::Error),
    #[error("Invalid command {0:?}. Enter 0, 1, 2 or q.")]
    InvalidInput(String),
    #[error("IO Error")]
    IoError(#[from] std::io::Error),
}

//! [`Central`] and [`MotorLink`] over the platform BLE adapter.

use std::time::Duration;

use bluest::{Adapter, Characteristic, Device};
use tokio_stream::StreamExt;

use super::{Central, MotorLink};
use crate::config::DeviceIdentity;
use crate::errors::ClientError;

/// Delay after connecting before services are discovered. Some stacks report
/// the connection before GATT is usable.
const CONNECT_SETTLE: Duration = Duration::from_millis(100);

/// The default platform bluetooth adapter
#[derive(Clone, Debug)]
pub struct BluetoothCentral {
    adapter: Adapter,
}

impl BluetoothCentral {
    /// Gets the default adapter and waits for it to be available
    pub async fn new() -> Result<BluetoothCentral, ClientError> {
        let adapter = Adapter::default()
            .await
            .ok_or(ClientError::NoBluetoothAdapter)?;
        adapter
            .wait_available()
            .await
            .map_err(ClientError::Bluetooth)?;

        Ok(Self { adapter })
    }
}

impl Central for BluetoothCentral {
    type Peripheral = Device;
    type Link = MotorConnection;

    async fn discover(&self, name: &str, timeout: Duration) -> Result<Device, ClientError> {
        tracing::info!(name, ?timeout, "Scanning for device");

        let scan = async {
            // Scan everything; the sketch is matched by name, not by service
            let mut scan_stream = self
                .adapter
                .scan(&[])
                .await
                .map_err(ClientError::Bluetooth)?;

            while let Some(discovered) = scan_stream.next().await {
                let advertised = advertised_name(discovered.adv_data.local_name.clone(), || {
                    discovered.device.name().ok()
                });
                tracing::trace!(id = ?discovered.device.id(), ?advertised, "Advertisement");

                if advertised.as_deref() == Some(name) {
                    return Ok(Some(discovered.device));
                }
            }

            Ok::<_, ClientError>(None)
        };

        // The scan stops when the stream is dropped
        let found = match tokio::time::timeout(timeout, scan).await {
            Ok(result) => result?,
            Err(_) => None,
        };

        match found {
            Some(device) => {
                tracing::info!(id = ?device.id(), "Found device");
                Ok(device)
            }
            None => Err(ClientError::DeviceNotFound(name.to_string())),
        }
    }

    async fn connect(
        &self,
        device: Device,
        identity: &DeviceIdentity,
    ) -> Result<MotorConnection, ClientError> {
        self.adapter
            .connect_device(&device)
            .await
            .map_err(ClientError::ConnectionFailed)?;

        tokio::time::sleep(CONNECT_SETTLE).await;

        match find_characteristic(&device, identity).await {
            Ok(characteristic) => Ok(MotorConnection {
                adapter: self.adapter.clone(),
                device,
                characteristic,
            }),
            Err(e) => {
                // Do not leave the link open behind a failed discovery
                if let Err(disconnect_error) = self.adapter.disconnect_device(&device).await {
                    tracing::warn!(%disconnect_error, "Failed to disconnect");
                }
                Err(e)
            }
        }
    }
}

/// The advertised local name, or the name the platform cached for the device
/// when the advertisement carries none.
fn advertised_name(
    local_name: Option<String>,
    cached_name: impl FnOnce() -> Option<String>,
) -> Option<String> {
    local_name.or_else(cached_name)
}

/// Finds the motor characteristic inside the motor service of a connected device
async fn find_characteristic(
    device: &Device,
    identity: &DeviceIdentity,
) -> Result<Characteristic, ClientError> {
    let services = device
        .discover_services_with_uuid(identity.service)
        .await
        .map_err(ClientError::ConnectionFailed)?;
    let service = services
        .into_iter()
        .next()
        .ok_or(ClientError::ServiceNotFound)?;

    let characteristics = service
        .discover_characteristics_with_uuid(identity.characteristic)
        .await
        .map_err(ClientError::ConnectionFailed)?;

    characteristics
        .into_iter()
        .next()
        .ok_or(ClientError::CharacteristicNotFound)
}

/// An open connection to the motor controller
#[derive(Clone, Debug)]
pub struct MotorConnection {
    adapter: Adapter,
    device: Device,
    characteristic: Characteristic,
}

impl MotorLink for MotorConnection {
    async fn write_opcode(&mut self, opcode: u8) -> Result<(), ClientError> {
        tracing::debug!(opcode, "Writing opcode");
        self.characteristic
            .write(&[opcode])
            .await
            .map_err(ClientError::TransportError)
    }

    async fn disconnect(self) -> Result<(), ClientError> {
        tracing::info!(id = ?self.device.id(), "Disconnecting");
        self.adapter
            .disconnect_device(&self.device)
            .await
            .map_err(ClientError::ConnectionFailed)
    }
}

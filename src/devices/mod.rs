//! The seam between the command loop and a BLE host stack.
//!
//! [`bluetooth`] implements these traits over the platform adapter. Anything
//! else implementing them (for example an in-memory double) can drive
//! [`crate::client::MotorCommandClient`] the same way.

#![allow(async_fn_in_trait)]

use std::time::Duration;

use crate::config::DeviceIdentity;
use crate::errors::ClientError;

pub mod bluetooth;

/// The host side of the link: finds peripherals and connects to them.
pub trait Central {
    /// A peripheral that was found while scanning
    type Peripheral;
    /// An open connection to a peripheral
    type Link: MotorLink;

    /// Scans for up to `timeout` and returns the first peripheral advertising exactly `name`.
    ///
    /// Returns [`ClientError::DeviceNotFound`] if the window elapses without a match.
    async fn discover(&self, name: &str, timeout: Duration) -> Result<Self::Peripheral, ClientError>;

    /// Opens a GATT connection and locates the motor characteristic of `identity`.
    async fn connect(
        &self,
        peripheral: Self::Peripheral,
        identity: &DeviceIdentity,
    ) -> Result<Self::Link, ClientError>;
}

/// A connected motor controller.
pub trait MotorLink {
    /// Writes a single opcode byte to the motor characteristic.
    /// Nothing is read back.
    async fn write_opcode(&mut self, opcode: u8) -> Result<(), ClientError>;

    /// Closes the connection
    async fn disconnect(self) -> Result<(), ClientError>;
}

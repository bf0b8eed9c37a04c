//! Tells the user why a run ended early.

use std::io::Write;

use crate::errors::ClientError;

/// Prints a human-readable explanation of a terminal failure to `out`.
///
/// The failure is only logged at debug level; the message is the report.
pub fn report_failure<W: Write>(error: &anyhow::Error, out: &mut W) -> std::io::Result<()> {
    tracing::debug!(error = ?error, "Client stopped");

    match error.downcast_ref::<ClientError>() {
        Some(ClientError::DeviceNotFound(name)) => {
            writeln!(out, "{name} was not found.")?;
            writeln!(out, "Make sure the Arduino sketch is running.")
        }
        _ => {
            writeln!(out, "An error occurred: {error:#}")?;
            writeln!(out, "Make sure the device is within range and try again.")
        }
    }
}

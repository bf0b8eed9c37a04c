use std::str::FromStr;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ClientConfig;

/// Installs the global subscriber.
///
/// Logs go to stderr so they do not interleave with the menu on stdout.
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_logger(config: &ClientConfig) -> anyhow::Result<()> {
    let level_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::from_str(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(level_filter)
        .with(console_layer)
        .try_init()?;

    tracing::debug!("Logging initialized");

    Ok(())
}

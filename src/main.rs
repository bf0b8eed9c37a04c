use anyhow::Context;
use motor_ble_client::client::MotorCommandClient;
use motor_ble_client::config::ClientConfig;
use motor_ble_client::devices::bluetooth::BluetoothCentral;
use motor_ble_client::{logging, report};
use tokio::io::BufReader;

#[tokio::main]
async fn main() {
    let config = ClientConfig::default();

    if let Err(e) = logging::init_logger(&config) {
        eprintln!("Failed to initialize logging: {e:#}");
    }

    if let Err(e) = run(config).await {
        let _ = report::report_failure(&e, &mut std::io::stdout());
    }

    // A blocked stdin read would otherwise keep the runtime alive after an interrupt
    std::process::exit(0);
}

async fn run(config: ClientConfig) -> anyhow::Result<()> {
    // Polled from here on, so the Ctrl-C handler covers opening the adapter too
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Unable to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };
    tokio::pin!(shutdown);

    let central = tokio::select! {
        central = BluetoothCentral::new() => {
            central.context("Failed to open the bluetooth adapter")?
        }
        _ = &mut shutdown => return Ok(()),
    };
    let client = MotorCommandClient::new(central, config);

    let mut input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();

    client.run(&mut input, &mut output, shutdown).await?;

    Ok(())
}

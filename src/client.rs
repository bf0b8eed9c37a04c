//! The interactive motor command client.
//!
//! A run is strictly sequential: scan for the controller, connect, then read
//! commands from the input one line at a time and write each as a single
//! opcode byte. The link is disconnected on every way out of the loop.

use std::future::Future;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::commands::Command;
use crate::config::ClientConfig;
use crate::devices::{Central, MotorLink};
use crate::errors::ClientError;

const MENU: &str = "\n===== Arduino Motor Controller =====\n\
Commands:\n  \
0: stop the motor\n  \
1: run the motor forward\n  \
2: run the motor in reverse\n  \
q: quit\n";

const PROMPT: &str = "\nEnter a command (0/1/2/q): ";

pub struct MotorCommandClient<C: Central> {
    central: C,
    config: ClientConfig,
}

impl<C: Central> MotorCommandClient<C> {
    pub fn new(central: C, config: ClientConfig) -> Self {
        Self { central, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Scans for the configured device name
    pub async fn discover(&self) -> Result<C::Peripheral, ClientError> {
        self.central
            .discover(&self.config.identity.name, self.config.scan_timeout)
            .await
    }

    /// Connects to a discovered peripheral
    pub async fn connect(&self, peripheral: C::Peripheral) -> Result<C::Link, ClientError> {
        let link = self.central.connect(peripheral, &self.config.identity).await?;
        tracing::info!(name = %self.config.identity.name, "Connected");
        Ok(link)
    }

    /// Writes one opcode to the motor characteristic
    pub async fn send_opcode(&self, link: &mut C::Link, opcode: u8) -> Result<(), ClientError> {
        link.write_opcode(opcode).await.map_err(|e| {
            tracing::warn!(opcode, error = %e, "Write failed");
            e
        })
    }

    /// Reads commands from `input` until the user quits or the input closes.
    ///
    /// Invalid entries are reported on `output` and nothing is written to the link.
    /// Quitting, and running out of input, both write a final Stop opcode.
    pub async fn run_loop<R, W>(
        &self,
        link: &mut C::Link,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), ClientError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        output.write_all(MENU.as_bytes()).await?;

        let mut line = String::new();
        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            line.clear();
            if input.read_line(&mut line).await? == 0 {
                tracing::info!("Input closed, stopping the motor");
                output.write_all(b"\n").await?;
                return self.quit(link, output).await;
            }

            let entered = line.strip_suffix('\n').unwrap_or(&line);
            let entered = entered.strip_suffix('\r').unwrap_or(entered);

            match entered.parse::<Command>() {
                Ok(Command::Quit) => return self.quit(link, output).await,
                Ok(command) => {
                    self.send_opcode(link, command.opcode()).await?;
                    output
                        .write_all(format!("{}\n", command.describe()).as_bytes())
                        .await?;
                }
                Err(e) => {
                    tracing::debug!(input = entered, "Ignoring invalid command");
                    output.write_all(format!("{e}\n").as_bytes()).await?;
                }
            }
        }
    }

    async fn quit<W>(&self, link: &mut C::Link, output: &mut W) -> Result<(), ClientError>
    where
        W: AsyncWrite + Unpin,
    {
        output
            .write_all(format!("{}\n", Command::Quit.describe()).as_bytes())
            .await?;
        output.flush().await?;
        self.send_opcode(link, Command::Quit.opcode()).await
    }

    /// Discovers, connects and runs the command loop until it ends or `shutdown` resolves.
    ///
    /// `shutdown` is watched from the start of the scan. If it resolves before a
    /// connection exists, the run ends quietly with nothing to release. Once
    /// connected, a Stop opcode is written on a best-effort basis. The link is
    /// disconnected whenever a connection was made, and the loop's own result
    /// is returned afterwards.
    pub async fn run<R, W, S>(
        &self,
        input: &mut R,
        output: &mut W,
        shutdown: S,
    ) -> Result<(), ClientError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        let name = self.config.identity.name.clone();
        output
            .write_all(format!("Looking for {name}...\n").as_bytes())
            .await?;
        output.flush().await?;

        let peripheral = tokio::select! {
            found = self.discover() => found?,
            _ = &mut shutdown => {
                tracing::info!("Interrupted while scanning");
                return Ok(());
            }
        };
        output
            .write_all(format!("Found {name}\n").as_bytes())
            .await?;

        // Dropping a pending connect abandons it before a link is handed out
        let mut link = tokio::select! {
            link = self.connect(peripheral) => link?,
            _ = &mut shutdown => {
                tracing::info!("Interrupted while connecting");
                return Ok(());
            }
        };
        output
            .write_all(format!("Connected to {name}\n").as_bytes())
            .await?;

        let outcome = tokio::select! {
            result = self.run_loop(&mut link, input, output) => Some(result),
            _ = &mut shutdown => None,
        };

        let result = match outcome {
            Some(result) => result,
            None => {
                tracing::warn!("Interrupted, stopping the motor");
                // The terminal may already be gone; the stop write matters more
                let _ = output
                    .write_all(b"\nInterrupted, stopping the motor...\n")
                    .await;
                self.send_opcode(&mut link, Command::Stop.opcode()).await
            }
        };

        if let Err(e) = link.disconnect().await {
            tracing::warn!(error = %e, "Failed to disconnect");
        }

        result
    }
}

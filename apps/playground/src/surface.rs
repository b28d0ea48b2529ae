//! Terminal output for countdown updates.

use async_trait::async_trait;
use countdown::{CountdownSurface, DisplayText};
use shared::protocol::EventEnvelope;
use tokio::{
    io::{self, AsyncWrite, AsyncWriteExt, Stdout},
    sync::{broadcast, Mutex},
    task::JoinHandle,
};
use tracing::warn;

/// Writes each update as one line.
pub struct TerminalSurface<W> {
    out: Mutex<W>,
}

impl TerminalSurface<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    pub async fn take_output(&self) -> W
    where
        W: Default,
    {
        std::mem::take(&mut *self.out.lock().await)
    }
}

impl<W: AsyncWrite + Unpin + Send> TerminalSurface<W> {
    async fn write_line(&self, line: &str) -> anyhow::Result<()> {
        let mut out = self.out.lock().await;
        out.write_all(line.as_bytes()).await?;
        out.write_all(b"\n").await?;
        out.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> CountdownSurface for TerminalSurface<W> {
    async fn render(&self, text: DisplayText) -> anyhow::Result<()> {
        self.write_line(&format!("countdown: {text}")).await
    }

    async fn set_trigger_enabled(&self, enabled: bool) -> anyhow::Result<()> {
        let state = if enabled { "enabled" } else { "disabled" };
        self.write_line(&format!("start button {state}")).await
    }
}

/// Prints countdown events as JSON lines until the controller goes away.
pub fn spawn_event_printer(mut events: broadcast::Receiver<EventEnvelope>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut out = io::stdout();
        loop {
            match events.recv().await {
                Ok(envelope) => {
                    let line = match envelope.to_json_line() {
                        Ok(line) => line,
                        Err(error) => {
                            warn!(%error, "failed to encode countdown event");
                            continue;
                        }
                    };
                    if out.write_all(format!("{line}\n").as_bytes()).await.is_err() {
                        break;
                    }
                    let _ = out.flush().await;
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "event printer fell behind");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}

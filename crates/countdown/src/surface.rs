//! Output surfaces a countdown renders to.

use async_trait::async_trait;
use tokio::{sync::Mutex, time::Instant};

use crate::display::DisplayText;

/// The display text and the start trigger a countdown drives.
#[async_trait]
pub trait CountdownSurface: Send + Sync {
    async fn render(&self, text: DisplayText) -> anyhow::Result<()>;
    async fn set_trigger_enabled(&self, enabled: bool) -> anyhow::Result<()>;
}

/// Discards every update. Useful when only the event stream is consumed.
pub struct NullSurface;

#[async_trait]
impl CountdownSurface for NullSurface {
    async fn render(&self, _text: DisplayText) -> anyhow::Result<()> {
        Ok(())
    }

    async fn set_trigger_enabled(&self, _enabled: bool) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceUpdate {
    Display(DisplayText),
    Trigger { enabled: bool },
}

/// Records every update with the instant it arrived.
#[derive(Default)]
pub struct MemorySurface {
    updates: Mutex<Vec<(Instant, SurfaceUpdate)>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn updates(&self) -> Vec<SurfaceUpdate> {
        self.updates
            .lock()
            .await
            .iter()
            .map(|(_, update)| *update)
            .collect()
    }

    pub async fn timed_updates(&self) -> Vec<(Instant, SurfaceUpdate)> {
        self.updates.lock().await.clone()
    }

    pub async fn display_history(&self) -> Vec<String> {
        self.updates
            .lock()
            .await
            .iter()
            .filter_map(|(_, update)| match update {
                SurfaceUpdate::Display(text) => Some(text.to_string()),
                SurfaceUpdate::Trigger { .. } => None,
            })
            .collect()
    }

    /// Current trigger state. A trigger nobody has touched is enabled.
    pub async fn trigger_enabled(&self) -> bool {
        self.updates
            .lock()
            .await
            .iter()
            .rev()
            .find_map(|(_, update)| match update {
                SurfaceUpdate::Trigger { enabled } => Some(*enabled),
                SurfaceUpdate::Display(_) => None,
            })
            .unwrap_or(true)
    }

    async fn push(&self, update: SurfaceUpdate) {
        self.updates.lock().await.push((Instant::now(), update));
    }
}

#[async_trait]
impl CountdownSurface for MemorySurface {
    async fn render(&self, text: DisplayText) -> anyhow::Result<()> {
        self.push(SurfaceUpdate::Display(text)).await;
        Ok(())
    }

    async fn set_trigger_enabled(&self, enabled: bool) -> anyhow::Result<()> {
        self.push(SurfaceUpdate::Trigger { enabled }).await;
        Ok(())
    }
}

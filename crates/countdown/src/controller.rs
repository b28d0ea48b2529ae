use std::{sync::Arc, time::Duration};

use shared::{
    domain::{CountdownSeconds, RunId},
    protocol::{CountdownEvent, EventEnvelope},
};
use tokio::{
    sync::{broadcast, oneshot, Mutex},
    task::JoinHandle,
    time::sleep,
};
use tracing::{debug, info, warn};

use crate::{
    display::{DisplayText, REJECTED_MESSAGE},
    error::CountdownError,
    state::{CountdownState, Step},
    surface::CountdownSurface,
};

pub const DEFAULT_TICK: Duration = Duration::from_secs(1);
const EVENT_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    Completed,
    Cancelled,
}

struct ActiveRun {
    run_id: RunId,
    cancel: Option<oneshot::Sender<()>>,
}

impl ActiveRun {
    fn request_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
            info!(run_id = %self.run_id, "countdown cancellation requested");
        }
    }
}

/// Runs at most one countdown at a time against a single surface.
///
/// Each run is a task that renders one step, then sleeps one tick before the
/// next. The sleep is re-armed after every step rather than taken from a
/// fixed-period interval, so a slow step delays every later one.
pub struct CountdownController {
    surface: Arc<dyn CountdownSurface>,
    tick: Duration,
    active: Mutex<Option<ActiveRun>>,
    events: broadcast::Sender<EventEnvelope>,
}

impl CountdownController {
    pub fn new(surface: Arc<dyn CountdownSurface>) -> Arc<Self> {
        Self::with_tick(surface, DEFAULT_TICK)
    }

    pub fn with_tick(surface: Arc<dyn CountdownSurface>, tick: Duration) -> Arc<Self> {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Arc::new(Self {
            surface,
            tick,
            active: Mutex::new(None),
            events,
        })
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<EventEnvelope> {
        self.events.subscribe()
    }

    pub async fn active_run(&self) -> Option<RunId> {
        self.active.lock().await.as_ref().map(|run| run.run_id)
    }

    pub async fn is_running(&self) -> bool {
        self.active_run().await.is_some()
    }

    /// Handles the start trigger with raw duration text.
    ///
    /// A busy controller ignores the trigger entirely. Invalid text renders
    /// the rejection message and leaves the trigger enabled.
    pub async fn trigger(self: &Arc<Self>, raw: &str) -> Result<RunHandle, CountdownError> {
        if let Some(run_id) = self.active_run().await {
            return Err(CountdownError::AlreadyRunning { run_id });
        }

        let seconds = match CountdownSeconds::parse(raw) {
            Ok(seconds) => seconds,
            Err(source) => {
                warn!(input = raw, %source, "rejected countdown duration");
                self.render(DisplayText::Rejected).await;
                self.publish(CountdownEvent::Rejected {
                    input: raw.to_string(),
                    message: REJECTED_MESSAGE.to_string(),
                });
                return Err(CountdownError::InvalidDuration {
                    input: raw.to_string(),
                    source,
                });
            }
        };

        self.start(seconds).await
    }

    pub async fn start(
        self: &Arc<Self>,
        seconds: CountdownSeconds,
    ) -> Result<RunHandle, CountdownError> {
        let run_id = RunId::new();
        let (cancel_tx, cancel_rx) = oneshot::channel();
        {
            let mut active = self.active.lock().await;
            if let Some(current) = active.as_ref() {
                return Err(CountdownError::AlreadyRunning {
                    run_id: current.run_id,
                });
            }
            *active = Some(ActiveRun {
                run_id,
                cancel: Some(cancel_tx),
            });
            // trigger flips happen under the slot lock so they stay ordered
            // with the run that owns them
            self.set_trigger(Some(run_id), false).await;
        }
        info!(%run_id, seconds = seconds.get(), "countdown started");

        let controller = Arc::clone(self);
        let task = tokio::spawn(async move {
            controller
                .run(CountdownState::new(run_id, seconds), cancel_rx)
                .await
        });

        Ok(RunHandle {
            run_id,
            controller: Arc::clone(self),
            task,
        })
    }

    /// Requests the active run to stop before its next tick.
    pub async fn cancel(&self) -> Result<RunId, CountdownError> {
        let mut active = self.active.lock().await;
        let Some(run) = active.as_mut() else {
            return Err(CountdownError::NotRunning);
        };
        run.request_cancel();
        Ok(run.run_id)
    }

    async fn cancel_run(&self, run_id: RunId) -> Result<(), CountdownError> {
        let mut active = self.active.lock().await;
        match active.as_mut() {
            Some(run) if run.run_id == run_id => {
                run.request_cancel();
                Ok(())
            }
            _ => Err(CountdownError::NotRunning),
        }
    }

    async fn run(
        self: Arc<Self>,
        mut state: CountdownState,
        mut cancel_rx: oneshot::Receiver<()>,
    ) -> CountdownOutcome {
        let run_id = state.run_id();
        let outcome = loop {
            let Some(step) = state.step() else {
                break CountdownOutcome::Completed;
            };

            let shown = step.shown();
            debug!(%run_id, remaining = shown, "countdown tick");
            self.render(DisplayText::Remaining(shown)).await;
            self.publish(CountdownEvent::Tick {
                run_id,
                remaining: shown,
            });

            if let Step::Finished { .. } = step {
                break CountdownOutcome::Completed;
            }

            tokio::select! {
                _ = sleep(self.tick) => {}
                _ = &mut cancel_rx => break CountdownOutcome::Cancelled,
            }
        };

        self.finish(run_id, outcome).await;
        outcome
    }

    async fn finish(&self, run_id: RunId, outcome: CountdownOutcome) {
        let (text, event) = match outcome {
            CountdownOutcome::Completed => {
                (DisplayText::Complete, CountdownEvent::Completed { run_id })
            }
            CountdownOutcome::Cancelled => {
                (DisplayText::Cancelled, CountdownEvent::Cancelled { run_id })
            }
        };
        self.render(text).await;
        self.publish(event);

        let mut active = self.active.lock().await;
        if active.as_ref().is_some_and(|run| run.run_id == run_id) {
            *active = None;
        }
        self.set_trigger(Some(run_id), true).await;
        drop(active);

        info!(%run_id, ?outcome, "countdown finished");
    }

    async fn render(&self, text: DisplayText) {
        if let Err(error) = self.surface.render(text).await {
            warn!(%error, display = %text, "display surface rejected update");
        }
    }

    async fn set_trigger(&self, run_id: Option<RunId>, enabled: bool) {
        if let Err(error) = self.surface.set_trigger_enabled(enabled).await {
            warn!(%error, enabled, "trigger surface rejected update");
        }
        self.publish(CountdownEvent::TriggerChanged { run_id, enabled });
    }

    fn publish(&self, event: CountdownEvent) {
        // no subscribers is fine
        let _ = self.events.send(EventEnvelope::now(event));
    }
}

/// Handle to a started run.
pub struct RunHandle {
    run_id: RunId,
    controller: Arc<CountdownController>,
    task: JoinHandle<CountdownOutcome>,
}

impl RunHandle {
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub async fn cancel(&self) -> Result<(), CountdownError> {
        self.controller.cancel_run(self.run_id).await
    }

    pub async fn join(self) -> Result<CountdownOutcome, CountdownError> {
        let run_id = self.run_id;
        self.task
            .await
            .map_err(|error| CountdownError::TaskFailed {
                run_id,
                reason: error.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;

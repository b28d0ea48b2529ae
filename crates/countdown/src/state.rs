//! Pure step function of a single countdown run.

use shared::domain::{CountdownSeconds, RunId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Active(u8),
    Complete,
}

/// Outcome of one step. `shown` is the value rendered during the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Another step follows after one tick.
    Continue { shown: u8 },
    /// That was the last tick; completion follows without delay.
    Finished { shown: u8 },
}

impl Step {
    pub fn shown(self) -> u8 {
        match self {
            Self::Continue { shown } | Self::Finished { shown } => shown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownState {
    run_id: RunId,
    phase: Phase,
}

impl CountdownState {
    pub fn new(run_id: RunId, seconds: CountdownSeconds) -> Self {
        Self {
            run_id,
            phase: Phase::Active(seconds.get()),
        }
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    pub fn remaining(&self) -> u8 {
        match self.phase {
            Phase::Active(remaining) => remaining,
            Phase::Complete => 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Advances by one tick. Returns `None` once the run is complete.
    pub fn step(&mut self) -> Option<Step> {
        let Phase::Active(remaining) = self.phase else {
            return None;
        };
        if remaining > 1 {
            self.phase = Phase::Active(remaining - 1);
            Some(Step::Continue { shown: remaining })
        } else {
            self.phase = Phase::Complete;
            Some(Step::Finished { shown: remaining })
        }
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;

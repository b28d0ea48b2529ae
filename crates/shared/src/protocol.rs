use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::RunId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum CountdownEvent {
    TriggerChanged {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        run_id: Option<RunId>,
        enabled: bool,
    },
    Tick {
        run_id: RunId,
        remaining: u8,
    },
    Completed {
        run_id: RunId,
    },
    Cancelled {
        run_id: RunId,
    },
    Rejected {
        input: String,
        message: String,
    },
}

impl CountdownEvent {
    pub fn run_id(&self) -> Option<RunId> {
        match self {
            Self::TriggerChanged { run_id, .. } => *run_id,
            Self::Tick { run_id, .. } | Self::Completed { run_id } | Self::Cancelled { run_id } => {
                Some(*run_id)
            }
            Self::Rejected { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub emitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub event: CountdownEvent,
}

impl EventEnvelope {
    pub fn now(event: CountdownEvent) -> Self {
        Self {
            emitted_at: Utc::now(),
            event,
        }
    }

    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;

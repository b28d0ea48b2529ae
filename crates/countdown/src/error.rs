use shared::{
    domain::RunId,
    error::{ErrorCategory, ErrorCode},
    input::InputError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CountdownError {
    #[error("Please enter a number between 1 and 60")]
    InvalidDuration {
        input: String,
        #[source]
        source: InputError,
    },
    #[error("countdown {run_id} is already running")]
    AlreadyRunning { run_id: RunId },
    #[error("no countdown is running")]
    NotRunning,
    #[error("countdown task {run_id} stopped unexpectedly: {reason}")]
    TaskFailed { run_id: RunId, reason: String },
}

impl ErrorCategory for CountdownError {
    fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidDuration { .. } => ErrorCode::Validation,
            Self::AlreadyRunning { .. } => ErrorCode::Conflict,
            Self::NotRunning => ErrorCode::NotFound,
            Self::TaskFailed { .. } => ErrorCode::Internal,
        }
    }
}

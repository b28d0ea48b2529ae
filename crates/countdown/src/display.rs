use std::fmt;

pub const COMPLETE_MESSAGE: &str = "Countdown complete!";
pub const CANCELLED_MESSAGE: &str = "Countdown cancelled.";
pub const REJECTED_MESSAGE: &str = "Please enter a number between 1 and 60";

/// Text shown on the countdown display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayText {
    Remaining(u8),
    Complete,
    Cancelled,
    Rejected,
}

impl fmt::Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remaining(seconds) => write!(f, "{seconds}"),
            Self::Complete => f.write_str(COMPLETE_MESSAGE),
            Self::Cancelled => f.write_str(CANCELLED_MESSAGE),
            Self::Rejected => f.write_str(REJECTED_MESSAGE),
        }
    }
}

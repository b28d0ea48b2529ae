//! Countdown controller: a one-second-resolution countdown that renders to a
//! display surface and holds the start trigger disabled while it runs.

mod controller;
pub mod display;
pub mod error;
pub mod state;
pub mod surface;

pub use controller::{CountdownController, CountdownOutcome, RunHandle, DEFAULT_TICK};
pub use display::DisplayText;
pub use error::CountdownError;
pub use state::{CountdownState, Step};
pub use surface::{CountdownSurface, MemorySurface, NullSurface, SurfaceUpdate};

//! Platform abstraction layer
//!
//! Input sources that produce one `TickInput` snapshot per frame:
//! - `input`: keyboard keys and on-screen buttons
//! - `autopilot`: a simple AI for demos and soak runs

pub mod autopilot;
pub mod input;

pub use autopilot::Autopilot;
pub use input::{Button, InputSource, InputState};

use crate::sim::{GameState, TickInput};

/// Supplies the input snapshot for the next frame.
///
/// Returning `None` means the host is going away and no further frames
/// should be scheduled.
pub trait InputProvider {
    fn poll(&mut self, state: &GameState) -> Option<TickInput>;
}

impl InputProvider for InputState {
    fn poll(&mut self, _state: &GameState) -> Option<TickInput> {
        Some(self.snapshot())
    }
}

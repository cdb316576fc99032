//! # Gesture Interpreter
//!
//! Turns a finished horizontal drag into a navigation command. A drag
//! counts if it travels far enough, or if it is a fast enough flick:
//!
//! ```text
//! momentum = |offset_x| * velocity_x
//!
//! offset_x < -threshold  or  momentum < -momentum_threshold  → Advance
//! offset_x >  threshold  or  momentum >  momentum_threshold  → Retreat
//! otherwise                                                  → None
//! ```

use serde::{Deserialize, Serialize};

pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;
pub const DEFAULT_MOMENTUM_THRESHOLD: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Move to the next card.
    Advance,
    /// Move to the previous card.
    Retreat,
    /// Snap back, no state change.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureInterpreter {
    pub swipe_threshold: f64,
    pub momentum_threshold: f64,
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            momentum_threshold: DEFAULT_MOMENTUM_THRESHOLD,
        }
    }
}

impl GestureInterpreter {
    pub fn new(swipe_threshold: f64, momentum_threshold: f64) -> Self {
        Self {
            swipe_threshold,
            momentum_threshold,
        }
    }

    pub fn interpret(&self, offset_x: f64, velocity_x: f64) -> Command {
        let momentum = offset_x.abs() * velocity_x;

        if offset_x < -self.swipe_threshold || momentum < -self.momentum_threshold {
            Command::Advance
        } else if offset_x > self.swipe_threshold || momentum > self.momentum_threshold {
            Command::Retreat
        } else {
            Command::None
        }
    }

    /// Whether a drag travelled far enough that the click ending it should not count.
    pub fn exceeds_threshold(&self, offset_x: f64) -> bool {
        offset_x.abs() > self.swipe_threshold
    }
}

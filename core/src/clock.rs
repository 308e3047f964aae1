//! Simulation clock: owns the tick counter.

use crate::types::Tick;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SimClock {
    pub current_tick: Tick,
}

impl SimClock {
    /// A fresh clock. No tick has been processed yet.
    pub fn new() -> Self {
        Self { current_tick: 0 }
    }

    /// Advance one tick. Returns the new tick number (first call gives 1).
    pub fn advance(&mut self) -> Tick {
        self.current_tick += 1;
        self.current_tick
    }
}

use crate::types::{PassengerId, Tick};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    // ── Configuration ─────────────────────────────
    #[error("Duplicate flight number '{flight_number}' in roster")]
    DuplicateFlight { flight_number: String },

    #[error("Invalid flight '{flight_number}': {reason}")]
    InvalidFlight { flight_number: String, reason: String },

    #[error("Flight '{flight_number}' has negative capacity {capacity}")]
    NegativeCapacity { flight_number: String, capacity: i64 },

    #[error("Name pool '{pool}' is empty")]
    EmptyNamePool { pool: &'static str },

    #[error("Probability '{name}' must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    // ── Runtime ───────────────────────────────────
    #[error("Passenger {passenger_id} not found in registry")]
    UnknownPassenger { passenger_id: PassengerId },

    #[error("Invariant violated at tick {tick}: {detail}")]
    InvariantViolation { tick: Tick, detail: String },
}

impl SimError {
    pub(crate) fn invariant(tick: Tick, detail: impl Into<String>) -> Self {
        Self::InvariantViolation {
            tick,
            detail: detail.into(),
        }
    }

    /// True for errors raised while validating configuration or roster.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateFlight { .. }
                | Self::InvalidFlight { .. }
                | Self::NegativeCapacity { .. }
                | Self::EmptyNamePool { .. }
                | Self::ProbabilityOutOfRange { .. }
        )
    }
}

pub type SimResult<T> = Result<T, SimError>;

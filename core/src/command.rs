use crate::types::{FlightNumber, Tick};
use serde::{Deserialize, Serialize};

/// Operator-issued commands, applied at the start of the next tick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum OperatorCommand {
    /// Walk-in booking: admit a named passenger to a bookable flight.
    AdmitPassenger {
        name: String,
        flight_number: FlightNumber,
    },
}

/// A queued command with its submission tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueuedCommand {
    pub queued_at: Tick,
    pub command: OperatorCommand,
}

//! Everything observable that happens during a tick.
//!
//! RULE: Subsystems never print. They return events, and the engine
//! hands them to whoever renders the run.

use crate::types::{FlightNumber, PassengerId, Tick};
use serde::{Deserialize, Serialize};

/// Every event emitted during simulation, in emission order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    // ── Arrivals ───────────────────────────────────
    PassengerArrived {
        tick: Tick,
        passenger_id: PassengerId,
        name: String,
        flight_number: FlightNumber,
    },
    BookingRejected {
        tick: Tick,
        name: String,
        flight_number: FlightNumber,
        reason: String,
    },

    // ── Checkpoints ────────────────────────────────
    PassengerCheckedIn {
        tick: Tick,
        passenger_id: PassengerId,
        name: String,
        flight_number: FlightNumber,
    },
    SecurityCleared {
        tick: Tick,
        passenger_id: PassengerId,
        name: String,
        flight_number: FlightNumber,
    },

    // ── Flights ────────────────────────────────────
    FlightDelayed {
        tick: Tick,
        flight_number: FlightNumber,
        new_departure_tick: Tick,
    },
    BoardingStarted {
        tick: Tick,
        flight_number: FlightNumber,
    },
    PassengerBoarded {
        tick: Tick,
        passenger_id: PassengerId,
        name: String,
        flight_number: FlightNumber,
    },
    FlightDeparted {
        tick: Tick,
        flight_number: FlightNumber,
        passengers_on_board: usize,
    },

    // ── Departure resolution ───────────────────────
    /// Cleared security but every seat was taken.
    DeniedBoarding {
        tick: Tick,
        passenger_id: PassengerId,
        name: String,
        flight_number: FlightNumber,
    },
    /// Held a ticket but did not make it on board in time.
    MissedFlight {
        tick: Tick,
        passenger_id: PassengerId,
        name: String,
        flight_number: FlightNumber,
    },
    /// Never reached a check-in counter before departure.
    PassengerAbandoned {
        tick: Tick,
        passenger_id: PassengerId,
        name: String,
        flight_number: FlightNumber,
    },
}

impl SimEvent {
    pub fn tick(&self) -> Tick {
        match self {
            Self::PassengerArrived { tick, .. }
            | Self::BookingRejected { tick, .. }
            | Self::PassengerCheckedIn { tick, .. }
            | Self::SecurityCleared { tick, .. }
            | Self::FlightDelayed { tick, .. }
            | Self::BoardingStarted { tick, .. }
            | Self::PassengerBoarded { tick, .. }
            | Self::FlightDeparted { tick, .. }
            | Self::DeniedBoarding { tick, .. }
            | Self::MissedFlight { tick, .. }
            | Self::PassengerAbandoned { tick, .. } => *tick,
        }
    }

    pub fn flight_number(&self) -> &str {
        match self {
            Self::PassengerArrived { flight_number, .. }
            | Self::BookingRejected { flight_number, .. }
            | Self::PassengerCheckedIn { flight_number, .. }
            | Self::SecurityCleared { flight_number, .. }
            | Self::FlightDelayed { flight_number, .. }
            | Self::BoardingStarted { flight_number, .. }
            | Self::PassengerBoarded { flight_number, .. }
            | Self::FlightDeparted { flight_number, .. }
            | Self::DeniedBoarding { flight_number, .. }
            | Self::MissedFlight { flight_number, .. }
            | Self::PassengerAbandoned { flight_number, .. } => flight_number,
        }
    }

    pub fn passenger_id(&self) -> Option<PassengerId> {
        match self {
            Self::PassengerArrived { passenger_id, .. }
            | Self::PassengerCheckedIn { passenger_id, .. }
            | Self::SecurityCleared { passenger_id, .. }
            | Self::PassengerBoarded { passenger_id, .. }
            | Self::DeniedBoarding { passenger_id, .. }
            | Self::MissedFlight { passenger_id, .. }
            | Self::PassengerAbandoned { passenger_id, .. } => Some(*passenger_id),
            _ => None,
        }
    }
}

/// Stable string name of a SimEvent variant, matching its serde tag.
pub fn event_type_name(event: &SimEvent) -> &'static str {
    match event {
        SimEvent::PassengerArrived { .. }   => "passenger_arrived",
        SimEvent::BookingRejected { .. }    => "booking_rejected",
        SimEvent::PassengerCheckedIn { .. } => "passenger_checked_in",
        SimEvent::SecurityCleared { .. }    => "security_cleared",
        SimEvent::FlightDelayed { .. }      => "flight_delayed",
        SimEvent::BoardingStarted { .. }    => "boarding_started",
        SimEvent::PassengerBoarded { .. }   => "passenger_boarded",
        SimEvent::FlightDeparted { .. }     => "flight_departed",
        SimEvent::DeniedBoarding { .. }     => "denied_boarding",
        SimEvent::MissedFlight { .. }       => "missed_flight",
        SimEvent::PassengerAbandoned { .. } => "passenger_abandoned",
    }
}

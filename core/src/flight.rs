//! Flight entity and its explicit state-transition table.
//!
//! Status only moves forward: OnTime, Delayed, Boarding, Departed.
//! Delayed and Boarding are both optional; Departed is terminal.

use crate::{
    error::{SimError, SimResult},
    types::{FlightNumber, PassengerId, Tick},
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FlightStatus {
    OnTime,
    Delayed,
    Boarding,
    Departed,
}

impl FlightStatus {
    /// Flights in these states still accept new bookings.
    pub fn is_bookable(&self) -> bool {
        matches!(self, Self::OnTime | Self::Delayed)
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::OnTime => "OnTime",
            Self::Delayed => "Delayed",
            Self::Boarding => "Boarding",
            Self::Departed => "Departed",
        };
        f.write_str(label)
    }
}

/// Conditions evaluated by the flight subsystem each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightTrigger {
    DelayGranted,
    BoardingWindow,
    DepartureDue,
}

/// Side effect the caller must carry out after a transition fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEffect {
    PostponeDeparture,
    OpenBoarding,
    ResolveManifest,
}

#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub from: FlightStatus,
    pub trigger: FlightTrigger,
    pub to: FlightStatus,
    pub effect: TransitionEffect,
}

const fn row(
    from: FlightStatus,
    trigger: FlightTrigger,
    to: FlightStatus,
    effect: TransitionEffect,
) -> Transition {
    Transition { from, trigger, to, effect }
}

/// Every legal transition. Anything absent here is a defect.
pub const TRANSITIONS: &[Transition] = &[
    row(FlightStatus::OnTime,   FlightTrigger::DelayGranted,   FlightStatus::Delayed,  TransitionEffect::PostponeDeparture),
    row(FlightStatus::OnTime,   FlightTrigger::BoardingWindow, FlightStatus::Boarding, TransitionEffect::OpenBoarding),
    row(FlightStatus::Delayed,  FlightTrigger::BoardingWindow, FlightStatus::Boarding, TransitionEffect::OpenBoarding),
    row(FlightStatus::OnTime,   FlightTrigger::DepartureDue,   FlightStatus::Departed, TransitionEffect::ResolveManifest),
    row(FlightStatus::Delayed,  FlightTrigger::DepartureDue,   FlightStatus::Departed, TransitionEffect::ResolveManifest),
    row(FlightStatus::Boarding, FlightTrigger::DepartureDue,   FlightStatus::Departed, TransitionEffect::ResolveManifest),
];

pub fn transition_for(from: FlightStatus, trigger: FlightTrigger) -> Option<&'static Transition> {
    TRANSITIONS
        .iter()
        .find(|t| t.from == from && t.trigger == trigger)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub flight_number: FlightNumber,
    pub destination: String,
    capacity: usize,
    departure_tick: Tick,
    status: FlightStatus,
    boarded: Vec<PassengerId>,
}

impl Flight {
    pub fn new(
        flight_number: impl Into<FlightNumber>,
        destination: impl Into<String>,
        departure_tick: Tick,
        capacity: usize,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            destination: destination.into(),
            capacity,
            departure_tick,
            status: FlightStatus::OnTime,
            boarded: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn departure_tick(&self) -> Tick {
        self.departure_tick
    }

    pub fn status(&self) -> FlightStatus {
        self.status
    }

    pub fn boarded(&self) -> &[PassengerId] {
        &self.boarded
    }

    pub fn free_seats(&self) -> usize {
        self.capacity.saturating_sub(self.boarded.len())
    }

    pub fn is_full(&self) -> bool {
        self.boarded.len() >= self.capacity
    }

    pub fn is_departed(&self) -> bool {
        self.status == FlightStatus::Departed
    }

    /// Fire `trigger` against the transition table and return the
    /// effect the caller still owes.
    pub fn fire(&mut self, tick: Tick, trigger: FlightTrigger) -> SimResult<TransitionEffect> {
        let transition = transition_for(self.status, trigger).ok_or_else(|| {
            SimError::invariant(
                tick,
                format!(
                    "flight {} has no transition from {} on {:?}",
                    self.flight_number, self.status, trigger
                ),
            )
        })?;
        self.status = transition.to;
        Ok(transition.effect)
    }

    /// Push departure back. Departure never moves earlier.
    pub fn postpone(&mut self, by: Tick) {
        self.departure_tick = self.departure_tick.saturating_add(by);
    }

    pub fn board(&mut self, tick: Tick, passenger_id: PassengerId) -> SimResult<()> {
        if self.status != FlightStatus::Boarding {
            return Err(SimError::invariant(
                tick,
                format!("flight {} boarded passenger while {}", self.flight_number, self.status),
            ));
        }
        if self.is_full() {
            return Err(SimError::invariant(
                tick,
                format!(
                    "flight {} over capacity ({} seats)",
                    self.flight_number, self.capacity
                ),
            ));
        }
        self.boarded.push(passenger_id);
        Ok(())
    }
}

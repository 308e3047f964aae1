//! Per-tick report: the data contract handed to renderers.

use crate::{
    event::SimEvent,
    flight::{Flight, FlightStatus},
    store::AirportStore,
    types::{FlightNumber, Tick},
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightSnapshot {
    pub flight_number: FlightNumber,
    pub destination: String,
    pub status: FlightStatus,
    pub departure_tick: Tick,
    pub capacity: usize,
    pub boarded: usize,
}

impl From<&Flight> for FlightSnapshot {
    fn from(flight: &Flight) -> Self {
        Self {
            flight_number: flight.flight_number.clone(),
            destination: flight.destination.clone(),
            status: flight.status(),
            departure_tick: flight.departure_tick(),
            capacity: flight.capacity(),
            boarded: flight.boarded().len(),
        }
    }
}

/// Status-board line, e.g. `PS101 to Kyiv - Delayed (Departs at 13)`.
impl fmt::Display for FlightSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {} - {} (Departs at {})",
            self.flight_number, self.destination, self.status, self.departure_tick
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TickReport {
    pub tick: Tick,
    pub events: Vec<SimEvent>,
    pub flights: Vec<FlightSnapshot>,
    pub check_in_queue: usize,
    pub security_queue: usize,
    pub boarding_eligible: usize,
}

impl TickReport {
    pub fn capture(tick: Tick, events: Vec<SimEvent>, store: &AirportStore) -> Self {
        Self {
            tick,
            events,
            flights: store.flights().iter().map(FlightSnapshot::from).collect(),
            check_in_queue: store.check_in().len(),
            security_queue: store.security().len(),
            boarding_eligible: store.boarding_eligible_count(),
        }
    }

    pub fn flight(&self, flight_number: &str) -> Option<&FlightSnapshot> {
        self.flights
            .iter()
            .find(|f| f.flight_number == flight_number)
    }

    pub fn count_events(&self, pred: impl Fn(&SimEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

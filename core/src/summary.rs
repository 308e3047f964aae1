//! Running outcome totals for a simulation run.

use crate::{event::SimEvent, types::Tick};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunSummary {
    pub final_tick: Tick,
    pub passengers_created: usize,
    pub boarded: usize,
    pub denied_boarding: usize,
    pub missed: usize,
    pub abandoned: usize,
    pub bookings_rejected: usize,
    pub flights_delayed: usize,
    pub flights_departed: usize,
}

impl RunSummary {
    pub fn record(&mut self, tick: Tick, events: &[SimEvent]) {
        self.final_tick = tick;
        for event in events {
            match event {
                SimEvent::PassengerArrived { .. } => self.passengers_created += 1,
                SimEvent::BookingRejected { .. } => self.bookings_rejected += 1,
                SimEvent::FlightDelayed { .. } => self.flights_delayed += 1,
                SimEvent::PassengerBoarded { .. } => self.boarded += 1,
                SimEvent::FlightDeparted { .. } => self.flights_departed += 1,
                SimEvent::DeniedBoarding { .. } => self.denied_boarding += 1,
                SimEvent::MissedFlight { .. } => self.missed += 1,
                SimEvent::PassengerAbandoned { .. } => self.abandoned += 1,
                SimEvent::PassengerCheckedIn { .. }
                | SimEvent::SecurityCleared { .. }
                | SimEvent::BoardingStarted { .. } => {}
            }
        }
    }

    /// Passengers whose flight has departed, whatever the outcome.
    pub fn resolved(&self) -> usize {
        self.boarded + self.denied_boarding + self.missed + self.abandoned
    }
}

//! Flight subsystem: delay decision, boarding window, boarding
//! throughput and departure, evaluated per flight in roster order.
//!
//! Step order per flight per tick (fixed):
//!   1. delay roll     at departure - delay_check_lead (OnTime only)
//!   2. boarding start at departure - boarding_lead (OnTime/Delayed)
//!   A lead longer than the departure tick never fires.
//!   3. board up to min(boarding_rate, free seats) eligible passengers
//!   4. depart once tick >= departure, then resolve the manifest

use crate::{
    config::SimConfig,
    error::SimResult,
    event::SimEvent,
    flight::{FlightStatus, FlightTrigger, TransitionEffect},
    rng::RandomSource,
    store::AirportStore,
    subsystem::SimSubsystem,
    types::{PassengerId, Tick},
};
use std::collections::HashSet;

pub struct FlightSubsystem {
    chance_delayed: f64,
    delay_offset_ticks: Tick,
    boarding_lead_ticks: Tick,
    delay_check_lead_ticks: Tick,
    boarding_rate: u32,
}

impl FlightSubsystem {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            chance_delayed: config.chance_delayed,
            delay_offset_ticks: config.delay_offset_ticks,
            boarding_lead_ticks: config.boarding_lead_ticks,
            delay_check_lead_ticks: config.delay_check_lead_ticks,
            boarding_rate: config.boarding_rate,
        }
    }

    fn roll_delay(
        &self,
        tick: Tick,
        idx: usize,
        store: &mut AirportStore,
        rng: &mut dyn RandomSource,
        events: &mut Vec<SimEvent>,
    ) -> SimResult<()> {
        let flight = store.flight(idx);
        if flight.status() != FlightStatus::OnTime
            || flight.departure_tick().checked_sub(self.delay_check_lead_ticks) != Some(tick)
        {
            return Ok(());
        }
        if !rng.chance(self.chance_delayed) {
            return Ok(());
        }

        let flight = store.flight_mut(idx);
        if flight.fire(tick, FlightTrigger::DelayGranted)? == TransitionEffect::PostponeDeparture {
            flight.postpone(self.delay_offset_ticks);
        }
        log::debug!(
            "tick={tick} flight: {} delayed to {}",
            flight.flight_number,
            flight.departure_tick()
        );
        events.push(SimEvent::FlightDelayed {
            tick,
            flight_number: flight.flight_number.clone(),
            new_departure_tick: flight.departure_tick(),
        });
        Ok(())
    }

    fn open_boarding(
        &self,
        tick: Tick,
        idx: usize,
        store: &mut AirportStore,
        events: &mut Vec<SimEvent>,
    ) -> SimResult<()> {
        let flight = store.flight_mut(idx);
        if !flight.status().is_bookable()
            || flight.departure_tick().checked_sub(self.boarding_lead_ticks) != Some(tick)
        {
            return Ok(());
        }
        flight.fire(tick, FlightTrigger::BoardingWindow)?;
        log::debug!("tick={tick} flight: {} boarding", flight.flight_number);
        events.push(SimEvent::BoardingStarted {
            tick,
            flight_number: flight.flight_number.clone(),
        });
        Ok(())
    }

    fn board_passengers(
        &self,
        tick: Tick,
        idx: usize,
        store: &mut AirportStore,
        events: &mut Vec<SimEvent>,
    ) -> SimResult<()> {
        let flight = store.flight(idx);
        if flight.status() != FlightStatus::Boarding || flight.free_seats() == 0 {
            return Ok(());
        }
        let take = (self.boarding_rate as usize).min(flight.free_seats());
        let flight_number = flight.flight_number.clone();

        let selected: Vec<PassengerId> = store
            .manifest(&flight_number)
            .iter()
            .copied()
            .filter(|id| store.passenger(*id).is_some_and(|p| p.is_boarding_eligible()))
            .take(take)
            .collect();

        for passenger_id in selected {
            let passenger = store.passenger_mut(passenger_id)?;
            passenger.board(tick)?;
            let name = passenger.name.clone();
            store.flight_mut(idx).board(tick, passenger_id)?;
            log::debug!("tick={tick} flight: {name} boarded {flight_number}");
            events.push(SimEvent::PassengerBoarded {
                tick,
                passenger_id,
                name,
                flight_number: flight_number.clone(),
            });
        }
        Ok(())
    }

    fn depart(
        &self,
        tick: Tick,
        idx: usize,
        store: &mut AirportStore,
        events: &mut Vec<SimEvent>,
    ) -> SimResult<()> {
        let flight = store.flight(idx);
        if flight.is_departed() || tick < flight.departure_tick() {
            return Ok(());
        }

        let flight = store.flight_mut(idx);
        let effect = flight.fire(tick, FlightTrigger::DepartureDue)?;
        let flight_number = flight.flight_number.clone();
        let full = flight.is_full();
        let on_board = flight.boarded().len();
        events.push(SimEvent::FlightDeparted {
            tick,
            flight_number: flight_number.clone(),
            passengers_on_board: on_board,
        });
        if effect != TransitionEffect::ResolveManifest {
            return Ok(());
        }

        let mut stranded = HashSet::new();
        let (mut denied, mut missed, mut abandoned) = (0usize, 0usize, 0usize);
        for passenger_id in store.take_manifest(&flight_number) {
            let p = store.remove_passenger(passenger_id)?;
            if p.is_on_board() {
                continue;
            }
            stranded.insert(passenger_id);

            let (has_ticket, cleared) = (p.has_ticket(), p.passed_security());
            let (name, flight_number) = (p.name, p.flight_number);
            let event = if !has_ticket {
                abandoned += 1;
                SimEvent::PassengerAbandoned { tick, passenger_id, name, flight_number }
            } else if cleared && full {
                denied += 1;
                SimEvent::DeniedBoarding { tick, passenger_id, name, flight_number }
            } else {
                missed += 1;
                SimEvent::MissedFlight { tick, passenger_id, name, flight_number }
            };
            events.push(event);
        }
        store.purge_from_queues(&stranded);

        log::debug!(
            "tick={tick} flight: {flight_number} departed with {on_board} \
             (no-seat {denied}, no-time {missed}, abandoned {abandoned})"
        );
        Ok(())
    }
}

impl SimSubsystem for FlightSubsystem {
    fn name(&self) -> &'static str {
        "flight"
    }

    fn update(
        &mut self,
        tick: Tick,
        store: &mut AirportStore,
        rng: &mut dyn RandomSource,
    ) -> SimResult<Vec<SimEvent>> {
        let mut events = Vec::new();
        for idx in 0..store.flights().len() {
            self.roll_delay(tick, idx, store, rng, &mut events)?;
            self.open_boarding(tick, idx, store, &mut events)?;
            self.board_passengers(tick, idx, store, &mut events)?;
            self.depart(tick, idx, store, &mut events)?;
        }
        Ok(events)
    }
}

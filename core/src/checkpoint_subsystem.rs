//! Check-in and security checkpoints.
//!
//! Both drain their queue in strict FIFO order, capped at the queue's
//! per-tick throughput. Check-in hands passengers on to security;
//! security hands them to nobody (boarding polls the registry).

use crate::{
    error::SimResult,
    event::SimEvent,
    rng::RandomSource,
    store::AirportStore,
    subsystem::SimSubsystem,
    types::Tick,
};

pub struct CheckInSubsystem;

impl SimSubsystem for CheckInSubsystem {
    fn name(&self) -> &'static str {
        "check_in"
    }

    fn update(
        &mut self,
        tick: Tick,
        store: &mut AirportStore,
        _rng: &mut dyn RandomSource,
    ) -> SimResult<Vec<SimEvent>> {
        let batch = store.check_in_mut().release_batch();
        let mut events = Vec::with_capacity(batch.len());

        for passenger_id in batch {
            let passenger = store.passenger_mut(passenger_id)?;
            passenger.check_in(tick)?;
            let name = passenger.name.clone();
            let flight_number = passenger.flight_number.clone();
            store.security_mut().enqueue(passenger_id);
            events.push(SimEvent::PassengerCheckedIn {
                tick,
                passenger_id,
                name,
                flight_number,
            });
        }

        if !events.is_empty() {
            log::debug!(
                "tick={tick} check_in: processed {} ({} waiting)",
                events.len(),
                store.check_in().len()
            );
        }
        Ok(events)
    }
}

pub struct SecuritySubsystem;

impl SimSubsystem for SecuritySubsystem {
    fn name(&self) -> &'static str {
        "security"
    }

    fn update(
        &mut self,
        tick: Tick,
        store: &mut AirportStore,
        _rng: &mut dyn RandomSource,
    ) -> SimResult<Vec<SimEvent>> {
        let batch = store.security_mut().release_batch();
        let mut events = Vec::with_capacity(batch.len());

        for passenger_id in batch {
            let passenger = store.passenger_mut(passenger_id)?;
            passenger.clear_security(tick)?;
            events.push(SimEvent::SecurityCleared {
                tick,
                passenger_id,
                name: passenger.name.clone(),
                flight_number: passenger.flight_number.clone(),
            });
        }

        if !events.is_empty() {
            log::debug!(
                "tick={tick} security: cleared {} ({} waiting)",
                events.len(),
                store.security().len()
            );
        }
        Ok(events)
    }
}

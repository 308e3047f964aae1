//! Arrival subsystem: walk-in commands, then at most one random
//! arrival per tick.

use crate::{
    command::OperatorCommand,
    config::SimConfig,
    error::SimResult,
    event::SimEvent,
    name_generator::NameGenerator,
    rng::RandomSource,
    store::AirportStore,
    subsystem::SimSubsystem,
    types::Tick,
};

pub struct ArrivalSubsystem {
    chance_new_passenger: f64,
    names: NameGenerator,
}

impl ArrivalSubsystem {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            chance_new_passenger: config.chance_new_passenger,
            names: NameGenerator::from_config(config),
        }
    }

    fn apply_commands(&self, tick: Tick, store: &mut AirportStore) -> Vec<SimEvent> {
        let mut events = Vec::new();
        for queued in store.take_commands() {
            let queued_at = queued.queued_at;
            match queued.command {
                OperatorCommand::AdmitPassenger { name, flight_number } => {
                    let reason = match store.flight_index(&flight_number) {
                        None => Some("unknown flight".to_string()),
                        Some(idx) => {
                            let status = store.flight(idx).status();
                            (!status.is_bookable()).then(|| format!("flight is {status}"))
                        }
                    };
                    if let Some(reason) = reason {
                        log::debug!(
                            "tick={tick} arrival: rejected {name} for {flight_number} \
                             (queued at {queued_at}): {reason}"
                        );
                        events.push(SimEvent::BookingRejected {
                            tick,
                            name,
                            flight_number,
                            reason,
                        });
                        continue;
                    }
                    let passenger_id = store.admit_passenger(name.clone(), &flight_number);
                    log::debug!(
                        "tick={tick} arrival: walk-in {name} (#{passenger_id}) for {flight_number}, \
                         queued at {queued_at}"
                    );
                    events.push(SimEvent::PassengerArrived {
                        tick,
                        passenger_id,
                        name,
                        flight_number,
                    });
                }
            }
        }
        events
    }
}

impl SimSubsystem for ArrivalSubsystem {
    fn name(&self) -> &'static str {
        "arrival"
    }

    fn update(
        &mut self,
        tick: Tick,
        store: &mut AirportStore,
        rng: &mut dyn RandomSource,
    ) -> SimResult<Vec<SimEvent>> {
        let mut events = self.apply_commands(tick, store);

        if !rng.chance(self.chance_new_passenger) {
            return Ok(events);
        }

        let bookable = store.bookable_flights();
        if bookable.is_empty() {
            log::debug!("tick={tick} arrival: no bookable flights");
            return Ok(events);
        }

        let idx = bookable[rng.next_u64_below(bookable.len() as u64) as usize];
        let flight_number = store.flight(idx).flight_number.clone();
        let name = self.names.generate_full_name(rng);
        let passenger_id = store.admit_passenger(name.clone(), &flight_number);

        log::debug!("tick={tick} arrival: {name} (#{passenger_id}) for {flight_number}");
        events.push(SimEvent::PassengerArrived {
            tick,
            passenger_id,
            name,
            flight_number,
        });
        Ok(events)
    }
}

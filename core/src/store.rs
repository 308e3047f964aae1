//! Engine-owned simulation state.
//!
//! RULE: Only the store owns passengers. Flights, queues and manifests
//! refer to them by id. Subsystems mutate state through store methods.

use crate::{
    command::QueuedCommand,
    config::{Roster, SimConfig},
    error::{SimError, SimResult},
    flight::Flight,
    passenger::Passenger,
    queue::ProcessingQueue,
    types::{FlightNumber, PassengerId, Tick},
};
use std::collections::{BTreeMap, HashMap, HashSet};

pub struct AirportStore {
    flights: Vec<Flight>,
    /// Keyed by sequential id, so iteration order is arrival order.
    passengers: BTreeMap<PassengerId, Passenger>,
    /// Booked passenger ids per flight, in arrival order.
    manifests: HashMap<FlightNumber, Vec<PassengerId>>,
    check_in: ProcessingQueue,
    security: ProcessingQueue,
    pending_commands: Vec<QueuedCommand>,
    next_passenger_id: PassengerId,
}

impl AirportStore {
    /// Build the store from a validated roster.
    pub fn open(roster: &Roster, config: &SimConfig) -> SimResult<Self> {
        roster.validate()?;
        let flights = roster
            .flights
            .iter()
            .map(|spec| {
                let capacity = usize::try_from(spec.capacity).map_err(|_| SimError::NegativeCapacity {
                    flight_number: spec.flight_number.clone(),
                    capacity: spec.capacity,
                })?;
                Ok(Flight::new(
                    spec.flight_number.clone(),
                    spec.destination.clone(),
                    spec.departure_tick,
                    capacity,
                ))
            })
            .collect::<SimResult<Vec<_>>>()?;
        let manifests = flights
            .iter()
            .map(|f| (f.flight_number.clone(), Vec::new()))
            .collect();

        Ok(Self {
            flights,
            passengers: BTreeMap::new(),
            manifests,
            check_in: ProcessingQueue::new("check_in", config.check_in_counters),
            security: ProcessingQueue::new("security", config.security_gates),
            pending_commands: Vec::new(),
            next_passenger_id: 1,
        })
    }

    // ── Flights ────────────────────────────────────────────────

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn flight(&self, index: usize) -> &Flight {
        &self.flights[index]
    }

    pub fn flight_mut(&mut self, index: usize) -> &mut Flight {
        &mut self.flights[index]
    }

    pub fn flight_index(&self, flight_number: &str) -> Option<usize> {
        self.flights
            .iter()
            .position(|f| f.flight_number == flight_number)
    }

    /// Indices of flights still accepting bookings, in roster order.
    pub fn bookable_flights(&self) -> Vec<usize> {
        self.flights
            .iter()
            .enumerate()
            .filter(|(_, f)| f.status().is_bookable())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn all_departed(&self) -> bool {
        self.flights.iter().all(Flight::is_departed)
    }

    // ── Passengers ─────────────────────────────────────────────

    /// Register a new passenger and send them to check-in.
    pub fn admit_passenger(&mut self, name: String, flight_number: &str) -> PassengerId {
        let id = self.next_passenger_id;
        self.next_passenger_id += 1;
        self.passengers
            .insert(id, Passenger::new(id, name, flight_number));
        self.manifests
            .entry(flight_number.to_string())
            .or_default()
            .push(id);
        self.check_in.enqueue(id);
        id
    }

    pub fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.get(&id)
    }

    pub fn passenger_mut(&mut self, id: PassengerId) -> SimResult<&mut Passenger> {
        self.passengers
            .get_mut(&id)
            .ok_or(SimError::UnknownPassenger { passenger_id: id })
    }

    pub fn remove_passenger(&mut self, id: PassengerId) -> SimResult<Passenger> {
        self.passengers
            .remove(&id)
            .ok_or(SimError::UnknownPassenger { passenger_id: id })
    }

    /// Registry contents in arrival order.
    pub fn passengers(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.values()
    }

    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    pub fn boarding_eligible_count(&self) -> usize {
        self.passengers
            .values()
            .filter(|p| p.is_boarding_eligible())
            .count()
    }

    pub fn manifest(&self, flight_number: &str) -> &[PassengerId] {
        self.manifests
            .get(flight_number)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Detach a flight's manifest for departure resolution.
    pub fn take_manifest(&mut self, flight_number: &str) -> Vec<PassengerId> {
        self.manifests
            .get_mut(flight_number)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    // ── Queues ─────────────────────────────────────────────────

    pub fn check_in(&self) -> &ProcessingQueue {
        &self.check_in
    }

    pub fn check_in_mut(&mut self) -> &mut ProcessingQueue {
        &mut self.check_in
    }

    pub fn security(&self) -> &ProcessingQueue {
        &self.security
    }

    pub fn security_mut(&mut self) -> &mut ProcessingQueue {
        &mut self.security
    }

    /// Remove resolved passengers from whichever queue still holds them.
    pub fn purge_from_queues(&mut self, ids: &HashSet<PassengerId>) -> usize {
        if ids.is_empty() {
            return 0;
        }
        self.check_in.purge(ids) + self.security.purge(ids)
    }

    // ── Commands ───────────────────────────────────────────────

    pub fn queue_command(&mut self, command: QueuedCommand) {
        self.pending_commands.push(command);
    }

    pub fn take_commands(&mut self) -> Vec<QueuedCommand> {
        std::mem::take(&mut self.pending_commands)
    }

    // ── Invariants ─────────────────────────────────────────────

    /// Verify the structural contracts after a tick.
    pub fn check_invariants(&self, tick: Tick) -> SimResult<()> {
        for flight in &self.flights {
            if flight.boarded().len() > flight.capacity() {
                return Err(SimError::invariant(
                    tick,
                    format!(
                        "flight {} has {} boarded over capacity {}",
                        flight.flight_number,
                        flight.boarded().len(),
                        flight.capacity()
                    ),
                ));
            }
            if flight.is_departed() && !self.manifest(&flight.flight_number).is_empty() {
                return Err(SimError::invariant(
                    tick,
                    format!("departed flight {} still has booked passengers", flight.flight_number),
                ));
            }
        }

        for p in self.passengers.values() {
            if !p.flags_consistent() {
                return Err(SimError::invariant(
                    tick,
                    format!("passenger {} has inconsistent progress flags", p.id),
                ));
            }
        }

        let mut queued = HashSet::new();
        for id in self.check_in.iter().chain(self.security.iter()) {
            if !self.passengers.contains_key(&id) {
                return Err(SimError::invariant(tick, format!("queued passenger {id} is not registered")));
            }
            if !queued.insert(id) {
                return Err(SimError::invariant(tick, format!("passenger {id} queued twice")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlightSpec;

    fn store() -> AirportStore {
        let roster = Roster::new(vec![
            FlightSpec::new("AA1", "Oslo", 6, 1),
            FlightSpec::new("AA2", "Rome", 9, 3),
        ]);
        AirportStore::open(&roster, &SimConfig::default()).unwrap()
    }

    #[test]
    fn admission_registers_and_queues() {
        let mut s = store();
        let a = s.admit_passenger("Ross Geller".into(), "AA1");
        let b = s.admit_passenger("Rachel Green".into(), "AA2");
        assert_eq!((a, b), (1, 2));
        assert_eq!(s.manifest("AA1"), &[1]);
        assert_eq!(s.check_in().iter().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(s.passenger_count(), 2);
        s.check_invariants(1).unwrap();
    }

    #[test]
    fn take_manifest_empties_it() {
        let mut s = store();
        s.admit_passenger("Ross Geller".into(), "AA1");
        assert_eq!(s.take_manifest("AA1"), vec![1]);
        assert!(s.manifest("AA1").is_empty());
        assert!(s.take_manifest("ZZ9").is_empty());
    }

    #[test]
    fn unregistered_queued_id_is_flagged() {
        let mut s = store();
        let id = s.admit_passenger("Ross Geller".into(), "AA1");
        s.remove_passenger(id).unwrap();
        assert!(matches!(
            s.check_invariants(2),
            Err(SimError::InvariantViolation { tick: 2, .. })
        ));
        assert!(matches!(s.remove_passenger(id), Err(SimError::UnknownPassenger { passenger_id: 1 })));
    }

    #[test]
    fn bookable_flights_in_roster_order() {
        let s = store();
        assert_eq!(s.bookable_flights(), vec![0, 1]);
        assert_eq!(s.flight_index("AA2"), Some(1));
        assert!(!s.all_departed());
    }

    #[test]
    fn queues_take_throughput_from_config() {
        let config = SimConfig { check_in_counters: 4, security_gates: 0, ..SimConfig::default() };
        let s = AirportStore::open(&Roster::new(vec![]), &config).unwrap();
        assert_eq!(s.check_in().throughput(), 4);
        assert_eq!(s.security().throughput(), 0);
    }

    #[test]
    fn commands_drain_in_submission_order() {
        use crate::command::OperatorCommand;

        let mut s = store();
        for (queued_at, name) in [(0, "Joey Tribbiani"), (3, "Phoebe Buffay")] {
            s.queue_command(QueuedCommand {
                queued_at,
                command: OperatorCommand::AdmitPassenger { name: name.into(), flight_number: "AA1".into() },
            });
        }
        let taken = s.take_commands();
        assert_eq!(taken.iter().map(|c| c.queued_at).collect::<Vec<_>>(), vec![0, 3]);
        assert!(s.take_commands().is_empty());
    }
}

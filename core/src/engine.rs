//! The simulation engine.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Arrival subsystem   (operator commands, then random arrival)
//!   2. Check-in subsystem
//!   3. Security subsystem
//!   4. Flight subsystem    (delay, boarding, departure per flight)
//!
//! RULES:
//!   - Subsystems execute in registration order, every tick.
//!   - Only the store holds passengers; everything else uses ids.
//!   - All randomness flows through the RandomSource given to tick().
//!   - Every state change is reported as a SimEvent.
//!   - Invariants are checked after every tick; a breach is an error.

use crate::{
    arrival_subsystem::ArrivalSubsystem,
    checkpoint_subsystem::{CheckInSubsystem, SecuritySubsystem},
    clock::SimClock,
    command::{OperatorCommand, QueuedCommand},
    config::{Roster, SimConfig},
    error::SimResult,
    flight_subsystem::FlightSubsystem,
    rng::RandomSource,
    snapshot::TickReport,
    store::AirportStore,
    subsystem::SimSubsystem,
    summary::RunSummary,
    types::RunId,
};

pub struct SimEngine {
    pub run_id: RunId,
    pub clock:  SimClock,
    pub store:  AirportStore,
    config:     SimConfig,
    subsystems: Vec<Box<dyn SimSubsystem>>,
    summary:    RunSummary,
}

impl SimEngine {
    /// Validate configuration and roster, then wire every subsystem.
    /// Fails before the first tick on any configuration error.
    pub fn build(run_id: RunId, config: SimConfig, roster: &Roster) -> SimResult<Self> {
        config.validate()?;
        let store = AirportStore::open(roster, &config)?;

        let mut engine = Self {
            run_id,
            clock: SimClock::new(),
            store,
            subsystems: Vec::new(),
            summary: RunSummary::default(),
            config,
        };

        // Execution order, see module docs.
        engine.register(Box::new(ArrivalSubsystem::new(&engine.config)));
        engine.register(Box::new(CheckInSubsystem));
        engine.register(Box::new(SecuritySubsystem));
        engine.register(Box::new(FlightSubsystem::new(&engine.config)));

        log::info!(
            "run={} built: {} flights, {} check-in counters, {} security gates",
            engine.run_id,
            engine.store.flights().len(),
            engine.config.check_in_counters,
            engine.config.security_gates
        );
        Ok(engine)
    }

    /// Default configuration and the demo roster.
    pub fn with_defaults(run_id: RunId) -> SimResult<Self> {
        Self::build(run_id, SimConfig::default(), &Roster::default())
    }

    fn register(&mut self, subsystem: Box<dyn SimSubsystem>) {
        self.subsystems.push(subsystem);
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Queue an operator command for the next tick.
    pub fn submit(&mut self, command: OperatorCommand) {
        self.store.queue_command(QueuedCommand {
            queued_at: self.clock.current_tick,
            command,
        });
    }

    /// True once every flight has departed.
    pub fn is_complete(&self) -> bool {
        self.store.all_departed()
    }

    /// Advance one tick. This is the core simulation step.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) -> SimResult<TickReport> {
        let current_tick = self.clock.advance();
        let mut tick_events = Vec::new();

        for subsystem in &mut self.subsystems {
            let new_events = subsystem.update(current_tick, &mut self.store, rng)?;
            log::trace!(
                "tick={current_tick} {}: {} events",
                subsystem.name(),
                new_events.len()
            );
            tick_events.extend(new_events);
        }

        self.store.check_invariants(current_tick)?;
        self.summary.record(current_tick, &tick_events);

        Ok(TickReport::capture(current_tick, tick_events, &self.store))
    }

    /// Run n ticks in a loop. Used for testing and fast-forward.
    pub fn run_ticks(&mut self, n: u64, rng: &mut dyn RandomSource) -> SimResult<Vec<TickReport>> {
        let mut reports = Vec::with_capacity(n as usize);
        for _ in 0..n {
            reports.push(self.tick(rng)?);
        }
        Ok(reports)
    }

    /// Tick until every flight has departed.
    ///
    /// Terminates: departure ticks are finite and each flight is
    /// postponed at most once.
    pub fn run_to_completion(&mut self, rng: &mut dyn RandomSource) -> SimResult<Vec<TickReport>> {
        let mut reports = Vec::new();
        while !self.is_complete() {
            reports.push(self.tick(rng)?);
        }
        log::info!(
            "run={} complete at tick {}: {} created, {} boarded, {} no-seat, {} no-time, {} abandoned",
            self.run_id,
            self.clock.current_tick,
            self.summary.passengers_created,
            self.summary.boarded,
            self.summary.denied_boarding,
            self.summary.missed,
            self.summary.abandoned
        );
        Ok(reports)
    }
}

//! Subsystem trait.
//!
//! RULE: Every tick stage implements SimSubsystem.
//! The engine calls update() on each registered subsystem
//! in registration order, every tick.
//! Execution order is fixed and documented in engine.rs.

use crate::{
    error::SimResult,
    event::SimEvent,
    rng::RandomSource,
    store::AirportStore,
    types::Tick,
};

/// The contract every subsystem must fulfill.
pub trait SimSubsystem: Send {
    /// Unique stable name for this subsystem.
    fn name(&self) -> &'static str;

    /// Called once per tick by the engine.
    ///
    /// - `tick`:  the current tick number
    /// - `store`: the shared airport state
    /// - `rng`:   the run's random source for this tick
    ///
    /// Returns the events this stage emitted, in order.
    fn update(
        &mut self,
        tick: Tick,
        store: &mut AirportStore,
        rng: &mut dyn RandomSource,
    ) -> SimResult<Vec<SimEvent>>;
}

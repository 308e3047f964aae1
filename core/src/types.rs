//! Shared primitive types used across the entire simulation.

/// A simulation tick. The first processed tick is 1.
pub type Tick = u64;

/// Stable passenger identifier, assigned sequentially in arrival order.
pub type PassengerId = u64;

/// A flight number, unique within a roster.
pub type FlightNumber = String;

/// The canonical run identifier.
pub type RunId = String;

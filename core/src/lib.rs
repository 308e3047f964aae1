//! Tick-driven airport simulation core.
//!
//! Passengers arrive, check in, clear security and board flights that
//! move through OnTime, Delayed, Boarding and Departed. One call to
//! [`engine::SimEngine::tick`] advances everything by one step and
//! returns a [`snapshot::TickReport`].

pub mod arrival_subsystem;
pub mod checkpoint_subsystem;
pub mod clock;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod flight;
pub mod flight_subsystem;
pub mod name_generator;
pub mod passenger;
pub mod queue;
pub mod rng;
pub mod snapshot;
pub mod store;
pub mod subsystem;
pub mod summary;
pub mod types;

//! Virtual thermometer for device-testing harnesses.
//!
//! Generates temperature/humidity readings around an adjustable baseline,
//! draws an ANSI thermometer, and publishes a status payload every tick.

pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod simulation;
pub mod thermometer;

pub use error::SimError;
pub use simulation::{Driver, RunSummary, SimulationLoop, StopReason};

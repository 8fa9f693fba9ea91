//! Single-car elevator simulation.
//!
//! The [`elevator::Dispatcher`] decides where the car stops next, [`elevator::simulate`] drives
//! it through a list of requests, and [`input`] turns request lines into simulations.

pub mod config;
pub mod elevator;
pub mod input;
pub mod shared;

pub use elevator::{simulate, simulate_with, Dispatcher, FLOOR_TRAVEL_TIME};
pub use shared::{Direction, Floor, OutputFormat, SimulationResult};

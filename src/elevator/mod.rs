pub mod dispatcher;
pub mod simulation;
mod simulation_tests;

pub use dispatcher::Dispatcher;
pub use simulation::{simulate, simulate_with, FLOOR_TRAVEL_TIME};

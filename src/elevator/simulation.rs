use log::debug;

use crate::elevator::Dispatcher;
use crate::shared::{Floor, SimulationResult};

/// Time units per floor of vertical travel.
pub const FLOOR_TRAVEL_TIME: u64 = 10;

pub fn simulate(start_floor: Floor, floors_to_visit: &[Floor]) -> SimulationResult {
    simulate_with(start_floor, floors_to_visit, FLOOR_TRAVEL_TIME)
}

/**
 * Runs one car from `start_floor` until every floor in `floors_to_visit` has been served.
 *
 * Floors are requested in the given order, which only matters for the initial direction.
 * Every stop is recorded, including stops in place, which cost no time.
 */
pub fn simulate_with(
    start_floor: Floor,
    floors_to_visit: &[Floor],
    floor_travel_time: u64,
) -> SimulationResult {
    let mut dispatcher = Dispatcher::new(start_floor);
    for &floor in floors_to_visit {
        dispatcher.add_destination(floor);
    }

    let mut result = SimulationResult::new(start_floor);
    let mut previous_floor = start_floor;

    while dispatcher.advance() {
        let floor = dispatcher.current_floor();
        let leg_time = floor
            .abs_diff(previous_floor)
            .saturating_mul(floor_travel_time);

        result.total_time = result.total_time.saturating_add(leg_time);
        result.visited_floors.push(floor);
        previous_floor = floor;
    }

    debug!(
        "Simulation from floor {} finished after {} stops, total time {}",
        start_floor,
        result.visited_floors.len() - 1,
        result.total_time
    );
    result
}

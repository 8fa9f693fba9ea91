/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, trace};
use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Unbounded};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, Floor};

// One flip between Up and Down, or one resolution out of Idle
pub const MAX_SELECTION_PASSES: usize = 2;

/**
 * Decides where a single elevator car stops next.
 *
 * The `Dispatcher` keeps going in its current direction as long as there are destinations on
 * that side of the car, and reverses once that side is drained. A destination at the current
 * floor is served in place without moving.
 *
 * # Fields
 * - `current_floor`:       The floor the car is standing at.
 * - `direction`:           Current direction of travel. `Idle` when nothing is pending.
 * - `destinations`:        Requested floors not yet served.
 * - `last_passes`:         Selection passes used by the most recent move.
 */
#[derive(Debug, Clone)]
pub struct Dispatcher {
    current_floor: Floor,
    direction: Direction,
    destinations: BTreeSet<Floor>,
    last_passes: usize,
}

impl Dispatcher {
    pub fn new(start_floor: Floor) -> Dispatcher {
        Dispatcher {
            current_floor: start_floor,
            direction: Direction::Idle,
            destinations: BTreeSet::new(),
            last_passes: 0,
        }
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_idle(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn last_selection_passes(&self) -> usize {
        self.last_passes
    }

    /// Requests a stop at `floor`. An idle car takes its direction from the request.
    pub fn add_destination(&mut self, floor: Floor) {
        self.destinations.insert(floor);

        if self.direction == Direction::Idle {
            self.direction = Direction::towards(self.current_floor, floor);
            trace!("Direction set to {} by request for floor {}", self.direction, floor);
        }
    }

    /// Serves the next stop. Returns `false` once there is nothing left to serve.
    pub fn advance(&mut self) -> bool {
        if self.destinations.is_empty() {
            self.direction = Direction::Idle;
            return false;
        }

        // Doors open at the floor we are already at
        if self.destinations.remove(&self.current_floor) {
            self.last_passes = 0;
            debug!("Stopped in place at floor {}", self.current_floor);
            return true;
        }

        let next_floor = match self.select_next_floor() {
            Some(floor) => floor,
            None => {
                self.direction = Direction::Idle;
                return false;
            }
        };

        debug!(
            "Moving {} from floor {} to floor {}",
            self.direction, self.current_floor, next_floor
        );
        self.current_floor = next_floor;
        self.destinations.remove(&next_floor);
        true
    }

    fn select_next_floor(&mut self) -> Option<Floor> {
        for pass in 1..=MAX_SELECTION_PASSES {
            let candidate = match self.direction {
                Direction::Up => self.closest_above(),
                Direction::Down => self.closest_below(),
                Direction::Idle => {
                    let closest = self.closest_any()?;
                    self.direction = Direction::towards(self.current_floor, closest);
                    trace!("Resolved idle to {} towards floor {}", self.direction, closest);
                    continue;
                }
            };

            match candidate {
                Some(floor) => {
                    self.last_passes = pass;
                    return Some(floor);
                }
                None => {
                    self.direction = self.direction.reversed();
                    debug!("No destinations ahead, reversing to {}", self.direction);
                }
            }
        }

        None
    }

    fn closest_above(&self) -> Option<Floor> {
        self.destinations
            .range((Excluded(self.current_floor), Unbounded))
            .next()
            .copied()
    }

    fn closest_below(&self) -> Option<Floor> {
        self.destinations
            .range(..self.current_floor)
            .next_back()
            .copied()
    }

    // On equal distance the lower floor wins
    fn closest_any(&self) -> Option<Floor> {
        match (self.closest_below(), self.closest_above()) {
            (Some(below), Some(above)) => {
                if above.abs_diff(self.current_floor) < below.abs_diff(self.current_floor) {
                    Some(above)
                } else {
                    Some(below)
                }
            }
            (below, above) => below.or(above),
        }
    }

    #[cfg(test)]
    pub(crate) fn test_set_state(
        &mut self,
        current_floor: Floor,
        direction: Direction,
        destinations: &[Floor],
    ) {
        self.current_floor = current_floor;
        self.direction = direction;
        self.destinations = destinations.iter().copied().collect();
    }
}

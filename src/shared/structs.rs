/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
pub type Floor = i64;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Idle,
}

impl Direction {
    /// Direction of travel needed to get from `from` to `to`.
    pub fn towards(from: Floor, to: Floor) -> Direction {
        if to > from {
            Direction::Up
        } else if to < from {
            Direction::Down
        } else {
            Direction::Idle
        }
    }

    pub fn reversed(&self) -> Direction {
        match *self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Idle => Direction::Idle,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Idle => write!(f, "idle"),
        }
    }
}

/**
 * Outcome of one simulated run.
 *
 * # Fields
 * - `total_time`:      Travel time summed over every leg of the trip.
 * - `visited_floors`:  Floors in the order the car stopped at them, starting with the start floor.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    pub total_time: u64,
    pub visited_floors: Vec<Floor>,
}

impl SimulationResult {
    pub fn new(start_floor: Floor) -> SimulationResult {
        SimulationResult {
            total_time: 0,
            visited_floors: vec![start_floor],
        }
    }
}

/// Renders as `<total_time> <floor>,<floor>,...`
impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let floors = self
            .visited_floors
            .iter()
            .map(|floor| floor.to_string())
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{} {}", self.total_time, floors)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn render(&self, result: &SimulationResult) -> String {
        match *self {
            OutputFormat::Text => result.to_string(),
            // Integers and vectors only, cannot fail
            OutputFormat::Json => serde_json::to_string(result).unwrap_or_default(),
        }
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/

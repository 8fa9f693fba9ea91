/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::simulate_with;
use crate::shared::{Floor, SimulationResult};

const START_KEY: &str = "start=";
const FLOORS_KEY: &str = "floor=";

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid start floor value.")]
    InvalidStart,
    #[error("Invalid floor numbers in floors to visit.")]
    InvalidFloors,
    #[error("Invalid input. Please provide start floor and floors to visit.")]
    MissingFields,
}

/// A parsed request line: `start=<floor> floor=<floor>,<floor>,...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub start_floor: Floor,
    pub floors_to_visit: Vec<Floor>,
}

/***************************************/
/*             Public API              */
/***************************************/

/// Unknown tokens are skipped. When a key is repeated the last one wins.
pub fn parse_input(input: &str) -> Result<Request, InputError> {
    let mut start_floor = None;
    let mut floors_to_visit = Vec::new();

    for token in input.split_whitespace() {
        if let Some(value) = token.strip_prefix(START_KEY) {
            start_floor = Some(value.parse::<Floor>().map_err(|_| InputError::InvalidStart)?);
        } else if let Some(value) = token.strip_prefix(FLOORS_KEY) {
            floors_to_visit = value
                .split(',')
                .map(|floor| floor.parse::<Floor>())
                .collect::<Result<Vec<Floor>, _>>()
                .map_err(|_| InputError::InvalidFloors)?;
        }
    }

    match start_floor {
        Some(start_floor) if !floors_to_visit.is_empty() => Ok(Request {
            start_floor,
            floors_to_visit,
        }),
        _ => Err(InputError::MissingFields),
    }
}

pub fn process_input(input: &str, floor_travel_time: u64) -> Result<SimulationResult, InputError> {
    let request = parse_input(input)?;
    Ok(simulate_with(
        request.start_floor,
        &request.floors_to_visit,
        floor_travel_time,
    ))
}

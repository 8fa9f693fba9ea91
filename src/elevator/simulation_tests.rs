/*
 * Unit tests for the simulation loop
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod simulation_tests {
    use crate::elevator::{simulate, simulate_with, FLOOR_TRAVEL_TIME};
    use crate::shared::{Floor, SimulationResult};

    fn expected_time(visited_floors: &[Floor]) -> u64 {
        visited_floors
            .windows(2)
            .map(|pair| pair[1].abs_diff(pair[0]) * FLOOR_TRAVEL_TIME)
            .sum()
    }

    #[test]
    fn test_simulate_straight_up() {
        // Act
        let result = simulate(1, &[2, 3, 5]);

        // Assert
        assert_eq!(result.total_time, 40);
        assert_eq!(result.visited_floors, vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_simulate_closest_floor_in_direction() {
        let result = simulate(3, &[1, 2, 5, 9, 15]);

        assert_eq!(result.total_time, 160);
        assert_eq!(result.visited_floors, vec![3, 2, 1, 5, 9, 15]);
    }

    #[test]
    fn test_simulate_multiple_direction_changes() {
        // Purpose: (5 -> 8 -> 10 -> 3 -> 2) covers 3 + 2 + 7 + 1 floors
        let result = simulate(5, &[8, 2, 10, 3]);

        assert_eq!(result.visited_floors, vec![5, 8, 10, 3, 2]);
        assert_eq!(result.total_time, 130);
    }

    #[test]
    fn test_simulate_direction_based_on_first_destination() {
        let result = simulate(3, &[5, 2, 6]);

        assert_eq!(result.visited_floors, vec![3, 5, 6, 2]);
        assert_eq!(result.total_time, 70);
    }

    #[test]
    fn test_simulate_correct_direction_change() {
        let result = simulate(5, &[2, 8, 3, 10]);

        assert_eq!(result.visited_floors, vec![5, 3, 2, 8, 10]);
        assert_eq!(result.total_time, 110);
    }

    #[test]
    fn test_simulate_same_floor() {
        let result = simulate(3, &[3]);

        assert_eq!(
            result,
            SimulationResult {
                total_time: 0,
                visited_floors: vec![3, 3],
            }
        );
    }

    #[test]
    fn test_simulate_no_destinations() {
        let result = simulate(1, &[]);

        assert_eq!(result, SimulationResult::new(1));
        assert_eq!(result.visited_floors, vec![1]);
    }

    #[test]
    fn test_simulate_start_floor_requested_first_stop_is_free() {
        // Purpose: A request for the start floor is a zero-time stop before any movement

        // Act
        let result = simulate(4, &[6, 4, 1]);

        // Assert
        assert_eq!(result.visited_floors, vec![4, 4, 6, 1]);
        assert_eq!(result.total_time, (2 + 5) * FLOOR_TRAVEL_TIME);
    }

    #[test]
    fn test_simulate_total_time_matches_visited_floors() {
        let requests: Vec<(Floor, Vec<Floor>)> = vec![
            (0, vec![-5, 5, -2, 2, -9, 9]),
            (10, vec![1, 20, 10, 15, 3]),
            (-2, vec![-2, -2, 7]),
            (7, vec![7, 1, 1, 13]),
        ];

        for (start_floor, floors) in requests {
            let result = simulate(start_floor, &floors);

            assert_eq!(result.visited_floors[0], start_floor);
            assert_eq!(result.total_time, expected_time(&result.visited_floors));
        }
    }

    #[test]
    fn test_simulate_with_custom_travel_time() {
        let result = simulate_with(1, &[2, 3, 5], 3);

        assert_eq!(result.total_time, 12);
        assert_eq!(result.visited_floors, vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_simulate_extreme_floors_saturate() {
        let result = simulate(Floor::MIN, &[Floor::MAX]);

        assert_eq!(result.visited_floors, vec![Floor::MIN, Floor::MAX]);
        assert_eq!(result.total_time, u64::MAX);
    }
}

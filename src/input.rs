//! Keyboard and touch input resolution
//!
//! Pure mapping from browser events to direction requests. The host wires
//! these into its DOM event handlers; debounce and reversal filtering stay
//! in the simulation.

use crate::consts::MIN_SWIPE_DISTANCE;
use crate::sim::Direction;

/// Map a `KeyboardEvent.code` to a direction request
pub fn direction_for_key(code: &str) -> Option<Direction> {
    match code {
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        _ => None,
    }
}

/// Resolve a touch displacement to the nearest axis direction.
///
/// Displacements under `MIN_SWIPE_DISTANCE` on both axes are not swipes.
/// Otherwise the axis with the larger |displacement| wins; ties go to the
/// vertical axis.
pub fn direction_for_swipe(delta_x: f64, delta_y: f64) -> Option<Direction> {
    if delta_x.abs() < MIN_SWIPE_DISTANCE && delta_y.abs() < MIN_SWIPE_DISTANCE {
        return None;
    }
    let dir = if delta_x.abs() > delta_y.abs() {
        if delta_x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if delta_y > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(direction_for_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(direction_for_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(direction_for_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(direction_for_key("ArrowRight"), Some(Direction::Right));
        assert_eq!(direction_for_key("Space"), None);
        assert_eq!(direction_for_key("KeyW"), None);
    }

    #[test]
    fn test_swipe_below_threshold() {
        assert_eq!(direction_for_swipe(0.0, 0.0), None);
        assert_eq!(direction_for_swipe(29.0, -29.0), None);
        // One axis past the threshold is enough
        assert_eq!(direction_for_swipe(29.0, 31.0), Some(Direction::Down));
    }

    #[test]
    fn test_swipe_picks_larger_axis() {
        assert_eq!(direction_for_swipe(80.0, 30.0), Some(Direction::Right));
        assert_eq!(direction_for_swipe(-80.0, 30.0), Some(Direction::Left));
        assert_eq!(direction_for_swipe(30.0, 80.0), Some(Direction::Down));
        assert_eq!(direction_for_swipe(30.0, -80.0), Some(Direction::Up));
        // Exact tie resolves vertically
        assert_eq!(direction_for_swipe(40.0, 40.0), Some(Direction::Down));
    }
}

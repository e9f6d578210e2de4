//! Game state and core simulation types
//!
//! Everything `tick` reads or writes lives here. Given a seed and an input
//! sequence, a session replays identically.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to start a run
    NotStarted,
    /// Active gameplay
    Running,
    /// Run suspended, resumable
    Paused,
    /// Run ended by collision; terminal until reset
    Over,
}

/// One grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell reached by moving one step in `dir`
    pub fn step(self, dir: Direction) -> Point {
        let (dx, dy) = dir.delta();
        Point::new(self.x + dx, self.y + dy)
    }

    /// True if the cell lies on the board
    pub fn in_bounds(self) -> bool {
        (0..TILE_COUNT).contains(&self.x) && (0..TILE_COUNT).contains(&self.y)
    }
}

/// Movement direction as a unit grid delta. Positive y is down, matching
/// canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    /// No direction chosen yet; the snake does not move
    #[default]
    None,
}

impl Direction {
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::None => (0, 0),
        }
    }

    /// True if `self` is the exact 180 degree reversal of `other`.
    /// `None` reverses nothing.
    pub fn is_reversal_of(self, other: Direction) -> bool {
        let (dx, dy) = self.delta();
        let (ox, oy) = other.delta();
        (dx != 0 || dy != 0) && dx == -ox && dy == -oy
    }
}

/// Snake starting cell (board center)
pub const START_CELL: Point = Point::new(10, 10);

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Snake cells, head first; never empty, no duplicates while alive
    pub snake: Vec<Point>,
    /// Direction of the last completed move
    pub direction: Direction,
    /// Direction the next tick will move in; accepted requests land here
    /// immediately, not at the tick boundary
    pub pending_direction: Direction,
    /// Food cell, never on the snake at spawn time
    pub food: Point,
    pub score: u32,
    pub phase: GamePhase,
    /// Timestamp (ms) of the last accepted direction change, for debouncing
    pub last_direction_change_ms: f64,
}

impl GameState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            snake: vec![START_CELL],
            direction: Direction::None,
            pending_direction: Direction::None,
            food: START_CELL,
            score: 0,
            phase: GamePhase::NotStarted,
            last_direction_change_ms: 0.0,
        };
        state.food = state.spawn_food();
        state
    }

    pub fn head(&self) -> Point {
        self.snake[0]
    }

    /// Pick a food cell uniformly among cells the snake does not occupy.
    ///
    /// Rejection sampling; terminates because the snake never fills the
    /// board in a reachable state.
    pub fn spawn_food(&mut self) -> Point {
        loop {
            let candidate = Point::new(
                self.rng.random_range(0..TILE_COUNT),
                self.rng.random_range(0..TILE_COUNT),
            );
            if !self.snake.contains(&candidate) {
                return candidate;
            }
        }
    }

    /// Reinitialize for a new run, keeping the RNG stream
    pub fn reset(&mut self) {
        self.snake.clear();
        self.snake.push(START_CELL);
        self.direction = Direction::None;
        self.pending_direction = Direction::None;
        self.score = 0;
        self.phase = GamePhase::NotStarted;
        self.last_direction_change_ms = 0.0;
        self.food = self.spawn_food();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversal_pairs() {
        assert!(Direction::Up.is_reversal_of(Direction::Down));
        assert!(Direction::Down.is_reversal_of(Direction::Up));
        assert!(Direction::Left.is_reversal_of(Direction::Right));
        assert!(Direction::Right.is_reversal_of(Direction::Left));

        assert!(!Direction::Up.is_reversal_of(Direction::Left));
        assert!(!Direction::Up.is_reversal_of(Direction::Up));
        assert!(!Direction::None.is_reversal_of(Direction::None));
        assert!(!Direction::Up.is_reversal_of(Direction::None));
    }

    #[test]
    fn test_point_bounds() {
        assert!(Point::new(0, 0).in_bounds());
        assert!(Point::new(TILE_COUNT - 1, TILE_COUNT - 1).in_bounds());
        assert!(!Point::new(-1, 0).in_bounds());
        assert!(!Point::new(0, TILE_COUNT).in_bounds());
    }

    #[test]
    fn test_food_never_on_snake() {
        for seed in 0..50 {
            let mut state = GameState::new(seed);
            // Long snake covering a quarter of the board
            state.snake = (0..TILE_COUNT)
                .flat_map(|x| (0..5).map(move |y| Point::new(x, y)))
                .collect();
            for _ in 0..20 {
                let food = state.spawn_food();
                assert!(!state.snake.contains(&food));
                assert!(food.in_bounds());
            }
        }
    }

    #[test]
    fn test_new_and_reset_shape() {
        let mut state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.snake, vec![START_CELL]);
        assert_eq!(state.score, 0);
        assert_ne!(state.food, START_CELL);

        state.score = 120;
        state.phase = GamePhase::Over;
        state.snake.push(Point::new(10, 11));
        state.reset();
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.pending_direction, Direction::None);
    }
}

//! Tilesnake - a classic snake game on a square grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collision, scoring, speed ramp)
//! - `renderer`: Canvas 2D rendering (web only)
//! - `input`: Keyboard/swipe resolution into direction requests
//! - `highscores`: Best-score persistence

pub mod highscores;
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod sim;

pub use highscores::HighScore;

/// Game configuration constants
pub mod consts {
    /// Board side length in cells
    pub const TILE_COUNT: i32 = 20;
    /// Cell side length in pixels (rendering only)
    pub const GRID_SIZE: f64 = 20.0;

    /// Tick period at score 0, in milliseconds
    pub const BASE_SPEED_MS: u32 = 150;
    /// Shortest allowed tick period
    pub const MIN_SPEED_MS: u32 = 60;
    /// Period reduction per ramp step
    pub const SPEED_STEP_MS: u32 = 10;
    /// Score interval between ramp steps
    pub const SPEED_RAMP_POINTS: u32 = 50;

    /// Points awarded per food eaten
    pub const FOOD_SCORE: u32 = 10;

    /// Minimum interval between accepted direction changes
    pub const DIRECTION_CHANGE_DELAY_MS: f64 = 100.0;

    /// Minimum touch displacement that counts as a swipe
    pub const MIN_SWIPE_DISTANCE: f64 = 30.0;
    /// Touches shorter than this are taps, not swipes
    pub const TAP_MAX_MS: f64 = 200.0;
}

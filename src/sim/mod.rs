//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Time enters as explicit `now_ms` arguments, never read from a clock
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Direction, GamePhase, GameState, Point};
pub use tick::{current_speed_ms, request_direction_change, start, tick, toggle_pause};

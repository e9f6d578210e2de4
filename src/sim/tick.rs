//! Simulation step and player operations
//!
//! The host drives `tick` from a single-shot timer and re-arms it with
//! `current_speed_ms` after every step. Everything here is a plain state
//! transition: invalid calls are no-ops, never errors, and no I/O happens
//! inside a tick.

use super::state::{Direction, GamePhase, GameState};
use crate::consts::*;

/// Begin a run. Valid only in `NotStarted`; otherwise a no-op.
///
/// The snake starts moving up on the next tick.
pub fn start(state: &mut GameState, now_ms: f64) {
    if state.phase != GamePhase::NotStarted {
        return;
    }
    state.phase = GamePhase::Running;
    state.direction = Direction::Up;
    state.pending_direction = Direction::Up;
    state.last_direction_change_ms = now_ms;
    log::info!("run started (seed {})", state.seed);
}

/// Toggle Running <-> Paused. No-op before the first start and after the
/// run has ended.
pub fn toggle_pause(state: &mut GameState) {
    state.phase = match state.phase {
        GamePhase::Running => GamePhase::Paused,
        GamePhase::Paused => GamePhase::Running,
        other => other,
    };
}

/// Apply a requested direction change.
///
/// Rejected (silently) while not running, when the request would reverse
/// the most recently accepted direction, or when another change was
/// accepted within the last `DIRECTION_CHANGE_DELAY_MS`. Accepted requests
/// take effect immediately, so a change landing between two ticks steers
/// the earlier of them.
pub fn request_direction_change(state: &mut GameState, requested: Direction, now_ms: f64) {
    if state.phase != GamePhase::Running || requested == Direction::None {
        return;
    }
    if now_ms - state.last_direction_change_ms < DIRECTION_CHANGE_DELAY_MS {
        return;
    }
    // The reversal check runs against the pending direction: that is the
    // move the next tick will make, and the one a reversal would undo.
    if requested.is_reversal_of(state.pending_direction) {
        return;
    }
    if requested == state.pending_direction {
        return;
    }
    state.pending_direction = requested;
    state.last_direction_change_ms = now_ms;
}

/// Advance the simulation by one step.
///
/// No-op unless the game is running and a direction has been chosen.
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }
    let dir = state.pending_direction;
    if dir == Direction::None {
        return;
    }

    let new_head = state.head().step(dir);

    // Wall or self collision ends the run. The snake is left untouched so
    // the final board still renders.
    if !new_head.in_bounds() || state.snake.contains(&new_head) {
        state.phase = GamePhase::Over;
        log::info!("game over, final score {}", state.score);
        return;
    }

    state.snake.insert(0, new_head);
    state.direction = dir;

    if new_head == state.food {
        state.score += FOOD_SCORE;
        state.food = state.spawn_food();
        // Tail stays: net growth of one segment
    } else {
        state.snake.pop();
    }
}

/// Tick period in milliseconds at the current score.
///
/// Shortens by `SPEED_STEP_MS` every `SPEED_RAMP_POINTS` points, floored at
/// `MIN_SPEED_MS`. Derived on demand, never stored; the host reads it after
/// each tick so the ramp applies to the very next timer.
pub fn current_speed_ms(state: &GameState) -> u32 {
    let ramp = (state.score / SPEED_RAMP_POINTS) * SPEED_STEP_MS;
    BASE_SPEED_MS.saturating_sub(ramp).max(MIN_SPEED_MS)
}

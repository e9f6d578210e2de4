//! Canvas 2D render sink
//!
//! Draws the post-tick state once per loop iteration. Strictly read-only
//! over the simulation; a failed draw call never feeds back into game
//! state.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{GRID_SIZE, TILE_COUNT};
use crate::sim::{GamePhase, GameState};

/// Cell inset so segments read as tiles instead of a solid band
const CELL_PAD: f64 = 2.0;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
        })
    }

    /// Draw one full frame
    pub fn render(&self, state: &GameState) {
        self.draw_board();
        self.draw_snake(state);
        self.draw_food(state);
        self.draw_overlay(state);
    }

    fn draw_board(&self) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str("#f9f9f9");
        ctx.fill_rect(0.0, 0.0, self.width, self.height);

        ctx.set_stroke_style_str("#e0e0e0");
        ctx.set_line_width(1.0);
        for i in 0..=TILE_COUNT {
            let offset = f64::from(i) * GRID_SIZE;
            ctx.begin_path();
            ctx.move_to(offset, 0.0);
            ctx.line_to(offset, self.height);
            ctx.stroke();

            ctx.begin_path();
            ctx.move_to(0.0, offset);
            ctx.line_to(self.width, offset);
            ctx.stroke();
        }
    }

    fn draw_snake(&self, state: &GameState) {
        let ctx = &self.ctx;
        for (index, segment) in state.snake.iter().enumerate() {
            let x = f64::from(segment.x) * GRID_SIZE;
            let y = f64::from(segment.y) * GRID_SIZE;
            let side = GRID_SIZE - 2.0 * CELL_PAD;

            if index == 0 {
                ctx.set_fill_style_str("#2E7D32");
                ctx.fill_rect(x + CELL_PAD, y + CELL_PAD, side, side);
                // Eyes
                ctx.set_fill_style_str("white");
                ctx.fill_rect(x + 5.0, y + 5.0, 3.0, 3.0);
                ctx.fill_rect(x + 12.0, y + 5.0, 3.0, 3.0);
            } else {
                ctx.set_fill_style_str("#4CAF50");
                ctx.fill_rect(x + CELL_PAD, y + CELL_PAD, side, side);
            }
        }
    }

    fn draw_food(&self, state: &GameState) {
        let ctx = &self.ctx;
        let cx = f64::from(state.food.x) * GRID_SIZE + GRID_SIZE / 2.0;
        let cy = f64::from(state.food.y) * GRID_SIZE + GRID_SIZE / 2.0;

        ctx.set_fill_style_str("#FF5722");
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, GRID_SIZE / 2.0 - 2.0, 0.0, std::f64::consts::TAU);
        ctx.fill();

        // Specular highlight
        ctx.set_fill_style_str("#FF8A65");
        ctx.begin_path();
        let _ = ctx.arc(cx - 3.0, cy - 3.0, GRID_SIZE / 4.0, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }

    fn draw_overlay(&self, state: &GameState) {
        match state.phase {
            GamePhase::NotStarted => {
                self.dim();
                self.center_text("Press Space to start", "20px Arial", 0.0);
                self.center_text("Arrow keys or swipe to move", "14px Arial", 30.0);
            }
            GamePhase::Paused => {
                self.dim();
                self.center_text("Paused", "24px Arial", 0.0);
                self.center_text("Press Space to resume", "16px Arial", 30.0);
            }
            // Game over is a DOM overlay, not drawn on the canvas
            GamePhase::Running | GamePhase::Over => {}
        }
    }

    fn dim(&self) {
        self.ctx.set_fill_style_str("rgba(0, 0, 0, 0.7)");
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn center_text(&self, text: &str, font: &str, y_offset: f64) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str("white");
        ctx.set_font(font);
        ctx.set_text_align("center");
        let _ = ctx.fill_text(text, self.width / 2.0, self.height / 2.0 + y_offset);
    }
}

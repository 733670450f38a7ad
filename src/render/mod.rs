//! Canvas-2D rendering
//!
//! Draws the whole frame onto a `CanvasRenderingContext2d`: obstacles and
//! energy fields as filled rects, the player as an upward triangle inscribed
//! in its bounding box, score text, and the game-over overlay.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::*;
use crate::sim::{GamePhase, GameState};

/// Colors for game elements
pub mod colors {
    pub const PLAYER: &str = "#0ff";
    /// Shown while the dash cooldown runs
    pub const PLAYER_HIGHLIGHT: &str = "#fff";
    pub const OBSTACLE: &str = "red";
    pub const FIELD: &str = "lime";
    pub const TEXT: &str = "#fff";
    pub const OVERLAY: &str = "rgba(0, 0, 0, 0.6)";
}

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;
        ctx.set_font("20px Arial");
        Ok(Self { canvas, ctx })
    }

    /// Render one frame of the given state
    pub fn draw(&self, state: &GameState) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);

        self.ctx.set_fill_style_str(colors::OBSTACLE);
        for ob in &state.obstacles {
            self.ctx.fill_rect(
                ob.pos.x as f64,
                ob.pos.y as f64,
                OBSTACLE_SIZE as f64,
                OBSTACLE_SIZE as f64,
            );
        }

        self.ctx.set_fill_style_str(colors::FIELD);
        for field in &state.fields {
            self.ctx.fill_rect(
                field.pos.x as f64,
                field.pos.y as f64,
                FIELD_WIDTH as f64,
                FIELD_HEIGHT as f64,
            );
        }

        self.draw_player(state);

        self.ctx.set_fill_style_str(colors::TEXT);
        self.ctx.set_text_align("left");
        let _ = self
            .ctx
            .fill_text(&format!("Score: {}", state.score), 10.0, 30.0);

        if state.phase == GamePhase::GameOver {
            self.draw_game_over(state, w, h);
        }
    }

    /// Upward-pointing isosceles triangle inscribed in the bounding box
    fn draw_player(&self, state: &GameState) {
        let p = &state.player;
        let color = if p.on_cooldown(state.time_ticks) {
            colors::PLAYER_HIGHLIGHT
        } else {
            colors::PLAYER
        };
        let (x, y) = (p.pos.x as f64, p.pos.y as f64);
        let size = PLAYER_SIZE as f64;

        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(x + size / 2.0, y);
        self.ctx.line_to(x, y + size);
        self.ctx.line_to(x + size, y + size);
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn draw_game_over(&self, state: &GameState, w: f64, h: f64) {
        self.ctx.set_fill_style_str(colors::OVERLAY);
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.ctx.set_fill_style_str(colors::TEXT);
        self.ctx.set_text_align("center");
        let _ = self.ctx.fill_text("Game Over", w / 2.0, h / 2.0 - 20.0);
        let _ = self
            .ctx
            .fill_text(&format!("Score: {}", state.score), w / 2.0, h / 2.0 + 10.0);
    }
}

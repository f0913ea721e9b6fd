//! Rendering module
//!
//! The simulation never draws. A `Surface` is the drawing boundary; `render`
//! reads a session after each tick and issues draw calls against it.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use crate::sim::{Arena, Avatar, Circle, Color, GamePhase, GameSession, Outcome};

/// Font and fill for a line of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Font size in pixels
    pub size_px: u32,
    pub color: Color,
}

impl TextStyle {
    pub const SCORE: TextStyle = TextStyle {
        size_px: 24,
        color: Color::Black,
    };
    pub const WIN: TextStyle = TextStyle {
        size_px: 24,
        color: Color::Green,
    };
    pub const LOSS: TextStyle = TextStyle {
        size_px: 20,
        color: Color::Red,
    };

    /// CSS font shorthand
    pub fn font(&self) -> String {
        format!("{}px Arial", self.size_px)
    }
}

/// Drawing primitives a platform provides
pub trait Surface {
    /// Drawable extent (width, height), queried once at setup
    fn extent(&self) -> (f32, f32);
    fn clear_frame(&mut self);
    fn draw_border(&mut self, arena: &Arena);
    fn draw_circle(&mut self, circle: &Circle, color: Color);
    fn draw_text(&mut self, message: &str, x: f32, y: f32, style: TextStyle);
    fn draw_score(&mut self, score: u32);
}

/// Draw the current frame
///
/// Every frame is cleared and redrawn: border, avatar, entities and score.
/// Once terminal the outcome message is drawn on top of that last scene.
pub fn render<S: Surface + ?Sized>(session: &GameSession, surface: &mut S) {
    surface.clear_frame();
    surface.draw_border(&session.arena);
    surface.draw_circle(&session.avatar.body, Avatar::COLOR);
    for entity in &session.entities {
        surface.draw_circle(&entity.body, entity.color);
    }
    surface.draw_score(session.score);

    if let GamePhase::Terminal(outcome) = session.phase {
        draw_outcome(&session.arena, outcome, surface);
    }
}

fn draw_outcome<S: Surface + ?Sized>(arena: &Arena, outcome: Outcome, surface: &mut S) {
    let cx = arena.width / 2.0;
    let cy = arena.height / 2.0;
    match outcome {
        Outcome::Won => {
            surface.draw_text("You Win!", cx - 60.0, cy, TextStyle::WIN);
            surface.draw_text("Click to restart", cx - 90.0, cy + 30.0, TextStyle::LOSS);
        }
        Outcome::Lost => {
            surface.draw_text("Game Over", cx - 60.0, cy, TextStyle::LOSS);
            surface.draw_text("Click to restart", cx - 90.0, cy + 30.0, TextStyle::LOSS);
        }
    }
}

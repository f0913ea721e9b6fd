//! 2D canvas surface for the browser

use std::f64::consts::PI;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Surface, TextStyle};
use crate::sim::{Arena, Circle, Color};

/// Score text position
const SCORE_POS: (f64, f64) = (20.0, 40.0);

/// Draws onto a `<canvas>` through its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

impl Surface for CanvasSurface {
    fn extent(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear_frame(&mut self) {
        let (w, h) = self.extent();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn draw_border(&mut self, arena: &Arena) {
        let inset = arena.border as f64;
        self.ctx.begin_path();
        self.ctx.set_line_width(inset);
        self.ctx.set_stroke_style_str(Color::Black.as_css());
        self.ctx.rect(
            inset / 2.0,
            inset / 2.0,
            arena.width as f64 - inset,
            arena.height as f64 - inset,
        );
        self.ctx.stroke();
        self.ctx.close_path();
    }

    fn draw_circle(&mut self, circle: &Circle, color: Color) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            circle.pos.x as f64,
            circle.pos.y as f64,
            circle.radius as f64,
            0.0,
            PI * 2.0,
        ) {
            log::warn!("Canvas arc failed: {:?}", e);
        }
        self.ctx.set_fill_style_str(color.as_css());
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn draw_text(&mut self, message: &str, x: f32, y: f32, style: TextStyle) {
        self.ctx.set_font(&style.font());
        self.ctx.set_fill_style_str(style.color.as_css());
        if let Err(e) = self.ctx.fill_text(message, x as f64, y as f64) {
            log::warn!("Canvas text failed: {:?}", e);
        }
    }

    fn draw_score(&mut self, score: u32) {
        let (x, y) = SCORE_POS;
        self.draw_text(
            &format!("Score: {}", score),
            x as f32,
            y as f32,
            TextStyle::SCORE,
        );
    }
}

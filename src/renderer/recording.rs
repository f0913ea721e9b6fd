//! Headless surface that records draw calls
//!
//! Used by the native driver and by tests.

use super::{Surface, TextStyle};
use crate::sim::{Arena, Circle, Color};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Border { width: f32, height: f32, inset: f32 },
    Circle { x: f32, y: f32, radius: f32, color: Color },
    Text { message: String, x: f32, y: f32, style: TextStyle },
    Score(u32),
}

/// Collects the draw calls of the current frame
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Messages of every recorded text call, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { message, .. } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of circles drawn since the last clear
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn extent(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear_frame(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_border(&mut self, arena: &Arena) {
        self.commands.push(DrawCommand::Border {
            width: arena.width,
            height: arena.height,
            inset: arena.border,
        });
    }

    fn draw_circle(&mut self, circle: &Circle, color: Color) {
        self.commands.push(DrawCommand::Circle {
            x: circle.pos.x,
            y: circle.pos.y,
            radius: circle.radius,
            color,
        });
    }

    fn draw_text(&mut self, message: &str, x: f32, y: f32, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            message: message.to_string(),
            x,
            y,
            style,
        });
    }

    fn draw_score(&mut self, score: u32) {
        self.commands.push(DrawCommand::Score(score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::renderer::render;
    use crate::sim::{GameSession, RoamingEntity};
    use glam::Vec2;

    #[test]
    fn test_clear_starts_a_new_frame() {
        let mut session = GameSession::new(GameConfig::default(), 640.0, 480.0, 3).unwrap();
        session.entities.push(RoamingEntity {
            id: 1,
            body: Circle::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 15.0),
            color: Color::Yellow,
        });
        let mut surface = RecordingSurface::new(640.0, 480.0);

        render(&session, &mut surface);
        render(&session, &mut surface);

        assert_eq!(surface.extent(), (640.0, 480.0));
        assert_eq!(surface.circle_count(), 2);
        assert_eq!(
            surface.commands.iter().filter(|c| **c == DrawCommand::Clear).count(),
            1
        );
    }
}

//! Game state and core simulation types
//!
//! A `GameSession` is the single owner of everything that changes during
//! play. All simulation steps take it (or pieces of it) explicitly.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, Axis};
use super::geometry::Circle;
use crate::config::{ConfigError, GameConfig};

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Physics advances every tick
    Running,
    /// Session ended, waiting for a restart
    Terminal(Outcome),
}

/// Fill colors used for circles and text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Black,
}

impl Color {
    /// Colors a roaming entity can spawn with
    pub const PALETTE: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// CSS color name
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Black => "black",
        }
    }
}

/// The player's growing circle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    pub body: Circle,
    /// Horizontal acceleration applied after every move
    pub accel_x: f32,
}

impl Avatar {
    /// Fill color of the avatar
    pub const COLOR: Color = Color::Blue;

    /// Avatar at its starting pose: centered, near the bottom, at rest
    pub fn new(arena: &Arena, config: &GameConfig) -> Self {
        let mut body = Circle::new(
            Vec2::new(arena.width / 2.0, arena.height - config.avatar_offset_y),
            Vec2::ZERO,
            config.avatar_radius,
        );
        arena.clamp(&mut body);
        Self {
            body,
            accel_x: config.avatar_accel_x,
        }
    }

    /// Move horizontally, then accelerate, then bounce off the side walls
    ///
    /// The order matters: acceleration is applied after the move, and the
    /// bounce negates the already-accelerated velocity.
    pub fn step(&mut self, arena: &Arena) -> bool {
        self.body.pos.x += self.body.vel.x;
        self.body.vel.x += self.accel_x;
        arena.reflect_axis(&mut self.body, Axis::X)
    }

    /// Grow after absorbing an entity
    pub fn grow(&mut self, amount: f32) {
        self.body.radius += amount;
    }
}

/// An absorbable circle with a fixed velocity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoamingEntity {
    pub id: u32,
    pub body: Circle,
    pub color: Color,
}

impl RoamingEntity {
    /// Move by its velocity and bounce off every wall
    pub fn advance(&mut self, arena: &Arena) -> bool {
        self.body.advance();
        arena.reflect(&mut self.body)
    }
}

/// Something that happened during a tick, for the adapter to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32 },
    Absorbed { id: u32, avatar_radius: f32 },
    Won { score: u32 },
    Lost { score: u32 },
    Restarted,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Seed the RNG started from
    pub seed: u64,
    /// Spawn RNG
    pub rng: Pcg32,
    pub config: GameConfig,
    pub arena: Arena,
    pub avatar: Avatar,
    /// Roaming entities (order is irrelevant to gameplay)
    pub entities: Vec<RoamingEntity>,
    /// Entities absorbed since the last reset
    pub score: u32,
    pub phase: GamePhase,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
    /// Events produced by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    pub(crate) next_id: u32,
}

impl GameSession {
    /// Set up a session for an arena of the given extent
    pub fn new(config: GameConfig, width: f32, height: f32, seed: u64) -> Result<Self, ConfigError> {
        config.validate(width, height)?;
        let arena = Arena::new(width, height, config.border_inset)?;
        let avatar = Avatar::new(&arena, &config);

        log::info!(
            "Session set up: arena {}x{}, seed {}",
            width,
            height,
            seed
        );

        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            arena,
            avatar,
            entities: Vec::new(),
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        })
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::Terminal(_))
    }

    pub fn did_win(&self) -> bool {
        self.phase == GamePhase::Terminal(Outcome::Won)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::Running => None,
            GamePhase::Terminal(outcome) => Some(outcome),
        }
    }

    /// End a running session. Returns false if it had already ended.
    pub fn finish(&mut self, outcome: Outcome) -> bool {
        if self.is_over() {
            return false;
        }
        self.phase = GamePhase::Terminal(outcome);
        let score = self.score;
        match outcome {
            Outcome::Won => {
                log::info!("Won with score {} (radius {})", score, self.avatar.body.radius);
                self.events.push(GameEvent::Won { score });
            }
            Outcome::Lost => {
                log::info!("Lost with score {}", score);
                self.events.push(GameEvent::Lost { score });
            }
        }
        true
    }

    /// Reset avatar, entities and score, then resume play
    ///
    /// Only valid from a terminal phase; returns false (and changes
    /// nothing) while running, so repeated restart requests for a single
    /// terminal period reset at most once.
    pub fn restart(&mut self) -> bool {
        if !self.is_over() {
            log::warn!("Ignoring restart while running");
            return false;
        }
        self.avatar = Avatar::new(&self.arena, &self.config);
        self.entities.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Restarted);
        log::info!("Session restarted");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(GameConfig::default(), 800.0, 600.0, 7).unwrap()
    }

    #[test]
    fn test_initial_pose() {
        let s = session();
        assert_eq!(s.phase, GamePhase::Running);
        assert_eq!(s.avatar.body.pos, Vec2::new(400.0, 570.0));
        assert_eq!(s.avatar.body.vel, Vec2::ZERO);
        assert_eq!(s.avatar.body.radius, 20.0);
        assert_eq!(s.score, 0);
        assert!(s.entities.is_empty());
    }

    #[test]
    fn test_setup_rejects_tiny_arena() {
        assert!(GameSession::new(GameConfig::default(), 8.0, 8.0, 1).is_err());
    }

    #[test]
    fn test_avatar_step_order() {
        let s = session();
        let mut avatar = s.avatar.clone();

        // First step: no movement, then velocity picks up acceleration
        avatar.step(&s.arena);
        assert_eq!(avatar.body.pos.x, 400.0);
        assert!((avatar.body.vel.x - 0.1).abs() < 1e-6);

        avatar.step(&s.arena);
        assert!((avatar.body.pos.x - 400.1).abs() < 1e-4);
        assert!((avatar.body.vel.x - 0.2).abs() < 1e-6);
        assert_eq!(avatar.body.pos.y, 570.0);
    }

    #[test]
    fn test_avatar_bounces_off_left_wall() {
        let s = session();
        let mut avatar = s.avatar.clone();
        avatar.accel_x = 0.0;
        avatar.body.pos.x = 26.0;
        avatar.body.vel.x = -2.0;

        assert!(avatar.step(&s.arena));
        assert_eq!(avatar.body.pos.x, 25.0);
        assert_eq!(avatar.body.vel.x, 2.0);

        // Moving inward from the clamped spot: no second bounce
        assert!(!avatar.step(&s.arena));
        assert_eq!(avatar.body.vel.x, 2.0);
    }

    #[test]
    fn test_restart_only_from_terminal() {
        let mut s = session();
        s.score = 3;
        assert!(!s.restart());
        assert_eq!(s.score, 3);

        assert!(s.finish(Outcome::Won));
        assert!(!s.finish(Outcome::Lost));
        assert!(s.did_win());

        assert!(s.restart());
        assert!(!s.restart());
        assert_eq!(s.phase, GamePhase::Running);
        assert_eq!(s.score, 0);
    }
}

//! Orb Arena - A 2D arena game about growing by absorption
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, absorption, game state)
//! - `renderer`: Render/input adapter boundary and its implementations
//! - `config`: Data-driven session parameters

pub mod config;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};

/// Game configuration constants
pub mod consts {
    /// Border inset on both axes
    pub const BORDER_INSET: f32 = 5.0;

    /// Avatar defaults
    pub const AVATAR_RADIUS: f32 = 20.0;
    /// Distance of the avatar center from the bottom edge
    pub const AVATAR_OFFSET_Y: f32 = 30.0;
    /// Horizontal acceleration, added after each move
    pub const AVATAR_ACCEL_X: f32 = 0.1;
    /// Radius gained per absorbed entity
    pub const GROWTH_PER_ABSORB: f32 = 2.0;

    /// Roaming entity defaults
    pub const ENTITY_RADIUS: f32 = 15.0;
    /// Velocity components are drawn from [-max, max)
    pub const ENTITY_MAX_SPEED: f32 = 1.0;

    /// Chance per tick that a roaming entity spawns
    pub const SPAWN_CHANCE: f32 = 0.02;
}

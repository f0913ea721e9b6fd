//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Every entity visited exactly once per tick
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod geometry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use arena::{Arena, Axis};
pub use collision::{largest_entity, resolve_collisions};
pub use geometry::{Circle, overlaps};
pub use spawn::{maybe_spawn, spawn_entity};
pub use state::{Avatar, Color, GameEvent, GamePhase, GameSession, Outcome, RoamingEntity};
pub use tick::{TickInput, is_won, tick};

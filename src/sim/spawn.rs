//! Roaming entity spawning
//!
//! Generic over the RNG so any seeded generator can drive it.

use glam::Vec2;
use rand::Rng;

use super::arena::Arena;
use super::geometry::Circle;
use super::state::{Color, RoamingEntity};
use crate::config::GameConfig;

/// Build one entity at a random spot, pulled inside the border
///
/// Position is uniform over the whole arena before the clamp; velocity
/// components are uniform in `[-max_speed, max_speed)`.
pub fn spawn_entity<R: Rng + ?Sized>(
    id: u32,
    arena: &Arena,
    config: &GameConfig,
    rng: &mut R,
) -> RoamingEntity {
    let pos = Vec2::new(
        rng.random::<f32>() * arena.width,
        rng.random::<f32>() * arena.height,
    );
    let max_speed = config.entity_max_speed;
    let vel = Vec2::new(
        (rng.random::<f32>() * 2.0 - 1.0) * max_speed,
        (rng.random::<f32>() * 2.0 - 1.0) * max_speed,
    );
    let color = Color::PALETTE[rng.random_range(0..Color::PALETTE.len())];

    let mut body = Circle::new(pos, vel, config.entity_radius);
    arena.clamp(&mut body);

    RoamingEntity { id, body, color }
}

/// Roll the per-tick spawn chance; on success append one entity
///
/// `next_id` is bumped only when an entity is created. Returns the new
/// entity's ID if one spawned.
pub fn maybe_spawn<R: Rng + ?Sized>(
    entities: &mut Vec<RoamingEntity>,
    next_id: &mut u32,
    arena: &Arena,
    config: &GameConfig,
    rng: &mut R,
) -> Option<u32> {
    if rng.random::<f32>() >= config.spawn_chance {
        return None;
    }
    let id = *next_id;
    *next_id += 1;
    let entity = spawn_entity(id, arena, config, rng);
    log::debug!(
        "Spawned entity {} at ({:.1}, {:.1})",
        id,
        entity.body.pos.x,
        entity.body.pos.y
    );
    entities.push(entity);
    Some(id)
}

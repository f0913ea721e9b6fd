//! Avatar vs. entity absorption
//!
//! Entities are filtered in a single `retain_mut` pass: every entity is
//! visited exactly once per call, in order, no matter how many are removed
//! along the way. Absorbed entities do not move that tick; survivors are
//! advanced and bounced off the walls.

use super::arena::Arena;
use super::geometry::overlaps;
use super::state::{Avatar, GameEvent, RoamingEntity};

/// Absorb every entity touching the avatar, advance the rest
///
/// The avatar grows by `growth` per absorption, and later entities in the
/// same pass are tested against the grown radius. Returns the number of
/// entities absorbed.
pub fn resolve_collisions(
    avatar: &mut Avatar,
    entities: &mut Vec<RoamingEntity>,
    arena: &Arena,
    growth: f32,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let mut absorbed = 0;
    entities.retain_mut(|entity| {
        if overlaps(&avatar.body, &entity.body) {
            avatar.grow(growth);
            absorbed += 1;
            log::debug!(
                "Absorbed entity {} (avatar radius now {})",
                entity.id,
                avatar.body.radius
            );
            events.push(GameEvent::Absorbed {
                id: entity.id,
                avatar_radius: avatar.body.radius,
            });
            false
        } else {
            entity.advance(arena);
            true
        }
    });
    absorbed
}

/// The entity with the largest radius, if any remain
pub fn largest_entity(entities: &[RoamingEntity]) -> Option<&RoamingEntity> {
    entities
        .iter()
        .max_by(|a, b| a.body.radius.total_cmp(&b.body.radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::geometry::Circle;
    use crate::sim::state::Color;
    use glam::Vec2;
    use proptest::prelude::*;

    fn arena() -> Arena {
        Arena::new(800.0, 600.0, 5.0).unwrap()
    }

    fn avatar_at(x: f32, y: f32, radius: f32) -> Avatar {
        let mut avatar = Avatar::new(&arena(), &GameConfig::default());
        avatar.body = Circle::new(Vec2::new(x, y), Vec2::ZERO, radius);
        avatar
    }

    fn entity(id: u32, x: f32, y: f32, vx: f32, vy: f32, radius: f32) -> RoamingEntity {
        RoamingEntity {
            id,
            body: Circle::new(Vec2::new(x, y), Vec2::new(vx, vy), radius),
            color: Color::Red,
        }
    }

    #[test]
    fn test_adjacent_removals_skip_nothing() {
        let arena = arena();
        let mut avatar = avatar_at(400.0, 300.0, 20.0);
        // Two overlapping entities back to back, then a far one that must still move
        let mut entities = vec![
            entity(1, 410.0, 300.0, 0.0, 0.0, 15.0),
            entity(2, 390.0, 300.0, 0.0, 0.0, 15.0),
            entity(3, 100.0, 100.0, 1.0, 1.0, 15.0),
        ];
        let mut events = Vec::new();

        let absorbed = resolve_collisions(&mut avatar, &mut entities, &arena, 2.0, &mut events);

        assert_eq!(absorbed, 2);
        assert_eq!(avatar.body.radius, 24.0);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].id, 3);
        assert_eq!(entities[0].body.pos, Vec2::new(101.0, 101.0));
        assert_eq!(
            events,
            vec![
                GameEvent::Absorbed { id: 1, avatar_radius: 22.0 },
                GameEvent::Absorbed { id: 2, avatar_radius: 24.0 },
            ]
        );
    }

    #[test]
    fn test_growth_applies_within_same_pass() {
        let arena = arena();
        let mut avatar = avatar_at(400.0, 300.0, 20.0);
        // Second entity is 36 away: out of reach at r=20, in reach at r=22
        let mut entities = vec![
            entity(1, 400.0, 300.0, 0.0, 0.0, 15.0),
            entity(2, 436.0, 300.0, 0.0, 0.0, 15.0),
        ];
        let mut events = Vec::new();

        let absorbed = resolve_collisions(&mut avatar, &mut entities, &arena, 2.0, &mut events);
        assert_eq!(absorbed, 2);
        assert!(entities.is_empty());
    }

    #[test]
    fn test_survivor_bounces() {
        let arena = arena();
        let mut avatar = avatar_at(400.0, 300.0, 20.0);
        let mut entities = vec![entity(1, 20.5, 300.0, -1.0, 0.0, 15.0)];
        let mut events = Vec::new();

        resolve_collisions(&mut avatar, &mut entities, &arena, 2.0, &mut events);
        assert_eq!(entities[0].body.pos.x, 20.0);
        assert_eq!(entities[0].body.vel.x, 1.0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_largest_entity() {
        assert!(largest_entity(&[]).is_none());
        let entities = vec![
            entity(1, 0.0, 0.0, 0.0, 0.0, 10.0),
            entity(2, 0.0, 0.0, 0.0, 0.0, 30.0),
            entity(3, 0.0, 0.0, 0.0, 0.0, 12.0),
        ];
        assert_eq!(largest_entity(&entities).map(|e| e.id), Some(2));
    }

    proptest! {
        #[test]
        fn prop_absorption_monotonic(
            ax in 50.0f32..750.0,
            spots in prop::collection::vec((20.0f32..780.0, 20.0f32..580.0), 0..40),
        ) {
            let arena = arena();
            let mut avatar = avatar_at(ax, 300.0, 20.0);
            let mut entities: Vec<_> = spots
                .iter()
                .enumerate()
                .map(|(i, (x, y))| entity(i as u32, *x, *y, 0.5, -0.5, 15.0))
                .collect();
            let mut events = Vec::new();
            let radius_before = avatar.body.radius;
            let count_before = entities.len();

            let absorbed =
                resolve_collisions(&mut avatar, &mut entities, &arena, 2.0, &mut events);

            prop_assert!(avatar.body.radius >= radius_before);
            prop_assert!(entities.len() <= count_before);
            prop_assert_eq!(absorbed as usize, count_before - entities.len());
            prop_assert_eq!(events.len(), absorbed as usize);

            // Every survivor is unique and still inside the arena
            let mut ids: Vec<_> = entities.iter().map(|e| e.id).collect();
            ids.dedup();
            prop_assert_eq!(ids.len(), entities.len());
            for e in &entities {
                prop_assert!(arena.contains(&e.body));
            }
        }
    }
}

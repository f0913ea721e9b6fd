//! Per-frame simulation tick
//!
//! Advances a session by one step. Rendering is not involved; the driver
//! calls `renderer::render` after each tick.

use super::collision::{largest_entity, resolve_collisions};
use super::spawn::maybe_spawn;
use super::state::{GameEvent, GamePhase, GameSession, Outcome};

/// One-shot inputs for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Restart request (click/tap). Ignored unless the session has ended.
    pub restart: bool,
    /// End the run as a loss (external trigger)
    pub forfeit: bool,
}

/// Advance the session by one tick
///
/// Order: avatar motion, spawn roll, absorption (which also moves the
/// surviving entities), then the win check against the largest remaining
/// entity. Nothing moves while the session is terminal.
pub fn tick(session: &mut GameSession, input: &TickInput) {
    session.events.clear();

    if input.restart {
        session.restart();
    }

    if session.phase != GamePhase::Running {
        return;
    }

    if input.forfeit {
        session.finish(Outcome::Lost);
        return;
    }

    session.time_ticks += 1;

    session.avatar.step(&session.arena);

    if let Some(id) = maybe_spawn(
        &mut session.entities,
        &mut session.next_id,
        &session.arena,
        &session.config,
        &mut session.rng,
    ) {
        session.events.push(GameEvent::Spawned { id });
    }

    let absorbed = resolve_collisions(
        &mut session.avatar,
        &mut session.entities,
        &session.arena,
        session.config.growth_per_absorb,
        &mut session.events,
    );
    session.score += absorbed;

    if is_won(session) {
        session.finish(Outcome::Won);
    }
}

/// Whether the avatar outgrew every remaining entity
///
/// An empty arena is not a win.
pub fn is_won(session: &GameSession) -> bool {
    largest_entity(&session.entities)
        .is_some_and(|largest| session.avatar.body.radius > largest.body.radius)
}

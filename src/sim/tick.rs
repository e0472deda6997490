//! Fixed timestep simulation tick
//!
//! Core game loop that advances a session deterministically. Input triggers
//! are applied between ticks, never in the middle of one.

use super::collision::find_collision;
use super::obstacle::ObstacleRole;
use super::state::{GameOver, GameSession};

/// Discrete triggers collected since the last tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Start a run (Idle only)
    pub start: bool,
    /// Jump impulse (Running only)
    pub jump: bool,
    /// Pause toggle (Running/Paused only)
    pub pause: bool,
    /// Back to Idle (Over only)
    pub restart: bool,
}

impl TickInput {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A single instantaneous input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Start,
    Jump,
    PauseToggle,
    Restart,
}

/// Apply one trigger as a phase transition. Illegal triggers are ignored.
pub fn apply_trigger(session: &mut GameSession, trigger: Trigger) {
    match trigger {
        Trigger::Start => session.start(),
        Trigger::Jump => session.jump(),
        Trigger::PauseToggle => session.toggle_pause(),
        Trigger::Restart => session.restart(),
    }
}

/// Apply a set of triggers as phase transitions.
///
/// Restart goes first so a restart + start pair in one frame begins a new run.
/// Hosts that care about arrival order feed [`apply_trigger`] directly.
pub fn apply_input(session: &mut GameSession, input: &TickInput) {
    if input.restart {
        session.restart();
    }
    if input.start {
        session.start();
    }
    if input.pause {
        session.toggle_pause();
    }
    if input.jump {
        session.jump();
    }
}

/// Advance a running session by exactly one tick.
///
/// Returns the game-over report on the tick a collision is detected. Does
/// nothing unless the session is Running.
pub fn step(session: &mut GameSession) -> Option<GameOver> {
    if !session.is_running() {
        return None;
    }

    // 1. Spawn
    if session
        .tick_count
        .is_multiple_of(session.tuning.spawn_interval_ticks)
    {
        let first_id = session.next_entity_ids(2);
        let pair = session.generator.generate_pair(
            &mut session.rng,
            session.score,
            session.tuning.world_width,
            first_id,
        );
        log::debug!(
            "Spawned gate {} at tick {} (upper height {:.1})",
            first_id,
            session.tick_count,
            pair[0].height()
        );
        session.obstacles.extend(pair);
    }

    // 2. Scroll and score. Only the upper half of a gate scores so each
    // gate counts once.
    let actor_x = session.actor.pos.x;
    let speed = session.tuning.obstacle_speed;
    for obstacle in &mut session.obstacles {
        obstacle.advance(speed);
        if obstacle.role == ObstacleRole::Upper
            && !obstacle.scored
            && obstacle.trailing_edge() < actor_x
        {
            obstacle.scored = true;
            session.score += 1;
            log::debug!("Cleared gate {}, score {}", obstacle.pair_id, session.score);
        }
    }

    // 3. Cull
    session.obstacles.retain(|o| !o.is_off_screen());

    // 4. Actor physics
    session.actor.apply_gravity_tick(session.tuning.gravity);

    // 5. Collision
    let collision = find_collision(
        &session.actor.bounds(),
        session.tuning.world_height,
        &session.obstacles,
        session.tuning.collision_margin,
    );

    // 6. The fatal tick still counts as completed
    session.tick_count += 1;

    collision.map(|cause| session.end_run(cause))
}

/// Apply input then advance one tick
pub fn tick(session: &mut GameSession, input: &TickInput) -> Option<GameOver> {
    apply_input(session, input);
    step(session)
}

//! Demo autopilot
//!
//! Plays the game for idle/demo mode: aim for the middle of the next gap and
//! jump whenever the actor would drop below it.

use super::obstacle::ObstacleRole;
use super::state::GameSession;

/// Vertical centre of the next gap the actor has not yet cleared, if any
pub fn next_gap_center(session: &GameSession) -> Option<f32> {
    let actor_left = session.actor.bounds().left;
    let upper = session
        .obstacles
        .iter()
        .find(|o| o.role == ObstacleRole::Upper && o.trailing_edge() >= actor_left)?;
    let lower = session
        .obstacles
        .iter()
        .find(|o| o.role == ObstacleRole::Lower && o.pair_id == upper.pair_id)?;
    Some((upper.bottom + lower.top) / 2.0)
}

/// Should the demo player jump this tick?
pub fn wants_jump(session: &GameSession) -> bool {
    if !session.is_running() {
        return false;
    }
    let target = next_gap_center(session).unwrap_or(session.tuning.world_height / 2.0);
    // Look one tick ahead so the jump fires before the actor sinks past the target
    let next_vel = session.actor.vel + session.tuning.gravity;
    let next_y = session.actor.pos.y + next_vel;
    next_y > target + session.actor.radius && session.actor.vel >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};
    use crate::tuning::Tuning;

    #[test]
    fn test_no_jump_when_idle() {
        let s = GameSession::new(Tuning::default(), 1);
        assert!(!wants_jump(&s));
    }

    #[test]
    fn test_gap_center_of_first_gate() {
        let mut s = GameSession::new(Tuning::default(), 1);
        s.start();
        tick(&mut s, &TickInput::default());
        let upper = &s.obstacles[0];
        let lower = &s.obstacles[1];
        let center = next_gap_center(&s).unwrap();
        assert!((center - (upper.bottom + lower.top) / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_autopilot_clears_gates() {
        for seed in [1u64, 2, 3, 4, 5] {
            let mut s = GameSession::new(Tuning::default(), seed);
            s.start();
            for _ in 0..(60 * 30) {
                let input = TickInput {
                    jump: wants_jump(&s),
                    ..Default::default()
                };
                if tick(&mut s, &input).is_some() {
                    break;
                }
            }
            assert!(s.score >= 3, "seed {} only scored {}", seed, s.score);
        }
    }
}

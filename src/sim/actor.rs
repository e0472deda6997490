//! The falling actor the player keeps airborne

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// Player-controlled entity. Moves vertically only; x never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    /// Vertical velocity (positive = downward)
    pub vel: f32,
    pub radius: f32,
}

impl Actor {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: 0.0,
            radius,
        }
    }

    /// Actor at the spawn point described by `tuning`
    pub fn spawn(tuning: &Tuning) -> Self {
        Self::new(
            Vec2::new(tuning.actor_x, tuning.actor_spawn_y),
            tuning.actor_radius,
        )
    }

    /// One semi-implicit Euler step: velocity first, then position.
    ///
    /// No clamping here; leaving the world is the collision detector's call.
    pub fn apply_gravity_tick(&mut self, gravity: f32) {
        self.vel += gravity;
        self.pos.y += self.vel;
    }

    /// Replace the current velocity with the jump impulse
    pub fn jump(&mut self, impulse: f32) {
        self.vel = impulse;
    }

    pub fn bounds(&self) -> Rect {
        Rect::around(self.pos.x, self.pos.y, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor() -> Actor {
        Actor::new(Vec2::new(80.0, 250.0), 12.0)
    }

    #[test]
    fn test_gravity_then_jump() {
        let mut a = actor();
        a.apply_gravity_tick(0.4);
        assert!((a.vel - 0.4).abs() < 1e-6);
        assert!((a.pos.y - 250.4).abs() < 1e-4);

        a.jump(-8.0);
        a.apply_gravity_tick(0.4);
        assert!((a.vel - (-7.6)).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_updates_before_position() {
        let mut a = actor();
        a.vel = 3.0;
        a.apply_gravity_tick(0.5);
        // Position moves by the new velocity, not the old one
        assert!((a.pos.y - 253.5).abs() < 1e-4);
    }

    #[test]
    fn test_jump_overrides_velocity() {
        for start in [-20.0, -8.0, 0.0, 0.4, 15.0] {
            let mut a = actor();
            a.vel = start;
            a.jump(-8.0);
            assert_eq!(a.vel, -8.0);
        }
    }

    #[test]
    fn test_bounds() {
        let a = actor();
        let b = a.bounds();
        assert_eq!(b.left, 68.0);
        assert_eq!(b.right, 92.0);
        assert_eq!(b.top, 238.0);
        assert_eq!(b.bottom, 262.0);
    }

    #[test]
    fn test_x_never_moves() {
        let mut a = actor();
        for _ in 0..100 {
            a.apply_gravity_tick(0.4);
        }
        assert_eq!(a.pos.x, 80.0);
    }
}

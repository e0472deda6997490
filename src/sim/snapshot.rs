//! Read-only view of a session for renderers
//!
//! Renderers never touch [`GameSession`] directly; they get one of these
//! after every tick (and on every paint while paused or over).

use glam::Vec2;
use serde::Serialize;

use super::obstacle::ObstacleRole;
use super::rect::Rect;
use super::state::{GamePhase, GameSession};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorView {
    pub pos: Vec2,
    pub vel: f32,
    pub radius: f32,
    pub bounds: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    pub id: u32,
    pub role: ObstacleRole,
    pub bounds: Rect,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub tick: u64,
    pub score: u64,
    pub world_width: f32,
    pub world_height: f32,
    pub ground_height: f32,
    pub actor: ActorView,
    /// Spawn order
    pub obstacles: Vec<ObstacleView>,
}

impl GameSession {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            tick: self.tick_count,
            score: self.score,
            world_width: self.tuning.world_width,
            world_height: self.tuning.world_height,
            ground_height: self.tuning.ground_height,
            actor: ActorView {
                pos: self.actor.pos,
                vel: self.actor.vel,
                radius: self.actor.radius,
                bounds: self.actor.bounds(),
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    role: o.role,
                    bounds: o.bounds(),
                })
                .collect(),
        }
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod autopilot;
pub mod collision;
pub mod obstacle;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use actor::Actor;
pub use collision::{Collision, collided, find_collision};
pub use obstacle::{Obstacle, ObstacleRole, PairGenerator};
pub use rect::Rect;
pub use snapshot::{ActorView, ObstacleView, Snapshot};
pub use state::{GameOver, GamePhase, GameSession};
pub use tick::{TickInput, Trigger, apply_input, apply_trigger, step, tick};

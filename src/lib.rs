//! Gate Runner - a side-scrolling gate runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `clock`: Fixed timestep clock control
//! - `game`: Host driver wiring input triggers, clock and score reporting
//! - `reporter`: Fire-and-forget score submission
//! - `renderer`: Stateless snapshot renderers
//! - `tuning` / `settings`: Data-driven game balance and run settings

pub mod clock;
pub mod error;
pub mod game;
pub mod highscores;
pub mod renderer;
pub mod reporter;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use clock::SimClock;
pub use error::{ConfigError, ReportError};
pub use game::Game;
pub use highscores::{HighScores, LeaderboardReporter};
pub use reporter::{ScoreDispatcher, ScoreReporter};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the clock will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 400.0;
    pub const WORLD_HEIGHT: f32 = 500.0;
    pub const GROUND_HEIGHT: f32 = 100.0;

    /// Actor defaults
    pub const GRAVITY: f32 = 0.4;
    pub const JUMP_IMPULSE: f32 = -8.0;
    pub const ACTOR_X: f32 = 80.0;
    pub const ACTOR_SPAWN_Y: f32 = WORLD_HEIGHT / 2.0;
    pub const ACTOR_RADIUS: f32 = 12.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const OBSTACLE_SPEED: f32 = 2.0;
    /// One pair every 4 seconds at 60 Hz
    pub const SPAWN_INTERVAL_TICKS: u64 = 240;
    pub const GAP_SIZE: f32 = 200.0;
    /// Wider gap handed out while the player is still warming up
    pub const EASY_GAP_SIZE: f32 = 250.0;
    pub const EASY_SCORE_THRESHOLD: u64 = 3;
    pub const MIN_OBSTACLE_HEIGHT: f32 = 30.0;

    /// Hitbox forgiveness (pixels shaved off every side)
    pub const COLLISION_MARGIN: f32 = 5.0;
}

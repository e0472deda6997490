//! Data-driven game balance
//!
//! Every number that shapes the "feel" of a run lives here so it can be
//! overridden from a settings file without touching the simulation.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Numeric tuning for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Simulation rate (ticks per second)
    pub tick_rate: u32,
    /// Playable area width
    pub world_width: f32,
    /// Playable area height (excludes the ground strip)
    pub world_height: f32,
    /// Ground strip drawn below the playable area
    pub ground_height: f32,

    /// Velocity added every tick (positive = downward)
    pub gravity: f32,
    /// Velocity set by a jump (overrides, not additive)
    pub jump_impulse: f32,
    pub actor_x: f32,
    pub actor_spawn_y: f32,
    pub actor_radius: f32,

    pub obstacle_width: f32,
    /// Leftward movement per tick
    pub obstacle_speed: f32,
    pub spawn_interval_ticks: u64,
    pub gap_size: f32,
    pub easy_gap_size: f32,
    /// Scores strictly below this get the easy gap
    pub easy_score_threshold: u64,
    pub min_obstacle_height: f32,

    /// Inward hitbox shrink and out-of-bounds forgiveness
    pub collision_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            ground_height: GROUND_HEIGHT,

            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            actor_x: ACTOR_X,
            actor_spawn_y: ACTOR_SPAWN_Y,
            actor_radius: ACTOR_RADIUS,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            gap_size: GAP_SIZE,
            easy_gap_size: EASY_GAP_SIZE,
            easy_score_threshold: EASY_SCORE_THRESHOLD,
            min_obstacle_height: MIN_OBSTACLE_HEIGHT,

            collision_margin: COLLISION_MARGIN,
        }
    }
}

impl Tuning {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid("tick_rate must be positive".into()));
        }
        if self.spawn_interval_ticks == 0 {
            return Err(ConfigError::Invalid(
                "spawn_interval_ticks must be positive".into(),
            ));
        }
        let floats = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("ground_height", self.ground_height),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("actor_x", self.actor_x),
            ("actor_spawn_y", self.actor_spawn_y),
            ("actor_radius", self.actor_radius),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_speed", self.obstacle_speed),
            ("gap_size", self.gap_size),
            ("easy_gap_size", self.easy_gap_size),
            ("min_obstacle_height", self.min_obstacle_height),
            ("collision_margin", self.collision_margin),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            return Err(ConfigError::Invalid("world size must be positive".into()));
        }
        let non_negative = [
            ("gap_size", self.gap_size),
            ("easy_gap_size", self.easy_gap_size),
            ("min_obstacle_height", self.min_obstacle_height),
            ("collision_margin", self.collision_margin),
            ("actor_radius", self.actor_radius),
            ("obstacle_width", self.obstacle_width),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

//! Game session state and phase transitions
//!
//! All mutable simulation state lives in [`GameSession`]. Phase changes go
//! through the transition methods here; anything not legal in the current
//! phase is silently ignored.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::collision::Collision;
use super::obstacle::{Obstacle, PairGenerator};
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start trigger
    Idle,
    /// Active gameplay, ticks advance
    Running,
    /// Frozen mid-run; ticks do not advance
    Paused,
    /// Run ended by a collision
    Over,
}

/// Emitted by the tick that ends a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub score: u64,
    /// Ticks completed, including the fatal one
    pub ticks: u64,
    pub cause: Collision,
}

/// Complete state of one play session
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Seed the RNG stream was created from
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Ticks simulated since the run started
    pub tick_count: u64,
    pub score: u64,
    pub actor: Actor,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub(crate) generator: PairGenerator,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameSession {
    /// Create an idle session with the given seed
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            seed,
            actor: Actor::spawn(&tuning),
            generator: PairGenerator::from_tuning(&tuning),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            phase: GamePhase::Idle,
            tick_count: 0,
            score: 0,
            obstacles: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate `count` consecutive entity ids, returning the first
    pub(crate) fn next_entity_ids(&mut self, count: u32) -> u32 {
        let id = self.next_id;
        self.next_id += count;
        id
    }

    /// Clear the run back to its starting conditions. Phase is left alone.
    fn reset_run(&mut self) {
        self.tick_count = 0;
        self.score = 0;
        self.obstacles.clear();
        self.actor = Actor::spawn(&self.tuning);
    }

    /// Idle -> Running
    pub fn start(&mut self) {
        if self.phase != GamePhase::Idle {
            log::debug!("start ignored in {:?}", self.phase);
            return;
        }
        self.reset_run();
        self.phase = GamePhase::Running;
        log::info!("Run started (seed {})", self.seed);
    }

    /// Running <-> Paused
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            other => {
                log::debug!("pause toggle ignored in {:?}", other);
                return;
            }
        };
        log::info!("{:?} at tick {}", self.phase, self.tick_count);
    }

    /// Apply the jump impulse; only while Running
    pub fn jump(&mut self) {
        if self.phase == GamePhase::Running {
            self.actor.jump(self.tuning.jump_impulse);
        }
    }

    /// Over -> Idle, with the run fully reset
    pub fn restart(&mut self) {
        if self.phase != GamePhase::Over {
            log::debug!("restart ignored in {:?}", self.phase);
            return;
        }
        self.reset_run();
        self.phase = GamePhase::Idle;
        log::info!("Session reset, waiting for start");
    }

    /// Running -> Over. Called by the tick that detects a collision.
    pub(crate) fn end_run(&mut self, cause: Collision) -> GameOver {
        self.phase = GamePhase::Over;
        log::info!(
            "Game over at tick {} with score {} ({:?})",
            self.tick_count,
            self.score,
            cause
        );
        GameOver {
            score: self.score,
            ticks: self.tick_count,
            cause,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

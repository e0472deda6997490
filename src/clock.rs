//! Fixed timestep clock
//!
//! Converts variable frame deltas into a whole number of simulation ticks.
//! The clock is started and stopped explicitly; while stopped it accumulates
//! nothing, so resuming never replays the ticks missed while stopped.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};

#[derive(Debug, Clone)]
pub struct SimClock {
    tick_dt: f32,
    accumulator: f32,
    running: bool,
    max_substeps: u32,
}

impl SimClock {
    /// Stopped clock ticking at `tick_rate` Hz
    pub fn new(tick_rate: u32) -> Self {
        Self {
            tick_dt: 1.0 / tick_rate.max(1) as f32,
            accumulator: 0.0,
            running: false,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop and drop any partial tick
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick_dt(&self) -> f32 {
        self.tick_dt
    }

    /// Feed a frame delta (seconds) and return how many ticks are due.
    ///
    /// Long frames are clamped and at most `MAX_SUBSTEPS` ticks run per frame;
    /// the excess is dropped rather than carried into the next frame.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut due = 0;
        while self.accumulator >= self.tick_dt && due < self.max_substeps {
            self.accumulator -= self.tick_dt;
            due += 1;
        }
        if due == self.max_substeps {
            self.accumulator = self.accumulator.min(self.tick_dt);
        }
        due
    }
}

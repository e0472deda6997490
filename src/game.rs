//! Host-side game driver
//!
//! Owns the session, the clock and the score dispatcher. Input triggers are
//! queued in arrival order and applied between ticks so no tick is ever seen
//! half-finished. This is the single path through which a session mutates.

use crate::clock::SimClock;
use crate::reporter::ScoreDispatcher;
use crate::sim::{GameOver, GamePhase, GameSession, Snapshot, Trigger, apply_trigger, step};
use crate::tuning::Tuning;

/// Game instance holding all state
pub struct Game {
    session: GameSession,
    clock: SimClock,
    pending: Vec<Trigger>,
    username: String,
    dispatcher: Option<ScoreDispatcher>,
    last_over: Option<GameOver>,
}

impl Game {
    pub fn new(tuning: Tuning, seed: u64, username: impl Into<String>) -> Self {
        Self {
            clock: SimClock::new(tuning.tick_rate),
            session: GameSession::new(tuning, seed),
            pending: Vec::new(),
            username: username.into(),
            dispatcher: None,
            last_over: None,
        }
    }

    /// Send final scores to `dispatcher` on every game over
    pub fn with_dispatcher(mut self, dispatcher: ScoreDispatcher) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    // Input triggers: safe to call at any time, applied in order on the next
    // update/step.

    pub fn start(&mut self) {
        self.pending.push(Trigger::Start);
    }

    pub fn jump(&mut self) {
        self.pending.push(Trigger::Jump);
    }

    pub fn pause_toggle(&mut self) {
        self.pending.push(Trigger::PauseToggle);
    }

    pub fn restart(&mut self) {
        self.pending.push(Trigger::Restart);
    }

    /// Advance by a wall-clock frame delta (seconds). Returns ticks simulated.
    pub fn update(&mut self, frame_dt: f32) -> u32 {
        self.flush_input();

        let due = self.clock.advance(frame_dt);
        let mut ran = 0;
        for _ in 0..due {
            ran += 1;
            if self.run_tick().is_some() {
                break;
            }
        }
        ran
    }

    /// Apply queued input and run exactly one tick if the session is running
    pub fn step(&mut self) -> Option<GameOver> {
        self.flush_input();
        if !self.session.is_running() {
            return None;
        }
        self.run_tick()
    }

    fn run_tick(&mut self) -> Option<GameOver> {
        let over = step(&mut self.session)?;
        self.on_game_over(over);
        Some(over)
    }

    fn flush_input(&mut self) {
        for trigger in std::mem::take(&mut self.pending) {
            let before = self.session.phase;
            apply_trigger(&mut self.session, trigger);
            if before == GamePhase::Over && self.session.phase != GamePhase::Over {
                self.last_over = None;
            }
        }
        self.sync_clock();
    }

    /// The clock runs exactly while the session does
    fn sync_clock(&mut self) {
        match (self.session.is_running(), self.clock.is_running()) {
            (true, false) => self.clock.start(),
            (false, true) => self.clock.stop(),
            _ => {}
        }
    }

    fn on_game_over(&mut self, over: GameOver) {
        self.last_over = Some(over);
        self.sync_clock();
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.dispatch(&self.username, over.score);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Stop the game and wait for pending score submissions
    pub fn shutdown(self) {
        if let Some(dispatcher) = self.dispatcher {
            dispatcher.shutdown();
        }
    }

    /// Result of the most recent run, until the next restart/start
    pub fn last_game_over(&self) -> Option<GameOver> {
        self.last_over
    }
}

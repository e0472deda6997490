//! Score reporting
//!
//! Final scores are handed off to a [`ScoreReporter`] on a background worker.
//! The game loop never waits for the result: failures are logged and dropped,
//! and nothing is retried.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};

use crate::error::ReportError;

/// Destination for final scores (remote API, local leaderboard, ...)
pub trait ScoreReporter: Send + Sync {
    fn submit(&self, username: &str, score: u64) -> Result<(), ReportError>;
}

/// A single queued submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub username: String,
    pub score: u64,
}

/// Fire-and-forget front end for a [`ScoreReporter`]
///
/// Dropping the dispatcher closes the queue; the worker finishes whatever is
/// already queued and exits.
pub struct ScoreDispatcher {
    tx: Sender<Submission>,
    worker: JoinHandle<()>,
}

impl ScoreDispatcher {
    /// Spawn the worker thread that drives `reporter`
    pub fn spawn(reporter: Arc<dyn ScoreReporter>) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded::<Submission>();
        let worker = thread::spawn(move || Self::process(rx, reporter));
        Self { tx, worker }
    }

    /// Queue a submission. Never blocks.
    pub fn dispatch(&self, username: &str, score: u64) {
        let submission = Submission {
            username: username.to_string(),
            score,
        };
        if let Err(e) = self.tx.send(submission) {
            log::warn!("Score reporter worker gone, dropping score {}: {}", score, e);
        }
    }

    /// Close the queue and wait for queued submissions to finish
    pub fn shutdown(self) {
        let Self { tx, worker } = self;
        drop(tx);
        if worker.join().is_err() {
            log::warn!("Score reporter worker panicked");
        }
    }

    fn process(rx: Receiver<Submission>, reporter: Arc<dyn ScoreReporter>) {
        for submission in rx {
            match reporter.submit(&submission.username, submission.score) {
                Ok(()) => log::info!(
                    "Submitted score {} for {}",
                    submission.score,
                    submission.username
                ),
                Err(e) => log::warn!(
                    "Score submission for {} failed: {}",
                    submission.username,
                    e
                ),
            }
        }
        log::debug!("Score reporter worker exiting");
    }
}

/// Reporter that only logs; used when no backend is configured
#[derive(Debug, Default)]
pub struct LogReporter;

impl ScoreReporter for LogReporter {
    fn submit(&self, username: &str, score: u64) -> Result<(), ReportError> {
        log::info!("Final score for {}: {}", username, score);
        Ok(())
    }
}

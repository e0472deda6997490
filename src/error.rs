//! Error types
//!
//! The simulation itself cannot fail; these cover the edges of the crate:
//! loading configuration and handing final scores to a reporter.

use thiserror::Error;

/// Failure while loading or validating settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Failure reported by a score reporter
///
/// Always swallowed by the dispatcher; never reaches the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("score rejected: {0}")]
    Rejected(String),
    #[error("score reporter unavailable")]
    Unavailable,
}

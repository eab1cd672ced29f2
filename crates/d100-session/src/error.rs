//! Error types for the dice-rolling session.

use thiserror::Error;

use d100_mechanics::MechError;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while running an action.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The user entered something the mechanics rejected. Nothing was rolled.
    #[error("{0}")]
    Validation(#[from] MechError),

    /// Writing to the display failed.
    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),

    /// Reading user input failed.
    #[error("input failed: {0}")]
    Input(String),
}

impl SessionError {
    /// Whether this error came from bad user input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

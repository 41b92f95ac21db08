//! Error types for the polish pipeline.
//!
//! Validation failure is data (`ValidationReport`), never an error. Only
//! configuration errors and terminal grounding failures are meant to reach
//! the caller; transport and format errors are recovered locally by the
//! client's retry loop and the engine's escalation ladder.

mod client_error;
mod grounding_error;

pub use client_error::ClientError;
pub use grounding_error::GroundingError;

/// Top-level error type for the polish pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PolishError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Grounding(#[from] GroundingError),
}

/// Convenience alias used across the workspace.
pub type PolishResult<T> = Result<T, PolishError>;

impl PolishError {
    /// Whether this error is a terminal grounding failure, as opposed to a
    /// configuration or transport problem.
    pub fn is_grounding_failure(&self) -> bool {
        matches!(self, PolishError::Grounding(_))
    }
}

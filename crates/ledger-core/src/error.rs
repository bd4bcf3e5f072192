//! Error types for the core data model.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building or updating core values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A name did not match any of the six abilities.
    #[error("unknown ability: {0}")]
    UnknownAbility(String),

    /// A character level below 1 was requested.
    #[error("invalid level: {0} (must be at least 1)")]
    InvalidLevel(i32),
}

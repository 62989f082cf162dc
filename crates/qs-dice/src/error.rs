//! Error types for the dice engine.
//!
//! Roll evaluation itself never fails — malformed notation degrades to a
//! best-effort pass-through. These errors cover the strict parsing
//! surfaces (`FromStr` impls) used by callers that want a hard answer.

use thiserror::Error;

/// Result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;

/// Errors from the strict parsing surfaces of the dice engine.
#[derive(Debug, Error)]
pub enum DiceError {
    /// A notation string does not match the `NdS[+-M]` shape.
    #[error("invalid dice notation: {0}")]
    InvalidNotation(String),

    /// An unknown roll mode name.
    #[error("invalid roll mode: {0} (expected normal, advantage, or disadvantage)")]
    InvalidMode(String),
}

//! Error types for statblock processing.
//!
//! Text rewriting itself never fails — unmatched text passes through
//! unchanged. Errors only arise from the stricter helper surfaces.

use thiserror::Error;

/// Result type for statblock operations.
pub type StatblockResult<T> = Result<T, StatblockError>;

/// Errors from statblock helpers.
#[derive(Debug, Error)]
pub enum StatblockError {
    /// A compendium URL is missing a collections or monsters path.
    #[error(
        "invalid source URL: {0} (expected /collections or /monsters after the host)"
    )]
    InvalidSourceUrl(String),
}

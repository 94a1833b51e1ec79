//! Domain error types.

use thiserror::Error;

/// Failures in roll generation.
///
/// The roll path has exactly one failure class: the random salt source.
/// Everything else (absent client ids, absent tokens) defaults rather than
/// erroring.
#[derive(Debug, Error)]
pub enum RollError {
    /// The random byte source failed. Fatal to the single request.
    #[error("entropy source failed: {0}")]
    Entropy(String),
}

//! Error types for refhash Core.

use thiserror::Error;

/// Errors from constructing an identifier out of untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Raw digest bytes of the wrong length.
    #[error("invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Packed digests in a buffer that is not a whole number of digests.
    #[error("packed digest buffer of {actual} bytes is not a multiple of {unit}")]
    NotMultipleOf { unit: usize, actual: usize },

    /// Text that is not a canonical identifier string.
    #[error("invalid hash string: {0:?}")]
    InvalidString(String),
}

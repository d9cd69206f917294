//! Error types for refhash.

use refhash_core::HashError;
use thiserror::Error;

/// Errors that can occur during refhash operations.
#[derive(Debug, Error)]
pub enum RefhashError {
    /// Malformed identifier input.
    #[error("hash error: {0}")]
    Hash(#[from] HashError),

    /// A string that is not a canonical hash.
    #[error("not a valid hash: {0:?}")]
    InvalidHash(String),

    /// Reading content failed.
    #[error("I/O error on {source_name}: {error}")]
    Io {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for refhash operations.
pub type Result<T> = std::result::Result<T, RefhashError>;

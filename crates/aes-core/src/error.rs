//! Error types for the cipher core.

use thiserror::Error;

/// Input contract violations reported by the slice-level entry point.
///
/// Both kinds are configuration errors: the caller handed over something
/// that is not a 16-byte value, and no cipher work has been done.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    /// The key was not exactly 16 bytes.
    #[error("AES-128 key must be 16 bytes, got {len}")]
    InvalidKeyLength {
        /// Observed key length in bytes.
        len: usize,
    },

    /// The block was not exactly 16 bytes.
    #[error("AES block must be 16 bytes, got {len}")]
    InvalidBlockLength {
        /// Observed block length in bytes.
        len: usize,
    },
}

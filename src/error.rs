//! Error types for proof construction

use thiserror::Error;

/// Result type alias using [`StampError`].
pub type Result<T> = std::result::Result<T, StampError>;

/// Errors that can occur while building a proof DAG.
///
/// Construction is otherwise pure and infallible; malformed inputs are the
/// caller's responsibility and are not validated here.
#[derive(Error, Debug)]
pub enum StampError {
    /// Merkleization was asked to fold zero timestamps.
    #[error("need at least one timestamp to build a merkle tree")]
    EmptyInput,

    /// The system randomness source failed while drawing a blinding nonce.
    #[error("randomness source unavailable: {0}")]
    Rng(#[from] rand::Error),
}

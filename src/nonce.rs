//! Nonce Blinding
//!
//! Privacy-preserving commitments: appending secret randomness before
//! digesting prevents a recipient of the final digest from inferring the
//! original message or sibling commitments in a shared batch.

use rand::{rngs::OsRng, RngCore};
use tracing::trace;

use crate::error::Result;
use crate::op::Op;
use crate::timestamp::Timestamp;

/// Length in bytes of the blinding nonce.
pub const NONCE_LEN: usize = 16;

/// Create a blinded version of a timestamp.
///
/// Draws [`NONCE_LEN`] bytes of cryptographically secure randomness, appends
/// them to the timestamp's message, and SHA-256 digests the result. Two calls
/// for the same timestamp produce different final messages (each call records
/// its own `Append` edge on the input), so the returned commitment reveals
/// nothing about the original message.
///
/// Fails only if the system randomness source is unavailable.
pub fn nonce_timestamp(private_timestamp: &Timestamp) -> Result<Timestamp> {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.try_fill_bytes(&mut nonce)?;
    trace!(nonce = %hex::encode(nonce), "blinding timestamp");

    let nonced = private_timestamp.add_op(Op::append(nonce.to_vec()));
    Ok(nonced.add_op(Op::sha256()))
}

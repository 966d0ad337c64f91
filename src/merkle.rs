//! Binary Combination and Order-Preserving Merkleization
//!
//! Commits pairs of timestamps into shared descendants and folds arbitrary
//! sequences of timestamps into a single root. Pairing is strictly positional:
//! input order determines tree shape, leaves are never sorted, and an odd
//! trailing element at any level is carried forward unpaired. Reordering the
//! same leaves therefore produces a different root.

use tracing::debug;

use crate::error::{Result, StampError};
use crate::op::{DigestKind, Op};
use crate::timestamp::Timestamp;

/// Concatenate `left` and `right`, then apply a digest to the result.
///
/// Both inputs may be existing timestamps or raw bytes (raw bytes are wrapped
/// as fresh leaves). The concatenation `left.message() ++ right.message()` is
/// materialized as a single node reachable from both parents: `left` gains an
/// `Append(right.message())` edge and `right` gains a
/// `Prepend(left.message())` edge, and both edges point at the same node. Any
/// operation later added through either parent is visible through the other.
///
/// Returns the child of the `Digest(kind)` edge on the shared node.
pub fn cat_then_unary_op(
    kind: DigestKind,
    left: impl Into<Timestamp>,
    right: impl Into<Timestamp>,
) -> Timestamp {
    let left = left.into();
    let right = right.into();

    // Build the shared concatenation node once, under right's prepend edge,
    // then force left's append edge to point at that same node. When the pair
    // was combined before, add_op returns the existing shared node and the
    // overwrite is a no-op.
    let joined = right.add_op(Op::prepend(left.message().to_vec()));
    left.set_op(Op::append(right.message().to_vec()), &joined);

    joined.add_op(Op::Digest(kind))
}

/// Concatenate and SHA-256: `SHA256(left ++ right)`.
pub fn cat_sha256(left: impl Into<Timestamp>, right: impl Into<Timestamp>) -> Timestamp {
    cat_then_unary_op(DigestKind::Sha256, left, right)
}

/// Concatenate and double SHA-256: `SHA256(SHA256(left ++ right))`.
pub fn cat_sha256d(left: impl Into<Timestamp>, right: impl Into<Timestamp>) -> Timestamp {
    let sha256_timestamp = cat_sha256(left, right);
    sha256_timestamp.add_op(Op::sha256())
}

/// Merkleize a sequence of timestamps with [`cat_sha256`], returning the root.
///
/// See [`make_merkle_tree_with`] for the reduction rules.
pub fn make_merkle_tree<I>(timestamps: I) -> Result<Timestamp>
where
    I: IntoIterator<Item = Timestamp>,
{
    make_merkle_tree_with(cat_sha256, timestamps)
}

/// Merkleize a sequence of timestamps with an explicit combiner.
///
/// Reduces level by level: elements `2i` and `2i+1` are combined left to
/// right; an odd trailing element is carried to the next level unpaired,
/// after the combine results. A single-element input is returned unchanged
/// with zero combine calls. An empty input fails with
/// [`StampError::EmptyInput`].
pub fn make_merkle_tree_with<F, I>(combine: F, timestamps: I) -> Result<Timestamp>
where
    F: Fn(Timestamp, Timestamp) -> Timestamp,
    I: IntoIterator<Item = Timestamp>,
{
    let mut level: Vec<Timestamp> = timestamps.into_iter().collect();

    loop {
        match level.as_slice() {
            [] => return Err(StampError::EmptyInput),
            [root] => return Ok(root.clone()),
            _ => {}
        }

        debug!(width = level.len(), "reducing merkle level");
        let mut next = Vec::with_capacity(level.len() / 2 + 1);
        for pair in level.chunks(2) {
            match pair {
                [a, b] => next.push(combine(a.clone(), b.clone())),
                [odd] => next.push(odd.clone()),
                _ => unreachable!("chunks(2) yields one or two elements"),
            }
        }
        level = next;
    }
}

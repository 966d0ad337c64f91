//! # Stampgraph
//!
//! Construction of verifiable timestamp proofs: directed acyclic graphs of
//! byte-transform operations recording how an input message is turned, step
//! by step, into one or more derived digests. The resulting structure is
//! anchored externally (blockchain, trusted log); anchoring, serialization,
//! and attestation verification live outside this crate.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        STAMPGRAPH                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  op.rs         - Append/prepend/digest transform primitives │
//! │  timestamp.rs  - Proof DAG node with deduplicating edges    │
//! │  merkle.rs     - Pairwise combine + order-preserving        │
//! │                  merkleization                              │
//! │  nonce.rs      - Randomized blinding for private batches    │
//! │  error.rs      - Error taxonomy                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sharing Guarantee
//!
//! Two independent commitments producing the same intermediate message are
//! merged into a single node rather than duplicated: a node's edge map is
//! deduplicated by structural operation equality, and
//! [`cat_then_unary_op`] forces both parents of a concatenation onto one
//! shared descendant. Any operation added to that descendant is visible
//! through either parent, which later verification depends on.
//!
//! Construction is single-threaded by design; node handles are reference
//! counted and `!Send`/`!Sync`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod error;
pub mod merkle;
pub mod nonce;
pub mod op;
pub mod timestamp;

// Re-export the caller-facing surface
pub use error::{Result, StampError};
pub use merkle::{
    cat_sha256, cat_sha256d, cat_then_unary_op, make_merkle_tree, make_merkle_tree_with,
};
pub use nonce::{nonce_timestamp, NONCE_LEN};
pub use op::{DigestKind, Op};
pub use timestamp::Timestamp;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

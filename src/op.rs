//! Proof Operations
//!
//! Pure, deterministic byte transforms that label the edges of the proof DAG:
//! - Append/prepend of caller-supplied bytes
//! - SHA-256 and RIPEMD-160 digests
//!
//! Operations are value types: two operations are equal when they have the
//! same tag and the same argument bytes. That structural equality is what the
//! edge-map deduplication in [`crate::Timestamp`] keys on.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Identifies one of the supported digest functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DigestKind {
    /// SHA-256, 32-byte output.
    Sha256,
    /// RIPEMD-160, 20-byte output.
    Ripemd160,
}

impl DigestKind {
    /// Output length of the digest in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Ripemd160 => 20,
        }
    }

    /// Digest a message.
    pub fn digest(self, msg: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha256 => Sha256::digest(msg).to_vec(),
            Self::Ripemd160 => Ripemd160::digest(msg).to_vec(),
        }
    }
}

impl std::fmt::Display for DigestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sha256 => write!(f, "sha256"),
            Self::Ripemd160 => write!(f, "ripemd160"),
        }
    }
}

/// A deterministic byte transform attached to a proof DAG edge.
///
/// Every operation is pure: [`Op::apply`] depends only on the operation's
/// argument bytes and the input message. Empty append/prepend arguments are
/// legal and recorded as distinct edges like any other operation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// Append the argument bytes: `msg ++ suffix`.
    Append(Vec<u8>),
    /// Prepend the argument bytes: `prefix ++ msg`.
    Prepend(Vec<u8>),
    /// Hash the message with the given digest function.
    Digest(DigestKind),
}

impl Op {
    /// Append operation from any byte source.
    pub fn append(suffix: impl Into<Vec<u8>>) -> Self {
        Self::Append(suffix.into())
    }

    /// Prepend operation from any byte source.
    pub fn prepend(prefix: impl Into<Vec<u8>>) -> Self {
        Self::Prepend(prefix.into())
    }

    /// SHA-256 digest operation.
    pub const fn sha256() -> Self {
        Self::Digest(DigestKind::Sha256)
    }

    /// RIPEMD-160 digest operation.
    pub const fn ripemd160() -> Self {
        Self::Digest(DigestKind::Ripemd160)
    }

    /// Apply the transform to a message, producing the derived message.
    pub fn apply(&self, msg: &[u8]) -> Vec<u8> {
        match self {
            Self::Append(suffix) => {
                let mut out = Vec::with_capacity(msg.len() + suffix.len());
                out.extend_from_slice(msg);
                out.extend_from_slice(suffix);
                out
            }
            Self::Prepend(prefix) => {
                let mut out = Vec::with_capacity(prefix.len() + msg.len());
                out.extend_from_slice(prefix);
                out.extend_from_slice(msg);
                out
            }
            Self::Digest(kind) => kind.digest(msg),
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Append(arg) => write!(f, "append {}", hex::encode(arg)),
            Self::Prepend(arg) => write!(f, "prepend {}", hex::encode(arg)),
            Self::Digest(kind) => write!(f, "{}", kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_prepend() {
        assert_eq!(Op::append(b"cd".to_vec()).apply(b"ab"), b"abcd");
        assert_eq!(Op::prepend(b"ab".to_vec()).apply(b"cd"), b"abcd");
    }

    #[test]
    fn test_empty_argument_is_identity_shaped() {
        // Zero-length arguments are legal ops; the result equals the input.
        assert_eq!(Op::append(Vec::new()).apply(b"msg"), b"msg");
        assert_eq!(Op::prepend(Vec::new()).apply(b"msg"), b"msg");
        // But they are distinct operations from each other.
        assert_ne!(Op::append(Vec::new()), Op::prepend(Vec::new()));
    }

    #[test]
    fn test_sha256_known_vector() {
        // SHA-256("abc")
        let digest = Op::sha256().apply(b"abc");
        assert_eq!(
            hex::encode(&digest),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_ripemd160_known_vector() {
        // RIPEMD-160("abc")
        let digest = Op::ripemd160().apply(b"abc");
        assert_eq!(hex::encode(&digest), "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc");
    }

    #[test]
    fn test_digest_output_lengths() {
        assert_eq!(Op::sha256().apply(b"").len(), DigestKind::Sha256.output_len());
        assert_eq!(
            Op::ripemd160().apply(b"").len(),
            DigestKind::Ripemd160.output_len()
        );
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Op::append(b"x".to_vec()), Op::append(b"x".to_vec()));
        assert_ne!(Op::append(b"x".to_vec()), Op::append(b"y".to_vec()));
        assert_ne!(Op::append(b"x".to_vec()), Op::prepend(b"x".to_vec()));
        assert_eq!(Op::sha256(), Op::sha256());
        assert_ne!(Op::sha256(), Op::ripemd160());
    }
}

//! Timestamp Proof Nodes
//!
//! A [`Timestamp`] is a vertex in the proof DAG: one immutable message plus an
//! ordered, deduplicating map from [`Op`] to child node. Children are created
//! exactly once per distinct operation; re-adding an operation returns the
//! existing child, which is what lets independent commitment paths converge on
//! a single shared node.
//!
//! Handles are reference counted. A node reached through two parents (the
//! deliberate merge case in [`crate::cat_then_unary_op`]) lives as long as the
//! longest-lived parent referencing it. Construction is single-threaded by
//! design: the handle is `!Send`/`!Sync`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::op::Op;

struct TimestampNode {
    /// Fixed at construction, never changed.
    msg: Vec<u8>,
    /// Outgoing edges in insertion order; keys are structurally unique.
    ops: RefCell<Vec<(Op, Timestamp)>>,
}

/// A shared handle to a proof DAG node.
///
/// Cloning the handle is cheap and refers to the same underlying node. Use
/// [`Timestamp::same_node`] to test node identity; there is no structural
/// equality on handles.
#[derive(Clone)]
pub struct Timestamp(Rc<TimestampNode>);

impl Timestamp {
    /// Create a leaf node wrapping the given message, with no edges.
    pub fn new(msg: impl Into<Vec<u8>>) -> Self {
        Self(Rc::new(TimestampNode {
            msg: msg.into(),
            ops: RefCell::new(Vec::new()),
        }))
    }

    /// The node's message.
    pub fn message(&self) -> &[u8] {
        &self.0.msg
    }

    /// True if both handles refer to the same underlying node.
    pub fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Add an operation edge and return the child node.
    ///
    /// If an edge with a structurally equal operation already exists, the
    /// existing child is returned and nothing is recomputed. Otherwise the
    /// operation is applied to this node's message, a new child wrapping the
    /// result is inserted at the end of the edge list, and that child is
    /// returned. Only this node's own edge list is ever mutated.
    pub fn add_op(&self, op: Op) -> Timestamp {
        let mut ops = self.0.ops.borrow_mut();
        if let Some((_, existing)) = ops.iter().find(|(key, _)| *key == op) {
            return existing.clone();
        }
        let child = Timestamp::new(op.apply(&self.0.msg));
        ops.push((op, child.clone()));
        child
    }

    /// Point the edge for `op` at `child`, inserting the edge if absent.
    ///
    /// Used by the binary-combine merge step to force two parents to share one
    /// node for the same derived message. The caller is responsible for
    /// `child.message() == op.apply(self.message())`; every call site derives
    /// `child` from exactly that application on the sibling parent.
    pub(crate) fn set_op(&self, op: Op, child: &Timestamp) {
        let mut ops = self.0.ops.borrow_mut();
        if let Some(slot) = ops.iter_mut().find(|(key, _)| *key == op) {
            slot.1 = child.clone();
        } else {
            ops.push((op, child.clone()));
        }
    }

    /// Snapshot of the outgoing edges in insertion order.
    ///
    /// Returned handles alias the live children; this is the read surface an
    /// external serializer or verifier walks.
    pub fn ops(&self) -> Vec<(Op, Timestamp)> {
        self.0.ops.borrow().clone()
    }

    /// Number of outgoing edges.
    pub fn op_count(&self) -> usize {
        self.0.ops.borrow().len()
    }

    /// True if the node has no outgoing edges.
    pub fn is_leaf(&self) -> bool {
        self.0.ops.borrow().is_empty()
    }
}

impl std::fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Abbreviate long messages; full bytes are available via message().
        let msg = &self.0.msg;
        let shown = if msg.len() > 8 {
            format!("{}..", hex::encode(&msg[..8]))
        } else {
            hex::encode(msg)
        };
        f.debug_struct("Timestamp")
            .field("msg", &shown)
            .field("ops", &self.op_count())
            .finish()
    }
}

impl From<Vec<u8>> for Timestamp {
    fn from(msg: Vec<u8>) -> Self {
        Self::new(msg)
    }
}

impl From<&[u8]> for Timestamp {
    fn from(msg: &[u8]) -> Self {
        Self::new(msg)
    }
}

impl<const N: usize> From<&[u8; N]> for Timestamp {
    fn from(msg: &[u8; N]) -> Self {
        Self::new(msg.as_slice())
    }
}

impl From<&Timestamp> for Timestamp {
    fn from(ts: &Timestamp) -> Self {
        ts.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::DigestKind;

    #[test]
    fn test_leaf_construction() {
        let ts = Timestamp::new(b"hello".to_vec());
        assert_eq!(ts.message(), b"hello");
        assert!(ts.is_leaf());
        assert_eq!(ts.op_count(), 0);
    }

    #[test]
    fn test_add_op_derives_message() {
        let ts = Timestamp::new(b"msg".to_vec());
        let child = ts.add_op(Op::append(b"!".to_vec()));
        assert_eq!(child.message(), b"msg!");
        assert!(!ts.is_leaf());
        assert_eq!(ts.op_count(), 1);
    }

    #[test]
    fn test_add_op_idempotent() {
        let ts = Timestamp::new(b"msg".to_vec());
        let first = ts.add_op(Op::sha256());
        let second = ts.add_op(Op::sha256());

        // Same child handle both times, one edge not two.
        assert!(first.same_node(&second));
        assert_eq!(ts.op_count(), 1);
    }

    #[test]
    fn test_distinct_ops_distinct_children() {
        let ts = Timestamp::new(b"msg".to_vec());
        let sha = ts.add_op(Op::Digest(DigestKind::Sha256));
        let ripemd = ts.add_op(Op::Digest(DigestKind::Ripemd160));

        assert!(!sha.same_node(&ripemd));
        assert_eq!(ts.op_count(), 2);
    }

    #[test]
    fn test_edge_invariant_holds_by_construction() {
        let ts = Timestamp::new(b"base".to_vec());
        ts.add_op(Op::append(b"suffix".to_vec()));
        ts.add_op(Op::prepend(b"prefix".to_vec()));
        ts.add_op(Op::sha256());

        for (op, child) in ts.ops() {
            assert_eq!(child.message(), op.apply(ts.message()));
        }
    }

    #[test]
    fn test_ops_preserve_insertion_order() {
        let ts = Timestamp::new(b"m".to_vec());
        ts.add_op(Op::append(b"1".to_vec()));
        ts.add_op(Op::append(b"2".to_vec()));
        ts.add_op(Op::sha256());

        let ops: Vec<Op> = ts.ops().into_iter().map(|(op, _)| op).collect();
        assert_eq!(
            ops,
            vec![
                Op::append(b"1".to_vec()),
                Op::append(b"2".to_vec()),
                Op::sha256()
            ]
        );
    }

    #[test]
    fn test_empty_argument_edge_is_recorded() {
        let ts = Timestamp::new(b"m".to_vec());
        let child = ts.add_op(Op::append(Vec::new()));
        assert_eq!(child.message(), ts.message());
        // Same bytes, but a real edge to a distinct node.
        assert!(!child.same_node(&ts));
        assert_eq!(ts.op_count(), 1);
    }

    #[test]
    fn test_set_op_overwrites_existing_edge() {
        let ts = Timestamp::new(b"m".to_vec());
        let op = Op::append(b"x".to_vec());
        let stale = ts.add_op(op.clone());

        let replacement = Timestamp::new(op.apply(ts.message()));
        ts.set_op(op.clone(), &replacement);

        assert_eq!(ts.op_count(), 1);
        let (_, current) = &ts.ops()[0];
        assert!(current.same_node(&replacement));
        assert!(!current.same_node(&stale));
    }

    #[test]
    fn test_clone_aliases_same_node() {
        let ts = Timestamp::new(b"m".to_vec());
        let alias = ts.clone();
        alias.add_op(Op::sha256());
        // Edge added through the alias is visible through the original.
        assert_eq!(ts.op_count(), 1);
        assert!(ts.same_node(&alias));
    }
}

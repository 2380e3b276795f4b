//! Core types and data structures for RedBlackTree.
//!
//! This module contains the node representation, the sentinel handle and
//! the tree struct shared by every container in the crate.

use crate::arena::{Arena, NodeId};

// ============================================================================
// CONSTANTS
// ============================================================================

/// The sentinel handle.
///
/// One shared, permanently black, keyless terminal standing in for every
/// missing child and for the parent of the root. It owns no arena slot: its
/// color is always black, its subtree size is always zero, and the only
/// state it carries is the transient parent link the removal fix-up needs,
/// stored on the tree as `nil_parent`.
pub const NIL: NodeId = NodeId::MAX;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Node color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// A tree node. Children are owned through the arena; `parent` is a
/// non-owning back-reference used by rotation and removal.
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    /// Number of nodes in the subtree rooted here, including this one.
    pub(crate) size: usize,
}

/// Red-black tree keyed by `K`, storing a `V` alongside every key.
///
/// The tree runs in one of two modes fixed at construction:
///
/// * **unique keys**: inserting a key already present is a no-op that
///   reports non-insertion.
/// * **duplicate keys**: equal keys may repeat. Insertion always descends
///   right on an equal comparison, so entries with equal keys enumerate in
///   the order they were inserted.
///
/// Every node carries its subtree size, which makes positional access
/// (`index`, `rank`) logarithmic.
///
/// # Examples
///
/// ```
/// use ordkit::RedBlackTree;
///
/// let mut tree = RedBlackTree::new_unique();
/// assert!(tree.insert(3, "three"));
/// assert!(tree.insert(1, "one"));
/// assert!(!tree.insert(3, "again"));
///
/// assert_eq!(tree.count(), 2);
/// assert_eq!(tree.index(0), (&1, &"one"));
/// assert_eq!(tree.get(&3), Some(&"three"));
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n)
/// - **Removal**: O(log n)
/// - **Lookup**: O(log n)
/// - **Positional access**: O(log n)
/// - **Multi-key gather**: O(n) per requested key
/// - **Iteration**: O(n)
#[derive(Clone)]
pub struct RedBlackTree<K, V> {
    /// The root node of the tree, `NIL` when empty.
    pub(crate) root: NodeId,
    /// Arena storage for every live node.
    pub(crate) nodes: Arena<Node<K, V>>,
    /// Number of live nodes.
    pub(crate) count: usize,
    /// Fixed at construction.
    pub(crate) unique_keys: bool,
    /// Parent link of the sentinel, only meaningful during removal.
    pub(crate) nil_parent: NodeId,
}

// ============================================================================
// ENUMS AND RESULT TYPES
// ============================================================================

/// Result of attaching a new entry to the tree.
pub(crate) enum InsertResult<V> {
    /// A new node was created.
    Inserted(NodeId),
    /// Unique mode only: the key was already present. The rejected
    /// value is handed back untouched.
    Occupied { id: NodeId, value: V },
}

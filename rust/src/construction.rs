//! Construction and initialization logic for RedBlackTree.
//!
//! The only configuration a tree has is its key mode, fixed here for the
//! tree's whole lifetime, and an optional arena preallocation.

use crate::arena::{Arena, ArenaStats};
use crate::types::{RedBlackTree, NIL};

impl<K, V> RedBlackTree<K, V> {
    /// Create an empty tree.
    ///
    /// # Arguments
    ///
    /// * `unique_keys` - `true` rejects equal keys, `false` keeps them all
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::RedBlackTree;
    ///
    /// let tree = RedBlackTree::<i32, String>::new(false);
    /// assert!(tree.is_empty());
    /// assert!(!tree.is_unique_keys());
    /// ```
    pub fn new(unique_keys: bool) -> Self {
        Self::with_capacity(unique_keys, 0)
    }

    /// Create an empty tree whose node arena holds `capacity` nodes before
    /// reallocating.
    pub fn with_capacity(unique_keys: bool, capacity: usize) -> Self {
        Self {
            root: NIL,
            nodes: Arena::with_capacity(capacity),
            count: 0,
            unique_keys,
            nil_parent: NIL,
        }
    }

    /// Create an empty tree that rejects duplicate keys.
    pub fn new_unique() -> Self {
        Self::new(true)
    }

    /// Create an empty tree that keeps duplicate keys (bag semantics).
    pub fn new_multi() -> Self {
        Self::new(false)
    }

    /// Whether equal keys are rejected.
    pub fn is_unique_keys(&self) -> bool {
        self.unique_keys
    }

    /// Node storage statistics.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::with_capacity(true, 16);
    /// tree.insert(1, ());
    /// tree.insert(2, ());
    /// tree.remove(&1);
    ///
    /// let stats = tree.arena_stats();
    /// assert_eq!(stats.allocated_count, 1);
    /// assert_eq!(stats.free_count, 1);
    /// assert!(stats.total_capacity >= 16);
    /// ```
    pub fn arena_stats(&self) -> ArenaStats {
        self.nodes.stats()
    }

    /// An empty tree in the same key mode as `self`.
    pub(crate) fn empty_like(&self) -> Self {
        Self::new(self.unique_keys)
    }
}

impl<K, V> Default for RedBlackTree<K, V> {
    /// Create an empty unique-key tree.
    fn default() -> Self {
        Self::new_unique()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_construction() {
        let tree = RedBlackTree::<i32, String>::new(true);
        assert!(tree.is_unique_keys());
        assert_eq!(tree.root, NIL);
        assert_eq!(tree.count, 0);
    }

    #[test]
    fn test_multi_construction() {
        let tree = RedBlackTree::<i32, String>::new_multi();
        assert!(!tree.is_unique_keys());
        assert!(!tree.empty_like().is_unique_keys());
    }

    #[test]
    fn test_tree_default_is_unique() {
        let tree = RedBlackTree::<i32, String>::default();
        assert!(tree.is_unique_keys());
    }

    #[test]
    fn test_with_capacity_preallocates() {
        let tree = RedBlackTree::<i32, i32>::with_capacity(true, 64);
        let stats = tree.arena_stats();
        assert!(stats.total_capacity >= 64);
        assert_eq!(stats.allocated_count, 0);
        assert_eq!(stats.utilization, 0.0);
    }
}

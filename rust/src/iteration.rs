//! Iterator implementations for RedBlackTree.
//!
//! In-order iteration walks successor/predecessor links from both ends, so
//! a full pass is O(n) and the iterator is double-ended.

use std::iter::FusedIterator;

use crate::arena::NodeId;
use crate::types::RedBlackTree;

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// In-order iterator over `(key, value)` pairs.
pub struct Iter<'a, K, V> {
    tree: &'a RedBlackTree<K, V>,
    front: NodeId,
    back: NodeId,
    // Stops both cursors once they meet.
    remaining: usize,
}

/// Iterator over keys in order.
pub struct Keys<'a, K, V> {
    items: Iter<'a, K, V>,
}

/// Iterator over values in key order.
pub struct Values<'a, K, V> {
    items: Iter<'a, K, V>,
}

// ============================================================================
// TREE ITERATOR METHODS
// ============================================================================

impl<K, V> RedBlackTree<K, V> {
    /// Returns an iterator over all entries in key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    /// Returns an iterator over all keys in order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { items: self.iter() }
    }

    /// Returns an iterator over all values in key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { items: self.iter() }
    }
}

// ============================================================================
// ITER IMPLEMENTATION
// ============================================================================

impl<'a, K, V> Iter<'a, K, V> {
    fn new(tree: &'a RedBlackTree<K, V>) -> Self {
        Self {
            tree,
            front: tree.minimum(tree.root),
            back: tree.maximum(tree.root),
            remaining: tree.count,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.tree.node(self.front)?;
        self.remaining -= 1;
        self.front = self.tree.successor(self.front);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.tree.node(self.back)?;
        self.remaining -= 1;
        self.back = self.tree.predecessor(self.back);
        Some((&node.key, &node.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

// ============================================================================
// KEY AND VALUE ITERATORS
// ============================================================================

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a RedBlackTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_in_key_order() {
        let mut tree = RedBlackTree::new_unique();
        for key in [5, 3, 8, 1, 4, 7, 9] {
            tree.insert(key, key * 100);
        }
        let items: Vec<_> = tree.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(
            items,
            vec![(1, 100), (3, 300), (4, 400), (5, 500), (7, 700), (8, 800), (9, 900)]
        );
        assert_eq!(tree.iter().len(), 7);
    }

    #[test]
    fn test_iter_from_both_ends() {
        let mut tree = RedBlackTree::new_unique();
        for key in 1..=6 {
            tree.insert(key, ());
        }
        let mut keys = tree.keys();
        assert_eq!(keys.next(), Some(&1));
        assert_eq!(keys.next_back(), Some(&6));
        assert_eq!(keys.next(), Some(&2));
        assert_eq!(keys.next_back(), Some(&5));
        assert_eq!(keys.next(), Some(&3));
        assert_eq!(keys.next_back(), Some(&4));
        assert_eq!(keys.next(), None);
        assert_eq!(keys.next_back(), None);
    }

    #[test]
    fn test_rev_values() {
        let mut tree = RedBlackTree::new_multi();
        tree.insert(2, "b");
        tree.insert(1, "a");
        tree.insert(2, "c");
        let values: Vec<_> = tree.values().rev().copied().collect();
        assert_eq!(values, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_empty_iter() {
        let tree: RedBlackTree<i32, i32> = RedBlackTree::new_unique();
        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.iter().next_back(), None);
        assert_eq!((&tree).into_iter().count(), 0);
    }
}

//! GET operations for RedBlackTree.
//!
//! This module contains all the read operations for the tree: key lookup,
//! positional (order-statistic) access, rank queries, and the multi-key
//! gather that copies matching entries into a fresh tree.

use std::cmp::Ordering;

use crate::arena::NodeId;
use crate::error::{KeyResult, TreeError, TreeResult};
use crate::types::{RedBlackTree, NIL};

impl<K: Ord, V> RedBlackTree<K, V> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Look up a key, returning the stored key and value.
    ///
    /// With duplicate keys this is the first equal entry met on the search
    /// path from the root, the same one `remove` would take.
    pub fn search(&self, key: &K) -> Option<(&K, &V)> {
        self.node(self.find_node(key))
            .map(|node| (&node.key, &node.value))
    }

    /// Get a reference to the value associated with a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new_unique();
    /// tree.insert(1, "one");
    /// assert_eq!(tree.get(&1), Some(&"one"));
    /// assert_eq!(tree.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.search(key).map(|(_, value)| value)
    }

    /// Get a mutable reference to the value for a key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.find_node(key);
        self.nodes.get_mut(id).map(|node| &mut node.value)
    }

    /// Check if key exists in the tree.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_node(key) != NIL
    }

    /// Get value for a key, returning an error if the key doesn't exist.
    pub fn try_get(&self, key: &K) -> KeyResult<&V> {
        self.get(key).ok_or(TreeError::KeyNotFound)
    }

    /// Number of entries strictly less than `key`.
    pub fn rank(&self, key: &K) -> usize {
        self.count_below(key, false)
    }

    /// In-order position of the first entry equal to `key`.
    pub fn position(&self, key: &K) -> Option<usize> {
        let rank = self.rank(key);
        match self.get_index(rank) {
            Some((found, _)) if found == key => Some(rank),
            _ => None,
        }
    }

    /// Number of entries whose key equals `key`; at most one in unique mode.
    pub fn count_of(&self, key: &K) -> usize {
        self.count_below(key, true) - self.count_below(key, false)
    }

    /// Gather every entry whose key matches any of `keys` into a new tree
    /// in the same key mode.
    ///
    /// Each requested key is matched by visiting every node, so the cost is
    /// O(n) per key regardless of balance. Matching entries are copied;
    /// the result shares nothing with `self`.
    pub fn search_keys<'a, I>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = &'a K>,
        K: Clone + 'a,
        V: Clone,
    {
        let mut gathered = self.empty_like();
        for key in keys {
            self.gather(key, self.root, &mut gathered);
        }
        gathered
    }

    // ============================================================================
    // HELPERS FOR GET OPERATIONS
    // ============================================================================

    /// Standard search path; `NIL` if absent.
    pub(crate) fn find_node(&self, key: &K) -> NodeId {
        let mut current = self.root;
        while current != NIL {
            let node = &self.nodes[current];
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => return current,
            }
        }
        NIL
    }

    /// Entries with key `< key`, or `<= key` when `inclusive`.
    fn count_below(&self, key: &K, inclusive: bool) -> usize {
        let mut below = 0;
        let mut current = self.root;
        while current != NIL {
            let node = &self.nodes[current];
            let goes_left = match key.cmp(&node.key) {
                Ordering::Less => true,
                Ordering::Equal => !inclusive,
                Ordering::Greater => false,
            };
            if goes_left {
                current = node.left;
            } else {
                below += self.size(node.left) + 1;
                current = node.right;
            }
        }
        below
    }

    /// Visit the node, then both children unconditionally.
    fn gather(&self, key: &K, id: NodeId, into: &mut Self)
    where
        K: Clone,
        V: Clone,
    {
        if let Some(node) = self.node(id) {
            if node.key == *key {
                into.insert(node.key.clone(), node.value.clone());
            }
            self.gather(key, node.left, into);
            self.gather(key, node.right, into);
        }
    }
}

impl<K, V> RedBlackTree<K, V> {
    // ============================================================================
    // POSITIONAL ACCESS
    // ============================================================================

    /// Returns the number of entries in the tree.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Alias of `count`.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Entry at in-order position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`. Use [`try_index`](Self::try_index)
    /// or [`get_index`](Self::get_index) for a checked variant.
    pub fn index(&self, index: usize) -> (&K, &V) {
        match self.try_index(index) {
            Ok(entry) => entry,
            Err(e) => panic!("{}", e),
        }
    }

    /// Entry at in-order position `index`, or `IndexOutOfRange`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::{RedBlackTree, TreeError};
    ///
    /// let mut tree = RedBlackTree::new_unique();
    /// tree.insert(10, 'a');
    /// tree.insert(5, 'b');
    /// assert_eq!(tree.try_index(0), Ok((&5, &'b')));
    /// assert_eq!(tree.try_index(2), Err(TreeError::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn try_index(&self, index: usize) -> TreeResult<(&K, &V)> {
        self.get_index(index).ok_or(TreeError::IndexOutOfRange {
            index,
            len: self.count,
        })
    }

    /// Entry at in-order position `index`, `None` when out of range.
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.node(self.select(index))
            .map(|node| (&node.key, &node.value))
    }

    /// Smallest entry.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.node(self.minimum(self.root))
            .map(|node| (&node.key, &node.value))
    }

    /// Largest entry.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.node(self.maximum(self.root))
            .map(|node| (&node.key, &node.value))
    }

    /// Node at in-order position `index` by walking subtree sizes.
    pub(crate) fn select(&self, mut index: usize) -> NodeId {
        if index >= self.count {
            return NIL;
        }
        let mut current = self.root;
        while current != NIL {
            let left_size = self.size(self.left(current));
            match index.cmp(&left_size) {
                Ordering::Less => current = self.left(current),
                Ordering::Equal => return current,
                Ordering::Greater => {
                    index -= left_size + 1;
                    current = self.right(current);
                }
            }
        }
        NIL
    }
}

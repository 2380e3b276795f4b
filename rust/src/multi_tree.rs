//! Duplicate-key tree with bag semantics.
//!
//! Equal keys are kept in insertion order. `combine` and `difference` build
//! a fresh tree by walking each operand from its highest entry down, so
//! among equal keys the combined result lists the left operand's entries
//! last-inserted first.

use std::fmt;

use log::debug;

use crate::error::TreeResult;
use crate::iteration::{Iter, Keys, Values};
use crate::types::RedBlackTree;

/// Ordered bag of `(key, value)` entries.
///
/// # Examples
///
/// ```
/// use ordkit::MultiTree;
///
/// let mut a = MultiTree::new();
/// a.insert(1, "x");
/// a.insert(1, "y");
/// let mut b = MultiTree::new();
/// b.insert(1, "z");
///
/// assert_eq!(a.combine(&b).count_of(&1), 3);
/// assert_eq!(a.difference(&b).count_of(&1), 1);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct MultiTree<K, V> {
    tree: RedBlackTree<K, V>,
}

impl<K, V> MultiTree<K, V> {
    pub fn new() -> Self {
        Self {
            tree: RedBlackTree::new_multi(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: RedBlackTree::with_capacity(false, capacity),
        }
    }

    pub fn count(&self) -> usize {
        self.tree.count()
    }

    pub fn len(&self) -> usize {
        self.tree.count()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Entry at in-order position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn index(&self, index: usize) -> (&K, &V) {
        self.tree.index(index)
    }

    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.tree.get_index(index)
    }

    pub fn try_index(&self, index: usize) -> TreeResult<(&K, &V)> {
        self.tree.try_index(index)
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.tree.first()
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        self.tree.last()
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.tree.iter()
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        self.tree.keys()
    }

    pub fn values(&self) -> Values<'_, K, V> {
        self.tree.values()
    }

    pub fn remove_all(&mut self) {
        self.tree.remove_all();
    }
}

impl<K: Ord, V> MultiTree<K, V> {
    /// Adds an entry; always succeeds.
    pub fn insert(&mut self, key: K, value: V) {
        self.tree.insert(key, value);
    }

    /// First entry for `key` on the search path.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.contains_key(key)
    }

    /// Number of entries stored under `key`.
    pub fn count_of(&self, key: &K) -> usize {
        self.tree.count_of(key)
    }

    /// Removes a single entry for `key`.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.tree.remove(key)
    }

    /// Removes up to `limit` entries for `key`; returns how many went.
    pub fn remove_count(&mut self, key: &K, limit: usize) -> usize {
        self.tree.remove_count(key, limit)
    }

    /// Removes every entry for `key`; returns how many went.
    pub fn remove_every(&mut self, key: &K) -> usize {
        self.tree.remove_every(key)
    }

    /// Copies every entry whose key is among `keys` into a new tree.
    ///
    /// Duplicates are included. Each key costs a full traversal.
    pub fn search<'a, I>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = &'a K>,
        K: Clone + 'a,
        V: Clone,
    {
        Self {
            tree: self.tree.search_keys(keys),
        }
    }

    /// Bag union: every entry of `self`, then every entry of `other`.
    ///
    /// Nothing is deduplicated.
    pub fn combine(&self, other: &Self) -> Self
    where
        K: Clone,
        V: Clone,
    {
        let mut result = Self::with_capacity(self.count() + other.count());
        result.copy_descending(self);
        result.copy_descending(other);
        debug!(
            "combine: {} + {} -> {} entries",
            self.count(),
            other.count(),
            result.count()
        );
        result
    }

    /// Bag difference: a copy of `self` with one matching entry removed for
    /// each entry of `subtrahend`.
    pub fn difference(&self, subtrahend: &Self) -> Self
    where
        K: Clone,
        V: Clone,
    {
        let mut result = Self::with_capacity(self.count());
        result.copy_descending(self);
        for (key, _) in subtrahend.iter().rev() {
            result.remove(key);
        }
        debug!(
            "difference: {} - {} -> {} entries",
            self.count(),
            subtrahend.count(),
            result.count()
        );
        result
    }

    fn copy_descending(&mut self, source: &Self)
    where
        K: Clone,
        V: Clone,
    {
        for (key, value) in source.iter().rev() {
            self.insert(key.clone(), value.clone());
        }
    }
}

impl<K, V> Default for MultiTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for MultiTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for MultiTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a MultiTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for MultiTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for MultiTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MultiTree[")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", key, value)?;
        }
        write!(f, "]")
    }
}

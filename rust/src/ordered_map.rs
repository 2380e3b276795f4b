//! Unique-key ordered map.

use std::fmt;

use log::debug;

use crate::error::{KeyResult, TreeResult};
use crate::iteration::{Iter, Keys, Values};
use crate::ordered_set::OrderedSet;
use crate::types::RedBlackTree;

/// Map from unique keys to values, enumerated in ascending key order.
///
/// # Examples
///
/// ```
/// use ordkit::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// assert!(map.insert("b", 2));
/// assert!(map.insert("a", 1));
/// assert!(!map.insert("a", 10));
///
/// assert_eq!(map.get(&"a"), Some(&1));
/// assert_eq!(map.index(0), (&"a", &1));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct OrderedMap<K, V> {
    tree: RedBlackTree<K, V>,
}

impl<K, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self {
            tree: RedBlackTree::new_unique(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: RedBlackTree::with_capacity(true, capacity),
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

impl<K: Ord, V> OrderedMap<K, V> {
    /// Inserts `key`; returns `false` and leaves the map untouched if the
    /// key is already present.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.tree.insert(key, value)
    }

    /// Inserts or overwrites, returning the displaced value.
    pub fn insert_or_replace(&mut self, key: K, value: V) -> Option<V> {
        self.tree.insert_or_replace(key, value)
    }

    /// Value for `key`, inserting `default()` first if absent.
    pub fn entry_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.tree.get_or_insert_with(key, default)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree.get_mut(key)
    }

    pub fn try_get(&self, key: &K) -> KeyResult<&V> {
        self.tree.try_get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.contains_key(key)
    }

    /// In-order position of `key`.
    pub fn position(&self, key: &K) -> Option<usize> {
        self.tree.position(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.tree.remove(key)
    }
}

impl<L: Ord, T: Ord> OrderedMap<L, OrderedSet<T>> {
    /// Groups `(label, member)` pairs into one set per label.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::OrderedMap;
    ///
    /// let groups = OrderedMap::group_by([("odd", 3), ("even", 2), ("odd", 1)]);
    /// assert_eq!(groups.get(&"odd").map(|s| s.to_string()), Some("OrderedSet[1, 3]".to_string()));
    /// assert_eq!(groups.count(), 2);
    /// ```
    pub fn group_by<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, T)>,
    {
        let mut groups = Self::new();
        for (label, member) in pairs {
            groups
                .entry_or_insert_with(label, OrderedSet::new)
                .insert(member);
        }
        debug!("group_by: {} groups", groups.count());
        groups
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    /// Later duplicates of a key are dropped.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrderedMap[")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", key, value)?;
        }
        write!(f, "]")
    }
}

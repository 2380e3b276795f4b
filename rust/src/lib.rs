//! Ordered containers built on an arena-backed red-black tree.
//!
//! One balancing core, [`RedBlackTree`], runs in either unique-key or
//! duplicate-key mode and keeps per-node subtree sizes, so key lookup,
//! positional access and rank queries are all logarithmic. Three containers
//! wrap it:
//!
//! * [`OrderedSet`]: unique members with union, intersection, subtraction
//!   and disjointness tests.
//! * [`OrderedMap`]: unique keys mapped to values.
//! * [`MultiTree`]: a bag of entries with combine and difference.
//!
//! Every container owns exactly one tree. Set algebra copies entries into a
//! freshly built tree and never shares nodes between operands and results.
//!
//! ```
//! use ordkit::{MultiTree, OrderedSet};
//!
//! let evens: OrderedSet<u32> = (0..10).filter(|n| n % 2 == 0).collect();
//! let small = OrderedSet::from_members([0, 1, 2, 3]);
//! assert_eq!(evens.intersect([&small]).to_string(), "OrderedSet[0, 2]");
//!
//! let mut bag = MultiTree::new();
//! bag.insert("k", 1);
//! bag.insert("k", 2);
//! assert_eq!(bag.count_of(&"k"), 2);
//! ```

use std::fmt;

mod arena;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod multi_tree;
mod node;
mod ordered_map;
mod ordered_set;
mod types;
mod validation;

pub use arena::ArenaStats;
pub use error::{KeyResult, TreeError, TreeResult};
pub use iteration::{Iter, Keys, Values};
pub use multi_tree::MultiTree;
pub use ordered_map::OrderedMap;
pub use ordered_set::{OrderedSet, SetView};
pub use types::RedBlackTree;

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RedBlackTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedBlackTree")
            .field("unique_keys", &self.unique_keys)
            .field("count", &self.count)
            .field("entries", &DebugEntries(self))
            .finish()
    }
}

struct DebugEntries<'a, K, V>(&'a RedBlackTree<K, V>);

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for DebugEntries<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Two trees are equal when they hold equal entries in the same order.
/// Shape, colors and key mode are not compared.
impl<K: PartialEq, V: PartialEq> PartialEq for RedBlackTree<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for RedBlackTree<K, V> {}

impl<K: Ord, V> Extend<(K, V)> for RedBlackTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::init_logging;
    use super::*;

    #[test]
    fn test_equality_ignores_shape() {
        init_logging();
        let mut ascending = RedBlackTree::new_unique();
        let mut descending = RedBlackTree::new_unique();
        for i in 0..64 {
            ascending.insert(i, i);
            descending.insert(63 - i, 63 - i);
        }
        assert_eq!(ascending, descending);
        descending.remove(&10);
        assert_ne!(ascending, descending);
    }

    #[test]
    fn test_debug_lists_entries() {
        let mut tree = RedBlackTree::new_multi();
        tree.extend([(2, 'b'), (1, 'a')]);
        assert_eq!(
            format!("{:?}", tree),
            "RedBlackTree { unique_keys: false, count: 2, entries: [(1, 'a'), (2, 'b')] }"
        );
    }

    #[test]
    fn test_clone_is_independent() {
        init_logging();
        let mut tree = RedBlackTree::new_unique();
        tree.extend((0..10).map(|i| (i, i)));
        let snapshot = tree.clone();
        tree.remove_all();
        assert_eq!(snapshot.count(), 10);
        assert!(snapshot.check_invariants());
    }
}

//! INSERT operations for RedBlackTree.
//!
//! This module contains insertion, the red-black insert fix-up, and the two
//! rotations shared with removal. Rotations keep the subtree-size
//! annotation current so positional access never needs a rebuild.

use log::trace;
use std::cmp::Ordering;

use crate::arena::NodeId;
use crate::types::{Color, InsertResult, Node, RedBlackTree, NIL};

impl<K: Ord, V> RedBlackTree<K, V> {
    // ============================================================================
    // PUBLIC INSERT OPERATIONS
    // ============================================================================

    /// Insert a key-value pair.
    ///
    /// Returns `true` if a node was added. In unique mode an existing equal
    /// key makes this a no-op returning `false`; the stored value is left
    /// as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::RedBlackTree;
    ///
    /// let mut unique = RedBlackTree::new_unique();
    /// assert!(unique.insert(1, "a"));
    /// assert!(!unique.insert(1, "b"));
    /// assert_eq!(unique.get(&1), Some(&"a"));
    ///
    /// let mut multi = RedBlackTree::new_multi();
    /// assert!(multi.insert(1, "a"));
    /// assert!(multi.insert(1, "b"));
    /// assert_eq!(multi.count(), 2);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        matches!(self.attach(key, value), InsertResult::Inserted(_))
    }

    /// Insert if the key is absent, otherwise replace the stored value.
    ///
    /// Returns the replaced value. In duplicate-key mode every call adds a
    /// new node and `None` is returned.
    pub fn insert_or_replace(&mut self, key: K, value: V) -> Option<V> {
        match self.attach(key, value) {
            InsertResult::Inserted(_) => None,
            InsertResult::Occupied { id, value, .. } => {
                Some(std::mem::replace(&mut self.nodes[id].value, value))
            }
        }
    }

    /// Value for `key`, inserting `default()` first if the key is absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let id = match self.find_node(&key) {
            NIL => match self.attach(key, default()) {
                InsertResult::Inserted(id) | InsertResult::Occupied { id, .. } => id,
            },
            id => id,
        };
        &mut self.nodes[id].value
    }

    // ============================================================================
    // HELPERS FOR INSERT OPERATIONS
    // ============================================================================

    /// Descend from the root and hang a new red node off the terminal
    /// reached, then restore the red-black properties.
    pub(crate) fn attach(&mut self, key: K, value: V) -> InsertResult<V> {
        let mut parent = NIL;
        let mut current = self.root;
        let mut went_left = false;

        while current != NIL {
            parent = current;
            let node = &self.nodes[current];
            match key.cmp(&node.key) {
                Ordering::Less => {
                    went_left = true;
                    current = node.left;
                }
                Ordering::Equal if self.unique_keys => {
                    return InsertResult::Occupied { id: current, value };
                }
                // Equal keys go right: ties enumerate in insertion order.
                _ => {
                    went_left = false;
                    current = node.right;
                }
            }
        }

        let id = self.nodes.allocate(Node::new(key, value, parent));
        if parent == NIL {
            self.root = id;
        } else if went_left {
            self.nodes[parent].left = id;
        } else {
            self.nodes[parent].right = id;
        }

        let mut ancestor = parent;
        while ancestor != NIL {
            self.nodes[ancestor].size += 1;
            ancestor = self.nodes[ancestor].parent;
        }

        self.count += 1;
        self.insert_fixup(id);
        InsertResult::Inserted(id)
    }

    fn insert_fixup(&mut self, mut z: NodeId) {
        while self.is_red(self.parent(z)) {
            let parent = self.parent(z);
            let grandparent = self.parent(parent);

            if parent == self.left(grandparent) {
                let uncle = self.right(grandparent);
                if self.is_red(uncle) {
                    trace!("insert fixup: recolor under {}", grandparent);
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    z = grandparent;
                } else {
                    if z == self.right(parent) {
                        z = parent;
                        self.rotate_left(z);
                    }
                    let parent = self.parent(z);
                    let grandparent = self.parent(parent);
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.left(grandparent);
                if self.is_red(uncle) {
                    trace!("insert fixup: recolor under {}", grandparent);
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    z = grandparent;
                } else {
                    if z == self.left(parent) {
                        z = parent;
                        self.rotate_right(z);
                    }
                    let parent = self.parent(z);
                    let grandparent = self.parent(parent);
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_left(grandparent);
                }
            }
        }
        let root = self.root;
        self.set_color(root, Color::Black);
    }
}

impl<K, V> RedBlackTree<K, V> {
    // ============================================================================
    // ROTATIONS
    // ============================================================================

    /// ```text
    ///     x                y
    ///    / \              / \
    ///   a   y     -->    x   c
    ///      / \          / \
    ///     b   c        a   b
    /// ```
    pub(crate) fn rotate_left(&mut self, x: NodeId) {
        trace!("rotate left at {}", x);
        let y = self.right(x);
        let b = self.left(y);

        self.nodes[x].right = b;
        if b != NIL {
            self.nodes[b].parent = x;
        }

        let parent = self.parent(x);
        self.nodes[y].parent = parent;
        self.replace_child(parent, x, y);

        self.nodes[y].left = x;
        self.nodes[x].parent = y;

        let size = self.nodes[x].size;
        self.nodes[y].size = size;
        self.update_size(x);
    }

    /// Mirror of `rotate_left`.
    pub(crate) fn rotate_right(&mut self, x: NodeId) {
        trace!("rotate right at {}", x);
        let y = self.left(x);
        let b = self.right(y);

        self.nodes[x].left = b;
        if b != NIL {
            self.nodes[b].parent = x;
        }

        let parent = self.parent(x);
        self.nodes[y].parent = parent;
        self.replace_child(parent, x, y);

        self.nodes[y].right = x;
        self.nodes[x].parent = y;

        let size = self.nodes[x].size;
        self.nodes[y].size = size;
        self.update_size(x);
    }

    /// Point `parent`'s link to `old` at `new`; a `NIL` parent means `old`
    /// was the root.
    pub(crate) fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if parent == NIL {
            self.root = new;
        } else if self.nodes[parent].left == old {
            self.nodes[parent].left = new;
        } else {
            self.nodes[parent].right = new;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_inserts_stay_balanced() {
        let mut tree = RedBlackTree::new_unique();
        for i in 0..1024 {
            assert!(tree.insert(i, i * 10));
        }
        assert!(tree.check_invariants());
        assert_eq!(tree.count(), 1024);
        // A red-black tree of n nodes has height at most 2 log2(n + 1).
        assert!(tree.height() <= 2 * 11);
    }

    #[test]
    fn test_unique_insert_rejects_equal_key() {
        let mut tree = RedBlackTree::new_unique();
        assert!(tree.insert("k", 1));
        assert!(!tree.insert("k", 2));
        assert_eq!(tree.count(), 1);
        assert_eq!(tree.get(&"k"), Some(&1));
    }

    #[test]
    fn test_insert_or_replace() {
        let mut tree = RedBlackTree::new_unique();
        assert_eq!(tree.insert_or_replace(1, "a"), None);
        assert_eq!(tree.insert_or_replace(1, "b"), Some("a"));
        assert_eq!(tree.get(&1), Some(&"b"));
        assert_eq!(tree.count(), 1);
    }

    #[test]
    fn test_get_or_insert_with() {
        let mut tree = RedBlackTree::new_unique();
        *tree.get_or_insert_with("x", || 0) += 5;
        *tree.get_or_insert_with("x", || 100) += 1;
        assert_eq!(tree.get(&"x"), Some(&6));
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_rotations_preserve_sizes() {
        let mut tree = RedBlackTree::new_unique();
        for key in [4, 2, 6, 1, 3, 5, 7] {
            tree.insert(key, ());
        }
        let root = tree.root;
        tree.rotate_left(root);
        assert_eq!(tree.size(tree.root), 7);
        assert!(tree.check_order_and_sizes().is_ok());
        let root = tree.root;
        tree.rotate_right(root);
        assert_eq!(tree.size(tree.root), 7);
        assert!(tree.check_order_and_sizes().is_ok());
    }

    #[test]
    fn test_equal_keys_descend_right() {
        let mut tree = RedBlackTree::new_multi();
        for (i, label) in ["first", "second", "third", "fourth"].iter().enumerate() {
            tree.insert(1, *label);
            tree.insert(i as i32 * 2, "filler");
        }
        let ones: Vec<_> = tree.iter().filter(|(k, _)| **k == 1).map(|(_, v)| *v).collect();
        assert_eq!(ones, vec!["first", "second", "third", "fourth"]);
        assert!(tree.check_invariants());
    }
}

//! DELETE operations for RedBlackTree.
//!
//! This module contains removal of a single representative, count-bounded
//! removal for duplicate keys, whole-tree reset, and the red-black removal
//! fix-up.

use log::{debug, trace};

use crate::arena::NodeId;
use crate::types::{Color, RedBlackTree, NIL};

impl<K: Ord, V> RedBlackTree<K, V> {
    // ============================================================================
    // PUBLIC DELETE OPERATIONS
    // ============================================================================

    /// Remove one entry with the given key, returning its value.
    ///
    /// With duplicate keys the entry removed is the first one met on the
    /// ordinary search path from the root. Absent keys are a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new_unique();
    /// tree.insert(1, "one");
    /// assert_eq!(tree.remove(&1), Some("one"));
    /// assert_eq!(tree.remove(&1), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Remove one entry with the given key, returning the stored key and value.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        match self.find_node(key) {
            NIL => None,
            id => Some(self.delete_node(id)),
        }
    }

    /// Remove up to `limit` entries with the given key; returns how many went.
    pub fn remove_count(&mut self, key: &K, limit: usize) -> usize {
        let mut removed = 0;
        while removed < limit && self.remove_entry(key).is_some() {
            removed += 1;
        }
        removed
    }

    /// Remove every entry with the given key; returns how many went.
    pub fn remove_every(&mut self, key: &K) -> usize {
        self.remove_count(key, usize::MAX)
    }
}

impl<K, V> RedBlackTree<K, V> {
    /// Reset to the empty tree.
    ///
    /// The root handle and count reset in constant time; node storage is
    /// released with the arena.
    pub fn remove_all(&mut self) {
        debug!("remove_all: dropping {} nodes", self.count);
        self.root = NIL;
        self.count = 0;
        self.nil_parent = NIL;
        self.nodes.clear();
    }

    // ============================================================================
    // HELPERS FOR DELETE OPERATIONS
    // ============================================================================

    /// Unlink node `z`, rebalance, and hand back its payload.
    pub(crate) fn delete_node(&mut self, z: NodeId) -> (K, V) {
        // Every ancestor of the physically removed position loses one node.
        let y = if self.left(z) == NIL || self.right(z) == NIL {
            z
        } else {
            self.minimum(self.right(z))
        };
        let mut ancestor = self.parent(y);
        while ancestor != NIL {
            self.nodes[ancestor].size -= 1;
            ancestor = self.nodes[ancestor].parent;
        }

        let removed_color;
        let x;
        if self.left(z) == NIL {
            removed_color = self.color(z);
            x = self.right(z);
            self.transplant(z, x);
        } else if self.right(z) == NIL {
            removed_color = self.color(z);
            x = self.left(z);
            self.transplant(z, x);
        } else {
            removed_color = self.color(y);
            x = self.right(y);
            if self.parent(y) == z {
                self.set_parent(x, y);
            } else {
                self.transplant(y, x);
                let right = self.right(z);
                self.nodes[y].right = right;
                self.nodes[right].parent = y;
            }
            self.transplant(z, y);
            let left = self.left(z);
            self.nodes[y].left = left;
            self.nodes[left].parent = y;
            let (color, size) = (self.nodes[z].color, self.nodes[z].size);
            self.nodes[y].color = color;
            self.nodes[y].size = size;
        }

        if removed_color == Color::Black {
            self.delete_fixup(x);
        }
        self.nil_parent = NIL;
        self.count -= 1;

        match self.nodes.deallocate(z) {
            Some(node) => (node.key, node.value),
            None => panic!("removed node {} missing from arena", z),
        }
    }

    /// Replace the subtree rooted at `u` with the one rooted at `v`.
    fn transplant(&mut self, u: NodeId, v: NodeId) {
        let parent = self.parent(u);
        self.replace_child(parent, u, v);
        self.set_parent(v, parent);
    }

    fn delete_fixup(&mut self, mut x: NodeId) {
        while x != self.root && self.color(x) == Color::Black {
            let parent = self.parent(x);
            if x == self.left(parent) {
                let mut w = self.right(parent);
                if self.is_red(w) {
                    trace!("delete fixup: red sibling {}", w);
                    self.set_color(w, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_left(parent);
                    w = self.right(self.parent(x));
                }
                if !self.is_red(self.left(w)) && !self.is_red(self.right(w)) {
                    self.set_color(w, Color::Red);
                    x = self.parent(x);
                } else {
                    if !self.is_red(self.right(w)) {
                        let near = self.left(w);
                        self.set_color(near, Color::Black);
                        self.set_color(w, Color::Red);
                        self.rotate_right(w);
                        w = self.right(self.parent(x));
                    }
                    let parent = self.parent(x);
                    let parent_color = self.color(parent);
                    self.set_color(w, parent_color);
                    self.set_color(parent, Color::Black);
                    let far = self.right(w);
                    self.set_color(far, Color::Black);
                    self.rotate_left(parent);
                    x = self.root;
                }
            } else {
                let mut w = self.left(parent);
                if self.is_red(w) {
                    trace!("delete fixup: red sibling {}", w);
                    self.set_color(w, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_right(parent);
                    w = self.left(self.parent(x));
                }
                if !self.is_red(self.right(w)) && !self.is_red(self.left(w)) {
                    self.set_color(w, Color::Red);
                    x = self.parent(x);
                } else {
                    if !self.is_red(self.left(w)) {
                        let near = self.right(w);
                        self.set_color(near, Color::Black);
                        self.set_color(w, Color::Red);
                        self.rotate_left(w);
                        w = self.left(self.parent(x));
                    }
                    let parent = self.parent(x);
                    let parent_color = self.color(parent);
                    self.set_color(w, parent_color);
                    self.set_color(parent, Color::Black);
                    let far = self.left(w);
                    self.set_color(far, Color::Black);
                    self.rotate_right(parent);
                    x = self.root;
                }
            }
        }
        self.set_color(x, Color::Black);
    }
}

//! Validation and debugging utilities for RedBlackTree.
//!
//! This module contains invariant checking and debugging helpers. A failed
//! check means a defect in the balancing code; nothing in the normal
//! operation path calls into here.

use crate::arena::NodeId;
use crate::error::{TreeError, TreeResult};
use crate::types::{Color, RedBlackTree, NIL};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord, V> RedBlackTree<K, V> {
    /// Check if the tree maintains the red-black invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> TreeResult<()> {
        if self.color(self.root) != Color::Black {
            return Err(TreeError::corrupted_tree("Root color", "root is red"));
        }
        if self.root != NIL && self.nodes[self.root].parent != NIL {
            return Err(TreeError::corrupted_tree(
                "Root link",
                "root has a parent",
            ));
        }
        if self.nodes.is_empty() != (self.root == NIL) {
            return Err(TreeError::corrupted_tree(
                "Arena consistency",
                "empty arena disagrees with root",
            ));
        }
        self.black_height_of(self.root)?;
        self.check_order_and_sizes()?;

        if self.nodes.len() != self.count {
            return Err(TreeError::corrupted_tree(
                "Arena consistency",
                &format!("{} in arena vs count {}", self.nodes.len(), self.count),
            ));
        }
        Ok(())
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> TreeResult<()> {
        self.check_invariants_detailed()
    }

    /// In-order key ordering, parent links and subtree sizes.
    pub(crate) fn check_order_and_sizes(&self) -> TreeResult<()> {
        let keys: Vec<&K> = self.keys().collect();
        for i in 1..keys.len() {
            let ordered = if self.unique_keys {
                keys[i - 1] < keys[i]
            } else {
                keys[i - 1] <= keys[i]
            };
            if !ordered {
                return Err(TreeError::corrupted_tree(
                    "Key order",
                    &format!("keys out of order at index {}", i),
                ));
            }
        }
        if keys.len() != self.count {
            return Err(TreeError::corrupted_tree(
                "Count",
                &format!("iterated {} keys but count is {}", keys.len(), self.count),
            ));
        }

        let counted = self.check_links(self.root)?;
        if counted != self.count {
            return Err(TreeError::corrupted_tree(
                "Count",
                &format!("{} reachable nodes but count is {}", counted, self.count),
            ));
        }
        Ok(())
    }

    /// Black height of the subtree, failing on a red-red edge or unequal
    /// black counts between siblings.
    fn black_height_of(&self, id: NodeId) -> TreeResult<usize> {
        if id == NIL {
            return Ok(1);
        }
        let left = self.left(id);
        let right = self.right(id);
        if self.is_red(id) && (self.is_red(left) || self.is_red(right)) {
            return Err(TreeError::corrupted_tree(
                "Red rule",
                &format!("red node {} has a red child", id),
            ));
        }
        let left_height = self.black_height_of(left)?;
        let right_height = self.black_height_of(right)?;
        if left_height != right_height {
            return Err(TreeError::corrupted_tree(
                "Black height",
                &format!(
                    "node {}: left {}, right {}",
                    id, left_height, right_height
                ),
            ));
        }
        Ok(left_height + usize::from(self.color(id) == Color::Black))
    }

    /// Verify parent back-links and size annotations; returns node count.
    fn check_links(&self, id: NodeId) -> TreeResult<usize> {
        if id == NIL {
            return Ok(0);
        }
        let mut below = 0;
        for child in [self.left(id), self.right(id)] {
            if child != NIL && self.nodes[child].parent != id {
                return Err(TreeError::corrupted_tree(
                    "Parent link",
                    &format!("node {} does not point back at {}", child, id),
                ));
            }
            below += self.check_links(child)?;
        }
        if self.size(id) != below + 1 {
            return Err(TreeError::corrupted_tree(
                "Subtree size",
                &format!("node {} records {} but holds {}", id, self.size(id), below + 1),
            ));
        }
        Ok(below + 1)
    }
}

// ============================================================================
// DEBUGGING AND TESTING UTILITIES
// ============================================================================

impl<K, V> RedBlackTree<K, V> {
    /// Number of black nodes on any root-to-leaf path, sentinel excluded.
    pub fn black_height(&self) -> usize {
        let mut height = 0;
        let mut current = self.root;
        while current != NIL {
            if self.color(current) == Color::Black {
                height += 1;
            }
            current = self.left(current);
        }
        height
    }

    /// Longest root-to-leaf path, counted in nodes.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    fn height_of(&self, id: NodeId) -> usize {
        if id == NIL {
            0
        } else {
            1 + self.height_of(self.left(id)).max(self.height_of(self.right(id)))
        }
    }

    /// Prints the tree sideways for debugging.
    #[cfg(any(test, feature = "testing"))]
    pub fn print_tree(&self)
    where
        K: std::fmt::Debug,
    {
        println!("Tree structure ({} entries):", self.count);
        self.print_node(self.root, 0);
    }

    #[cfg(any(test, feature = "testing"))]
    fn print_node(&self, id: NodeId, depth: usize)
    where
        K: std::fmt::Debug,
    {
        if let Some(node) = self.node(id) {
            self.print_node(node.right, depth + 1);
            println!(
                "{}{:?} [{:?}, size={}]",
                "  ".repeat(depth),
                node.key,
                node.color,
                node.size
            );
            self.print_node(node.left, depth + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tree_passes() {
        let mut tree = RedBlackTree::new_unique();
        for i in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
            tree.insert(i, ());
        }
        assert_eq!(tree.validate(), Ok(()));
        assert!(tree.black_height() >= 2);
        tree.print_tree();
    }

    #[test]
    fn test_red_root_detected() {
        let mut tree = RedBlackTree::new_unique();
        tree.insert(1, ());
        let root = tree.root;
        tree.nodes[root].color = Color::Red;
        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(err.to_string().contains("Root color"));
    }

    #[test]
    fn test_red_red_detected() {
        let mut tree = RedBlackTree::new_unique();
        for i in 1..=4 {
            tree.insert(i, ());
        }
        // 2 is the black root, 3 its black right child holding red 4.
        let right = tree.right(tree.root);
        tree.nodes[right].color = Color::Red;
        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(err.to_string().contains("Red rule"));
    }

    #[test]
    fn test_detached_root_detected() {
        let mut tree = RedBlackTree::new_unique();
        tree.insert(1, ());
        tree.root = NIL;
        tree.count = 0;
        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(err.to_string().contains("Arena consistency"));
    }

    #[test]
    fn test_bad_size_detected() {
        let mut tree = RedBlackTree::new_unique();
        for i in 1..=3 {
            tree.insert(i, ());
        }
        let root = tree.root;
        tree.nodes[root].size = 7;
        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(err.to_string().contains("Subtree size"));
    }

    #[test]
    fn test_key_order_detected() {
        let mut tree = RedBlackTree::new_unique();
        for i in 1..=3 {
            tree.insert(i, ());
        }
        let left = tree.left(tree.root);
        tree.nodes[left].key = 99;
        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(err.to_string().contains("Key order"));
    }
}

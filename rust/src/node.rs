//! Node-level helpers for RedBlackTree.
//!
//! Link and color accessors that treat the `NIL` sentinel uniformly, so the
//! balancing code never has to special-case a missing child or parent.

use crate::arena::NodeId;
use crate::types::{Color, Node, RedBlackTree, NIL};

// ============================================================================
// NODE IMPLEMENTATION
// ============================================================================

impl<K, V> Node<K, V> {
    /// A fresh red leaf hanging under `parent`.
    pub(crate) fn new(key: K, value: V, parent: NodeId) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            parent,
            left: NIL,
            right: NIL,
            size: 1,
        }
    }
}

// ============================================================================
// SENTINEL-AWARE LINK ACCESSORS
// ============================================================================

impl<K, V> RedBlackTree<K, V> {
    #[inline]
    pub(crate) fn left(&self, id: NodeId) -> NodeId {
        if id == NIL {
            NIL
        } else {
            self.nodes[id].left
        }
    }

    #[inline]
    pub(crate) fn right(&self, id: NodeId) -> NodeId {
        if id == NIL {
            NIL
        } else {
            self.nodes[id].right
        }
    }

    #[inline]
    pub(crate) fn parent(&self, id: NodeId) -> NodeId {
        if id == NIL {
            self.nil_parent
        } else {
            self.nodes[id].parent
        }
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        if id == NIL {
            self.nil_parent = parent;
        } else {
            self.nodes[id].parent = parent;
        }
    }

    /// The sentinel is always black.
    #[inline]
    pub(crate) fn color(&self, id: NodeId) -> Color {
        if id == NIL {
            Color::Black
        } else {
            self.nodes[id].color
        }
    }

    /// Recoloring the sentinel is ignored.
    #[inline]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        if id != NIL {
            self.nodes[id].color = color;
        }
    }

    #[inline]
    pub(crate) fn is_red(&self, id: NodeId) -> bool {
        self.color(id) == Color::Red
    }

    #[inline]
    pub(crate) fn size(&self, id: NodeId) -> usize {
        if id == NIL {
            0
        } else {
            self.nodes[id].size
        }
    }

    /// Recompute a node's subtree size from its children.
    #[inline]
    pub(crate) fn update_size(&mut self, id: NodeId) {
        if id != NIL {
            let size = 1 + self.size(self.left(id)) + self.size(self.right(id));
            self.nodes[id].size = size;
        }
    }

    /// Leftmost node of the subtree rooted at `id`.
    pub(crate) fn minimum(&self, mut id: NodeId) -> NodeId {
        while self.left(id) != NIL {
            id = self.left(id);
        }
        id
    }

    /// Rightmost node of the subtree rooted at `id`.
    pub(crate) fn maximum(&self, mut id: NodeId) -> NodeId {
        while self.right(id) != NIL {
            id = self.right(id);
        }
        id
    }

    /// In-order successor, `NIL` past the last node.
    pub(crate) fn successor(&self, mut id: NodeId) -> NodeId {
        if self.right(id) != NIL {
            return self.minimum(self.right(id));
        }
        let mut parent = self.parent(id);
        while parent != NIL && id == self.right(parent) {
            id = parent;
            parent = self.parent(parent);
        }
        parent
    }

    /// In-order predecessor, `NIL` before the first node.
    pub(crate) fn predecessor(&self, mut id: NodeId) -> NodeId {
        if self.left(id) != NIL {
            return self.maximum(self.left(id));
        }
        let mut parent = self.parent(id);
        while parent != NIL && id == self.left(parent) {
            id = parent;
            parent = self.parent(parent);
        }
        parent
    }

    /// Node access by handle, `None` for the sentinel or a stale handle.
    pub(crate) fn node(&self, id: NodeId) -> Option<&Node<K, V>> {
        self.nodes.get(id)
    }
}

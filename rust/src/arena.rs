//! Slot arena for tree nodes.
//!
//! Nodes live in a `Vec<Option<T>>` and refer to each other by `NodeId`
//! handles instead of pointers, so parent back-references never form
//! ownership cycles. Vacated slots are recycled through a free list.

use std::convert::TryFrom;
use std::ops::{Index, IndexMut};

/// Handle of a node slot in the arena.
pub type NodeId = u32;

/// Statistics for a node arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
}

/// Arena allocator handing out stable `NodeId` handles.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    slots: Vec<Option<T>>,
    /// Vacant slot indices for reuse
    free_list: Vec<usize>,
    allocated: usize,
}

impl<T> Arena<T> {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            allocated: 0,
        }
    }

    /// Create a new arena with room for `capacity` items before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            allocated: 0,
        }
    }

    /// Allocate a new item in the arena and return its ID
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = if let Some(free_index) = self.free_list.pop() {
            self.slots[free_index] = Some(item);
            free_index
        } else {
            self.slots.push(Some(item));
            self.slots.len() - 1
        };
        self.allocated += 1;

        // u32::MAX is reserved for the tree sentinel.
        match NodeId::try_from(index) {
            Ok(id) if id != NodeId::MAX => id,
            _ => panic!("node arena exhausted at {} slots", index),
        }
    }

    /// Deallocate an item and hand it back to the caller
    #[inline]
    pub fn deallocate(&mut self, id: NodeId) -> Option<T> {
        let index = usize::try_from(id).ok()?;
        let item = self.slots.get_mut(index)?.take()?;
        self.free_list.push(index);
        self.allocated -= 1;
        Some(item)
    }

    /// Get a reference to an item in the arena
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        let index = usize::try_from(id).ok()?;
        self.slots.get(index)?.as_ref()
    }

    /// Get a mutable reference to an item in the arena
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let index = usize::try_from(id).ok()?;
        self.slots.get_mut(index)?.as_mut()
    }

    /// Get the number of allocated items
    pub fn len(&self) -> usize {
        self.allocated
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.allocated == 0
    }

    /// Get the number of free slots
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Drop every item and forget all handles.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.allocated = 0;
    }

    /// Get arena statistics
    pub fn stats(&self) -> ArenaStats {
        let total_capacity = self.slots.capacity();
        let utilization = if total_capacity > 0 {
            self.allocated as f64 / total_capacity as f64
        } else {
            0.0
        };

        ArenaStats {
            total_capacity,
            allocated_count: self.allocated,
            free_count: self.free_count(),
            utilization,
        }
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        match self.get(id) {
            Some(item) => item,
            None => panic!("vacant arena slot {}", id),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.get_mut(id) {
            Some(item) => item,
            None => panic!("vacant arena slot {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_basic_operations() {
        let mut arena = Arena::new();

        let id1 = arena.allocate(42);
        let id2 = arena.allocate(84);
        let id3 = arena.allocate(126);

        assert_eq!(arena.get(id1), Some(&42));
        assert_eq!(arena[id2], 84);
        assert_eq!(arena.get(id3), Some(&126));

        assert!(arena.get(id1).is_some());
        assert!(arena.get(NodeId::MAX).is_none());

        let stats = arena.stats();
        assert_eq!(stats.allocated_count, 3);
        assert_eq!(stats.free_count, 0);
    }

    #[test]
    fn test_arena_slot_reuse() {
        let mut arena = Arena::new();

        let id1 = arena.allocate("a".to_string());
        let id2 = arena.allocate("b".to_string());

        assert_eq!(arena.deallocate(id1), Some("a".to_string()));
        assert_eq!(arena.deallocate(id1), None);
        assert!(arena.get(id1).is_none());
        assert!(arena.get(id2).is_some());
        assert_eq!(arena.free_count(), 1);

        let id3 = arena.allocate("c".to_string());
        assert_eq!(id3, id1);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.free_count(), 0);
    }

    #[test]
    fn test_arena_clear() {
        let mut arena = Arena::with_capacity(8);
        for i in 0..5 {
            arena.allocate(i);
        }
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.get(0), None);
    }

    #[test]
    #[should_panic(expected = "vacant arena slot")]
    fn test_index_vacant_slot_panics() {
        let mut arena = Arena::new();
        let id = arena.allocate(1);
        arena.deallocate(id);
        let _ = arena[id];
    }
}

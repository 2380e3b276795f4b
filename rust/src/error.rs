//! Error handling and result types for tree operations.
//!
//! Rejected mutations (a duplicate in a unique-key tree, removing an absent
//! key) are not errors: they report through `bool`/`Option` results. The
//! variants here cover boundary failures a caller can act on, plus the
//! corruption report produced by invariant checking.

use thiserror::Error;

/// Error type for tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Positional access past the end of the tree.
    #[error("index {index} out of range for tree of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    /// Key not found in the tree.
    #[error("key not found in tree")]
    KeyNotFound,

    /// An ordering, coloring or bookkeeping invariant does not hold.
    #[error("corrupted tree: {0}")]
    CorruptedTree(String),
}

impl TreeError {
    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} violation: {}", component, details))
    }

    /// Check if this error is a positional bounds failure
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

/// Result type for tree operations that may fail
pub type TreeResult<T> = Result<T, TreeError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = TreeError::IndexOutOfRange { index: 4, len: 3 };
        assert_eq!(e.to_string(), "index 4 out of range for tree of 3 entries");
        assert!(e.is_out_of_range());

        let e = TreeError::corrupted_tree("Black height", "left 2, right 3");
        assert_eq!(
            e.to_string(),
            "corrupted tree: Black height violation: left 2, right 3"
        );
        assert!(!e.is_out_of_range());
        assert_eq!(TreeError::KeyNotFound.to_string(), "key not found in tree");
    }
}

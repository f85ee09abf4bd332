//! Error types for the storage layer.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::types::ItemKind;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The requested item (or a link endpoint) does not exist.
    ///
    /// Entity deletion reports on current existence, not on end-state
    /// idempotence: deleting an already-deleted item yields this error even
    /// though the end state is the same.
    #[error("item not found: {kind}/{id}")]
    NotFound { kind: ItemKind, id: String },

    /// The shared store lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Shorthand for a [`StoreError::NotFound`] with an owned id.
    pub fn not_found(kind: ItemKind, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Result type alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StoreError::not_found(ItemKind::Todo, "123");
        assert_eq!(err.to_string(), "item not found: todo/123");

        let err = StoreError::not_found(ItemKind::Tag, "abc");
        assert_eq!(err.to_string(), "item not found: tag/abc");
    }
}

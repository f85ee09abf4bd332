//! Application state for the todotag REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the storage backend.

use std::sync::Arc;

use todotag_store::TodoTagStorage;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`TodoTagStorage`])
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<S: TodoTagStorage> AppState<S> {
    /// Creates a new AppState with the given storage.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todotag_store::MemoryBackend;

    #[test]
    fn test_app_state_creation() {
        let storage = Arc::new(MemoryBackend::new("http://localhost:8080"));
        let state = AppState::new(storage);

        assert_eq!(state.storage().backend_name(), "memory");
    }

    #[test]
    fn test_app_state_clone_shares_storage() {
        let storage = Arc::new(MemoryBackend::new(""));
        let state = AppState::new(storage);
        let cloned = state.clone();

        assert!(std::ptr::eq(state.storage(), cloned.storage()));
    }
}

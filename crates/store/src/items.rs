//! Generic keyed item store with insertion-order listing.
//!
//! Todos and tags share identical storage semantics; they differ only in
//! their fields, defaults, and patch shapes. [`ItemStore`] captures the
//! shared behavior once, parameterized by the [`Item`] trait, and is
//! instantiated twice by the in-memory backend.

use std::collections::HashMap;

use crate::error::{StoreError, StoreResult};
use crate::types::ItemKind;

/// Capability interface for entities kept in an [`ItemStore`].
pub trait Item: Clone + Send + Sync + 'static {
    /// Client-supplied creation payload.
    type Draft: Send;
    /// Partial-update payload.
    type Patch: Send;

    /// The entity kind, used for urls and error messages.
    const KIND: ItemKind;

    /// Builds a full entity from a draft plus the server-assigned id and url.
    fn from_draft(id: String, url: String, draft: Self::Draft) -> Self;

    /// Applies a partial update in place. Only supplied fields change.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// The entity's id.
    fn id(&self) -> &str;
}

/// Keyed storage for one entity type.
///
/// Listing returns items in insertion order. Ids are assigned by the caller
/// (the backend) and are never reused; removal keeps lookup and listing
/// consistent.
#[derive(Debug)]
pub struct ItemStore<I: Item> {
    items: HashMap<String, I>,
    // Insertion order of live ids; kept in sync with `items`.
    order: Vec<String>,
}

impl<I: Item> Default for ItemStore<I> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<I: Item> ItemStore<I> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether an item with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Inserts a freshly created item.
    pub fn insert(&mut self, item: I) {
        self.order.push(item.id().to_string());
        self.items.insert(item.id().to_string(), item);
    }

    /// Fetches an item by id.
    pub fn get(&self, id: &str) -> StoreResult<&I> {
        self.items
            .get(id)
            .ok_or_else(|| StoreError::not_found(I::KIND, id))
    }

    /// Lists all items in insertion order.
    pub fn list(&self) -> Vec<I> {
        self.order
            .iter()
            .filter_map(|id| self.items.get(id))
            .cloned()
            .collect()
    }

    /// Applies a partial update and returns the updated item.
    pub fn patch(&mut self, id: &str, patch: I::Patch) -> StoreResult<I> {
        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(I::KIND, id))?;
        item.apply_patch(patch);
        Ok(item.clone())
    }

    /// Removes an item, returning it.
    ///
    /// Removing an absent id is `NotFound`: entity deletion reports on
    /// current existence.
    pub fn remove(&mut self, id: &str) -> StoreResult<I> {
        let item = self
            .items
            .remove(id)
            .ok_or_else(|| StoreError::not_found(I::KIND, id))?;
        self.order.retain(|held| held != id);
        Ok(item)
    }

    /// Removes every item, returning the removed ids in insertion order so
    /// the caller can cascade edge purges.
    pub fn clear(&mut self) -> Vec<String> {
        self.items.clear();
        std::mem::take(&mut self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Todo, TodoDraft, TodoPatch};

    fn draft(title: &str) -> TodoDraft {
        TodoDraft {
            title: title.to_string(),
            completed: false,
            order: None,
        }
    }

    fn store_with(titles: &[&str]) -> ItemStore<Todo> {
        let mut store = ItemStore::new();
        for (i, title) in titles.iter().enumerate() {
            let id = format!("id-{i}");
            let url = format!("/todos/{id}");
            store.insert(Todo::from_draft(id, url, draft(title)));
        }
        store
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = store_with(&["first", "second", "third"]);
        let titles: Vec<_> = store.list().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = store_with(&[]);
        let err = store.get("nope").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_patch_changes_only_supplied_fields() {
        let mut store = store_with(&["initial"]);
        let patched = store
            .patch(
                "id-0",
                TodoPatch {
                    title: Some("changed".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(patched.title, "changed");
        assert!(!patched.completed);
    }

    #[test]
    fn test_remove_twice_is_not_found() {
        let mut store = store_with(&["only"]);
        store.remove("id-0").unwrap();
        assert!(store.remove("id-0").is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_keeps_order_of_remaining_items() {
        let mut store = store_with(&["a", "b", "c"]);
        store.remove("id-1").unwrap();
        let titles: Vec<_> = store.list().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn test_clear_returns_removed_ids() {
        let mut store = store_with(&["a", "b"]);
        let ids = store.clear();
        assert_eq!(ids, vec!["id-0", "id-1"]);
        assert!(store.is_empty());
    }
}

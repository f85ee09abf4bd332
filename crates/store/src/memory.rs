//! In-memory reference backend.
//!
//! [`MemoryBackend`] keeps both item stores and the association index under
//! a single `RwLock`. The one lock is the concurrency model: every mutation
//! takes the write guard, so the delete-then-purge cascade and concurrent
//! patches are serialized, and each request's effect is atomic to readers.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::index::AssociationIndex;
use crate::items::{Item, ItemStore};
use crate::storage::TodoTagStorage;
use crate::types::{ItemKind, Tag, TagDraft, TagPatch, Todo, TodoDraft, TodoPatch};

#[derive(Debug, Default)]
struct Inner {
    todos: ItemStore<Todo>,
    tags: ItemStore<Tag>,
    edges: AssociationIndex,
}

/// In-memory storage for todos, tags, and their associations.
#[derive(Debug)]
pub struct MemoryBackend {
    base_url: String,
    inner: RwLock<Inner>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    ///
    /// `base_url` is the prefix of every item url, e.g.
    /// `http://localhost:8080`; an item's url is
    /// `{base_url}/{collection}/{id}`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            inner: RwLock::new(Inner::default()),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Inner>> {
        self.inner.read().map_err(poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Inner>> {
        self.inner.write().map_err(poisoned)
    }

    fn item_url(&self, kind: ItemKind, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, kind.collection(), id)
    }

    fn fresh_item<I: Item>(&self, draft: I::Draft) -> I {
        let id = Uuid::new_v4().to_string();
        let url = self.item_url(I::KIND, &id);
        I::from_draft(id, url, draft)
    }
}

fn poisoned<G>(_: PoisonError<G>) -> StoreError {
    StoreError::LockPoisoned
}

#[async_trait]
impl TodoTagStorage for MemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create_todo(&self, draft: TodoDraft) -> StoreResult<Todo> {
        let todo: Todo = self.fresh_item(draft);
        debug!(id = %todo.id, title = %todo.title, "Todo created");
        self.write()?.todos.insert(todo.clone());
        Ok(todo)
    }

    async fn list_todos(&self) -> StoreResult<Vec<Todo>> {
        Ok(self.read()?.todos.list())
    }

    async fn get_todo(&self, id: &str) -> StoreResult<Todo> {
        Ok(self.read()?.todos.get(id)?.clone())
    }

    async fn patch_todo(&self, id: &str, patch: TodoPatch) -> StoreResult<Todo> {
        self.write()?.todos.patch(id, patch)
    }

    async fn delete_todo(&self, id: &str) -> StoreResult<Todo> {
        let mut inner = self.write()?;
        let todo = inner.todos.remove(id)?;
        let purged = inner.edges.purge_todo(id);
        debug!(id = %id, purged_edges = purged, "Todo deleted");
        Ok(todo)
    }

    async fn delete_all_todos(&self) -> StoreResult<()> {
        let mut inner = self.write()?;
        for id in inner.todos.clear() {
            inner.edges.purge_todo(&id);
        }
        debug!("All todos deleted");
        Ok(())
    }

    async fn create_tag(&self, draft: TagDraft) -> StoreResult<Tag> {
        let tag: Tag = self.fresh_item(draft);
        debug!(id = %tag.id, title = %tag.title, "Tag created");
        self.write()?.tags.insert(tag.clone());
        Ok(tag)
    }

    async fn list_tags(&self) -> StoreResult<Vec<Tag>> {
        Ok(self.read()?.tags.list())
    }

    async fn get_tag(&self, id: &str) -> StoreResult<Tag> {
        Ok(self.read()?.tags.get(id)?.clone())
    }

    async fn patch_tag(&self, id: &str, patch: TagPatch) -> StoreResult<Tag> {
        self.write()?.tags.patch(id, patch)
    }

    async fn delete_tag(&self, id: &str) -> StoreResult<Tag> {
        let mut inner = self.write()?;
        let tag = inner.tags.remove(id)?;
        let purged = inner.edges.purge_tag(id);
        debug!(id = %id, purged_edges = purged, "Tag deleted");
        Ok(tag)
    }

    async fn delete_all_tags(&self) -> StoreResult<()> {
        let mut inner = self.write()?;
        for id in inner.tags.clear() {
            inner.edges.purge_tag(&id);
        }
        debug!("All tags deleted");
        Ok(())
    }

    async fn link(&self, todo_id: &str, tag_id: &str) -> StoreResult<()> {
        let mut inner = self.write()?;
        if !inner.todos.contains(todo_id) {
            return Err(StoreError::not_found(ItemKind::Todo, todo_id));
        }
        if !inner.tags.contains(tag_id) {
            return Err(StoreError::not_found(ItemKind::Tag, tag_id));
        }
        inner.edges.link(todo_id, tag_id);
        Ok(())
    }

    async fn unlink(&self, todo_id: &str, tag_id: &str) -> StoreResult<()> {
        self.write()?.edges.unlink(todo_id, tag_id);
        Ok(())
    }

    async fn tags_of(&self, todo_id: &str) -> StoreResult<Vec<Tag>> {
        let inner = self.read()?;
        if !inner.todos.contains(todo_id) {
            return Err(StoreError::not_found(ItemKind::Todo, todo_id));
        }
        Ok(inner
            .tags
            .list()
            .into_iter()
            .filter(|tag| inner.edges.contains(todo_id, &tag.id))
            .collect())
    }

    async fn todos_of(&self, tag_id: &str) -> StoreResult<Vec<Todo>> {
        let inner = self.read()?;
        if !inner.tags.contains(tag_id) {
            return Err(StoreError::not_found(ItemKind::Tag, tag_id));
        }
        Ok(inner
            .todos
            .list()
            .into_iter()
            .filter(|todo| inner.edges.contains(&todo.id, tag_id))
            .collect())
    }

    async fn clear_todo_tags(&self, todo_id: &str) -> StoreResult<()> {
        let mut inner = self.write()?;
        if !inner.todos.contains(todo_id) {
            return Err(StoreError::not_found(ItemKind::Todo, todo_id));
        }
        inner.edges.purge_todo(todo_id);
        Ok(())
    }

    async fn clear_tag_todos(&self, tag_id: &str) -> StoreResult<()> {
        let mut inner = self.write()?;
        if !inner.tags.contains(tag_id) {
            return Err(StoreError::not_found(ItemKind::Tag, tag_id));
        }
        inner.edges.purge_tag(tag_id);
        Ok(())
    }

    async fn associated_tag(&self, todo_id: &str, tag_id: &str) -> StoreResult<Tag> {
        let inner = self.read()?;
        if !inner.todos.contains(todo_id) {
            return Err(StoreError::not_found(ItemKind::Todo, todo_id));
        }
        if !inner.edges.contains(todo_id, tag_id) {
            return Err(StoreError::not_found(ItemKind::Tag, tag_id));
        }
        Ok(inner.tags.get(tag_id)?.clone())
    }

    async fn associated_todo(&self, tag_id: &str, todo_id: &str) -> StoreResult<Todo> {
        let inner = self.read()?;
        if !inner.tags.contains(tag_id) {
            return Err(StoreError::not_found(ItemKind::Tag, tag_id));
        }
        if !inner.edges.contains(todo_id, tag_id) {
            return Err(StoreError::not_found(ItemKind::Todo, todo_id));
        }
        Ok(inner.todos.get(todo_id)?.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> MemoryBackend {
        MemoryBackend::new("http://localhost:8080")
    }

    fn todo_draft(title: &str) -> TodoDraft {
        TodoDraft {
            title: title.to_string(),
            completed: false,
            order: None,
        }
    }

    fn tag_draft(title: &str) -> TagDraft {
        TagDraft {
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_url() {
        let backend = backend();
        let todo = backend.create_todo(todo_draft("blah")).await.unwrap();

        assert!(!todo.id.is_empty());
        assert_eq!(todo.url, format!("http://localhost:8080/todos/{}", todo.id));
        assert!(!todo.completed);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let backend = backend();
        let a = backend.create_todo(todo_draft("a")).await.unwrap();
        let b = backend.create_todo(todo_draft("b")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_patch_is_visible_on_refetch() {
        let backend = backend();
        let todo = backend.create_todo(todo_draft("initial")).await.unwrap();

        backend
            .patch_todo(
                &todo.id,
                TodoPatch {
                    title: Some("changed".to_string()),
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let fetched = backend.get_todo(&todo.id).await.unwrap();
        assert_eq!(fetched.title, "changed");
        assert!(fetched.completed);
        assert_eq!(fetched.url, todo.url);
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let backend = backend();
        let todo = backend.create_todo(todo_draft("once")).await.unwrap();

        backend.delete_todo(&todo.id).await.unwrap();
        let err = backend.delete_todo(&todo.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_link_requires_both_endpoints() {
        let backend = backend();
        let todo = backend.create_todo(todo_draft("t")).await.unwrap();

        assert!(backend.link(&todo.id, "missing-tag").await.is_err());
        assert!(backend.link("missing-todo", &todo.id).await.is_err());
    }

    #[tokio::test]
    async fn test_link_is_idempotent() {
        let backend = backend();
        let todo = backend.create_todo(todo_draft("t")).await.unwrap();
        let tag = backend.create_tag(tag_draft("g")).await.unwrap();

        backend.link(&todo.id, &tag.id).await.unwrap();
        backend.link(&todo.id, &tag.id).await.unwrap();

        assert_eq!(backend.tags_of(&todo.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_link_is_bidirectionally_visible() {
        let backend = backend();
        let todo = backend.create_todo(todo_draft("t")).await.unwrap();
        let tag = backend.create_tag(tag_draft("g")).await.unwrap();

        backend.link(&todo.id, &tag.id).await.unwrap();
        assert_eq!(backend.tags_of(&todo.id).await.unwrap()[0].id, tag.id);
        assert_eq!(backend.todos_of(&tag.id).await.unwrap()[0].id, todo.id);

        backend.unlink(&todo.id, &tag.id).await.unwrap();
        assert!(backend.tags_of(&todo.id).await.unwrap().is_empty());
        assert!(backend.todos_of(&tag.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_patched_entity_shows_through_association() {
        let backend = backend();
        let todo = backend.create_todo(todo_draft("t")).await.unwrap();
        let tag = backend.create_tag(tag_draft("before")).await.unwrap();
        backend.link(&todo.id, &tag.id).await.unwrap();

        backend
            .patch_tag(
                &tag.id,
                TagPatch {
                    title: Some("after".to_string()),
                },
            )
            .await
            .unwrap();

        let tags = backend.tags_of(&todo.id).await.unwrap();
        assert_eq!(tags[0].title, "after");
    }

    #[tokio::test]
    async fn test_delete_cascades_to_both_sides() {
        let backend = backend();
        let todo = backend.create_todo(todo_draft("t")).await.unwrap();
        let g1 = backend.create_tag(tag_draft("g1")).await.unwrap();
        let g2 = backend.create_tag(tag_draft("g2")).await.unwrap();
        backend.link(&todo.id, &g1.id).await.unwrap();
        backend.link(&todo.id, &g2.id).await.unwrap();

        backend.delete_todo(&todo.id).await.unwrap();

        assert!(backend.todos_of(&g1.id).await.unwrap().is_empty());
        assert!(backend.todos_of(&g2.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_all_purges_edges() {
        let backend = backend();
        let todo = backend.create_todo(todo_draft("t")).await.unwrap();
        let tag = backend.create_tag(tag_draft("g")).await.unwrap();
        backend.link(&todo.id, &tag.id).await.unwrap();

        backend.delete_all_todos().await.unwrap();

        assert!(backend.list_todos().await.unwrap().is_empty());
        assert!(backend.todos_of(&tag.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_associated_tag_requires_edge() {
        let backend = backend();
        let todo = backend.create_todo(todo_draft("t")).await.unwrap();
        let tag = backend.create_tag(tag_draft("g")).await.unwrap();

        assert!(backend.associated_tag(&todo.id, &tag.id).await.is_err());

        backend.link(&todo.id, &tag.id).await.unwrap();
        let resolved = backend.associated_tag(&todo.id, &tag.id).await.unwrap();
        assert_eq!(resolved.id, tag.id);
    }

    #[tokio::test]
    async fn test_clear_todo_tags_only_touches_that_todo() {
        let backend = backend();
        let t1 = backend.create_todo(todo_draft("t1")).await.unwrap();
        let t2 = backend.create_todo(todo_draft("t2")).await.unwrap();
        let tag = backend.create_tag(tag_draft("g")).await.unwrap();
        backend.link(&t1.id, &tag.id).await.unwrap();
        backend.link(&t2.id, &tag.id).await.unwrap();

        backend.clear_todo_tags(&t1.id).await.unwrap();

        assert!(backend.tags_of(&t1.id).await.unwrap().is_empty());
        assert_eq!(backend.tags_of(&t2.id).await.unwrap().len(), 1);
    }
}

//! Core storage trait.
//!
//! [`TodoTagStorage`] is the single surface the REST layer is generic over.
//! It exposes the item stores and the association index as one set of
//! operations so a backend can make each request's effect, including the
//! delete-then-purge cascade, atomic to observers.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::{Tag, TagDraft, TagPatch, Todo, TodoDraft, TodoPatch};

/// Storage surface for todos, tags, and their associations.
///
/// # Consistency
///
/// Implementations must provide read-after-write consistency: any mutation
/// acknowledged to the caller is observed by every subsequent read. Each
/// operation's effect must be atomic from the caller's view; in particular,
/// deleting an entity and purging the edges that reference it happen inside
/// one logical operation, never as two independently observable steps.
///
/// # Association semantics
///
/// Linking requires both endpoints to exist and is idempotent. Unlinking an
/// absent edge is a no-op, mirroring the HTTP contract where sub-item DELETE
/// is used freely without existence pre-checks; only the parent item itself
/// must exist.
#[async_trait]
pub trait TodoTagStorage: Send + Sync {
    /// Human-readable name of the backend, for logs.
    fn backend_name(&self) -> &'static str;

    // --- Todos ---

    /// Creates a todo from a draft, assigning a fresh id and url.
    async fn create_todo(&self, draft: TodoDraft) -> StoreResult<Todo>;

    /// Lists all todos in insertion order. Empty list, not an error, when
    /// none exist.
    async fn list_todos(&self) -> StoreResult<Vec<Todo>>;

    /// Fetches one todo by id.
    async fn get_todo(&self, id: &str) -> StoreResult<Todo>;

    /// Applies a partial update to a todo and returns the updated entity.
    async fn patch_todo(&self, id: &str, patch: TodoPatch) -> StoreResult<Todo>;

    /// Deletes a todo and purges every edge referencing it, returning the
    /// removed entity. A second delete of the same id fails with `NotFound`.
    async fn delete_todo(&self, id: &str) -> StoreResult<Todo>;

    /// Deletes every todo, cascading edge removal for each.
    async fn delete_all_todos(&self) -> StoreResult<()>;

    // --- Tags ---

    /// Creates a tag from a draft, assigning a fresh id and url.
    async fn create_tag(&self, draft: TagDraft) -> StoreResult<Tag>;

    /// Lists all tags in insertion order.
    async fn list_tags(&self) -> StoreResult<Vec<Tag>>;

    /// Fetches one tag by id.
    async fn get_tag(&self, id: &str) -> StoreResult<Tag>;

    /// Applies a partial update to a tag and returns the updated entity.
    async fn patch_tag(&self, id: &str, patch: TagPatch) -> StoreResult<Tag>;

    /// Deletes a tag and purges every edge referencing it, returning the
    /// removed entity.
    async fn delete_tag(&self, id: &str) -> StoreResult<Tag>;

    /// Deletes every tag, cascading edge removal for each.
    async fn delete_all_tags(&self) -> StoreResult<()>;

    // --- Associations ---

    /// Adds the edge `(todo_id, tag_id)`. Both ids must exist; adding an
    /// edge that is already present is a no-op.
    async fn link(&self, todo_id: &str, tag_id: &str) -> StoreResult<()>;

    /// Removes the edge `(todo_id, tag_id)` if present. Removing an absent
    /// edge is a no-op, not an error, and no existence pre-check is made.
    async fn unlink(&self, todo_id: &str, tag_id: &str) -> StoreResult<()>;

    /// Resolves every tag linked to the todo into full entities, in the tag
    /// store's insertion order. The todo must exist; no links yields an
    /// empty list.
    async fn tags_of(&self, todo_id: &str) -> StoreResult<Vec<Tag>>;

    /// Resolves every todo linked to the tag; symmetric to
    /// [`tags_of`](Self::tags_of).
    async fn todos_of(&self, tag_id: &str) -> StoreResult<Vec<Todo>>;

    /// Removes every edge touching the todo, which must exist.
    async fn clear_todo_tags(&self, todo_id: &str) -> StoreResult<()>;

    /// Removes every edge touching the tag, which must exist.
    async fn clear_tag_todos(&self, tag_id: &str) -> StoreResult<()>;

    /// Resolves one specific tag linked to the todo. Fails with `NotFound`
    /// when the edge or either entity is absent.
    async fn associated_tag(&self, todo_id: &str, tag_id: &str) -> StoreResult<Tag>;

    /// Resolves one specific todo linked to the tag; symmetric to
    /// [`associated_tag`](Self::associated_tag).
    async fn associated_todo(&self, tag_id: &str, todo_id: &str) -> StoreResult<Todo>;
}

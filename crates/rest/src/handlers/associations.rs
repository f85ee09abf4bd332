//! Handlers for the nested association sub-collections.
//!
//! Each item exposes its side of the relation as a sub-resource:
//! `/todos/{id}/tags` and `/tags/{id}/todos`. Both operate on the same
//! underlying edge set; neither side owns the relation.
//!
//! Link creation requires both endpoints to exist and is idempotent.
//! Removing a specific association that is already absent is a no-op, not
//! an error - sub-item DELETE is used freely without existence pre-checks.
//! The parent item itself must exist for any sub-resource request; a request
//! under a deleted item's url is `404 Not Found`.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use todotag_store::{Tag, Todo, TodoTagStorage};
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Body of a link-creating POST: the id of the entity to associate.
#[derive(Debug, Deserialize)]
pub struct LinkRequest {
    /// Id of the entity on the other side of the new edge.
    pub id: String,
}

// --- /todos/{id}/tags ---

/// Handler for `GET /todos/{id}/tags`.
///
/// Lists the tags associated with the todo, as full entities. No
/// associations yields `[]`.
pub async fn list_todo_tags_handler<S>(
    State(state): State<AppState<S>>,
    Path(todo_id): Path<String>,
) -> RestResult<Json<Vec<Tag>>>
where
    S: TodoTagStorage + Send + Sync,
{
    Ok(Json(state.storage().tags_of(&todo_id).await?))
}

/// Handler for `POST /todos/{id}/tags`.
///
/// Creates the association named by the body `{id: tagId}`. Both entities
/// must exist; linking an already-linked pair changes nothing. Responds
/// `201 Created` with the linked tag.
pub async fn link_todo_tag_handler<S>(
    State(state): State<AppState<S>>,
    Path(todo_id): Path<String>,
    payload: Result<Json<LinkRequest>, JsonRejection>,
) -> RestResult<(StatusCode, Json<Tag>)>
where
    S: TodoTagStorage + Send + Sync,
{
    let Json(link) = payload?;
    debug!(todo_id = %todo_id, tag_id = %link.id, "Processing link request");

    state.storage().link(&todo_id, &link.id).await?;
    let tag = state.storage().associated_tag(&todo_id, &link.id).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

/// Handler for `DELETE /todos/{id}/tags`.
///
/// Removes every association of the todo and responds with the resulting
/// (empty) sub-collection.
pub async fn clear_todo_tags_handler<S>(
    State(state): State<AppState<S>>,
    Path(todo_id): Path<String>,
) -> RestResult<Json<Vec<Tag>>>
where
    S: TodoTagStorage + Send + Sync,
{
    debug!(todo_id = %todo_id, "Clearing todo associations");
    state.storage().clear_todo_tags(&todo_id).await?;
    Ok(Json(Vec::new()))
}

/// Handler for `GET /todos/{id}/tags/{tag_id}`.
///
/// Resolves one specific associated tag; `404 Not Found` when the edge or
/// either entity is absent.
pub async fn read_todo_tag_handler<S>(
    State(state): State<AppState<S>>,
    Path((todo_id, tag_id)): Path<(String, String)>,
) -> RestResult<Json<Tag>>
where
    S: TodoTagStorage + Send + Sync,
{
    Ok(Json(state.storage().associated_tag(&todo_id, &tag_id).await?))
}

/// Handler for `DELETE /todos/{id}/tags/{tag_id}`.
///
/// Removes the association if present (an absent edge is a no-op) and
/// responds with the todo's remaining associations.
pub async fn unlink_todo_tag_handler<S>(
    State(state): State<AppState<S>>,
    Path((todo_id, tag_id)): Path<(String, String)>,
) -> RestResult<Json<Vec<Tag>>>
where
    S: TodoTagStorage + Send + Sync,
{
    debug!(todo_id = %todo_id, tag_id = %tag_id, "Processing unlink request");

    state.storage().unlink(&todo_id, &tag_id).await?;
    // Rendering the remainder also enforces that the parent still exists
    Ok(Json(state.storage().tags_of(&todo_id).await?))
}

// --- /tags/{id}/todos ---

/// Handler for `GET /tags/{id}/todos`.
pub async fn list_tag_todos_handler<S>(
    State(state): State<AppState<S>>,
    Path(tag_id): Path<String>,
) -> RestResult<Json<Vec<Todo>>>
where
    S: TodoTagStorage + Send + Sync,
{
    Ok(Json(state.storage().todos_of(&tag_id).await?))
}

/// Handler for `POST /tags/{id}/todos`.
///
/// Creates the association named by the body `{id: todoId}`; the same edge
/// set as the todo-side POST, reached from the other direction.
pub async fn link_tag_todo_handler<S>(
    State(state): State<AppState<S>>,
    Path(tag_id): Path<String>,
    payload: Result<Json<LinkRequest>, JsonRejection>,
) -> RestResult<(StatusCode, Json<Todo>)>
where
    S: TodoTagStorage + Send + Sync,
{
    let Json(link) = payload?;
    debug!(tag_id = %tag_id, todo_id = %link.id, "Processing link request");

    state.storage().link(&link.id, &tag_id).await?;
    let todo = state.storage().associated_todo(&tag_id, &link.id).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Handler for `DELETE /tags/{id}/todos`.
pub async fn clear_tag_todos_handler<S>(
    State(state): State<AppState<S>>,
    Path(tag_id): Path<String>,
) -> RestResult<Json<Vec<Todo>>>
where
    S: TodoTagStorage + Send + Sync,
{
    debug!(tag_id = %tag_id, "Clearing tag associations");
    state.storage().clear_tag_todos(&tag_id).await?;
    Ok(Json(Vec::new()))
}

/// Handler for `GET /tags/{id}/todos/{todo_id}`.
pub async fn read_tag_todo_handler<S>(
    State(state): State<AppState<S>>,
    Path((tag_id, todo_id)): Path<(String, String)>,
) -> RestResult<Json<Todo>>
where
    S: TodoTagStorage + Send + Sync,
{
    Ok(Json(
        state.storage().associated_todo(&tag_id, &todo_id).await?,
    ))
}

/// Handler for `DELETE /tags/{id}/todos/{todo_id}`.
pub async fn unlink_tag_todo_handler<S>(
    State(state): State<AppState<S>>,
    Path((tag_id, todo_id)): Path<(String, String)>,
) -> RestResult<Json<Vec<Todo>>>
where
    S: TodoTagStorage + Send + Sync,
{
    debug!(tag_id = %tag_id, todo_id = %todo_id, "Processing unlink request");

    state.storage().unlink(&todo_id, &tag_id).await?;
    Ok(Json(state.storage().todos_of(&tag_id).await?))
}

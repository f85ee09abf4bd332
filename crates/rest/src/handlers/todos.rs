//! Handlers for the `/todos` collection and its items.
//!
//! Every mutation echoes the full current representation of the affected
//! entity (or the resulting list), so a client never needs a follow-up GET
//! to observe the effect of a write.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use todotag_store::{TodoDraft, TodoPatch, TodoTagStorage};
use tracing::debug;

use crate::error::RestResult;
use crate::representations::{TodoRepr, todo_repr};
use crate::state::AppState;

/// Handler for `GET /todos`.
///
/// Lists every todo in insertion order, each with its associated tags
/// inlined. An empty store yields `[]`, never an error.
pub async fn list_todos_handler<S>(
    State(state): State<AppState<S>>,
) -> RestResult<Json<Vec<TodoRepr>>>
where
    S: TodoTagStorage + Send + Sync,
{
    let todos = state.storage().list_todos().await?;
    let mut body = Vec::with_capacity(todos.len());
    for todo in todos {
        body.push(todo_repr(state.storage(), todo).await?);
    }
    Ok(Json(body))
}

/// Handler for `POST /todos`.
///
/// Creates a todo from `{title, completed?, order?}`, assigning a fresh id
/// and url. Responds `201 Created` with the full new entity.
pub async fn create_todo_handler<S>(
    State(state): State<AppState<S>>,
    payload: Result<Json<TodoDraft>, JsonRejection>,
) -> RestResult<(StatusCode, Json<TodoRepr>)>
where
    S: TodoTagStorage + Send + Sync,
{
    let Json(draft) = payload?;
    debug!(title = %draft.title, "Processing todo create request");

    let todo = state.storage().create_todo(draft).await?;
    debug!(id = %todo.id, "Todo created");

    // A fresh todo has no associations yet
    Ok((
        StatusCode::CREATED,
        Json(TodoRepr {
            todo,
            tags: Vec::new(),
        }),
    ))
}

/// Handler for `DELETE /todos`.
///
/// Deletes every todo, cascading edge removal, and responds with the
/// resulting (empty) collection.
pub async fn delete_all_todos_handler<S>(
    State(state): State<AppState<S>>,
) -> RestResult<Json<Vec<TodoRepr>>>
where
    S: TodoTagStorage + Send + Sync,
{
    debug!("Processing delete of the todo collection");
    state.storage().delete_all_todos().await?;
    Ok(Json(Vec::new()))
}

/// Handler for `GET /todos/{id}`.
pub async fn read_todo_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Json<TodoRepr>>
where
    S: TodoTagStorage + Send + Sync,
{
    let todo = state.storage().get_todo(&id).await?;
    Ok(Json(todo_repr(state.storage(), todo).await?))
}

/// Handler for `PATCH /todos/{id}`.
///
/// Applies a partial update: only supplied fields change, omitted fields
/// retain their prior values. Echoes the full updated representation.
pub async fn patch_todo_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    payload: Result<Json<TodoPatch>, JsonRejection>,
) -> RestResult<Json<TodoRepr>>
where
    S: TodoTagStorage + Send + Sync,
{
    let Json(patch) = payload?;
    debug!(id = %id, "Processing todo patch request");

    let todo = state.storage().patch_todo(&id, patch).await?;
    Ok(Json(todo_repr(state.storage(), todo).await?))
}

/// Handler for `DELETE /todos/{id}`.
///
/// Deletes the todo and purges every edge referencing it, responding with
/// the entity's last representation. Deleting an already-absent todo is
/// `404 Not Found`: entity deletion reports on current existence.
pub async fn delete_todo_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Json<TodoRepr>>
where
    S: TodoTagStorage + Send + Sync,
{
    debug!(id = %id, "Processing todo delete request");

    // Capture the association list before the cascade wipes it
    let tags = state.storage().tags_of(&id).await?;
    let todo = state.storage().delete_todo(&id).await?;
    debug!(id = %id, "Todo deleted");

    Ok(Json(TodoRepr { todo, tags }))
}

//! Handlers for the `/tags` collection and its items.
//!
//! Mirrors the `/todos` surface with the roles reversed: a tag's
//! representation inlines the todos linked to it.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use todotag_store::{TagDraft, TagPatch, TodoTagStorage};
use tracing::debug;

use crate::error::RestResult;
use crate::representations::{TagRepr, tag_repr};
use crate::state::AppState;

/// Handler for `GET /tags`.
pub async fn list_tags_handler<S>(
    State(state): State<AppState<S>>,
) -> RestResult<Json<Vec<TagRepr>>>
where
    S: TodoTagStorage + Send + Sync,
{
    let tags = state.storage().list_tags().await?;
    let mut body = Vec::with_capacity(tags.len());
    for tag in tags {
        body.push(tag_repr(state.storage(), tag).await?);
    }
    Ok(Json(body))
}

/// Handler for `POST /tags`.
///
/// Creates a tag from `{title}`. Responds `201 Created` with the full new
/// entity.
pub async fn create_tag_handler<S>(
    State(state): State<AppState<S>>,
    payload: Result<Json<TagDraft>, JsonRejection>,
) -> RestResult<(StatusCode, Json<TagRepr>)>
where
    S: TodoTagStorage + Send + Sync,
{
    let Json(draft) = payload?;
    debug!(title = %draft.title, "Processing tag create request");

    let tag = state.storage().create_tag(draft).await?;
    debug!(id = %tag.id, "Tag created");

    Ok((
        StatusCode::CREATED,
        Json(TagRepr {
            tag,
            todos: Vec::new(),
        }),
    ))
}

/// Handler for `DELETE /tags`.
pub async fn delete_all_tags_handler<S>(
    State(state): State<AppState<S>>,
) -> RestResult<Json<Vec<TagRepr>>>
where
    S: TodoTagStorage + Send + Sync,
{
    debug!("Processing delete of the tag collection");
    state.storage().delete_all_tags().await?;
    Ok(Json(Vec::new()))
}

/// Handler for `GET /tags/{id}`.
pub async fn read_tag_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Json<TagRepr>>
where
    S: TodoTagStorage + Send + Sync,
{
    let tag = state.storage().get_tag(&id).await?;
    Ok(Json(tag_repr(state.storage(), tag).await?))
}

/// Handler for `PATCH /tags/{id}`.
pub async fn patch_tag_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    payload: Result<Json<TagPatch>, JsonRejection>,
) -> RestResult<Json<TagRepr>>
where
    S: TodoTagStorage + Send + Sync,
{
    let Json(patch) = payload?;
    debug!(id = %id, "Processing tag patch request");

    let tag = state.storage().patch_tag(&id, patch).await?;
    Ok(Json(tag_repr(state.storage(), tag).await?))
}

/// Handler for `DELETE /tags/{id}`.
///
/// Deletes the tag and purges every edge referencing it, responding with
/// the entity's last representation.
pub async fn delete_tag_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Json<TagRepr>>
where
    S: TodoTagStorage + Send + Sync,
{
    debug!(id = %id, "Processing tag delete request");

    let todos = state.storage().todos_of(&id).await?;
    let tag = state.storage().delete_tag(&id).await?;
    debug!(id = %id, "Tag deleted");

    Ok(Json(TagRepr { tag, todos }))
}

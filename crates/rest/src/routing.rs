//! Route configuration.
//!
//! Defines all routes for the todotag REST API.

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use todotag_store::TodoTagStorage;

use crate::handlers;
use crate::state::AppState;

/// Creates all REST API routes.
///
/// # Routes
///
/// ## System-level
/// - `GET /health` - Liveness probe
///
/// ## Collection-level
/// - `GET /todos`, `POST /todos`, `DELETE /todos` (and the `/tags` mirror)
///
/// ## Item-level
/// - `GET /todos/{id}`, `PATCH /todos/{id}`, `DELETE /todos/{id}`
///   (and the `/tags` mirror)
///
/// ## Association-level
/// - `GET/POST/DELETE /todos/{id}/tags`
/// - `GET/DELETE /todos/{id}/tags/{tag_id}`
///   (and the `/tags/{id}/todos` mirror)
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: TodoTagStorage + Send + Sync + 'static,
{
    Router::new()
        // System-level routes
        .route("/health", get(handlers::health_handler))
        // Todo collection and items
        .route("/todos", get(handlers::list_todos_handler::<S>))
        .route("/todos", post(handlers::create_todo_handler::<S>))
        .route("/todos", delete(handlers::delete_all_todos_handler::<S>))
        .route("/todos/{id}", get(handlers::read_todo_handler::<S>))
        .route("/todos/{id}", patch(handlers::patch_todo_handler::<S>))
        .route("/todos/{id}", delete(handlers::delete_todo_handler::<S>))
        // Todo-side associations
        .route(
            "/todos/{id}/tags",
            get(handlers::list_todo_tags_handler::<S>),
        )
        .route(
            "/todos/{id}/tags",
            post(handlers::link_todo_tag_handler::<S>),
        )
        .route(
            "/todos/{id}/tags",
            delete(handlers::clear_todo_tags_handler::<S>),
        )
        .route(
            "/todos/{id}/tags/{tag_id}",
            get(handlers::read_todo_tag_handler::<S>),
        )
        .route(
            "/todos/{id}/tags/{tag_id}",
            delete(handlers::unlink_todo_tag_handler::<S>),
        )
        // Tag collection and items
        .route("/tags", get(handlers::list_tags_handler::<S>))
        .route("/tags", post(handlers::create_tag_handler::<S>))
        .route("/tags", delete(handlers::delete_all_tags_handler::<S>))
        .route("/tags/{id}", get(handlers::read_tag_handler::<S>))
        .route("/tags/{id}", patch(handlers::patch_tag_handler::<S>))
        .route("/tags/{id}", delete(handlers::delete_tag_handler::<S>))
        // Tag-side associations
        .route(
            "/tags/{id}/todos",
            get(handlers::list_tag_todos_handler::<S>),
        )
        .route(
            "/tags/{id}/todos",
            post(handlers::link_tag_todo_handler::<S>),
        )
        .route(
            "/tags/{id}/todos",
            delete(handlers::clear_tag_todos_handler::<S>),
        )
        .route(
            "/tags/{id}/todos/{todo_id}",
            get(handlers::read_tag_todo_handler::<S>),
        )
        .route(
            "/tags/{id}/todos/{todo_id}",
            delete(handlers::unlink_tag_todo_handler::<S>),
        )
        // State
        .with_state(state)
}

#[cfg(test)]
mod tests {
    // Route behavior is covered by the integration tests in tests/
}

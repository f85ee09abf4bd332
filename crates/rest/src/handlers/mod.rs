//! HTTP request handlers.
//!
//! Handlers are grouped per resource:
//!
//! - [`todos`] - collection and item operations on `/todos`
//! - [`tags`] - collection and item operations on `/tags`
//! - [`associations`] - the nested `tags`/`todos` sub-collections
//! - [`health`] - liveness probe

pub mod associations;
pub mod health;
pub mod tags;
pub mod todos;

// Re-export handlers for convenience
pub use associations::{
    clear_tag_todos_handler, clear_todo_tags_handler, link_tag_todo_handler,
    link_todo_tag_handler, list_tag_todos_handler, list_todo_tags_handler, read_tag_todo_handler,
    read_todo_tag_handler, unlink_tag_todo_handler, unlink_todo_tag_handler,
};
pub use health::health_handler;
pub use tags::{
    create_tag_handler, delete_all_tags_handler, delete_tag_handler, list_tags_handler,
    patch_tag_handler, read_tag_handler,
};
pub use todos::{
    create_todo_handler, delete_all_todos_handler, delete_todo_handler, list_todos_handler,
    patch_todo_handler, read_todo_handler,
};

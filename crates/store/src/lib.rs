//! Storage layer for the todotag backend.
//!
//! This crate holds everything the HTTP layer persists through: the two
//! entity types ([`Todo`](types::Todo) and [`Tag`](types::Tag)), a generic
//! insertion-ordered item store, the bidirectional association index, and
//! the [`TodoTagStorage`](storage::TodoTagStorage) trait that ties them
//! together behind a single async surface.
//!
//! # Architecture
//!
//! - [`types`] - Entity types, creation drafts, and partial-update patches
//! - [`error`] - Error types for all storage operations
//! - [`items`] - Generic keyed item store with insertion-order listing
//! - [`index`] - The Todo/Tag edge set with projections from either side
//! - [`storage`] - The async storage trait the REST layer is generic over
//! - [`memory`] - The in-memory reference backend
//!
//! # Association model
//!
//! Associations are kept as a single set of `(todo_id, tag_id)` pairs rather
//! than as two per-entity lists. Both read directions (`tags_of`,
//! `todos_of`) are projections of that one set, so the relation can never be
//! visible from one side and missing from the other. The index stores only
//! id pairs: rendering an associated item always re-reads the current entity
//! from its store, which makes entity patches visible through every
//! association lookup with no synchronization step.
//!
//! # Quick start
//!
//! ```
//! use todotag_store::memory::MemoryBackend;
//! use todotag_store::storage::TodoTagStorage;
//! use todotag_store::types::{TagDraft, TodoDraft};
//!
//! # async fn example() -> todotag_store::error::StoreResult<()> {
//! let backend = MemoryBackend::new("http://localhost:8080");
//!
//! let todo = backend
//!     .create_todo(TodoDraft {
//!         title: "walk the dog".to_string(),
//!         completed: false,
//!         order: None,
//!     })
//!     .await?;
//! let tag = backend
//!     .create_tag(TagDraft {
//!         title: "leisure".to_string(),
//!     })
//!     .await?;
//!
//! backend.link(&todo.id, &tag.id).await?;
//! assert_eq!(backend.tags_of(&todo.id).await?.len(), 1);
//! assert_eq!(backend.todos_of(&tag.id).await?.len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod index;
pub mod items;
pub mod memory;
pub mod storage;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryBackend;
pub use storage::TodoTagStorage;
pub use types::{ItemKind, Tag, TagDraft, TagPatch, Todo, TodoDraft, TodoPatch};

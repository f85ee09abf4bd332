//! Entity types for the todotag backend.
//!
//! Each entity comes in three serde shapes:
//!
//! - the stored entity itself ([`Todo`], [`Tag`]) with its server-assigned
//!   `id` and `url`,
//! - a creation draft ([`TodoDraft`], [`TagDraft`]) carrying only the
//!   client-settable fields, with type-level defaults applied, and
//! - a patch ([`TodoPatch`], [`TagPatch`]) in which every field is optional,
//!   so a partial update touches exactly the supplied fields.
//!
//! Ill-typed request bodies (a non-string `title`, a non-boolean
//! `completed`) fail at deserialization into the draft/patch types; the
//! REST layer turns those failures into validation errors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::items::Item;

/// The two entity kinds served by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A task entity with title, completion flag, and ordering hint.
    Todo,
    /// A label entity linkable to todos.
    Tag,
}

impl ItemKind {
    /// Singular name, used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Todo => "todo",
            ItemKind::Tag => "tag",
        }
    }

    /// Collection segment of the entity's url (`todos` / `tags`).
    pub fn collection(&self) -> &'static str {
        match self {
            ItemKind::Todo => "todos",
            ItemKind::Tag => "tags",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Server-assigned identifier. Unique, immutable, never reused within a
    /// server lifetime.
    pub id: String,
    /// The todo's title.
    pub title: String,
    /// Completion flag. Defaults to `false` on creation.
    pub completed: bool,
    /// Client-managed ordering hint. Stored and echoed verbatim; the server
    /// never sorts by it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Server-computed url of the item. Stable for the item's lifetime.
    pub url: String,
}

/// Client-supplied fields for creating a todo.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoDraft {
    /// The todo's title.
    pub title: String,
    /// Completion flag, defaulting to `false` when omitted.
    #[serde(default)]
    pub completed: bool,
    /// Optional ordering hint.
    #[serde(default)]
    pub order: Option<i64>,
}

/// Partial update for a todo. Omitted fields retain their prior values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoPatch {
    /// New title, if supplied.
    #[serde(default)]
    pub title: Option<String>,
    /// New completion flag, if supplied.
    #[serde(default)]
    pub completed: Option<bool>,
    /// New ordering hint, if supplied.
    #[serde(default)]
    pub order: Option<i64>,
}

impl Item for Todo {
    type Draft = TodoDraft;
    type Patch = TodoPatch;

    const KIND: ItemKind = ItemKind::Todo;

    fn from_draft(id: String, url: String, draft: TodoDraft) -> Self {
        Todo {
            id,
            title: draft.title,
            completed: draft.completed,
            order: draft.order,
            url,
        }
    }

    fn apply_patch(&mut self, patch: TodoPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(order) = patch.order {
            self.order = Some(order);
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// A stored tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Server-assigned identifier. Unique, immutable, never reused within a
    /// server lifetime.
    pub id: String,
    /// The tag's title.
    pub title: String,
    /// Server-computed url of the item. Stable for the item's lifetime.
    pub url: String,
}

/// Client-supplied fields for creating a tag.
#[derive(Debug, Clone, Deserialize)]
pub struct TagDraft {
    /// The tag's title.
    pub title: String,
}

/// Partial update for a tag.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagPatch {
    /// New title, if supplied.
    #[serde(default)]
    pub title: Option<String>,
}

impl Item for Tag {
    type Draft = TagDraft;
    type Patch = TagPatch;

    const KIND: ItemKind = ItemKind::Tag;

    fn from_draft(id: String, url: String, draft: TagDraft) -> Self {
        Tag {
            id,
            title: draft.title,
            url,
        }
    }

    fn apply_patch(&mut self, patch: TagPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_draft_defaults() {
        let draft: TodoDraft = serde_json::from_value(serde_json::json!({
            "title": "walk the dog"
        }))
        .unwrap();
        assert_eq!(draft.title, "walk the dog");
        assert!(!draft.completed);
        assert!(draft.order.is_none());
    }

    #[test]
    fn test_todo_draft_rejects_non_string_title() {
        let result: Result<TodoDraft, _> = serde_json::from_value(serde_json::json!({
            "title": 42
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_todo_patch_applies_only_supplied_fields() {
        let mut todo = Todo {
            id: "1".to_string(),
            title: "initial".to_string(),
            completed: false,
            order: Some(10),
            url: "/todos/1".to_string(),
        };

        todo.apply_patch(TodoPatch {
            completed: Some(true),
            ..Default::default()
        });

        assert_eq!(todo.title, "initial");
        assert!(todo.completed);
        assert_eq!(todo.order, Some(10));
    }

    #[test]
    fn test_todo_omits_absent_order_when_serialized() {
        let todo = Todo {
            id: "1".to_string(),
            title: "t".to_string(),
            completed: false,
            order: None,
            url: "/todos/1".to_string(),
        };
        let value = serde_json::to_value(&todo).unwrap();
        assert!(value.get("order").is_none());
    }

    #[test]
    fn test_item_kind_names() {
        assert_eq!(ItemKind::Todo.as_str(), "todo");
        assert_eq!(ItemKind::Tag.collection(), "tags");
        assert_eq!(ItemKind::Todo.collection(), "todos");
    }
}

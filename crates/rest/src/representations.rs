//! Response representations.
//!
//! The wire shape of an entity is the stored entity plus its associations
//! inlined: a todo carries a `tags` array of full tag entities, a tag
//! carries a `todos` array. The arrays are resolved against the live stores
//! at render time, so they always reflect current entity state.

use serde::Serialize;
use todotag_store::{Tag, Todo, TodoTagStorage};

use crate::error::RestResult;

/// A todo with its associated tags inlined.
#[derive(Debug, Serialize)]
pub struct TodoRepr {
    /// The stored todo.
    #[serde(flatten)]
    pub todo: Todo,
    /// Full entities of every tag linked to this todo.
    pub tags: Vec<Tag>,
}

/// A tag with its associated todos inlined.
#[derive(Debug, Serialize)]
pub struct TagRepr {
    /// The stored tag.
    #[serde(flatten)]
    pub tag: Tag,
    /// Full entities of every todo linked to this tag.
    pub todos: Vec<Todo>,
}

/// Resolves a todo's associations and builds its representation.
pub async fn todo_repr<S: TodoTagStorage>(storage: &S, todo: Todo) -> RestResult<TodoRepr> {
    let tags = storage.tags_of(&todo.id).await?;
    Ok(TodoRepr { todo, tags })
}

/// Resolves a tag's associations and builds its representation.
pub async fn tag_repr<S: TodoTagStorage>(storage: &S, tag: Tag) -> RestResult<TagRepr> {
    let todos = storage.todos_of(&tag.id).await?;
    Ok(TagRepr { tag, todos })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_repr_flattens_entity_fields() {
        let repr = TodoRepr {
            todo: Todo {
                id: "1".to_string(),
                title: "walk the dog".to_string(),
                completed: false,
                order: Some(5),
                url: "/todos/1".to_string(),
            },
            tags: vec![],
        };

        let value = serde_json::to_value(&repr).unwrap();
        assert_eq!(value["title"], "walk the dog");
        assert_eq!(value["order"], 5);
        assert_eq!(value["tags"], serde_json::json!([]));
    }

    #[test]
    fn test_tag_repr_inlines_todos() {
        let repr = TagRepr {
            tag: Tag {
                id: "g1".to_string(),
                title: "leisure".to_string(),
                url: "/tags/g1".to_string(),
            },
            todos: vec![Todo {
                id: "t1".to_string(),
                title: "blah".to_string(),
                completed: false,
                order: None,
                url: "/todos/t1".to_string(),
            }],
        };

        let value = serde_json::to_value(&repr).unwrap();
        assert_eq!(value["todos"][0]["id"], "t1");
        assert_eq!(value["title"], "leisure");
    }
}

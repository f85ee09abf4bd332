//! The Todo/Tag association index.
//!
//! Associations are modeled as one shared set of `(todo_id, tag_id)` pairs.
//! Both read directions are projections of the same set, so bidirectional
//! visibility holds by construction: there is no second structure that could
//! drift out of sync. The index holds only id pairs, never entity copies;
//! resolution into full entities happens in the backend against the live
//! stores.

use std::collections::HashSet;

/// Bidirectional many-to-many edge set between todo ids and tag ids.
#[derive(Debug, Default)]
pub struct AssociationIndex {
    edges: HashSet<(String, String)>,
}

impl AssociationIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the index holds no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether the edge `(todo_id, tag_id)` is present.
    pub fn contains(&self, todo_id: &str, tag_id: &str) -> bool {
        self.edges
            .contains(&(todo_id.to_string(), tag_id.to_string()))
    }

    /// Adds an edge. Returns `false` if it was already present (set
    /// semantics: no duplicates, no error).
    pub fn link(&mut self, todo_id: &str, tag_id: &str) -> bool {
        self.edges.insert((todo_id.to_string(), tag_id.to_string()))
    }

    /// Removes an edge. Returns `false` if it was absent; removal of an
    /// absent edge is a no-op, not an error.
    pub fn unlink(&mut self, todo_id: &str, tag_id: &str) -> bool {
        self.edges.remove(&(todo_id.to_string(), tag_id.to_string()))
    }

    /// Removes every edge touching the given todo, returning how many were
    /// removed. Used by explicit "clear associations" requests and by the
    /// cascade on todo deletion.
    pub fn purge_todo(&mut self, todo_id: &str) -> usize {
        let before = self.edges.len();
        self.edges.retain(|(t, _)| t != todo_id);
        before - self.edges.len()
    }

    /// Removes every edge touching the given tag; symmetric to
    /// [`purge_todo`](Self::purge_todo).
    pub fn purge_tag(&mut self, tag_id: &str) -> usize {
        let before = self.edges.len();
        self.edges.retain(|(_, g)| g != tag_id);
        before - self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_is_idempotent() {
        let mut index = AssociationIndex::new();
        assert!(index.link("t1", "g1"));
        assert!(!index.link("t1", "g1"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_edge_is_visible_from_both_sides() {
        let mut index = AssociationIndex::new();
        index.link("t1", "g1");
        assert!(index.contains("t1", "g1"));

        index.unlink("t1", "g1");
        assert!(!index.contains("t1", "g1"));
    }

    #[test]
    fn test_unlink_absent_edge_is_noop() {
        let mut index = AssociationIndex::new();
        assert!(!index.unlink("t1", "g1"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_purge_todo_removes_all_its_edges() {
        let mut index = AssociationIndex::new();
        index.link("t1", "g1");
        index.link("t1", "g2");
        index.link("t2", "g1");

        assert_eq!(index.purge_todo("t1"), 2);
        assert!(!index.contains("t1", "g1"));
        assert!(!index.contains("t1", "g2"));
        assert!(index.contains("t2", "g1"));
    }

    #[test]
    fn test_purge_tag_removes_all_its_edges() {
        let mut index = AssociationIndex::new();
        index.link("t1", "g1");
        index.link("t2", "g1");
        index.link("t2", "g2");

        assert_eq!(index.purge_tag("g1"), 2);
        assert_eq!(index.len(), 1);
        assert!(index.contains("t2", "g2"));
    }
}

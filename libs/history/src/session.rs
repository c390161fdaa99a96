//! # Session Store
//!
//! Named-session persistence: an unbounded name → script-text map, kept
//! independent of the undo/redo stacks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-named script snapshots.
///
/// Serialized as a flat `{ name: text }` object. Names list in sorted
/// order for stable display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionStore {
    sessions: BTreeMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save or overwrite a session.
    pub fn save_session(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.sessions.insert(name.into(), text.into());
    }

    /// Remove a session; unknown names are ignored.
    pub fn delete_session(&mut self, name: &str) {
        self.sessions.remove(name);
    }

    /// A session's text.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.sessions.get(name).map(String::as_str)
    }

    /// All session names, sorted.
    pub fn saved_sessions(&self) -> Vec<&str> {
        self.sessions.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Serialize to the persistence format.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Load from persisted JSON; corrupt or absent data is an empty store.
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_get() {
        let mut store = SessionStore::new();
        store.save_session("bracket", "create a cube.");
        assert_eq!(store.get("bracket"), Some("create a cube."));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_save_overwrites() {
        let mut store = SessionStore::new();
        store.save_session("a", "one");
        store.save_session("a", "two");
        assert_eq!(store.get("a"), Some("two"));
        assert_eq!(store.saved_sessions().len(), 1);
    }

    #[test]
    fn test_delete() {
        let mut store = SessionStore::new();
        store.save_session("a", "one");
        store.delete_session("a");
        store.delete_session("never-existed");
        assert!(store.is_empty());
    }

    #[test]
    fn test_names_are_sorted() {
        let mut store = SessionStore::new();
        store.save_session("zeta", "");
        store.save_session("alpha", "");
        assert_eq!(store.saved_sessions(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_json_is_flat_object() {
        let mut store = SessionStore::new();
        store.save_session("a", "create a cube.");
        assert_eq!(store.to_json(), r#"{"a":"create a cube."}"#);
    }

    #[test]
    fn test_json_round_trip() {
        let mut store = SessionStore::new();
        store.save_session("a", "one");
        store.save_session("b", "two");
        assert_eq!(SessionStore::from_json(&store.to_json()), store);
    }

    #[test]
    fn test_corrupt_json_loads_as_empty() {
        assert!(SessionStore::from_json("[broken").is_empty());
        assert!(SessionStore::from_json("").is_empty());
    }
}

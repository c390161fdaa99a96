//! # History Manager
//!
//! Two-stack undo/redo history over whole-script text snapshots. The
//! oldest undo entry is never poppable, so a baseline state always remains
//! current.

use serde::{Deserialize, Serialize};

/// Append-only undo/redo stacks of script snapshots.
///
/// The serialized form is the persistence contract:
/// `{ "undo": [text, ...], "redo": [text, ...] }` - no version field, and
/// corrupt or absent input loads as empty history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryManager {
    #[serde(default)]
    undo: Vec<String>,
    #[serde(default)]
    redo: Vec<String>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot unless it equals the current top, clearing the
    /// redo stack on any push.
    pub fn push(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.undo.last() == Some(&text) {
            return;
        }
        self.undo.push(text);
        self.redo.clear();
    }

    /// Step back one snapshot, returning the newly current text.
    ///
    /// Requires at least two undo entries; the baseline entry stays put.
    pub fn undo(&mut self) -> Option<&str> {
        if self.undo.len() < 2 {
            return None;
        }
        let current = self.undo.pop()?;
        self.redo.push(current);
        self.undo.last().map(String::as_str)
    }

    /// Step forward one previously undone snapshot, returning it.
    pub fn redo(&mut self) -> Option<&str> {
        let next = self.redo.pop()?;
        self.undo.push(next);
        self.undo.last().map(String::as_str)
    }

    /// The current snapshot: top of the undo stack, or empty.
    pub fn current_state(&self) -> &str {
        self.undo.last().map(String::as_str).unwrap_or("")
    }

    pub fn can_undo(&self) -> bool {
        self.undo.len() >= 2
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Serialize to the persistence format.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Load from persisted JSON. Corrupt or absent data is treated as
    /// empty history, never an error.
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }
}

// =============================================================================
// TESTS
// =============================================================================

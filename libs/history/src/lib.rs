//! # textcad History
//!
//! Undo/redo history over whole-script text snapshots, plus named-session
//! persistence. Both operate on raw text, independent of the parsing
//! pipeline - retrieved text is fed back through the same pipeline on
//! undo/redo or session load.
//!
//! ## Example
//!
//! ```rust
//! use textcad_history::HistoryManager;
//!
//! let mut history = HistoryManager::new();
//! history.push("create a cube.");
//! history.push("create a cube. create a sphere.");
//! assert_eq!(history.undo(), Some("create a cube."));
//! ```
//!
//! Storage mechanics live with the caller: both types serialize to and
//! load from plain JSON strings, and corrupt or missing data loads as
//! empty state.

pub mod history;
pub mod session;

pub use history::HistoryManager;
pub use session::SessionStore;

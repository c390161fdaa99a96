//! # textcad Parser
//!
//! Turns free-form natural-language script text into an ordered list of
//! typed commands.
//!
//! ## Architecture
//!
//! ```text
//! Script Text → Sentence Splitter → Classifier (+ Shape Registry) → Commands
//! ```
//!
//! ## Example
//!
//! ```rust
//! use textcad_parser::parse;
//!
//! let commands = parse("Create a cube of size 2. Make 'base' red.");
//! assert_eq!(commands.len(), 2);
//! ```
//!
//! ## Pipeline Integration
//!
//! This crate is the first layer of the textcad pipeline:
//!
//! ```text
//! textcad-parser → textcad-scene (interpreter) → textcad-mesh (geometry)
//! ```

pub mod classify;
pub mod command;
pub mod extract;
pub mod registry;
pub mod split;

// Re-export public API
pub use command::{
    color_from_hex, Axes, Command, CombineOp, CreateCommand, Face, FeatureCommand, FeatureKind,
    Modification, Relation, RelationKind, Rgba, Target,
};
pub use registry::{ShapeKind, ShapeParams};
pub use split::split_sentences;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse script text into an ordered command list.
///
/// This is the main entry point for the parser. Sentences that match no
/// command template contribute nothing - they are dropped without error, as
/// the script as a whole always parses.
///
/// ## Parameters
///
/// - `text`: raw script text, any casing
///
/// ## Returns
///
/// Commands in sentence order; this order is the execution order.
pub fn parse(text: &str) -> Vec<Command> {
    split::split_sentences(text)
        .iter()
        .filter_map(|sentence| {
            let command = classify::classify(sentence);
            if command.is_none() {
                tracing::debug!(%sentence, "no command template matched; dropping");
            }
            command
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

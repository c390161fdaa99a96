//! # textcad Scene
//!
//! The command interpreter: turns parsed commands into the final set of
//! named solids, resolving cross-command references, computing layout, and
//! applying boolean combinations.
//!
//! ## Architecture
//!
//! ```text
//! textcad-parser (commands) → textcad-scene (solids) → viewers/exporters
//! ```
//!
//! ## Example
//!
//! ```rust
//! use textcad_scene::generate;
//!
//! let scene = generate("create a cube of size 2 named 'base'.");
//! assert_eq!(scene.len(), 1);
//! assert!(scene.find("base").is_some());
//! ```
//!
//! Each call to [`generate`] owns a fresh build context; there is no state
//! shared between runs.

pub mod builder;
pub mod context;
pub mod layout;
pub mod resolve;
pub mod solid;

// Re-export public API
pub use builder::{combine_solids, CombineOutcome, SceneBuilder};
pub use context::BuildContext;
pub use resolve::Resolution;
pub use solid::{Scene, Solid, SolidKind};


// =============================================================================
// PUBLIC API
// =============================================================================

/// Run the full text-to-scene pipeline.
///
/// ## Parameters
///
/// - `text`: raw script text
///
/// ## Returns
///
/// The final scene. An empty or unparseable script yields an empty scene,
/// never an error.
pub fn generate(text: &str) -> Scene {
    let commands = textcad_parser::parse(text);
    SceneBuilder::new().build(&commands)
}

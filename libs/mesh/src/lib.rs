//! # textcad Mesh
//!
//! Mesh generation and boolean operations for textcad solids. Converts the
//! parser's resolved shape parameters into triangle meshes and combines
//! meshes with BSP-tree CSG.
//!
//! ## Architecture
//!
//! ```text
//! textcad-parser (ShapeParams) → textcad-mesh (Mesh, boolean ops)
//! ```
//!
//! ## Algorithms
//!
//! - **Boolean operations**: BSP trees (csg.js algorithm)
//! - **Primitives**: direct tessellation, centered at the local origin
//! - **Gear**: extruded tooth/valley profile, hole cut by the engine itself

pub mod boolean;
pub mod error;
pub mod from_params;
pub mod mesh;
pub mod primitives;

pub use error::MeshError;
pub use from_params::build_shape;
pub use mesh::Mesh;

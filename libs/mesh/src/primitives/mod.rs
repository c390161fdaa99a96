//! # Primitive Generators
//!
//! Mesh generation for the registry's shape kinds. All primitives are
//! centered at the local origin the way the command grammar expects them:
//! boxes and spheres symmetric about the origin, cylinders and cones along
//! the Y axis, tori with the centerline ring in the XY plane, gears
//! extruded along +Z from z = 0.

mod cube;
mod cylinder;
mod gear;
mod sphere;
mod torus;

pub use cube::create_cube;
pub use cylinder::create_cylinder;
pub use gear::{create_gear, gear_profile};
pub use sphere::create_sphere;
pub use torus::create_torus;

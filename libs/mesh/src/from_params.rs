//! # Shape Parameters to Mesh
//!
//! Dispatch from the parser's resolved shape parameters to the primitive
//! generators. This is the geometry-builder half of the shape registry: a
//! pure function from parameters to mesh, no side effects.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives;
use config::constants::{
    CYLINDER_SEGMENTS, PYRAMID_SEGMENTS, SPHERE_SEGMENTS, TORUS_RING_SEGMENTS,
    TORUS_TUBE_SEGMENTS,
};
use glam::DVec3;
use textcad_parser::ShapeParams;

/// Build the mesh for a fully-resolved parameter set.
///
/// ## Example
///
/// ```rust
/// use textcad_mesh::build_shape;
/// use textcad_parser::ShapeParams;
///
/// let mesh = build_shape(&ShapeParams::Cube { size: [2.0, 2.0, 2.0] }).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// ```
pub fn build_shape(params: &ShapeParams) -> Result<Mesh, MeshError> {
    match *params {
        ShapeParams::Cube { size } => {
            primitives::create_cube(DVec3::new(size[0], size[1], size[2]))
        }
        ShapeParams::Sphere { radius } => primitives::create_sphere(radius, SPHERE_SEGMENTS),
        ShapeParams::Cylinder { radius, height } => {
            primitives::create_cylinder(radius, radius, height, CYLINDER_SEGMENTS)
        }
        ShapeParams::Cone { radius, height } => {
            primitives::create_cylinder(radius, 0.0, height, CYLINDER_SEGMENTS)
        }
        ShapeParams::Pyramid { radius, height } => {
            primitives::create_cylinder(radius, 0.0, height, PYRAMID_SEGMENTS)
        }
        ShapeParams::Torus { radius, tube } => {
            primitives::create_torus(radius, tube, TORUS_RING_SEGMENTS, TORUS_TUBE_SEGMENTS)
        }
        ShapeParams::Gear {
            teeth,
            radius,
            height,
            hole_radius,
            tooth_height,
        } => primitives::create_gear(teeth, radius, height, hole_radius, tooth_height),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_cube() {
        let mesh = build_shape(&ShapeParams::Cube { size: [2.0, 4.0, 6.0] }).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_build_sphere() {
        let mesh = build_shape(&ShapeParams::Sphere { radius: 2.0 }).unwrap();
        let (_, max) = mesh.bounding_box();
        // Tessellated rings stay just inside the nominal radius
        assert!(max.x > 1.95 && max.x <= 2.0);
    }

    #[test]
    fn test_build_cylinder_and_cone() {
        let cylinder =
            build_shape(&ShapeParams::Cylinder { radius: 1.0, height: 2.0 }).unwrap();
        let cone = build_shape(&ShapeParams::Cone { radius: 1.0, height: 2.0 }).unwrap();
        assert!(cone.vertex_count() < cylinder.vertex_count());
    }

    #[test]
    fn test_build_pyramid_is_coarse() {
        let pyramid =
            build_shape(&ShapeParams::Pyramid { radius: 1.0, height: 2.0 }).unwrap();
        assert_eq!(pyramid.triangle_count(), 6);
    }

    #[test]
    fn test_build_gear_propagates_validation() {
        let bad = ShapeParams::Gear {
            teeth: 2,
            radius: 2.0,
            height: 0.5,
            hole_radius: 0.5,
            tooth_height: 0.5,
        };
        assert!(build_shape(&bad).is_err());
    }
}

//! # Cube Primitive
//!
//! Generates mesh for cube and rectangular prism shapes.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates a rectangular prism centered at the origin.
///
/// # Arguments
///
/// * `size` - Dimensions [width, height, depth]
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use textcad_mesh::primitives::create_cube;
/// use glam::DVec3;
///
/// let mesh = create_cube(DVec3::splat(2.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_cube(size: DVec3) -> Result<Mesh, MeshError> {
    if size.x <= 0.0 || size.y <= 0.0 || size.z <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "cube size must be positive: {:?}",
            size
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 12);
    let half = size / 2.0;
    let (min, max) = (-half, half);

    // 8 corners, bottom face first
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z));
    let v3 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z));
    let v4 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));
    let v5 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

    // 12 triangles, counter-clockwise winding viewed from outside

    // Bottom face (y = min.y)
    mesh.add_triangle(v0, v1, v2);
    mesh.add_triangle(v0, v2, v3);

    // Top face (y = max.y)
    mesh.add_triangle(v4, v7, v6);
    mesh.add_triangle(v4, v6, v5);

    // Front face (z = max.z)
    mesh.add_triangle(v3, v2, v6);
    mesh.add_triangle(v3, v6, v7);

    // Back face (z = min.z)
    mesh.add_triangle(v1, v0, v4);
    mesh.add_triangle(v1, v4, v5);

    // Left face (x = min.x)
    mesh.add_triangle(v0, v3, v7);
    mesh.add_triangle(v0, v7, v4);

    // Right face (x = max.x)
    mesh.add_triangle(v2, v1, v5);
    mesh.add_triangle(v2, v5, v6);

    Ok(mesh)
}

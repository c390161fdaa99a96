//! # Torus Primitive
//!
//! Generates mesh for torus/donut shapes. The centerline ring lies in the
//! XY plane around the Z axis.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a torus mesh.
///
/// # Arguments
///
/// * `radius` - Centerline radius
/// * `tube` - Tube radius
/// * `ring_segments` - Segments around the centerline
/// * `tube_segments` - Segments around the tube cross-section
///
/// # Example
///
/// ```rust
/// use textcad_mesh::primitives::create_torus;
///
/// let mesh = create_torus(2.0, 0.5, 48, 16).unwrap();
/// assert_eq!(mesh.vertex_count(), 48 * 16);
/// ```
pub fn create_torus(
    radius: f64,
    tube: f64,
    ring_segments: u32,
    tube_segments: u32,
) -> Result<Mesh, MeshError> {
    if radius <= 0.0 || tube <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "torus radii must be positive: radius={}, tube={}",
            radius, tube
        )));
    }
    if ring_segments < 3 || tube_segments < 3 {
        return Err(MeshError::degenerate(format!(
            "torus segments must be at least 3: ring={}, tube={}",
            ring_segments, tube_segments
        )));
    }

    let mut mesh = Mesh::with_capacity(
        (ring_segments * tube_segments) as usize,
        (ring_segments * tube_segments * 2) as usize,
    );

    for i in 0..ring_segments {
        let u = 2.0 * PI * i as f64 / ring_segments as f64;
        for j in 0..tube_segments {
            let w = 2.0 * PI * j as f64 / tube_segments as f64;
            let r = radius + tube * w.cos();
            mesh.add_vertex(DVec3::new(r * u.cos(), r * u.sin(), tube * w.sin()));
        }
    }

    let index = |i: u32, j: u32| -> u32 {
        (i % ring_segments) * tube_segments + (j % tube_segments)
    };

    for i in 0..ring_segments {
        for j in 0..tube_segments {
            let a0 = index(i, j);
            let a1 = index(i, j + 1);
            let b0 = index(i + 1, j);
            let b1 = index(i + 1, j + 1);
            mesh.add_triangle(a0, b0, b1);
            mesh.add_triangle(a0, b1, a1);
        }
    }

    Ok(mesh)
}

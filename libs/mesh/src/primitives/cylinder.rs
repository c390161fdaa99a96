//! # Cylinder Primitive
//!
//! Generates mesh for cylinder, cone and pyramid shapes (a pyramid is a
//! 4-segment cone).

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a cylinder or cone along the Y axis, centered vertically.
///
/// # Arguments
///
/// * `radius_bottom` - Radius at y = -h/2, must be positive
/// * `radius_top` - Radius at y = +h/2; 0 makes a cone
/// * `height` - Extent along Y
/// * `segments` - Segments around the circumference
///
/// # Example
///
/// ```rust
/// use textcad_mesh::primitives::create_cylinder;
///
/// let cylinder = create_cylinder(1.0, 1.0, 2.0, 32).unwrap();
/// let cone = create_cylinder(1.0, 0.0, 2.0, 32).unwrap();
/// assert!(cone.triangle_count() < cylinder.triangle_count());
/// ```
pub fn create_cylinder(
    radius_bottom: f64,
    radius_top: f64,
    height: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    if height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "cylinder height must be positive: {}",
            height
        )));
    }
    if radius_bottom <= 0.0 || radius_top < 0.0 {
        return Err(MeshError::degenerate(format!(
            "cylinder radii out of range: r1={}, r2={}",
            radius_bottom, radius_top
        )));
    }
    if segments < 3 {
        return Err(MeshError::degenerate(format!(
            "cylinder segments must be at least 3: {}",
            segments
        )));
    }

    let mut mesh = Mesh::new();
    let y_bottom = -height / 2.0;
    let y_top = height / 2.0;

    let bottom: Vec<u32> = ring(&mut mesh, radius_bottom, y_bottom, segments);

    if radius_top > 0.0 {
        let top: Vec<u32> = ring(&mut mesh, radius_top, y_top, segments);

        // Side quads
        for j in 0..segments as usize {
            let j_next = (j + 1) % segments as usize;
            mesh.add_triangle(bottom[j_next], bottom[j], top[j]);
            mesh.add_triangle(bottom[j_next], top[j], top[j_next]);
        }

        // Top cap, facing +Y
        for j in 1..segments as usize - 1 {
            mesh.add_triangle(top[0], top[j + 1], top[j]);
        }
    } else {
        // Cone: sides run from the base ring to a single apex
        let apex = mesh.add_vertex(DVec3::new(0.0, y_top, 0.0));
        for j in 0..segments as usize {
            let j_next = (j + 1) % segments as usize;
            mesh.add_triangle(bottom[j_next], bottom[j], apex);
        }
    }

    // Bottom cap, facing -Y
    for j in 1..segments as usize - 1 {
        mesh.add_triangle(bottom[0], bottom[j], bottom[j + 1]);
    }

    Ok(mesh)
}

fn ring(mesh: &mut Mesh, radius: f64, y: f64, segments: u32) -> Vec<u32> {
    (0..segments)
        .map(|j| {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            mesh.add_vertex(DVec3::new(radius * theta.cos(), y, radius * theta.sin()))
        })
        .collect()
}

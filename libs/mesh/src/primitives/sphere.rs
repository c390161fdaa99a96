//! # Sphere Primitive
//!
//! Generates mesh for sphere shapes using latitude/longitude tessellation.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a sphere mesh centered at the origin, poles on the Y axis.
///
/// # Arguments
///
/// * `radius` - Sphere radius
/// * `segments` - Segments around the circumference
///
/// # Algorithm
///
/// Latitude rings are offset by half a step so there are no pole vertices;
/// the first and last rings are closed with polygon fan caps.
///
/// # Example
///
/// ```rust
/// use textcad_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(5.0, 32).unwrap();
/// assert!(mesh.triangle_count() > 0);
/// ```
pub fn create_sphere(radius: f64, segments: u32) -> Result<Mesh, MeshError> {
    if radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "sphere radius must be positive: {}",
            radius
        )));
    }
    if segments < 3 {
        return Err(MeshError::degenerate(format!(
            "sphere segments must be at least 3: {}",
            segments
        )));
    }

    let num_rings = (segments + 1) / 2;
    let mut mesh = Mesh::new();
    let mut rings: Vec<Vec<u32>> = Vec::with_capacity(num_rings as usize);

    for i in 0..num_rings {
        // Polar angle from the +Y pole, offset half a step
        let phi = PI * (i as f64 + 0.5) / num_rings as f64;
        let ring_radius = radius * phi.sin();
        let y = radius * phi.cos();

        let ring = (0..segments)
            .map(|j| {
                let theta = 2.0 * PI * j as f64 / segments as f64;
                mesh.add_vertex(DVec3::new(
                    ring_radius * theta.cos(),
                    y,
                    ring_radius * theta.sin(),
                ))
            })
            .collect();
        rings.push(ring);
    }

    // Top cap over the first ring, facing +Y
    let first = &rings[0];
    for j in 1..segments - 1 {
        mesh.add_triangle(first[0], first[(j + 1) as usize], first[j as usize]);
    }

    // Bands between adjacent rings
    for i in 0..(num_rings - 1) as usize {
        let upper = &rings[i];
        let lower = &rings[i + 1];
        for j in 0..segments as usize {
            let j_next = (j + 1) % segments as usize;
            let a0 = upper[j];
            let a1 = upper[j_next];
            let b0 = lower[j];
            let b1 = lower[j_next];
            mesh.add_triangle(a0, a1, b1);
            mesh.add_triangle(a0, b1, b0);
        }
    }

    // Bottom cap over the last ring, facing -Y
    let last = &rings[(num_rings - 1) as usize];
    for j in 1..segments - 1 {
        mesh.add_triangle(last[0], last[j as usize], last[(j + 1) as usize]);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_bounds() {
        let mesh = create_sphere(2.0, 32).unwrap();
        let (min, max) = mesh.bounding_box();
        // Ring offset keeps every vertex strictly inside the nominal
        // radius, at the poles and at the equator alike
        assert!(max.y < 2.0 && max.y > 1.9);
        assert!(min.y > -2.0 && min.y < -1.9);
        assert!(max.x < 2.0 && max.x > 1.98);
    }

    #[test]
    fn test_sphere_vertex_count() {
        let segments = 16;
        let mesh = create_sphere(1.0, segments).unwrap();
        let rings = (segments + 1) / 2;
        assert_eq!(mesh.vertex_count() as u32, rings * segments);
    }

    #[test]
    fn test_sphere_winding_faces_outward() {
        let mesh = create_sphere(1.0, 12).unwrap();
        for tri in mesh.triangles() {
            let v0 = mesh.vertices()[tri[0] as usize];
            let v1 = mesh.vertices()[tri[1] as usize];
            let v2 = mesh.vertices()[tri[2] as usize];
            let normal = (v1 - v0).cross(v2 - v0);
            let centroid = (v0 + v1 + v2) / 3.0;
            assert!(normal.dot(centroid) > 0.0, "inward triangle {:?}", tri);
        }
    }

    #[test]
    fn test_sphere_invalid_parameters() {
        assert!(create_sphere(0.0, 32).is_err());
        assert!(create_sphere(1.0, 2).is_err());
    }
}

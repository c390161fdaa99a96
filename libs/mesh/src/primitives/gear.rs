//! # Gear Primitive
//!
//! Generates a gear mesh: a closed polygonal profile alternating
//! inner-radius valleys and outer-radius tooth tips at equal angular steps,
//! extruded along +Z, with a circular hole subtracted through the center.

use crate::boolean;
use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::GEAR_HOLE_SEGMENTS;
use glam::DVec3;
use std::f64::consts::PI;

/// Builds the 2D tooth/valley profile, counter-clockwise in the XY plane.
///
/// Each tooth contributes four points: the valley start, the rising flank
/// foot, the tooth tip at the outer radius, and the falling flank foot.
///
/// # Example
///
/// ```rust
/// use textcad_mesh::primitives::gear_profile;
///
/// let profile = gear_profile(8, 3.0, 0.5);
/// assert_eq!(profile.len(), 32);
/// ```
pub fn gear_profile(teeth: u32, outer_radius: f64, tooth_height: f64) -> Vec<[f64; 2]> {
    let inner_radius = outer_radius - tooth_height;
    let step = 2.0 * PI / teeth as f64;
    let tooth_angle = step * 0.5;

    let mut points = Vec::with_capacity(teeth as usize * 4);
    for i in 0..teeth {
        let angle = i as f64 * step;
        let at = |a: f64, r: f64| [a.cos() * r, a.sin() * r];

        points.push(at(angle, inner_radius));
        points.push(at(angle + tooth_angle * 0.1, inner_radius));
        points.push(at(angle + tooth_angle * 0.5, outer_radius));
        points.push(at(angle + tooth_angle * 0.9, inner_radius));
    }
    points
}

/// Creates a gear mesh.
///
/// # Arguments
///
/// * `teeth` - Number of teeth, at least 3
/// * `radius` - Outer radius (tooth tips)
/// * `height` - Extrusion height along +Z, from z = 0
/// * `hole_radius` - Central hole radius; 0 for a solid gear
/// * `tooth_height` - Radial tooth depth; valleys sit at `radius - tooth_height`
pub fn create_gear(
    teeth: u32,
    radius: f64,
    height: f64,
    hole_radius: f64,
    tooth_height: f64,
) -> Result<Mesh, MeshError> {
    if teeth < 3 {
        return Err(MeshError::degenerate(format!(
            "gear needs at least 3 teeth: {}",
            teeth
        )));
    }
    if radius <= 0.0 || height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "gear radius and height must be positive: radius={}, height={}",
            radius, height
        )));
    }
    if tooth_height <= 0.0 || tooth_height >= radius {
        return Err(MeshError::degenerate(format!(
            "gear tooth height out of range: {}",
            tooth_height
        )));
    }
    if hole_radius < 0.0 || hole_radius >= radius - tooth_height {
        return Err(MeshError::degenerate(format!(
            "gear hole must fit inside the valleys: hole={}, valley radius={}",
            hole_radius,
            radius - tooth_height
        )));
    }

    let body = extrude_profile(&gear_profile(teeth, radius, tooth_height), 0.0, height);

    if hole_radius == 0.0 {
        return Ok(body);
    }

    // Oversize the cutter along Z so the subtraction passes cleanly through
    // both faces.
    let cutter = extrude_profile(
        &circle_profile(hole_radius, GEAR_HOLE_SEGMENTS),
        -height * 0.5,
        height * 1.5,
    );
    Ok(boolean::difference(&body, &cutter))
}

/// Counter-clockwise circle profile in the XY plane.
fn circle_profile(radius: f64, segments: u32) -> Vec<[f64; 2]> {
    (0..segments)
        .map(|j| {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            [radius * theta.cos(), radius * theta.sin()]
        })
        .collect()
}

/// Extrudes a counter-clockwise, origin-star-shaped profile into a prism
/// spanning z0..z1. Caps are fanned from a center vertex, which is valid
/// because every profile here is star-shaped about the origin.
fn extrude_profile(profile: &[[f64; 2]], z0: f64, z1: f64) -> Mesh {
    let n = profile.len();
    let mut mesh = Mesh::with_capacity(n * 2 + 2, n * 4);

    let bottom: Vec<u32> = profile
        .iter()
        .map(|[x, y]| mesh.add_vertex(DVec3::new(*x, *y, z0)))
        .collect();
    let top: Vec<u32> = profile
        .iter()
        .map(|[x, y]| mesh.add_vertex(DVec3::new(*x, *y, z1)))
        .collect();
    let center_bottom = mesh.add_vertex(DVec3::new(0.0, 0.0, z0));
    let center_top = mesh.add_vertex(DVec3::new(0.0, 0.0, z1));

    for j in 0..n {
        let j_next = (j + 1) % n;

        // Side quad
        mesh.add_triangle(bottom[j], bottom[j_next], top[j_next]);
        mesh.add_triangle(bottom[j], top[j_next], top[j]);

        // Caps: bottom faces -Z, top faces +Z
        mesh.add_triangle(center_bottom, bottom[j_next], bottom[j]);
        mesh.add_triangle(center_top, top[j], top[j_next]);
    }

    mesh
}

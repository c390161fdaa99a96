//! # Boolean Operations (CSG)
//!
//! Constructive Solid Geometry operations using BSP trees, following the
//! csg.js algorithm by Evan Wallace:
//!
//! - Union: A.clip_to(B); B.clip_to(A); B.invert(); B.clip_to(A); B.invert(); combine
//! - Difference: A - B = invert(union(invert(A), B))
//! - Intersection: A & B = invert(union(invert(A), invert(B)))
//!
//! ## Example
//!
//! ```rust
//! use textcad_mesh::boolean::difference;
//! use textcad_mesh::primitives::create_cube;
//! use glam::DVec3;
//!
//! let a = create_cube(DVec3::splat(2.0)).unwrap();
//! let b = create_cube(DVec3::splat(1.0)).unwrap();
//! let carved = difference(&a, &b);
//! assert!(!carved.is_empty());
//! ```

mod bsp;
mod plane;
mod polygon;

use crate::mesh::Mesh;
use bsp::BspNode;
use polygon::Polygon;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Compute the union of two meshes.
///
/// An empty operand degrades to a copy of the other.
pub fn union(a: &Mesh, b: &Mesh) -> Mesh {
    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);

    if polys_a.is_empty() {
        return b.clone();
    }
    if polys_b.is_empty() {
        return a.clone();
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    // Remove overlap from both, and B's faces coplanar with A's
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut result = bsp_a.all_polygons();
    result.extend(bsp_b.all_polygons());
    polygons_to_mesh(&result)
}

/// Compute the difference of two meshes (A minus B).
pub fn difference(a: &Mesh, b: &Mesh) -> Mesh {
    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);

    if polys_a.is_empty() {
        return Mesh::new();
    }
    if polys_b.is_empty() {
        return a.clone();
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    // A - B = ~(~A | B)
    bsp_a.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut combined = bsp_a.all_polygons();
    combined.extend(bsp_b.all_polygons());

    let mut result = BspNode::new(combined);
    result.invert();
    polygons_to_mesh(&result.all_polygons())
}

/// Compute the intersection of two meshes.
pub fn intersection(a: &Mesh, b: &Mesh) -> Mesh {
    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);

    if polys_a.is_empty() || polys_b.is_empty() {
        return Mesh::new();
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    // A & B = ~(~A | ~B)
    bsp_a.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);

    let mut combined = bsp_a.all_polygons();
    combined.extend(bsp_b.all_polygons());

    let mut result = BspNode::new(combined);
    result.invert();
    polygons_to_mesh(&result.all_polygons())
}

// =============================================================================
// MESH <-> POLYGON CONVERSION
// =============================================================================

fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    mesh.triangles()
        .iter()
        .filter_map(|tri| {
            Polygon::from_vertices(vec![
                mesh.vertices()[tri[0] as usize],
                mesh.vertices()[tri[1] as usize],
                mesh.vertices()[tri[2] as usize],
            ])
        })
        .collect()
}

fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let mut mesh = Mesh::new();
    for poly in polygons {
        let verts = poly.vertices();
        // Polygons stay convex through splitting, so a fan suffices
        let base = mesh.add_vertex(verts[0]);
        let mut prev = mesh.add_vertex(verts[1]);
        for v in &verts[2..] {
            let next = mesh.add_vertex(*v);
            mesh.add_triangle(base, prev, next);
            prev = next;
        }
    }
    mesh
}

// =============================================================================
// TESTS
// =============================================================================

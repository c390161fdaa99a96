//! # Polygon for BSP Operations
//!
//! Convex polygon with an associated plane and splitting support.

use super::plane::{Classification, Plane};
use glam::DVec3;

/// A convex polygon on a plane, vertices in counter-clockwise order.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<DVec3>,
    plane: Plane,
}

impl Polygon {
    /// Create a polygon from vertices.
    ///
    /// Returns `None` if the vertices do not span a valid plane.
    pub fn from_vertices(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    /// Polygon vertices.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Polygon plane.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Flip winding order and plane in place.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane = self.plane.flip();
    }

    /// Classify this polygon relative to a plane.
    pub fn classify(&self, plane: &Plane) -> Classification {
        let mut front = 0;
        let mut back = 0;
        for v in &self.vertices {
            match plane.classify_point(*v) {
                Classification::Front => front += 1,
                Classification::Back => back += 1,
                _ => {}
            }
        }
        match (front > 0, back > 0) {
            (true, true) => Classification::Spanning,
            (true, false) => Classification::Front,
            (false, true) => Classification::Back,
            (false, false) => Classification::Coplanar,
        }
    }

    /// Split this polygon by a plane into the four output buckets.
    ///
    /// ## Parameters
    ///
    /// - `plane`: splitting plane
    /// - `coplanar_front`: coplanar polygons facing the plane's direction
    /// - `coplanar_back`: coplanar polygons facing away
    /// - `front`: polygons in front of the plane
    /// - `back`: polygons behind the plane
    pub fn split(
        &self,
        plane: &Plane,
        coplanar_front: &mut Vec<Polygon>,
        coplanar_back: &mut Vec<Polygon>,
        front: &mut Vec<Polygon>,
        back: &mut Vec<Polygon>,
    ) {
        match self.classify(plane) {
            Classification::Coplanar => {
                if self.plane.normal.dot(plane.normal) > 0.0 {
                    coplanar_front.push(self.clone());
                } else {
                    coplanar_back.push(self.clone());
                }
            }
            Classification::Front => front.push(self.clone()),
            Classification::Back => back.push(self.clone()),
            Classification::Spanning => {
                let mut front_verts = Vec::new();
                let mut back_verts = Vec::new();

                for i in 0..self.vertices.len() {
                    let j = (i + 1) % self.vertices.len();
                    let vi = self.vertices[i];
                    let vj = self.vertices[j];
                    let ti = plane.classify_point(vi);
                    let tj = plane.classify_point(vj);

                    if ti != Classification::Back {
                        front_verts.push(vi);
                    }
                    if ti != Classification::Front {
                        back_verts.push(vi);
                    }

                    // Edge crosses the plane: insert the intersection point
                    // into both halves.
                    if (ti == Classification::Front && tj == Classification::Back)
                        || (ti == Classification::Back && tj == Classification::Front)
                    {
                        let di = plane.signed_distance(vi);
                        let dj = plane.signed_distance(vj);
                        let t = di / (di - dj);
                        let intersection = vi.lerp(vj, t);
                        front_verts.push(intersection);
                        back_verts.push(intersection);
                    }
                }

                if let Some(poly) = Polygon::from_vertices(front_verts) {
                    front.push(poly);
                }
                if let Some(poly) = Polygon::from_vertices(back_verts) {
                    back.push(poly);
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

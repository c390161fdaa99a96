//! # BSP Tree
//!
//! Binary Space Partitioning tree for CSG boolean operations, following the
//! csg.js algorithm by Evan Wallace.
//!
//! Each node holds its dividing plane, the polygons coplanar with it, and
//! front/back subtrees. The plane is kept separately from the polygons:
//! clipping may empty a node's polygon list, but the node must keep
//! partitioning space or containment queries go wrong.

use super::plane::Plane;
use super::polygon::Polygon;

/// A node in the BSP tree.
#[derive(Debug, Clone, Default)]
pub struct BspNode {
    /// Dividing plane, set when the first polygons arrive.
    plane: Option<Plane>,
    /// Polygons coplanar with the dividing plane.
    polygons: Vec<Polygon>,
    /// Subtree in front of the plane.
    front: Option<Box<BspNode>>,
    /// Subtree behind the plane.
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Creates a BSP tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut node = Self::default();
        node.build(polygons);
        node
    }

    /// Inserts polygons into this tree, splitting them against existing
    /// planes.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }
        let plane = match self.plane {
            Some(plane) => plane,
            None => {
                let plane = *polygons[0].plane();
                self.plane = Some(plane);
                plane
            }
        };

        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        let mut front_polys = Vec::new();
        let mut back_polys = Vec::new();
        for poly in polygons {
            poly.split(
                &plane,
                &mut coplanar_front,
                &mut coplanar_back,
                &mut front_polys,
                &mut back_polys,
            );
        }
        self.polygons.extend(coplanar_front);
        self.polygons.extend(coplanar_back);

        if !front_polys.is_empty() {
            self.front
                .get_or_insert_with(Default::default)
                .build(front_polys);
        }
        if !back_polys.is_empty() {
            self.back
                .get_or_insert_with(Default::default)
                .build(back_polys);
        }
    }

    /// Inverts the solid this tree represents: flips every polygon and
    /// plane, and swaps front/back subtrees.
    pub fn invert(&mut self) {
        if let Some(plane) = &mut self.plane {
            *plane = plane.flip();
        }
        for poly in &mut self.polygons {
            poly.flip();
        }
        std::mem::swap(&mut self.front, &mut self.back);
        if let Some(front) = &mut self.front {
            front.invert();
        }
        if let Some(back) = &mut self.back {
            back.invert();
        }
    }

    /// Removes the parts of `polygons` inside the solid this tree
    /// represents, returning the surviving fragments.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let Some(plane) = self.plane else {
            return polygons;
        };

        let mut front_polys = Vec::new();
        let mut back_polys = Vec::new();
        for poly in polygons {
            split_front_back(&poly, &plane, &mut front_polys, &mut back_polys);
        }

        let mut result = match &self.front {
            Some(front) => front.clip_polygons(front_polys),
            None => front_polys,
        };
        if let Some(back) = &self.back {
            result.extend(back.clip_polygons(back_polys));
        }
        // No back subtree: back fragments are inside the solid, drop them.
        result
    }

    /// Clips every polygon in this tree to the solid `other` represents.
    pub fn clip_to(&mut self, other: &BspNode) {
        self.polygons = other.clip_polygons(std::mem::take(&mut self.polygons));
        if let Some(front) = &mut self.front {
            front.clip_to(other);
        }
        if let Some(back) = &mut self.back {
            back.clip_to(other);
        }
    }

    /// Collects all polygons in the tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = self.polygons.clone();
        if let Some(front) = &self.front {
            result.extend(front.all_polygons());
        }
        if let Some(back) = &self.back {
            result.extend(back.all_polygons());
        }
        result
    }
}

/// Split a polygon keeping only the front/back buckets; coplanar fragments
/// go with the side they face.
fn split_front_back(
    poly: &Polygon,
    plane: &Plane,
    front: &mut Vec<Polygon>,
    back: &mut Vec<Polygon>,
) {
    let mut coplanar_front = Vec::new();
    let mut coplanar_back = Vec::new();
    poly.split(plane, &mut coplanar_front, &mut coplanar_back, front, back);
    front.extend(coplanar_front);
    back.extend(coplanar_back);
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn triangle_at(z: f64) -> Polygon {
        Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, z),
            DVec3::new(1.0, 0.0, z),
            DVec3::new(0.0, 1.0, z),
        ])
        .unwrap()
    }

    #[test]
    fn test_bsp_empty() {
        let tree = BspNode::new(vec![]);
        assert!(tree.all_polygons().is_empty());
        // An empty tree clips nothing away
        let survivors = tree.clip_polygons(vec![triangle_at(0.0)]);
        assert_eq!(survivors.len(), 1);
    }

    #[test]
    fn test_bsp_keeps_all_polygons() {
        let tree = BspNode::new(vec![
            triangle_at(0.0),
            triangle_at(1.0),
            triangle_at(-1.0),
        ]);
        assert_eq!(tree.all_polygons().len(), 3);
    }

    #[test]
    fn test_bsp_invert_flips_normals() {
        let original_normal = triangle_at(0.0).plane().normal;
        let mut tree = BspNode::new(vec![triangle_at(0.0)]);
        tree.invert();
        let inverted_normal = tree.all_polygons()[0].plane().normal;
        assert!((original_normal + inverted_normal).length() < 1e-9);
    }

    #[test]
    fn test_bsp_clip_keeps_front() {
        let tree = BspNode::new(vec![triangle_at(0.0)]);
        let survivors = tree.clip_polygons(vec![triangle_at(1.0)]);
        assert_eq!(survivors.len(), 1);
    }

    #[test]
    fn test_bsp_clip_drops_back() {
        let tree = BspNode::new(vec![triangle_at(0.0)]);
        let survivors = tree.clip_polygons(vec![triangle_at(-1.0)]);
        assert!(survivors.is_empty());
    }

    #[test]
    fn test_bsp_plane_survives_polygon_clipping() {
        // Clipping away a node's polygons must not stop it partitioning
        // space: fragments behind its plane still get dropped.
        let mut tree = BspNode::new(vec![triangle_at(0.0)]);
        tree.polygons.clear();
        let survivors = tree.clip_polygons(vec![triangle_at(-1.0)]);
        assert!(survivors.is_empty());
    }
}

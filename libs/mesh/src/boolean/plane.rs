//! # Plane for BSP Operations
//!
//! Plane representation with point classification.

use config::constants::PLANE_EPSILON;
use glam::DVec3;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classification of a point or polygon relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// In front of the plane (positive side).
    Front,
    /// Behind the plane (negative side).
    Back,
    /// On the plane.
    Coplanar,
    /// Has vertices on both sides (polygons only).
    Spanning,
}

// =============================================================================
// PLANE
// =============================================================================

/// A plane in 3D space defined by unit normal and distance from origin.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Unit normal.
    pub normal: DVec3,
    /// Distance from origin along the normal.
    pub w: f64,
}

impl Plane {
    /// Create plane from normal and distance.
    pub fn new(normal: DVec3, w: f64) -> Self {
        Self { normal, w }
    }

    /// Create plane from three points in counter-clockwise order.
    ///
    /// Returns `None` for degenerate triangles.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let cross = (b - a).cross(c - a);
        let len = cross.length();
        if len < PLANE_EPSILON {
            return None;
        }
        let normal = cross / len;
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    /// Flip the plane (reverse normal).
    pub fn flip(&self) -> Plane {
        Plane {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Signed distance from point to plane.
    ///
    /// Positive = front, negative = back, zero = on plane.
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    /// Classify a point relative to this plane.
    pub fn classify_point(&self, point: DVec3) -> Classification {
        let dist = self.signed_distance(point);
        if dist > PLANE_EPSILON {
            Classification::Front
        } else if dist < -PLANE_EPSILON {
            Classification::Back
        } else {
            Classification::Coplanar
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_from_points() {
        let plane = Plane::from_points(
            DVec3::ZERO,
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        )
        .unwrap();
        assert!((plane.normal.z - 1.0).abs() < PLANE_EPSILON);
    }

    #[test]
    fn test_plane_from_degenerate_points() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        assert!(Plane::from_points(p, p, p).is_none());
    }

    #[test]
    fn test_plane_classify_point() {
        let plane = Plane::new(DVec3::Z, 0.0);
        assert_eq!(
            plane.classify_point(DVec3::new(0.0, 0.0, 1.0)),
            Classification::Front
        );
        assert_eq!(
            plane.classify_point(DVec3::new(0.0, 0.0, -1.0)),
            Classification::Back
        );
        assert_eq!(
            plane.classify_point(DVec3::new(5.0, 5.0, 0.0)),
            Classification::Coplanar
        );
    }

    #[test]
    fn test_plane_flip() {
        let plane = Plane::new(DVec3::Z, 5.0);
        let flipped = plane.flip();
        assert!((flipped.normal.z + 1.0).abs() < PLANE_EPSILON);
        assert!((flipped.w + 5.0).abs() < PLANE_EPSILON);
    }
}

//! # Solids and Scenes
//!
//! The produced-scene interface: each solid exposes its shape kind, mesh,
//! transform, material color and optional name. This is the sole contract
//! with rendering and export collaborators.

use glam::{DMat4, DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};
use textcad_mesh::Mesh;
use textcad_parser::{Rgba, ShapeKind};

// =============================================================================
// SOLID KIND
// =============================================================================

/// What a solid is: one of the registry's shapes, or geometry brought in
/// from outside the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolidKind {
    Shape(ShapeKind),
    Imported,
}

impl std::fmt::Display for SolidKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolidKind::Shape(kind) => write!(f, "{}", kind),
            SolidKind::Imported => f.write_str("imported"),
        }
    }
}

// =============================================================================
// SOLID
// =============================================================================

/// A single constructed geometric object.
///
/// Rotation is XYZ Euler angles in radians. The mesh is expressed in the
/// solid's local frame; `world_matrix` composes scale, rotation and
/// translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solid {
    pub kind: SolidKind,
    pub mesh: Mesh,
    pub color: Rgba,
    pub position: DVec3,
    pub rotation: DVec3,
    pub scale: DVec3,
    pub name: Option<String>,
    /// Index of the command that produced this solid.
    pub origin: usize,
}

impl Solid {
    /// Local-to-world transform.
    pub fn world_matrix(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(
            self.scale,
            DQuat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z),
            self.position,
        )
    }

    /// World-space axis-aligned bounding box, from the transformed corners
    /// of the local box.
    pub fn world_bounds(&self) -> (DVec3, DVec3) {
        let (lmin, lmax) = self.mesh.bounding_box();
        let matrix = self.world_matrix();

        let mut min = DVec3::splat(f64::INFINITY);
        let mut max = DVec3::splat(f64::NEG_INFINITY);
        for corner in [
            DVec3::new(lmin.x, lmin.y, lmin.z),
            DVec3::new(lmax.x, lmin.y, lmin.z),
            DVec3::new(lmin.x, lmax.y, lmin.z),
            DVec3::new(lmin.x, lmin.y, lmax.z),
            DVec3::new(lmax.x, lmax.y, lmin.z),
            DVec3::new(lmax.x, lmin.y, lmax.z),
            DVec3::new(lmin.x, lmax.y, lmax.z),
            DVec3::new(lmax.x, lmax.y, lmax.z),
        ] {
            let p = matrix.transform_point3(corner);
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }

    /// Distance from the local origin down to the solid's lowest point,
    /// used to rest a solid flush on a surface.
    pub fn base_offset(&self) -> f64 {
        -self.mesh.bounding_box().0.y * self.scale.y
    }
}

// =============================================================================
// SCENE
// =============================================================================

/// The final output of a pipeline run: live solids in command order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    pub solids: Vec<Solid>,
}

impl Scene {
    /// Number of live solids.
    pub fn len(&self) -> usize {
        self.solids.len()
    }

    /// True when the scene holds no solids.
    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }

    /// Find a solid by its user-given name.
    pub fn find(&self, name: &str) -> Option<&Solid> {
        self.solids
            .iter()
            .find(|s| s.name.as_deref() == Some(name))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec3;
    use textcad_mesh::build_shape;
    use textcad_parser::ShapeParams;

    fn cube_solid(size: f64) -> Solid {
        Solid {
            kind: SolidKind::Shape(ShapeKind::Cube),
            mesh: build_shape(&ShapeParams::Cube { size: [size; 3] }).unwrap(),
            color: [1.0, 1.0, 1.0, 1.0],
            position: DVec3::ZERO,
            rotation: DVec3::ZERO,
            scale: DVec3::ONE,
            name: None,
            origin: 0,
        }
    }

    #[test]
    fn test_world_bounds_translated() {
        let mut solid = cube_solid(2.0);
        solid.position = DVec3::new(10.0, 5.0, 0.0);
        let (min, max) = solid.world_bounds();
        assert_relative_eq!(min.y, 4.0, epsilon = 1e-12);
        assert_relative_eq!(max.y, 6.0, epsilon = 1e-12);
        assert_relative_eq!(min.x, 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_world_bounds_scaled() {
        let mut solid = cube_solid(2.0);
        solid.scale = DVec3::splat(3.0);
        let (min, max) = solid.world_bounds();
        assert_relative_eq!(min.x, -3.0, epsilon = 1e-12);
        assert_relative_eq!(max.x, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_base_offset_of_centered_cube() {
        let solid = cube_solid(2.0);
        assert_relative_eq!(solid.base_offset(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(SolidKind::Shape(ShapeKind::Gear).to_string(), "gear");
        assert_eq!(SolidKind::Imported.to_string(), "imported");
    }

    #[test]
    fn test_scene_find_by_name() {
        let mut named = cube_solid(1.0);
        named.name = Some("base".to_string());
        let scene = Scene { solids: vec![cube_solid(1.0), named] };
        assert!(scene.find("base").is_some());
        assert!(scene.find("missing").is_none());
    }
}

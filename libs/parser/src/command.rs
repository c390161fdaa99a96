//! # Command Types
//!
//! Typed commands produced by the parser. Commands are immutable once
//! parsed and carry no references into the build context - targets are
//! resolved only at execution time.

use crate::registry::{ShapeKind, ShapeParams};
use serde::{Deserialize, Serialize};

// =============================================================================
// COLOR
// =============================================================================

/// RGBA material color, components in [0, 1].
pub type Rgba = [f32; 4];

/// Expand a packed 0xRRGGBB value into an opaque RGBA color.
pub fn color_from_hex(hex: u32) -> Rgba {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}

// =============================================================================
// AXES
// =============================================================================

/// Per-axis optional values, used wherever a sentence may supply any subset
/// of x/y/z (positions, rotations, moves).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl Axes {
    /// True when no axis was supplied.
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.z.is_none()
    }

    /// Set one axis by its letter. Unknown letters are ignored.
    pub fn set(&mut self, axis: &str, value: f64) {
        match axis {
            "x" => self.x = Some(value),
            "y" => self.y = Some(value),
            "z" => self.z = Some(value),
            _ => {}
        }
    }

    /// Resolve each axis independently against a default triple.
    pub fn resolve(&self, defaults: [f64; 3]) -> [f64; 3] {
        [
            self.x.unwrap_or(defaults[0]),
            self.y.unwrap_or(defaults[1]),
            self.z.unwrap_or(defaults[2]),
        ]
    }
}

// =============================================================================
// TARGETS AND RELATIONS
// =============================================================================

/// Reference to a previously produced solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Target {
    /// Explicit user-given name, quoted in the sentence.
    ByName(String),
    /// Most recent solid of a shape kind, resolved by lookback.
    ByKind(ShapeKind),
}

/// Spatial relationship kinds. Only stacking exists today; the enum is the
/// extension point for other placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationKind {
    OnTopOf,
}

/// A parsed spatial relationship ("on top of ...").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub kind: RelationKind,
    pub target: Target,
}

/// Boolean combination operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombineOp {
    Union,
    Subtract,
    Intersect,
}

// =============================================================================
// COMMANDS
// =============================================================================

/// A shape creation command with its shared attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCommand {
    pub kind: ShapeKind,
    pub params: ShapeParams,
    /// Material color (palette default when the sentence names none).
    pub color: Rgba,
    /// Explicit name; only the first repetition carries it.
    pub name: Option<String>,
    /// Explicitly supplied coordinates, per axis.
    pub position: Axes,
    /// Absolute rotation in radians, per axis.
    pub rotation: Axes,
    /// Spatial relationship to an earlier solid.
    pub relation: Option<Relation>,
    /// Combination attached to the creation ("... cut through 'base'").
    pub combine: Option<(CombineOp, Target)>,
    /// Repetition count, default 1.
    pub count: usize,
}

/// An in-place modification of a named solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Modification {
    /// Replace the material color.
    Color(Rgba),
    /// Overwrite only the supplied axes, preserving the others.
    Move(Axes),
    /// Add the delta (radians) to the current rotation.
    Rotate(Axes),
    /// Multiply the current scale factor.
    Scale(f64),
}

/// Which face of a solid a feature attaches to. Only `Top` is interpreted
/// today; the rest are parsed and kept as extension points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Top,
    Bottom,
    Front,
    Back,
    Left,
    Right,
}

impl Face {
    pub fn from_word(word: &str) -> Option<Self> {
        Some(match word {
            "top" => Face::Top,
            "bottom" => Face::Bottom,
            "front" => Face::Front,
            "back" => Face::Back,
            "left" => Face::Left,
            "right" => Face::Right,
            _ => return None,
        })
    }
}

/// A localized groove or tab applied to a named solid's face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    /// Cut (subtraction).
    Groove,
    /// Raised addition (union).
    Tab,
}

/// Feature command parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCommand {
    pub feature: FeatureKind,
    /// Name of the solid the feature applies to.
    pub target: String,
    pub face: Face,
    pub width: f64,
    /// Tab height; a groove's height comes from the target's extent.
    pub height: f64,
    pub depth: f64,
}

/// One parsed sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Create(CreateCommand),
    Modify {
        /// Modification targets resolve by name only.
        target: String,
        change: Modification,
    },
    Feature(FeatureCommand),
    /// Standalone combination: the tool is the most recently created live
    /// solid, the target is named or typed.
    Combine { op: CombineOp, target: Target },
}

// =============================================================================
// TESTS
// =============================================================================

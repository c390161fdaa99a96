//! # Configuration Constants
//!
//! Centralized constants for the textcad pipeline. Layout spacing,
//! tessellation parameters, precision values and the color palette are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Layout**: Default placement spacing
//! - **Resolution**: Tessellation segment counts for curved primitives
//! - **Features**: Groove/tab tool sizing
//! - **Colors**: Recognized color words and their fixed values

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon for BSP plane classification.
///
/// Larger than [`EPSILON`]: points closer than this to a splitting plane are
/// treated as coplanar, which keeps polygon splitting stable against the
/// numerical noise boolean operations accumulate.
pub const PLANE_EPSILON: f64 = 1e-5;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Horizontal spacing between repeated instances of one creation command.
///
/// Repetitions of a single command are spread along the X axis, centered on
/// zero: repetition `i` of `count` sits at `(i - (count - 1) / 2) *
/// SPREAD_SPACING` unless the command supplies an explicit x.
pub const SPREAD_SPACING: f64 = 2.5;

/// Depth spacing between successive commands.
///
/// Each command's output row is pushed back along the Z axis by its command
/// index times this value unless the command supplies an explicit z.
pub const ROW_SPACING: f64 = 3.0;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Segments around the circumference of a sphere.
pub const SPHERE_SEGMENTS: u32 = 32;

/// Segments around the circumference of a cylinder or cone.
pub const CYLINDER_SEGMENTS: u32 = 32;

/// Radial segments for a pyramid.
///
/// A pyramid is generated as a cone with this many radial segments.
pub const PYRAMID_SEGMENTS: u32 = 4;

/// Segments around the torus tube cross-section.
pub const TORUS_TUBE_SEGMENTS: u32 = 16;

/// Segments around the torus centerline ring.
pub const TORUS_RING_SEGMENTS: u32 = 48;

/// Segments around a gear's central hole.
pub const GEAR_HOLE_SEGMENTS: u32 = 32;

// =============================================================================
// FEATURE CONSTANTS
// =============================================================================

/// Vertical oversize factor for groove cutting tools.
///
/// A groove's cutter spans the target's full height times this factor so the
/// cut passes cleanly through both faces instead of leaving coplanar skins.
pub const GROOVE_CLEARANCE: f64 = 1.2;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Default material color applied when a sentence names no color.
///
/// The value is the palette's "blue".
pub const DEFAULT_COLOR: u32 = 0x0066ff;

/// Recognized color words and their fixed RGB values.
///
/// The command grammar accepts exactly these words; anything else is not a
/// color match. "gray" and "grey" are both accepted.
///
/// # Example
///
/// ```rust
/// use config::constants::COLOR_PALETTE;
///
/// let red = COLOR_PALETTE.iter().find(|(name, _)| *name == "red");
/// assert_eq!(red, Some(&("red", 0xff0000)));
/// ```
pub const COLOR_PALETTE: &[(&str, u32)] = &[
    ("red", 0xff0000),
    ("blue", 0x0066ff),
    ("green", 0x00cc00),
    ("yellow", 0xffcc00),
    ("purple", 0x9900cc),
    ("orange", 0xff6600),
    ("pink", 0xff66cc),
    ("cyan", 0x00cccc),
    ("white", 0xffffff),
    ("black", 0x333333),
    ("gray", 0x808080),
    ("grey", 0x808080),
];

//! # Config Tests
//!
//! Sanity checks over the constant tables.

use crate::constants::*;

#[test]
fn test_epsilon_ordering() {
    // Plane classification must be more tolerant than general comparison.
    assert!(PLANE_EPSILON > EPSILON);
}

#[test]
fn test_palette_has_both_gray_spellings() {
    let gray = COLOR_PALETTE.iter().find(|(n, _)| *n == "gray").map(|(_, v)| *v);
    let grey = COLOR_PALETTE.iter().find(|(n, _)| *n == "grey").map(|(_, v)| *v);
    assert_eq!(gray, grey);
    assert!(gray.is_some());
}

#[test]
fn test_default_color_is_in_palette() {
    assert!(COLOR_PALETTE.iter().any(|(_, v)| *v == DEFAULT_COLOR));
}

#[test]
fn test_segment_counts_are_valid() {
    for segments in [
        SPHERE_SEGMENTS,
        CYLINDER_SEGMENTS,
        PYRAMID_SEGMENTS,
        TORUS_TUBE_SEGMENTS,
        TORUS_RING_SEGMENTS,
        GEAR_HOLE_SEGMENTS,
    ] {
        assert!(segments >= 3, "degenerate segment count: {}", segments);
    }
}

#[test]
fn test_groove_clearance_oversizes() {
    assert!(GROOVE_CLEARANCE > 1.0);
}

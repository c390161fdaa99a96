//! # Shape Registry
//!
//! Static catalog of shape kinds: canonical names, aliases, and parameter
//! extraction. Each extractor populates every field with its documented
//! default before overriding from matched text, so a bare "create a cube"
//! always yields a complete parameter set.
//!
//! The geometry-builder half of each registry record lives in the mesh layer
//! (`textcad-mesh::build_shape`), which dispatches over [`ShapeParams`].

use crate::extract::{contains_word, NUMBER};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// =============================================================================
// SHAPE KIND
// =============================================================================

/// The fixed set of shape kinds the grammar recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Rectangular prism. Alias: "box".
    Cube,
    /// Alias: "ball".
    Sphere,
    Cylinder,
    Cone,
    /// A 4-sided cone.
    Pyramid,
    /// Alias: "donut".
    Torus,
    /// Extruded tooth/valley profile with a central hole.
    Gear,
}

impl ShapeKind {
    /// Registry order. The scan in [`find_kind`] tries kinds in this order,
    /// first hit wins - an explicit, tested contract.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Cube,
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Pyramid,
        ShapeKind::Torus,
        ShapeKind::Gear,
    ];

    /// Canonical lower-case name.
    pub fn canonical_name(self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Cone => "cone",
            ShapeKind::Pyramid => "pyramid",
            ShapeKind::Torus => "torus",
            ShapeKind::Gear => "gear",
        }
    }

    /// Synonym words accepted by the grammar.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            ShapeKind::Cube => &["box"],
            ShapeKind::Sphere => &["ball"],
            ShapeKind::Torus => &["donut"],
            _ => &[],
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.canonical_name())
    }
}

// =============================================================================
// SHAPE PARAMS
// =============================================================================

/// Fully-resolved shape parameters - the geometry descriptor handed to the
/// mesh layer. All values are concrete numbers; defaults are already applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeParams {
    /// Independent width/height/depth, or a uniform size overriding all
    /// three.
    Cube {
        /// Size as [width, height, depth].
        size: [f64; 3],
    },
    Sphere {
        radius: f64,
    },
    Cylinder {
        radius: f64,
        height: f64,
    },
    Cone {
        /// Base radius.
        radius: f64,
        height: f64,
    },
    Pyramid {
        /// Base radius.
        radius: f64,
        height: f64,
    },
    Torus {
        /// Centerline radius.
        radius: f64,
        /// Tube radius.
        tube: f64,
    },
    Gear {
        teeth: u32,
        /// Outer radius (tooth tips).
        radius: f64,
        /// Extrusion height.
        height: f64,
        /// Central hole radius.
        hole_radius: f64,
        /// Radial depth of each tooth.
        tooth_height: f64,
    },
}

// =============================================================================
// REGISTRY SCAN
// =============================================================================

/// Find the first registry kind whose canonical name or alias appears in the
/// sentence.
///
/// Matching is by word prefix: "cubes" and "boxes" hit, "scubacube" does not.
pub fn find_kind(sentence: &str) -> Option<ShapeKind> {
    ShapeKind::ALL.into_iter().find(|kind| {
        std::iter::once(kind.canonical_name())
            .chain(kind.aliases().iter().copied())
            .any(|word| contains_word(sentence, word))
    })
}

/// Map a single matched word (canonical or alias) back to its kind.
pub fn kind_from_word(word: &str) -> Option<ShapeKind> {
    ShapeKind::ALL.into_iter().find(|kind| {
        kind.canonical_name() == word || kind.aliases().contains(&word)
    })
}

/// Alternation of every recognized shape word, for embedding in command
/// templates (e.g. combination targets: "cut it through the cylinder").
pub fn alias_pattern() -> String {
    let mut words = Vec::new();
    for kind in ShapeKind::ALL {
        words.push(kind.canonical_name());
        words.extend_from_slice(kind.aliases());
    }
    words.join("|")
}

// =============================================================================
// PARAMETER EXTRACTION
// =============================================================================

static SIZE_RE: LazyLock<Regex> = LazyLock::new(|| keyed("size"));
static WIDTH_RE: LazyLock<Regex> = LazyLock::new(|| keyed("width"));
static DEPTH_RE: LazyLock<Regex> = LazyLock::new(|| keyed("depth"));
static OUTER_RADIUS_RE: LazyLock<Regex> = LazyLock::new(|| keyed(r"outer\s+radius"));
static INNER_RADIUS_RE: LazyLock<Regex> = LazyLock::new(|| keyed(r"inner\s+radius"));
static HOLE_RADIUS_RE: LazyLock<Regex> = LazyLock::new(|| keyed(r"hole\s+radius"));
static TOOTH_HEIGHT_RE: LazyLock<Regex> = LazyLock::new(|| keyed(r"tooth\s+height"));
static TUBE_RE: LazyLock<Regex> = LazyLock::new(|| keyed(r"tube(?:\s+radius)?"));
static RADIUS_ANY_RE: LazyLock<Regex> = LazyLock::new(|| keyed("radius"));
static HEIGHT_ANY_RE: LazyLock<Regex> = LazyLock::new(|| keyed("height"));
static TEETH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s+teeth").expect("teeth pattern"));

fn keyed(key: &str) -> Regex {
    Regex::new(&format!(r"{key}\s+{NUMBER}")).expect("keyed number pattern")
}

fn keyed_number(re: &Regex, sentence: &str) -> Option<f64> {
    re.captures(sentence)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// First "radius N" not qualified by outer/inner/tube/hole.
fn plain_radius(sentence: &str) -> Option<f64> {
    RADIUS_ANY_RE
        .captures_iter(sentence)
        .filter(|c| {
            let start = c.get(0).map(|m| m.start()).unwrap_or(0);
            let before = sentence[..start].trim_end();
            !["outer", "inner", "tube", "hole"]
                .iter()
                .any(|q| before.ends_with(q))
        })
        .find_map(|c| c.get(1).and_then(|m| m.as_str().parse().ok()))
}

/// First "height N" not qualified by "tooth".
fn plain_height(sentence: &str) -> Option<f64> {
    HEIGHT_ANY_RE
        .captures_iter(sentence)
        .filter(|c| {
            let start = c.get(0).map(|m| m.start()).unwrap_or(0);
            !sentence[..start].trim_end().ends_with("tooth")
        })
        .find_map(|c| c.get(1).and_then(|m| m.as_str().parse().ok()))
}

/// Extract a kind's parameters from a sentence, defaults first.
pub fn extract_params(kind: ShapeKind, sentence: &str) -> ShapeParams {
    match kind {
        ShapeKind::Cube => {
            let mut size = [1.0, 1.0, 1.0];
            if let Some(s) = keyed_number(&SIZE_RE, sentence) {
                size = [s, s, s];
            } else {
                if let Some(w) = keyed_number(&WIDTH_RE, sentence) {
                    size[0] = w;
                }
                if let Some(h) = plain_height(sentence) {
                    size[1] = h;
                }
                if let Some(d) = keyed_number(&DEPTH_RE, sentence) {
                    size[2] = d;
                }
            }
            ShapeParams::Cube { size }
        }
        ShapeKind::Sphere => ShapeParams::Sphere {
            radius: plain_radius(sentence).unwrap_or(1.0),
        },
        ShapeKind::Cylinder => ShapeParams::Cylinder {
            radius: plain_radius(sentence).unwrap_or(1.0),
            height: plain_height(sentence).unwrap_or(2.0),
        },
        // "base radius N" reads through plain_radius: "base" is not one of
        // the excluded qualifiers.
        ShapeKind::Cone => ShapeParams::Cone {
            radius: plain_radius(sentence).unwrap_or(1.0),
            height: plain_height(sentence).unwrap_or(2.0),
        },
        ShapeKind::Pyramid => ShapeParams::Pyramid {
            radius: plain_radius(sentence).unwrap_or(1.0),
            height: plain_height(sentence).unwrap_or(2.0),
        },
        ShapeKind::Torus => {
            let outer = keyed_number(&OUTER_RADIUS_RE, sentence);
            let inner = keyed_number(&INNER_RADIUS_RE, sentence);
            match (outer, inner) {
                // Outer/inner pair: centerline at the midpoint, tube half
                // the difference.
                (Some(o), Some(i)) if o > i => ShapeParams::Torus {
                    radius: (o + i) / 2.0,
                    tube: (o - i) / 2.0,
                },
                _ => ShapeParams::Torus {
                    radius: plain_radius(sentence).unwrap_or(1.0),
                    tube: keyed_number(&TUBE_RE, sentence).unwrap_or(0.4),
                },
            }
        }
        ShapeKind::Gear => ShapeParams::Gear {
            teeth: TEETH_RE
                .captures(sentence)
                .and_then(|c| c.get(1))
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(12),
            radius: plain_radius(sentence).unwrap_or(2.0),
            height: plain_height(sentence).unwrap_or(0.5),
            hole_radius: keyed_number(&HOLE_RADIUS_RE, sentence).unwrap_or(0.5),
            tooth_height: keyed_number(&TOOTH_HEIGHT_RE, sentence).unwrap_or(0.5),
        },
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_kind_canonical() {
        assert_eq!(find_kind("create a cube"), Some(ShapeKind::Cube));
        assert_eq!(find_kind("create a gear"), Some(ShapeKind::Gear));
    }

    #[test]
    fn test_find_kind_alias() {
        assert_eq!(find_kind("create a box"), Some(ShapeKind::Cube));
        assert_eq!(find_kind("create a ball"), Some(ShapeKind::Sphere));
        assert_eq!(find_kind("create a donut"), Some(ShapeKind::Torus));
    }

    #[test]
    fn test_find_kind_plural() {
        assert_eq!(find_kind("create 3 cubes"), Some(ShapeKind::Cube));
        assert_eq!(find_kind("create 2 boxes"), Some(ShapeKind::Cube));
    }

    #[test]
    fn test_find_kind_word_boundary() {
        // "scubacube" must not register as a cube sighting mid-word
        assert_eq!(find_kind("a scubagear thing"), None);
        assert_eq!(find_kind("nothing here"), None);
    }

    #[test]
    fn test_cube_uniform_size() {
        let p = extract_params(ShapeKind::Cube, "create a cube of size 2");
        assert_eq!(p, ShapeParams::Cube { size: [2.0, 2.0, 2.0] });
    }

    #[test]
    fn test_cube_independent_dimensions() {
        let p = extract_params(ShapeKind::Cube, "a cube width 2 height 3 depth 4");
        assert_eq!(p, ShapeParams::Cube { size: [2.0, 3.0, 4.0] });
    }

    #[test]
    fn test_cube_size_overrides_dimensions() {
        let p = extract_params(ShapeKind::Cube, "a cube size 5 width 2");
        assert_eq!(p, ShapeParams::Cube { size: [5.0, 5.0, 5.0] });
    }

    #[test]
    fn test_cube_defaults() {
        let p = extract_params(ShapeKind::Cube, "create a cube");
        assert_eq!(p, ShapeParams::Cube { size: [1.0, 1.0, 1.0] });
    }

    #[test]
    fn test_sphere_radius() {
        let p = extract_params(ShapeKind::Sphere, "a sphere radius 3.5");
        assert_eq!(p, ShapeParams::Sphere { radius: 3.5 });
    }

    #[test]
    fn test_cylinder_params() {
        let p = extract_params(ShapeKind::Cylinder, "a cylinder radius 2 height 5");
        assert_eq!(p, ShapeParams::Cylinder { radius: 2.0, height: 5.0 });
    }

    #[test]
    fn test_cone_base_radius() {
        let p = extract_params(ShapeKind::Cone, "a cone base radius 2 height 4");
        assert_eq!(p, ShapeParams::Cone { radius: 2.0, height: 4.0 });
    }

    #[test]
    fn test_torus_outer_inner_pair() {
        let p = extract_params(ShapeKind::Torus, "a torus outer radius 3 inner radius 1");
        assert_eq!(p, ShapeParams::Torus { radius: 2.0, tube: 1.0 });
    }

    #[test]
    fn test_torus_ignores_inverted_pair() {
        // outer <= inner is not a valid pair; fall back to defaults
        let p = extract_params(ShapeKind::Torus, "a torus outer radius 1 inner radius 3");
        assert_eq!(p, ShapeParams::Torus { radius: 1.0, tube: 0.4 });
    }

    #[test]
    fn test_torus_direct_radius_and_tube() {
        let p = extract_params(ShapeKind::Torus, "a donut radius 2 tube 0.5");
        assert_eq!(p, ShapeParams::Torus { radius: 2.0, tube: 0.5 });
    }

    #[test]
    fn test_gear_full_parameters() {
        let p = extract_params(
            ShapeKind::Gear,
            "create a gear with 8 teeth radius 3 height 1 hole radius 0.5",
        );
        assert_eq!(
            p,
            ShapeParams::Gear {
                teeth: 8,
                radius: 3.0,
                height: 1.0,
                hole_radius: 0.5,
                tooth_height: 0.5,
            }
        );
    }

    #[test]
    fn test_gear_tooth_height_does_not_shadow_height() {
        let p = extract_params(ShapeKind::Gear, "a gear tooth height 0.2");
        match p {
            ShapeParams::Gear { height, tooth_height, .. } => {
                assert_eq!(height, 0.5, "extrusion height stays at default");
                assert_eq!(tooth_height, 0.2);
            }
            other => panic!("expected gear params, got {:?}", other),
        }
    }

    #[test]
    fn test_gear_hole_radius_does_not_shadow_radius() {
        let p = extract_params(ShapeKind::Gear, "a gear hole radius 0.3");
        match p {
            ShapeParams::Gear { radius, hole_radius, .. } => {
                assert_eq!(radius, 2.0, "outer radius stays at default");
                assert_eq!(hole_radius, 0.3);
            }
            other => panic!("expected gear params, got {:?}", other),
        }
    }

    #[test]
    fn test_alias_pattern_lists_all_words() {
        let pat = alias_pattern();
        for word in ["cube", "box", "sphere", "ball", "torus", "donut", "gear"] {
            assert!(pat.contains(word), "missing {} in {}", word, pat);
        }
    }
}

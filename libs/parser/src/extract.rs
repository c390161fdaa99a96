//! # Shared Attribute Extractors
//!
//! Extractors for the attributes any creation sentence may carry: explicit
//! name, position, rotation, color, spatial relation, attached combination
//! and repetition count. Each is a fixed compiled template; a non-match
//! returns `None` and costs nothing.

use crate::command::{color_from_hex, Axes, CombineOp, Relation, RelationKind, Rgba, Target};
use crate::registry;
use config::constants::COLOR_PALETTE;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Capture group matching a signed decimal number.
pub(crate) const NUMBER: &str = r"(-?\d+\.?\d*)";

/// Target tail shared by relation and combination templates: an optionally
/// quoted name, or a shape word. Articles and "object named" are accepted
/// and discarded.
pub(crate) fn target_pattern() -> String {
    format!(
        r#"(?:(?:a|an|the)\s+)?(?:object\s+named\s+)?(?:["'](?P<tname>[^"']+)["']|(?P<tkind>{}))"#,
        registry::alias_pattern()
    )
}

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:named|called)\s+["']([^"']+)["']"#).expect("name pattern")
});

static POSITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(x|y|z)\s+{NUMBER}")).expect("position pattern")
});

static ROTATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"rotated?\s+(?:by\s+)?{NUMBER}\s*(?:deg|degrees)?\s+on\s+(?:the\s+)?(x|y|z)\b"
    ))
    .expect("rotation pattern")
});

static RELATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"on\s+top\s+of\s+{}", target_pattern())).expect("relation pattern")
});

static SUBTRACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"cut\s+(?:it\s+)?through\s+{}",
        target_pattern()
    ))
    .expect("subtraction pattern")
});

static UNION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:unite[d]?|combine[d]?|added?)\s+(?:it\s+)?(?:with|to)\s+{}",
        target_pattern()
    ))
    .expect("union pattern")
});

static INTERSECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"intersect(?:ed)?\s+(?:it\s+)?with\s+{}",
        target_pattern()
    ))
    .expect("intersection pattern")
});

static COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    // A count qualifies only at the start of the sentence, optionally after
    // a creation verb, so shape parameters ("12 teeth") are never captured.
    Regex::new(r"^(?:create|make|add)?\s*(\d+)\s+").expect("count pattern")
});

/// Extract an explicit object name ("named 'ball1'").
pub fn extract_name(sentence: &str) -> Option<String> {
    NAME_RE
        .captures(sentence)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract explicit coordinates ("at x 1 y 2"). Axes are independent; any
/// subset may be present.
pub fn extract_position(sentence: &str) -> Axes {
    let mut axes = Axes::default();
    for caps in POSITION_RE.captures_iter(sentence) {
        if let (Some(axis), Some(value)) = (caps.get(1), caps.get(2)) {
            if let Ok(value) = value.as_str().parse() {
                axes.set(axis.as_str(), value);
            }
        }
    }
    axes
}

/// Extract rotation angles ("rotated 45 degrees on the x"), converted from
/// degrees to radians.
pub fn extract_rotation(sentence: &str) -> Axes {
    let mut axes = Axes::default();
    for caps in ROTATION_RE.captures_iter(sentence) {
        if let (Some(value), Some(axis)) = (caps.get(1), caps.get(2)) {
            if let Ok(degrees) = value.as_str().parse::<f64>() {
                axes.set(axis.as_str(), degrees.to_radians());
            }
        }
    }
    axes
}

/// Extract the first recognized color word, if any.
pub fn extract_color(sentence: &str) -> Option<Rgba> {
    COLOR_PALETTE
        .iter()
        .find(|(name, _)| contains_word(sentence, name))
        .map(|(_, hex)| color_from_hex(*hex))
}

/// Extract a spatial relationship ("on top of 'ball1'", "on top of the
/// cube").
pub fn extract_relation(sentence: &str) -> Option<Relation> {
    RELATION_RE.captures(sentence).and_then(|caps| {
        Some(Relation {
            kind: RelationKind::OnTopOf,
            target: target_from_captures(&caps)?,
        })
    })
}

/// Extract a combination attached to a creation sentence ("... cut through
/// 'base'", "... united with the sphere").
pub fn extract_attached_combine(sentence: &str) -> Option<(CombineOp, Target)> {
    for (re, op) in [
        (&*SUBTRACT_RE, CombineOp::Subtract),
        (&*UNION_RE, CombineOp::Union),
        (&*INTERSECT_RE, CombineOp::Intersect),
    ] {
        if let Some(caps) = re.captures(sentence) {
            if let Some(target) = target_from_captures(&caps) {
                return Some((op, target));
            }
        }
    }
    None
}

/// Extract a leading repetition count ("create 3 cubes"). Defaults to 1.
pub fn extract_count(sentence: &str) -> usize {
    COUNT_RE
        .captures(sentence)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(1)
}

/// Build a [`Target`] from a template's `tname`/`tkind` named groups.
pub fn target_from_captures(caps: &Captures<'_>) -> Option<Target> {
    if let Some(name) = caps.name("tname") {
        return Some(Target::ByName(name.as_str().to_string()));
    }
    let word = caps.name("tkind")?.as_str();
    registry::kind_from_word(word).map(Target::ByKind)
}

/// True if `word` occurs in `sentence` starting at a word boundary.
pub fn contains_word(sentence: &str, word: &str) -> bool {
    sentence.match_indices(word).any(|(i, _)| {
        i == 0 || !sentence.as_bytes()[i - 1].is_ascii_alphanumeric()
    })
}

// =============================================================================
// TESTS
// =============================================================================

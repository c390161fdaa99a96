//! # Sentence Classification
//!
//! Turns one sentence into at most one [`Command`] by trying matchers in a
//! strict priority order: color change, move, rotate, scale, standalone
//! combination, feature, then shape creation. First match wins and consumes
//! the sentence. The ordering is a tested contract - it decides how
//! ambiguous sentences resolve (a sentence that is both a "move" and a shape
//! mention is always the modification).

use crate::command::{Command, CreateCommand, Face, FeatureCommand, FeatureKind, Modification};
use crate::extract::{self, target_pattern, NUMBER};
use crate::registry;
use regex::Regex;
use std::sync::LazyLock;

/// Palette words joined for the color-change template.
fn palette_pattern() -> String {
    config::constants::COLOR_PALETTE
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join("|")
}

static COLOR_CHANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // The color word must close the sentence, otherwise "make a red cube"
    // would read as a color change targeting "a".
    Regex::new(&format!(
        r#"^make\s+(?:the\s+)?["']?(.+?)["']?\s+({})\s*$"#,
        palette_pattern()
    ))
    .expect("color change pattern")
});

static MOVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^move\s+(?:the\s+)?["']?(.+?)["']?\s+to\s+(.+)$"#).expect("move pattern")
});

static ROTATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"^rotate\s+(?:the\s+)?["']?(.+?)["']?\s+by\s+{NUMBER}\s*(?:deg|degrees)?\s+on\s+(?:the\s+)?(x|y|z)\s*$"#
    ))
    .expect("rotate pattern")
});

static SCALE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"^scale\s+(?:the\s+)?["']?(.+?)["']?\s+by\s+{NUMBER}\s*$"#
    ))
    .expect("scale pattern")
});

static STANDALONE_UNION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?:unite|combine|add)\s+it\s+(?:with|to)\s+{}",
        target_pattern()
    ))
    .expect("standalone union pattern")
});

static STANDALONE_SUBTRACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?:subtract|cut)\s+it\s+(?:from|through)\s+{}",
        target_pattern()
    ))
    .expect("standalone subtraction pattern")
});

static STANDALONE_INTERSECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^intersect\s+it\s+with\s+{}",
        target_pattern()
    ))
    .expect("standalone intersection pattern")
});

static FEATURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"^add\s+a\s+{NUMBER}\s*x\s*{NUMBER}(?:\s*x\s*{NUMBER})?\s+(groove|tab)\s+on\s+the\s+(top|bottom|front|back|left|right)\s+of\s+(?:(?:a|an|the)\s+)?(?:object\s+named\s+)?["']?(.+?)["']?\s*$"#
    ))
    .expect("feature pattern")
});

/// Classify one sentence. Returns `None` when nothing matches; the sentence
/// is then silently dropped by the caller.
pub fn classify(sentence: &str) -> Option<Command> {
    color_change(sentence)
        .or_else(|| move_command(sentence))
        .or_else(|| rotate_command(sentence))
        .or_else(|| scale_command(sentence))
        .or_else(|| standalone_combine(sentence))
        .or_else(|| feature_command(sentence))
        .or_else(|| create_command(sentence))
}

fn color_change(sentence: &str) -> Option<Command> {
    let caps = COLOR_CHANGE_RE.captures(sentence)?;
    let color = extract::extract_color(caps.get(2)?.as_str())?;
    Some(Command::Modify {
        target: caps.get(1)?.as_str().to_string(),
        change: Modification::Color(color),
    })
}

fn move_command(sentence: &str) -> Option<Command> {
    let caps = MOVE_RE.captures(sentence)?;
    let axes = extract::extract_position(caps.get(2)?.as_str());
    if axes.is_empty() {
        return None;
    }
    Some(Command::Modify {
        target: caps.get(1)?.as_str().to_string(),
        change: Modification::Move(axes),
    })
}

fn rotate_command(sentence: &str) -> Option<Command> {
    let caps = ROTATE_RE.captures(sentence)?;
    let degrees: f64 = caps.get(2)?.as_str().parse().ok()?;
    let mut axes = crate::command::Axes::default();
    axes.set(caps.get(3)?.as_str(), degrees.to_radians());
    Some(Command::Modify {
        target: caps.get(1)?.as_str().to_string(),
        change: Modification::Rotate(axes),
    })
}

fn scale_command(sentence: &str) -> Option<Command> {
    let caps = SCALE_RE.captures(sentence)?;
    let factor: f64 = caps.get(2)?.as_str().parse().ok()?;
    Some(Command::Modify {
        target: caps.get(1)?.as_str().to_string(),
        change: Modification::Scale(factor),
    })
}

fn standalone_combine(sentence: &str) -> Option<Command> {
    use crate::command::CombineOp;
    for (re, op) in [
        (&*STANDALONE_SUBTRACT_RE, CombineOp::Subtract),
        (&*STANDALONE_UNION_RE, CombineOp::Union),
        (&*STANDALONE_INTERSECT_RE, CombineOp::Intersect),
    ] {
        if let Some(caps) = re.captures(sentence) {
            if let Some(target) = extract::target_from_captures(&caps) {
                return Some(Command::Combine { op, target });
            }
        }
    }
    None
}

fn feature_command(sentence: &str) -> Option<Command> {
    let caps = FEATURE_RE.captures(sentence)?;
    let first: f64 = caps.get(1)?.as_str().parse().ok()?;
    let second: f64 = caps.get(2)?.as_str().parse().ok()?;
    let third: Option<f64> = caps.get(3).and_then(|m| m.as_str().parse().ok());
    let feature = match caps.get(4)?.as_str() {
        "groove" => FeatureKind::Groove,
        _ => FeatureKind::Tab,
    };
    let face = Face::from_word(caps.get(5)?.as_str())?;
    let target = caps.get(6)?.as_str().to_string();

    // Grooves are width x depth (height spans the target); tabs are
    // width x height x depth, with a default height when only two numbers
    // are given.
    let (width, height, depth) = match (feature, third) {
        (FeatureKind::Groove, _) => (first, 0.0, second),
        (FeatureKind::Tab, Some(d)) => (first, second, d),
        (FeatureKind::Tab, None) => (first, 0.5, second),
    };

    Some(Command::Feature(FeatureCommand {
        feature,
        target,
        face,
        width,
        height,
        depth,
    }))
}

fn create_command(sentence: &str) -> Option<Command> {
    let kind = registry::find_kind(sentence)?;
    let params = registry::extract_params(kind, sentence);

    let color = extract::extract_color(sentence)
        .unwrap_or_else(|| crate::command::color_from_hex(config::constants::DEFAULT_COLOR));

    Some(Command::Create(CreateCommand {
        kind,
        params,
        color,
        name: extract::extract_name(sentence),
        position: extract::extract_position(sentence),
        rotation: extract::extract_rotation(sentence),
        relation: extract::extract_relation(sentence),
        combine: extract::extract_attached_combine(sentence),
        count: extract::extract_count(sentence),
    }))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Axes, CombineOp, Target};
    use crate::registry::{ShapeKind, ShapeParams};

    fn create(sentence: &str) -> CreateCommand {
        match classify(sentence) {
            Some(Command::Create(c)) => c,
            other => panic!("expected create for {:?}, got {:?}", sentence, other),
        }
    }

    #[test]
    fn test_color_change() {
        let cmd = classify("make 'ball1' red").unwrap();
        assert_eq!(
            cmd,
            Command::Modify {
                target: "ball1".to_string(),
                change: Modification::Color([1.0, 0.0, 0.0, 1.0]),
            }
        );
    }

    #[test]
    fn test_color_change_wins_over_creation() {
        // The sentence mentions a shape word, but the priority order says
        // modification first.
        let cmd = classify("make the cube red").unwrap();
        assert!(matches!(cmd, Command::Modify { .. }));
    }

    #[test]
    fn test_make_a_red_cube_is_creation() {
        // Color word not in final position: falls through to creation.
        let cmd = classify("make a red cube").unwrap();
        match cmd {
            Command::Create(c) => {
                assert_eq!(c.kind, ShapeKind::Cube);
                assert_eq!(c.color, [1.0, 0.0, 0.0, 1.0]);
            }
            other => panic!("expected create, got {:?}", other),
        }
    }

    #[test]
    fn test_move_command() {
        let cmd = classify("move 'base' to x 1 y 2").unwrap();
        match cmd {
            Command::Modify { target, change: Modification::Move(axes) } => {
                assert_eq!(target, "base");
                assert_eq!(axes.x, Some(1.0));
                assert_eq!(axes.y, Some(2.0));
                assert_eq!(axes.z, None);
            }
            other => panic!("expected move, got {:?}", other),
        }
    }

    #[test]
    fn test_move_wins_over_shape_mention() {
        let cmd = classify("move the cube to x 5").unwrap();
        assert!(matches!(cmd, Command::Modify { .. }));
    }

    #[test]
    fn test_rotate_command() {
        let cmd = classify("rotate 'base' by 90 degrees on the y").unwrap();
        match cmd {
            Command::Modify { target, change: Modification::Rotate(axes) } => {
                assert_eq!(target, "base");
                assert!((axes.y.unwrap() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
            }
            other => panic!("expected rotate, got {:?}", other),
        }
    }

    #[test]
    fn test_scale_command() {
        let cmd = classify("scale 'base' by 2.5").unwrap();
        assert_eq!(
            cmd,
            Command::Modify {
                target: "base".to_string(),
                change: Modification::Scale(2.5),
            }
        );
    }

    #[test]
    fn test_standalone_subtract() {
        let cmd = classify("subtract it from 'base'").unwrap();
        assert_eq!(
            cmd,
            Command::Combine {
                op: CombineOp::Subtract,
                target: Target::ByName("base".to_string()),
            }
        );
    }

    #[test]
    fn test_standalone_unite_with_kind() {
        let cmd = classify("unite it with the cube").unwrap();
        assert_eq!(
            cmd,
            Command::Combine {
                op: CombineOp::Union,
                target: Target::ByKind(ShapeKind::Cube),
            }
        );
    }

    #[test]
    fn test_standalone_combine_wins_over_creation() {
        // "cube" appears, but the standalone template has priority.
        let cmd = classify("cut it through the cube").unwrap();
        assert!(matches!(cmd, Command::Combine { .. }));
    }

    #[test]
    fn test_groove_feature() {
        let cmd = classify("add a 0.5x0.5 groove on the top of 'base'").unwrap();
        match cmd {
            Command::Feature(f) => {
                assert_eq!(f.feature, FeatureKind::Groove);
                assert_eq!(f.face, Face::Top);
                assert_eq!(f.target, "base");
                assert_eq!((f.width, f.depth), (0.5, 0.5));
            }
            other => panic!("expected feature, got {:?}", other),
        }
    }

    #[test]
    fn test_tab_feature_three_numbers() {
        let cmd = classify("add a 1x0.5x2 tab on the top of 'base'").unwrap();
        match cmd {
            Command::Feature(f) => {
                assert_eq!(f.feature, FeatureKind::Tab);
                assert_eq!((f.width, f.height, f.depth), (1.0, 0.5, 2.0));
            }
            other => panic!("expected feature, got {:?}", other),
        }
    }

    #[test]
    fn test_simple_creation() {
        let c = create("create a cube of size 2");
        assert_eq!(c.kind, ShapeKind::Cube);
        assert_eq!(c.params, ShapeParams::Cube { size: [2.0, 2.0, 2.0] });
        assert_eq!(c.count, 1);
        assert!(c.name.is_none());
        assert!(c.position.is_empty());
    }

    #[test]
    fn test_creation_with_attributes() {
        let c = create("create a blue sphere radius 2 named 'ball1' at x 1 z 4");
        assert_eq!(c.kind, ShapeKind::Sphere);
        assert_eq!(c.name.as_deref(), Some("ball1"));
        assert_eq!(c.position, Axes { x: Some(1.0), y: None, z: Some(4.0) });
        assert_eq!(c.color, [0.0, 0.4, 1.0, 1.0]);
    }

    #[test]
    fn test_creation_with_count() {
        let c = create("create 3 cubes");
        assert_eq!(c.count, 3);
    }

    #[test]
    fn test_creation_with_attached_combine() {
        let c = create("create a cylinder radius 0.5 cut through 'base'");
        assert_eq!(
            c.combine,
            Some((CombineOp::Subtract, Target::ByName("base".to_string())))
        );
    }

    #[test]
    fn test_gear_teeth_not_a_count() {
        let c = create("create a gear with 12 teeth");
        assert_eq!(c.count, 1);
        assert_eq!(
            c.params,
            ShapeParams::Gear {
                teeth: 12,
                radius: 2.0,
                height: 0.5,
                hole_radius: 0.5,
                tooth_height: 0.5,
            }
        );
    }

    #[test]
    fn test_unmatched_sentence_is_dropped() {
        assert_eq!(classify("hello world"), None);
        assert_eq!(classify("make something pretty"), None);
    }
}

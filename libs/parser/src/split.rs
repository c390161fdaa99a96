//! # Sentence Splitter
//!
//! Breaks full script text into an ordered sequence of command sentences.
//!
//! Sentences are separated by terminal punctuation (`.`, `!`, `?`) or the
//! connective word "then". The resulting order is the sole execution order
//! for the whole pipeline - no sentence is ever re-ordered.

use regex::Regex;
use std::sync::LazyLock;

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]|\bthen\b").expect("sentence separator pattern"));

/// Split raw script text into trimmed, lower-cased sentences.
///
/// Empty and whitespace-only fragments are discarded.
///
/// ## Example
///
/// ```rust
/// use textcad_parser::split_sentences;
///
/// let sentences = split_sentences("Create a cube. Then create a sphere!");
/// assert_eq!(sentences, vec!["create a cube", "create a sphere"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    SEPARATOR
        .split(&lowered)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_periods() {
        let s = split_sentences("create a cube. create a sphere.");
        assert_eq!(s, vec!["create a cube", "create a sphere"]);
    }

    #[test]
    fn test_split_on_then() {
        let s = split_sentences("create a cube then make it red");
        assert_eq!(s, vec!["create a cube", "make it red"]);
    }

    #[test]
    fn test_split_lowercases() {
        let s = split_sentences("Create A CUBE.");
        assert_eq!(s, vec!["create a cube"]);
    }

    #[test]
    fn test_split_mixed_terminators() {
        let s = split_sentences("create a cube! create a sphere? create a cone.");
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_split_discards_empty_fragments() {
        let s = split_sentences("  .  . create a cube .. ");
        assert_eq!(s, vec!["create a cube"]);
    }

    #[test]
    fn test_split_empty_text() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_then_inside_word_is_not_a_separator() {
        // "panthen" contains "then" but not as a standalone word
        let s = split_sentences("create a cube named 'panthen'");
        assert_eq!(s.len(), 1);
    }
}

//! Line patterns shared by the pipeline stages.

use regex::Regex;
use std::sync::LazyLock;

/// Top-level numbered heading: "3. Scope".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static TOP_LEVEL_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+\S").expect("valid regex"));

/// Numbered heading prefix: "3. ".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static NUMBERED_HEADING_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+").expect("valid regex"));

/// Sub-item: "3.1".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static SUB_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+").expect("valid regex"));

/// Sub-item with trailing period: "3.1.".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static SUB_ITEM_STRICT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.").expect("valid regex"));

/// Any numbered line: "3.", "3.1.", "3.1.2.".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)*\.").expect("valid regex"));

/// List item with captured number and remainder.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)*\.)\s*(.*)$").expect("valid regex"));

/// Check a line against a pattern after trimming it.
pub(crate) fn matches_trimmed(pattern: &Regex, line: &str) -> bool {
    pattern.is_match(line.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_heading() {
        assert!(TOP_LEVEL_HEADING.is_match("3. Scope"));
        assert!(TOP_LEVEL_HEADING.is_match("12.  Final provisions"));
        assert!(!TOP_LEVEL_HEADING.is_match("3.1. Scope"));
        assert!(!TOP_LEVEL_HEADING.is_match("3. "));
        assert!(!TOP_LEVEL_HEADING.is_match("Scope 3. x"));
    }

    #[test]
    fn test_sub_item() {
        assert!(SUB_ITEM.is_match("3.1 text"));
        assert!(!SUB_ITEM_STRICT.is_match("3.1 text"));
        assert!(SUB_ITEM_STRICT.is_match("3.1. text"));
    }

    #[test]
    fn test_numbered() {
        assert!(NUMBERED.is_match("1."));
        assert!(NUMBERED.is_match("1.2.3. text"));
        assert!(!NUMBERED.is_match("1) text"));
        assert!(!NUMBERED.is_match("text 1."));
    }

    #[test]
    fn test_list_item_captures() {
        let caps = LIST_ITEM.captures("3.1.Text").unwrap();
        assert_eq!(&caps[1], "3.1.");
        assert_eq!(&caps[2], "Text");
    }

    #[test]
    fn test_matches_trimmed() {
        assert!(matches_trimmed(&TOP_LEVEL_HEADING, "   1. Intro"));
    }
}

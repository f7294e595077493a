//! Boilerplate line filtering.
//!
//! Source documents start with the brand line, their own title and a
//! revision stamp. The page prints those itself, so they are dropped here.
//! Blank lines are always kept: they delimit paragraphs further down.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

use crate::config::RenderOptions;
use crate::types::Revision;

/// Quote characters ignored when matching revision stamps.
const QUOTE_CHARS: &[char] = &['«', '»', '"', '\'', '`'];

/// Date formats accepted in a revision stamp.
const REVISION_DATE_FORMATS: &[&str] = &["%d.%m.%Y", "%Y-%m-%d"];

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Case-folded form used for brand and title comparison.
fn fold(text: &str) -> String {
    text.trim().nfc().collect::<String>().to_lowercase()
}

/// Canonical form of a line for revision matching.
fn revision_key(line: &str) -> String {
    let lowered = line.trim().to_lowercase();
    let unquoted: String = lowered.chars().filter(|c| !QUOTE_CHARS.contains(c)).collect();
    WHITESPACE_RUN.replace_all(&unquoted, " ").into_owned()
}

/// Check whether a line is a revision stamp ("Редакция от 01.02.2024").
///
/// # Examples
/// ```
/// use talko_legal::config::RenderOptions;
/// use talko_legal::text::is_revision_marker;
///
/// let options = RenderOptions::default();
/// assert!(is_revision_marker("  «Редакция   от» 01.02.2024", &options));
/// assert!(is_revision_marker("Revision from Jan 1", &options));
/// assert!(!is_revision_marker("1. General provisions", &options));
/// ```
pub fn is_revision_marker(line: &str, options: &RenderOptions) -> bool {
    let key = revision_key(line);
    options
        .revision_phrases
        .iter()
        .any(|phrase| key.starts_with(phrase.as_str()))
}

/// Drop brand, title and revision lines.
///
/// A first pass removes every matching line; a second pass then strips
/// revision stamps that are left at the front of the document.
pub fn filter_lines(lines: &[String], title: &str, options: &RenderOptions) -> Vec<String> {
    let brand = fold(&options.brand);
    let title = fold(title);

    let filtered: Vec<String> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return true;
            }
            let folded = fold(trimmed);
            if folded == brand || folded == title {
                return false;
            }
            !is_revision_marker(trimmed, options)
        })
        .cloned()
        .collect();

    let removed = lines.len() - filtered.len();
    if removed > 0 {
        tracing::debug!(removed, "Dropped boilerplate lines");
    }

    strip_leading_revisions(&filtered, options)
}

/// Remove revision stamps from the front of the document.
///
/// Leading blank lines are kept and looked past. Idempotent.
pub fn strip_leading_revisions(lines: &[String], options: &RenderOptions) -> Vec<String> {
    let mut result = lines.to_vec();
    while let Some(first) = result.iter().position(|line| !line.trim().is_empty()) {
        if !is_revision_marker(&result[first], options) {
            break;
        }
        tracing::debug!(line = %result[first].trim(), "Stripped leading revision stamp");
        result.remove(first);
    }
    result
}

/// Capture the first revision stamp of a document.
///
/// The date is parsed when the stamp carries it as `DD.MM.YYYY` or
/// `YYYY-MM-DD`; other spellings keep only the raw line.
pub fn extract_revision(lines: &[String], options: &RenderOptions) -> Option<Revision> {
    let line = lines.iter().find(|line| is_revision_marker(line, options))?;
    let key = revision_key(line);
    let rest = options
        .revision_phrases
        .iter()
        .find_map(|phrase| key.strip_prefix(phrase.as_str()))
        .unwrap_or_default();

    let date = rest.split_whitespace().next().and_then(|token| {
        let token = token.trim_end_matches([',', ';']);
        REVISION_DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(token, format).ok())
    });

    Some(Revision {
        raw: line.trim().to_string(),
        date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_filter_removes_brand_and_title() {
        let options = RenderOptions::default();
        let result = filter_lines(&lines(&["Talko", "My Title", "Body"]), "My Title", &options);
        assert_eq!(result, lines(&["Body"]));
    }

    #[test]
    fn test_filter_custom_brand() {
        let options = RenderOptions::default().with_brand("Acme");
        let result = filter_lines(&lines(&["ACME", "Talko", "Body"]), "", &options);
        assert_eq!(result, lines(&["Talko", "Body"]));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let options = RenderOptions::default();
        let result = filter_lines(
            &lines(&["  TALKO  ", "публичная оферта", "Текст"]),
            "ПУБЛИЧНАЯ ОФЕРТА",
            &options,
        );
        assert_eq!(result, lines(&["Текст"]));
    }

    #[test]
    fn test_filter_compares_title_in_nfc() {
        let options = RenderOptions::default();
        // "Й" written as "И" + combining breve
        let decomposed = "ПОЛЬЗОВАТЕЛЬСКИ\u{0418}\u{0306}";
        let result = filter_lines(&lines(&[decomposed, "Текст"]), "Пользовательский", &options);
        assert_eq!(result, lines(&["Текст"]));
    }

    #[test]
    fn test_filter_keeps_blank_lines() {
        let options = RenderOptions::default();
        let result = filter_lines(&lines(&["Talko", "", "Body", "", "", "More"]), "T", &options);
        assert_eq!(result, lines(&["", "Body", "", "", "More"]));
    }

    #[test]
    fn test_filter_removes_repeated_revision_lines() {
        let options = RenderOptions::default();
        let input = lines(&["Revision from Jan 1", "Revision from Jan 1", "Content"]);
        assert_eq!(filter_lines(&input, "", &options), lines(&["Content"]));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let options = RenderOptions::default();
        let input = lines(&[
            "Talko",
            "",
            "«Редакция от» 01.02.2024",
            "ПУБЛИЧНАЯ ОФЕРТА",
            "",
            "1. Общие положения",
            "Текст",
        ]);
        let once = filter_lines(&input, "ПУБЛИЧНАЯ ОФЕРТА", &options);
        let twice = filter_lines(&once, "ПУБЛИЧНАЯ ОФЕРТА", &options);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_revision_marker_normalization() {
        let options = RenderOptions::default();
        assert!(is_revision_marker("REVISION   FROM 2024", &options));
        assert!(is_revision_marker("\"Revision\tfrom\" Jan", &options));
        assert!(is_revision_marker("Редакция от «01» февраля 2024 г.", &options));
        assert!(!is_revision_marker("Revision from", &options));
        assert!(!is_revision_marker("The revision from January", &options));
    }

    #[test]
    fn test_revision_marker_custom_phrases() {
        let options = RenderOptions::default().with_revision_phrases(["Stand vom "]);
        assert!(is_revision_marker("Stand vom 01.01.2025", &options));
        assert!(!is_revision_marker("Revision from Jan 1", &options));
    }

    #[test]
    fn test_strip_leading_revisions_looks_past_blank_lines() {
        let options = RenderOptions::default();
        let input = lines(&["", "Revision from Jan 1", "", "Revision from Feb 2", "Content"]);
        let result = strip_leading_revisions(&input, &options);
        assert_eq!(result, lines(&["", "", "Content"]));
        assert_eq!(strip_leading_revisions(&result, &options), result);
    }

    #[test]
    fn test_strip_leading_revisions_keeps_later_lines() {
        let options = RenderOptions::default();
        let input = lines(&["Content", "Revision from Jan 1"]);
        assert_eq!(strip_leading_revisions(&input, &options), input);
    }

    #[test]
    fn test_extract_revision_with_date() {
        let options = RenderOptions::default();
        let input = lines(&["Talko", " Редакция от 01.02.2024 г. ", "Текст"]);
        let revision = extract_revision(&input, &options).unwrap();
        assert_eq!(revision.raw, "Редакция от 01.02.2024 г.");
        assert_eq!(revision.date, NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[test]
    fn test_extract_revision_iso_date() {
        let options = RenderOptions::default();
        let revision = extract_revision(&lines(&["Revision from 2025-03-10"]), &options).unwrap();
        assert_eq!(revision.date, NaiveDate::from_ymd_opt(2025, 3, 10));
    }

    #[test]
    fn test_extract_revision_without_numeric_date() {
        let options = RenderOptions::default();
        let revision = extract_revision(&lines(&["Revision from Jan 1"]), &options).unwrap();
        assert_eq!(revision.raw, "Revision from Jan 1");
        assert_eq!(revision.date, None);
    }

    #[test]
    fn test_extract_revision_missing() {
        let options = RenderOptions::default();
        assert_eq!(extract_revision(&lines(&["Body"]), &options), None);
    }
}

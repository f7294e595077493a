//! Inline link detection for URLs and email addresses.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::InlineSpan;

/// URL (group 1) or email address (group 2).
///
/// Word boundaries are ASCII-only, so links glued to Cyrillic text are found.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)((?-u:\b)https?://[^\s)]+)|((?-u:\b)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}(?-u:\b))")
        .expect("valid regex")
});

/// Split text into plain and link spans.
///
/// Matches are found left to right without overlap. URLs link to
/// themselves, emails get a `mailto:` href. Concatenating the span values
/// gives back the input exactly.
///
/// # Examples
/// ```
/// use talko_legal::text::linkify;
/// use talko_legal::types::InlineSpan;
///
/// let spans = linkify("Write to a@b.com.");
/// assert_eq!(spans[1], InlineSpan::Link {
///     value: "a@b.com".to_string(),
///     href: "mailto:a@b.com".to_string(),
/// });
/// ```
pub fn linkify(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in LINK_PATTERN.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            spans.push(InlineSpan::Text {
                value: text[last..whole.start()].to_string(),
            });
        }

        let value = whole.as_str().to_string();
        let href = if caps.get(1).is_some() {
            value.clone()
        } else {
            format!("mailto:{value}")
        };
        spans.push(InlineSpan::Link { value, href });
        last = whole.end();
    }

    if last < text.len() {
        spans.push(InlineSpan::Text {
            value: text[last..].to_string(),
        });
    }

    spans
}

//! Text normalization for raw legal documents.

/// Characters removed wherever they appear: BOM and zero-width characters.
fn is_invisible(c: char) -> bool {
    matches!(c, '\u{FEFF}' | '\u{200B}'..='\u{200D}' | '\u{2060}')
}

/// Characters that act as line breaks besides `\n`.
fn is_line_break(c: char) -> bool {
    matches!(c, '\u{000C}' | '\u{2028}' | '\u{2029}')
}

/// Normalize raw document text.
///
/// - Removes the byte-order mark and zero-width characters
/// - Turns form feeds and Unicode line/paragraph separators into newlines
/// - Converts `\r\n` and bare `\r` line endings to `\n`
/// - Trims leading and trailing whitespace of the whole text
///
/// Total over any input and idempotent.
///
/// # Examples
/// ```
/// use talko_legal::text::normalize;
///
/// assert_eq!(normalize("\u{FEFF}Title\r\nBody\r"), "Title\nBody");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if is_invisible(c) {
            continue;
        }
        if c == '\r' {
            // "\r\n" collapses to a single newline
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            result.push('\n');
        } else if is_line_break(c) {
            result.push('\n');
        } else {
            result.push(c);
        }
    }

    result.trim().to_string()
}

/// Normalize text and split it into lines with trailing whitespace removed.
///
/// An empty document yields a single empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    normalize(text)
        .split('\n')
        .map(|line| line.trim_end().to_string())
        .collect()
}

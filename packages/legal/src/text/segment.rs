//! Paragraph segmentation.

use super::patterns::{matches_trimmed, TOP_LEVEL_HEADING};

/// Paragraph buffer that is flushed on blank lines and section headings.
#[derive(Default)]
struct ParagraphBuffer {
    lines: Vec<String>,
    paragraphs: Vec<Vec<String>>,
}

impl ParagraphBuffer {
    fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn flush(&mut self) {
        let mut lines = std::mem::take(&mut self.lines);
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        let start = lines
            .iter()
            .position(|l| !l.trim().is_empty())
            .unwrap_or(lines.len());
        if start < lines.len() {
            self.paragraphs.push(lines.split_off(start));
        }
    }

    fn finish(mut self) -> Vec<Vec<String>> {
        self.flush();
        self.paragraphs
    }
}

/// Group lines into paragraphs.
///
/// Blank lines separate paragraphs. A top-level numbered heading
/// ("2. Scope") always opens a new paragraph, even without a blank line
/// before it. Returned paragraphs are never empty.
///
/// # Examples
/// ```
/// use talko_legal::text::segment;
///
/// let lines: Vec<String> = ["1. Intro", "text", "2. Scope", "more"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// assert_eq!(segment(&lines).len(), 2);
/// ```
pub fn segment(lines: &[String]) -> Vec<Vec<String>> {
    let mut buffer = ParagraphBuffer::default();

    for line in lines {
        if line.trim().is_empty() {
            buffer.flush();
            continue;
        }
        if matches_trimmed(&TOP_LEVEL_HEADING, line) && !buffer.is_empty() {
            buffer.flush();
        }
        buffer.push(line);
    }

    buffer.finish()
}

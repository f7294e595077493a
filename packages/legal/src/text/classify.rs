//! Paragraph classification into display blocks.
//!
//! Classification is a ranked list of rules. Each rule either claims a
//! paragraph or passes; the first rule that claims it decides the block.
//! The order is significant: a short single line such as "3.2. Duties" is a
//! heading, not a one-item list, because the heading rule runs first.

use super::list::parse_list;
use super::patterns::{
    matches_trimmed, NUMBERED, NUMBERED_HEADING_PREFIX, SUB_ITEM, SUB_ITEM_STRICT,
    TOP_LEVEL_HEADING,
};
use crate::config::RenderOptions;
use crate::types::DisplayBlock;

/// Trait for classification rules.
pub trait BlockRule: Send + Sync {
    /// Rule name for logging.
    fn name(&self) -> &'static str;

    /// Return a block if this rule claims the paragraph.
    fn apply(&self, paragraph: &[String], options: &RenderOptions) -> Option<DisplayBlock>;
}

/// Rules in ranking order.
const DEFAULT_RULES: &[&dyn BlockRule] = &[
    &SectionRule,
    &SmallHeadingRule,
    &NumberedListRule,
    &ParagraphRule,
];

/// Trim lines and join the non-blank ones with single spaces.
fn join_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Share of lines that start with a number ("3.", "3.1.").
fn numbered_share(lines: &[String]) -> f64 {
    if lines.is_empty() {
        return 0.0;
    }
    let numbered = lines
        .iter()
        .filter(|line| matches_trimmed(&NUMBERED, line))
        .count();
    numbered as f64 / lines.len() as f64
}

/// Section heading followed by its sub-numbered items.
///
/// Claims paragraphs of two or more lines whose first line is a top-level
/// heading ("3. Duties") and where some later line is a sub-item ("3.1").
/// The body becomes a list when it is numbered densely enough, otherwise a
/// paragraph under the heading.
pub struct SectionRule;

impl BlockRule for SectionRule {
    fn name(&self) -> &'static str {
        "section"
    }

    fn apply(&self, paragraph: &[String], options: &RenderOptions) -> Option<DisplayBlock> {
        let (first, rest) = paragraph.split_first()?;
        if rest.is_empty()
            || !matches_trimmed(&TOP_LEVEL_HEADING, first)
            || !rest.iter().any(|line| matches_trimmed(&SUB_ITEM, line))
        {
            return None;
        }

        let heading = first.trim().to_string();
        let has_numbered = rest.iter().any(|line| matches_trimmed(&NUMBERED, line));
        if has_numbered && (rest.len() == 1 || numbered_share(rest) >= options.list_threshold) {
            Some(DisplayBlock::HeadingWithNumberedList {
                heading,
                items: parse_list(rest),
            })
        } else {
            Some(DisplayBlock::HeadingWithParagraph {
                heading,
                text: join_lines(rest),
            })
        }
    }
}

/// Single-line subheading.
///
/// Either a numbered heading ("3. Duties") or a short line without
/// sentence punctuation and without commas.
pub struct SmallHeadingRule;

impl SmallHeadingRule {
    fn looks_like_heading(line: &str, options: &RenderOptions) -> bool {
        if line.is_empty() {
            return false;
        }
        if NUMBERED_HEADING_PREFIX.is_match(line) {
            return true;
        }
        line.chars().count() <= options.short_heading_max_chars
            && !line.ends_with(['.', '!', '?', ':'])
            && !line.contains(',')
    }
}

impl BlockRule for SmallHeadingRule {
    fn name(&self) -> &'static str {
        "small_heading"
    }

    fn apply(&self, paragraph: &[String], options: &RenderOptions) -> Option<DisplayBlock> {
        let [line] = paragraph else {
            return None;
        };
        let line = line.trim();
        Self::looks_like_heading(line, options).then(|| DisplayBlock::Heading {
            text: line.to_string(),
        })
    }
}

/// Numbered list.
///
/// Claims paragraphs where enough lines are numbered, and lone sub-numbered
/// lines ("3.2. ...") that were too long to be a heading.
pub struct NumberedListRule;

impl BlockRule for NumberedListRule {
    fn name(&self) -> &'static str {
        "numbered_list"
    }

    fn apply(&self, paragraph: &[String], options: &RenderOptions) -> Option<DisplayBlock> {
        let is_list = match paragraph {
            [line] => matches_trimmed(&SUB_ITEM_STRICT, line),
            [_, _, ..] => numbered_share(paragraph) >= options.list_threshold,
            [] => false,
        };
        is_list.then(|| DisplayBlock::NumberedList {
            items: parse_list(paragraph),
        })
    }
}

/// Plain paragraph. Always claims.
pub struct ParagraphRule;

impl BlockRule for ParagraphRule {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn apply(&self, paragraph: &[String], _options: &RenderOptions) -> Option<DisplayBlock> {
        Some(DisplayBlock::Paragraph {
            text: join_lines(paragraph),
        })
    }
}

/// Classify a paragraph with the default rules.
pub fn classify(paragraph: &[String], options: &RenderOptions) -> DisplayBlock {
    classify_with(DEFAULT_RULES, paragraph, options)
}

/// Classify a paragraph with a custom rule ranking.
///
/// Falls back to a plain paragraph when no rule claims it.
pub fn classify_with(
    rules: &[&dyn BlockRule],
    paragraph: &[String],
    options: &RenderOptions,
) -> DisplayBlock {
    for rule in rules {
        if let Some(block) = rule.apply(paragraph, options) {
            tracing::trace!(rule = rule.name(), lines = paragraph.len(), "Classified paragraph");
            return block;
        }
    }
    DisplayBlock::Paragraph {
        text: join_lines(paragraph),
    }
}

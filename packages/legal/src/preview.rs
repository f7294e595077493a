//! Plain-text preview of rendered documents for the terminal.

use textwrap::{fill, Options};

use crate::types::{DisplayBlock, ListItem, RenderedDocument};

/// Width of the list number column.
const NUMBER_COLUMN: usize = 8;

fn format_items(items: &[ListItem], width: usize, out: &mut Vec<String>) {
    let body_width = width.saturating_sub(NUMBER_COLUMN).max(20);
    for item in items {
        let indent = " ".repeat(NUMBER_COLUMN);
        let first = format!("{:>w$} ", item.number, w = NUMBER_COLUMN - 1);
        let options = Options::new(body_width + NUMBER_COLUMN)
            .initial_indent(&first)
            .subsequent_indent(&indent);
        out.push(fill(&item.text, &options));
    }
}

/// Format one block as wrapped plain text.
#[must_use]
pub fn format_block(block: &DisplayBlock, width: usize) -> String {
    let mut out: Vec<String> = Vec::new();
    match block {
        DisplayBlock::Heading { text } => out.push(format!("## {text}")),
        DisplayBlock::HeadingWithNumberedList { heading, items } => {
            out.push(format!("## {heading}"));
            format_items(items, width, &mut out);
        }
        DisplayBlock::HeadingWithParagraph { heading, text } => {
            out.push(format!("## {heading}"));
            out.push(fill(text, width));
        }
        DisplayBlock::NumberedList { items } => format_items(items, width, &mut out),
        DisplayBlock::Paragraph { text } => out.push(fill(text, width)),
    }
    out.join("\n")
}

/// Format a whole document, blocks separated by blank lines.
#[must_use]
pub fn format_document(doc: &RenderedDocument, width: usize) -> String {
    let mut sections = vec![format!("# {}", doc.title)];
    if let Some(revision) = &doc.revision {
        sections.push(format!("({})", revision.raw));
    }
    sections.extend(doc.blocks.iter().map(|block| format_block(block, width)));
    sections.join("\n\n")
}

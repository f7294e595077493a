//! Document renderer that ties the text pipeline together.

use crate::config::RenderOptions;
use crate::text::{classify, extract_revision, filter_lines, segment, split_lines};
use crate::types::{DisplayBlock, RawDocument, RenderedDocument};

/// Render a legal document into display blocks.
///
/// The pipeline is total: any text renders, falling back to plain
/// paragraphs where no structure is recognized.
///
/// # Examples
/// ```
/// use talko_legal::config::RenderOptions;
/// use talko_legal::renderer::render_document;
/// use talko_legal::types::RawDocument;
///
/// let raw = RawDocument::new("offer", "Публичная оферта", "Talko\nПУБЛИЧНАЯ ОФЕРТА\n\nТекст оферты.")
///     .with_source_title("ПУБЛИЧНАЯ ОФЕРТА");
/// let doc = render_document(&raw, &RenderOptions::default());
/// assert_eq!(doc.title, "Публичная оферта");
/// assert_eq!(doc.blocks.len(), 1);
/// ```
pub fn render_document(raw: &RawDocument, options: &RenderOptions) -> RenderedDocument {
    let lines = split_lines(&raw.text);
    let revision = extract_revision(&lines, options);
    let filtered = filter_lines(&lines, &raw.source_title, options);
    let paragraphs = segment(&filtered);

    let blocks: Vec<DisplayBlock> = paragraphs
        .iter()
        .map(|paragraph| classify(paragraph, options))
        .collect();

    tracing::debug!(
        id = %raw.id,
        lines = lines.len(),
        kept = filtered.len(),
        paragraphs = paragraphs.len(),
        blocks = blocks.len(),
        "Rendered document"
    );

    RenderedDocument {
        id: raw.id.clone(),
        title: raw.title.clone(),
        revision,
        blocks,
    }
}

/// Render plain text with a title into display blocks.
pub fn render_text(text: &str, title: &str, options: &RenderOptions) -> Vec<DisplayBlock> {
    render_document(&RawDocument::new("", title, text), options).blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DocumentKind, ListItem};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_text_end_to_end() {
        let text = "\u{FEFF}Talko\r\nMy Title\r\nRevision from 2025-01-10\r\n\r\n\
                    1. Intro\r\nThis is the intro.\r\n2. Scope\r\n2.1. First\r\n2.2. Second\r\n";
        let blocks = render_text(text, "My Title", &RenderOptions::default());
        assert_eq!(
            blocks,
            vec![
                DisplayBlock::Paragraph {
                    text: "1. Intro This is the intro.".to_string()
                },
                DisplayBlock::HeadingWithNumberedList {
                    heading: "2. Scope".to_string(),
                    items: vec![ListItem::new("2.1.", "First"), ListItem::new("2.2.", "Second")],
                },
            ]
        );
    }

    #[test]
    fn test_render_document_captures_revision() {
        let raw = RawDocument::new("privacy", "Policy", "Policy\nRevision from 2025-01-10\n\nBody text.");
        let doc = render_document(&raw, &RenderOptions::default());
        assert_eq!(doc.id, "privacy");
        assert_eq!(
            doc.revision.and_then(|r| r.date),
            chrono::NaiveDate::from_ymd_opt(2025, 1, 10)
        );
        assert_eq!(
            doc.blocks,
            vec![DisplayBlock::Paragraph {
                text: "Body text.".to_string()
            }]
        );
    }

    #[test]
    fn test_render_document_keeps_display_title() {
        let raw = RawDocument::for_kind(
            DocumentKind::Agreement,
            "Talko\nПОЛЬЗОВАТЕЛЬСКОЕ СОГЛАШЕНИЕ\nРедакция от 10.03.2025\n\nТекст соглашения.",
        );
        let doc = render_document(&raw, &RenderOptions::default());
        assert_eq!(doc.title, "Пользовательское соглашение");
        assert_eq!(
            doc.blocks,
            vec![DisplayBlock::Paragraph {
                text: "Текст соглашения.".to_string()
            }]
        );
    }

    #[test]
    fn test_render_text_matches_render_document() {
        let text = "Policy\nRevision from 2025-01-10\n\n1. Scope\n1.1. First\n1.2. Second\n\nBody.";
        let options = RenderOptions::default();
        assert_eq!(
            render_text(text, "Policy", &options),
            render_document(&RawDocument::new("privacy", "Policy", text), &options).blocks
        );
    }

    #[test]
    fn test_render_empty_document() {
        let doc = render_document(&RawDocument::new("x", "X", ""), &RenderOptions::default());
        assert!(doc.blocks.is_empty());
        assert!(doc.revision.is_none());
    }
}

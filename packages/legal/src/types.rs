//! Core data types for the renderer.
//!
//! These types describe the legal documents published on the site and the
//! display blocks they are rendered into.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The legal documents published on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Personal data processing policy.
    Privacy,

    /// User agreement.
    Agreement,

    /// Public offer.
    Offer,
}

impl DocumentKind {
    /// All documents in display order.
    pub const ALL: [DocumentKind; 3] = [Self::Privacy, Self::Agreement, Self::Offer];

    /// Anchor id used on the legal page and as output file stem.
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Self::Privacy => "privacy",
            Self::Agreement => "agreement",
            Self::Offer => "offer",
        }
    }

    /// Title shown above the document.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Privacy => "Политика обработки персональных данных",
            Self::Agreement => "Пользовательское соглашение",
            Self::Offer => "Публичная оферта",
        }
    }

    /// Title line as it appears inside the source text.
    ///
    /// The renderer drops this line since the page prints `title()` itself.
    #[must_use]
    pub fn source_title(&self) -> &'static str {
        match self {
            Self::Privacy => "ПОЛИТИКА ОБРАБОТКИ ПЕРСОНАЛЬНЫХ ДАННЫХ",
            Self::Agreement => "ПОЛЬЗОВАТЕЛЬСКОЕ СОГЛАШЕНИЕ",
            Self::Offer => "ПУБЛИЧНАЯ ОФЕРТА",
        }
    }

    /// Asset file holding the plain text.
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Privacy => "privacy_pd.txt",
            Self::Agreement => "user_agreement.txt",
            Self::Offer => "public_offer.txt",
        }
    }

    /// Look up a document by its id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

/// Unprocessed source of one legal document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Anchor id (e.g., "privacy").
    pub id: String,

    /// Title printed above the rendered document.
    pub title: String,

    /// Title line to filter out of the text.
    pub source_title: String,

    /// Plain text content.
    pub text: String,
}

impl RawDocument {
    /// Create a raw document whose source repeats the display title.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            source_title: title.clone(),
            title,
            text: text.into(),
        }
    }

    /// Set the title line used for filtering.
    #[must_use]
    pub fn with_source_title(mut self, source_title: impl Into<String>) -> Self {
        self.source_title = source_title.into();
        self
    }

    /// Create a raw document for a catalog entry.
    #[must_use]
    pub fn for_kind(kind: DocumentKind, text: impl Into<String>) -> Self {
        Self::new(kind.id(), kind.title(), text).with_source_title(kind.source_title())
    }
}

/// One entry of a numbered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Literal number prefix including the trailing period (e.g., "3.1.").
    ///
    /// Empty when the list starts with an unnumbered line.
    pub number: String,

    /// Item text with continuation lines joined by single spaces.
    pub text: String,
}

impl ListItem {
    /// Create a list item.
    #[must_use]
    pub fn new(number: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            text: text.into(),
        }
    }
}

/// One rendered unit of a legal document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayBlock {
    /// Subheading.
    Heading { text: String },

    /// Numbered section heading followed by its sub-numbered items.
    HeadingWithNumberedList { heading: String, items: Vec<ListItem> },

    /// Numbered section heading whose body is too loosely numbered to list.
    HeadingWithParagraph { heading: String, text: String },

    /// Numbered list.
    NumberedList { items: Vec<ListItem> },

    /// Plain paragraph.
    Paragraph { text: String },
}

impl DisplayBlock {
    /// Short name of the block kind.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "heading",
            Self::HeadingWithNumberedList { .. } => "heading_with_numbered_list",
            Self::HeadingWithParagraph { .. } => "heading_with_paragraph",
            Self::NumberedList { .. } => "numbered_list",
            Self::Paragraph { .. } => "paragraph",
        }
    }

    /// Heading text, if the block carries one.
    #[must_use]
    pub fn heading(&self) -> Option<&str> {
        match self {
            Self::Heading { text } => Some(text),
            Self::HeadingWithNumberedList { heading, .. }
            | Self::HeadingWithParagraph { heading, .. } => Some(heading),
            Self::NumberedList { .. } | Self::Paragraph { .. } => None,
        }
    }

    /// List items, empty for blocks without a list.
    #[must_use]
    pub fn items(&self) -> &[ListItem] {
        match self {
            Self::HeadingWithNumberedList { items, .. } | Self::NumberedList { items } => items,
            _ => &[],
        }
    }
}

/// A piece of inline text, either plain or a hyperlink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineSpan {
    /// Plain text.
    Text { value: String },

    /// Hyperlink; `value` is the literal text, `href` the target.
    Link { value: String, href: String },
}

impl InlineSpan {
    /// Literal text of the span.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Text { value } | Self::Link { value, .. } => value,
        }
    }

    /// Whether the span links to an external web page (opened in a new tab).
    #[must_use]
    pub fn is_external(&self) -> bool {
        matches!(self, Self::Link { href, .. } if href.starts_with("http"))
    }
}

/// Revision stamp captured from the boilerplate of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    /// Trimmed revision line as written in the source.
    pub raw: String,

    /// Parsed revision date, when the stamp carries a numeric date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// A document rendered into display blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    /// Anchor id.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Revision stamp, if the source had one.
    pub revision: Option<Revision>,

    /// Display blocks in document order.
    pub blocks: Vec<DisplayBlock>,
}

//! Configuration constants, render options and validation functions.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{LegalError, Result};
use crate::types::DocumentKind;

/// Brand name printed above every legal document in the source assets.
pub const BRAND_NAME: &str = "Talko";

/// Phrases that open a revision stamp line ("Редакция от 01.02.2024").
///
/// Matched against the lowercased, quote-stripped, whitespace-collapsed line.
pub const REVISION_PHRASES: &[&str] = &["revision from ", "редакция от "];

/// Maximum length (in characters) of a line that may act as a subheading.
pub const SHORT_HEADING_MAX_CHARS: usize = 80;

/// Minimum share of numbered lines for a paragraph to render as a list.
pub const NUMBERED_LIST_THRESHOLD: f64 = 0.6;

/// Default directory holding the legal text assets.
pub const DEFAULT_SOURCE_DIR: &str = "src/data/legal";

/// Default directory for rendered YAML output.
pub const DEFAULT_OUTPUT_DIR: &str = "public/legal";

/// Terminal wrap width used by `inspect`.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Document id pattern: lowercase ascii word.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DOCUMENT_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z_]*$").expect("valid regex"));

/// Tunables for the render pipeline.
///
/// The defaults reproduce the site's behavior; tests and the CLI override
/// individual values with the `with_*` builders.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Brand line to drop (compared case-insensitively).
    pub brand: String,

    /// Lowercase phrases that mark a revision stamp line.
    pub revision_phrases: Vec<String>,

    /// Maximum characters of a short heading-like line.
    pub short_heading_max_chars: usize,

    /// Minimum share of numbered lines for list rendering.
    pub list_threshold: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            brand: BRAND_NAME.to_string(),
            revision_phrases: REVISION_PHRASES.iter().map(|p| (*p).to_string()).collect(),
            short_heading_max_chars: SHORT_HEADING_MAX_CHARS,
            list_threshold: NUMBERED_LIST_THRESHOLD,
        }
    }
}

impl RenderOptions {
    /// Set the brand line.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Replace the revision phrases. Phrases are stored lowercased.
    #[must_use]
    pub fn with_revision_phrases(
        mut self,
        phrases: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.revision_phrases = phrases
            .into_iter()
            .map(|p| p.into().to_lowercase())
            .collect();
        self
    }

    /// Set the numbered-list threshold.
    #[must_use]
    pub fn with_list_threshold(mut self, threshold: f64) -> Self {
        self.list_threshold = threshold;
        self
    }

    /// Set the short heading length.
    #[must_use]
    pub fn with_short_heading_max_chars(mut self, max_chars: usize) -> Self {
        self.short_heading_max_chars = max_chars;
        self
    }
}

/// Validate a numbered-list threshold.
///
/// # Returns
/// * `Ok(())` if the threshold is a finite number in `(0, 1]`
/// * `Err(LegalError::InvalidThreshold)` otherwise
///
/// # Examples
/// ```
/// use talko_legal::config::validate_threshold;
///
/// assert!(validate_threshold(0.6).is_ok());
/// assert!(validate_threshold(0.0).is_err());
/// assert!(validate_threshold(1.5).is_err());
/// ```
pub fn validate_threshold(threshold: f64) -> Result<()> {
    if threshold.is_finite() && threshold > 0.0 && threshold <= 1.0 {
        Ok(())
    } else {
        Err(LegalError::InvalidThreshold(threshold))
    }
}

/// Validate a document id and resolve it against the catalog.
///
/// # Examples
/// ```
/// use talko_legal::config::validate_document_id;
/// use talko_legal::types::DocumentKind;
///
/// assert_eq!(validate_document_id("offer").unwrap(), DocumentKind::Offer);
/// assert!(validate_document_id("Offer!").is_err());
/// assert!(validate_document_id("refunds").is_err());
/// ```
pub fn validate_document_id(id: &str) -> Result<DocumentKind> {
    if !DOCUMENT_ID_PATTERN.is_match(id) {
        return Err(LegalError::InvalidDocumentId(id.to_string()));
    }
    DocumentKind::from_id(id).ok_or_else(|| LegalError::UnknownDocument(id.to_string()))
}

//! Error types for the legal document renderer.
//!
//! The render pipeline itself is total: malformed text degrades to plain
//! paragraphs. Errors only come from loading assets, resolving document ids,
//! validating options and writing output.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum LegalError {
    /// Document id is not a lowercase word.
    #[error("Invalid document id: '{0}'. Expected a lowercase id (e.g., privacy)")]
    InvalidDocumentId(String),

    /// Document id is well-formed but not part of the catalog.
    #[error("Unknown document: '{0}'. Known documents: privacy, agreement, offer")]
    UnknownDocument(String),

    /// Numbered-list threshold out of range.
    #[error("Invalid list threshold: {0}. Expected a number in (0, 1]")]
    InvalidThreshold(f64),

    /// Source asset for a document could not be read.
    #[error("Failed to read source for {id} from {}: {source}", .path.display())]
    MissingSource {
        id: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Result type alias for renderer operations.
pub type Result<T> = std::result::Result<T, LegalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LegalError::UnknownDocument("refunds".to_string());
        assert!(err.to_string().contains("refunds"));
        assert!(err.to_string().contains("privacy, agreement, offer"));
    }

    #[test]
    fn test_missing_source_display() {
        let err = LegalError::MissingSource {
            id: "offer".to_string(),
            path: PathBuf::from("legal/public_offer.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read source for offer from legal/public_offer.txt: not found"
        );
    }

    #[test]
    fn test_invalid_threshold_display() {
        let err = LegalError::InvalidThreshold(1.5);
        assert_eq!(
            err.to_string(),
            "Invalid list threshold: 1.5. Expected a number in (0, 1]"
        );
    }
}

//! Static asset loading for the legal text files.
//!
//! Every catalog document must be present; there is no fallback text.

use std::fs;
use std::path::Path;

use crate::error::{LegalError, Result};
use crate::types::{DocumentKind, RawDocument};

/// Decode asset bytes, replacing invalid UTF-8 with a warning.
fn bytes_to_string(bytes: &[u8], context: &str) -> String {
    match String::from_utf8(bytes.to_vec()) {
        Ok(text) => text,
        Err(_) => {
            tracing::warn!(context, "Invalid UTF-8, decoding lossily");
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

/// Load the source text of one catalog document.
///
/// # Arguments
/// * `source_dir` - Directory holding the asset files
/// * `kind` - The document to load
///
/// # Returns
/// The raw document, titled with the title line used in the source text
pub fn load_document(source_dir: &Path, kind: DocumentKind) -> Result<RawDocument> {
    let path = source_dir.join(kind.file_name());
    let bytes = fs::read(&path).map_err(|source| LegalError::MissingSource {
        id: kind.id().to_string(),
        path: path.clone(),
        source,
    })?;

    tracing::debug!(id = kind.id(), path = %path.display(), bytes = bytes.len(), "Loaded source");

    let text = bytes_to_string(&bytes, kind.file_name());
    Ok(RawDocument::for_kind(kind, text))
}

/// Load all catalog documents in display order.
pub fn load_all(source_dir: &Path) -> Result<Vec<RawDocument>> {
    DocumentKind::ALL
        .iter()
        .map(|kind| load_document(source_dir, *kind))
        .collect()
}

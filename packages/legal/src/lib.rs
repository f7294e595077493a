//! Talko legal documents renderer.
//!
//! This crate turns the plain-text legal documents published on the Talko
//! site (privacy policy, user agreement, public offer) into a sequence of
//! typed display blocks: headings, numbered lists and paragraphs with
//! linked URLs and email addresses.
//!
//! # Example
//!
//! ```
//! use talko_legal::config::RenderOptions;
//! use talko_legal::renderer::render_text;
//! use talko_legal::types::DisplayBlock;
//!
//! let text = "Talko\nMy Title\n\n3. Responsibilities\n3.1. First duty\n3.2. Second duty";
//! let blocks = render_text(text, "My Title", &RenderOptions::default());
//! assert!(matches!(blocks[0], DisplayBlock::HeadingWithNumberedList { .. }));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, render options and validation
//! - [`types`]: Document catalog, display blocks and inline spans
//! - [`error`]: Error types and Result alias
//! - [`text`]: Pipeline stages (normalize, filter, segment, classify, linkify)
//! - [`renderer`]: Whole-document rendering
//! - [`loader`]: Loading the text assets
//! - [`yaml`]: YAML output
//! - [`preview`]: Terminal preview
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod preview;
pub mod renderer;
pub mod text;
pub mod types;
pub mod yaml;

// Re-export main functions
pub use renderer::{render_document, render_text};

// Re-export commonly used items
pub use config::RenderOptions;
pub use error::{LegalError, Result};
pub use types::{DisplayBlock, DocumentKind, InlineSpan, ListItem, RawDocument, RenderedDocument};

//! Plain-text to display-block pipeline.
//!
//! Each stage is a pure function over lines:
//! normalize → filter → segment → classify (with list parsing) → linkify.

mod classify;
mod filter;
mod linkify;
mod list;
mod normalize;
mod patterns;
mod segment;

pub use classify::{
    classify, classify_with, BlockRule, NumberedListRule, ParagraphRule, SectionRule,
    SmallHeadingRule,
};
pub use filter::{extract_revision, filter_lines, is_revision_marker, strip_leading_revisions};
pub use linkify::linkify;
pub use list::parse_list;
pub use normalize::{normalize, split_lines};
pub use segment::segment;

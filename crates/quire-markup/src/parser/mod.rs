//! Tree construction from markup.
//!
//! [`MarkupParser`] drives a recursive descent: the node-sequence parser
//! reads one level, the tag parser builds one tag and recurses into the next
//! level, and each finished level goes through the whitespace normalizer.

/// Entry point and node-sequence parser.
pub mod core;
/// Static inline classification table.
pub mod inline;
/// Per-level whitespace normalization.
pub(crate) mod normalize;
/// Cursor/ancestor state shared by one parse.
pub(crate) mod state;
/// Tag parser.
pub(crate) mod tag;

pub use self::core::MarkupParser;
pub use inline::{InlineTag, is_inline};

//! Lenient markup parser for the quire document pipeline.
//!
//! # Scope
//!
//! This crate turns a restricted, HTML-like markup string into a
//! [`quire_dom::Document`]:
//! - **Tags** - `<name args>`, `</name>` and `<name args/>`; names are ASCII
//!   letters and digits, case-folded
//! - **Attributes** - `name="value"` pairs and the `class` word set
//! - **Text** - literal runs with control/space runs collapsed to one space
//! - **Entities** - dropped by default, or decoded by a pluggable
//!   [`EntityResolver`]
//! - **Whitespace** - text trimmed next to block-level siblings
//!
//! # Not Implemented
//!
//! - HTML/XML compliance, implied end tags, schema validation
//! - Streaming or incremental parsing
//! - Error recovery beyond stopping at the end of input: a closing tag
//!   always ends the innermost open level, whatever its name
//!
//! # Example
//! ```
//! use quire_markup::{parse, ParseOptions};
//!
//! let doc = parse("  <p class=\"lead note\">Hello,\n  <b>world</b></p>  ", &ParseOptions::default())
//!     .unwrap();
//! let p = doc.find_first("p").unwrap();
//! assert!(p.has_class("lead"));
//! assert_eq!(doc.text_content(p.id()), "Hello, world");
//! ```

/// Errors that abort a parse.
pub mod error;
/// Caller input conversion.
pub mod input;
/// Recovered-problem diagnostics.
pub mod issue;
/// Parse configuration.
pub mod options;
/// Tree construction.
pub mod parser;
/// Character-level scanning.
pub mod scanner;

pub use error::ParseError;
pub use input::MarkupInput;
pub use issue::{IssueKind, ParseIssue};
pub use options::{DEFAULT_MAX_DEPTH, EntityMode, ParseOptions};
pub use parser::{InlineTag, MarkupParser, is_inline};
pub use quire_dom::Document;
pub use scanner::attributes::{ExtractedAttributes, extract_attributes};
pub use scanner::entity::{DropEntities, EntityResolver, NamedEntities, ResolvedEntity};
pub use scanner::text::collapse_whitespace;

/// Parse markup with the built-in entity strategy named in `options`.
///
/// # Errors
///
/// See [`MarkupParser::parse`].
pub fn parse<'i>(
    input: impl Into<MarkupInput<'i>>,
    options: &ParseOptions,
) -> Result<Document, ParseError> {
    MarkupParser::new(*options).parse(input)
}

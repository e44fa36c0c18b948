//! Errors raised by a parse.
//!
//! Malformed markup never produces an error; the parser absorbs it and
//! reports a [`crate::ParseIssue`] instead. Only input that cannot be read as
//! text, and nesting beyond the configured limit, abort a parse.

use thiserror::Error;

/// A parse that could not produce a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input is neither text nor convertible to text.
    #[error("markup input is not text: invalid UTF-8 after {valid_up_to} bytes")]
    InvalidInputKind {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },

    /// A tag would open a level deeper than `ParseOptions::max_depth`.
    #[error("markup nests deeper than {limit} levels (tag at byte {offset})")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
        /// Byte offset of the `<` that opened the offending tag.
        offset: usize,
    },
}

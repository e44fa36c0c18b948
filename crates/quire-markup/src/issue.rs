//! Diagnostics for malformed markup.
//!
//! Issues are purely informational: the tree a parse produces is the same
//! whether or not anyone reads them.

use std::fmt;

use strum_macros::Display;

/// Category of a recovered problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum IssueKind {
    /// Input ended inside a tag, before its `>`.
    UnterminatedTag,
    /// Input ended while a tag was still open.
    UnclosedTag,
    /// A closing tag appeared with nothing open; the rest of the input is
    /// ignored.
    StrayClosingTag,
    /// A closing tag named something other than the innermost open tag. It
    /// still closes the innermost tag.
    MismatchedClosingTag,
    /// An entity reference produced no decoded text.
    UndecodedEntity,
}

/// One recovered problem and where it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// What went wrong.
    pub kind: IssueKind,
    /// Human-readable description.
    pub message: String,
    /// Byte offset into the source.
    pub offset: usize,
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.offset, self.kind, self.message)
    }
}

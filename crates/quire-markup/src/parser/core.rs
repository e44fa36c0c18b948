use quire_dom::{Document, NodeId, NodeType};

use super::normalize::{LevelItem, normalize_level};
use super::state::ParseState;
use super::tag::TagOutcome;
use crate::error::ParseError;
use crate::input::MarkupInput;
use crate::issue::{IssueKind, ParseIssue};
use crate::options::ParseOptions;
use crate::scanner::entity::EntityResolver;

/// Converts markup into a [`Document`].
///
/// Each call to [`MarkupParser::parse`] owns its own state, so one parser
/// can serve any number of parses.
///
/// # Example
/// ```
/// use quire_markup::{MarkupParser, ParseOptions};
///
/// let parser = MarkupParser::new(ParseOptions::default());
/// let doc = parser.parse("<p>Hello <b>world</b></p>").unwrap();
/// assert_eq!(doc.find_first("b").map(|b| b.inline()), Some(true));
/// ```
pub struct MarkupParser<'r> {
    options: ParseOptions,
    resolver: &'r dyn EntityResolver,
}

impl MarkupParser<'static> {
    /// Create a parser using the entity strategy named in `options`.
    #[must_use]
    pub fn new(options: ParseOptions) -> Self {
        let resolver = options.entities.resolver();
        Self { options, resolver }
    }
}

impl Default for MarkupParser<'static> {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

impl<'r> MarkupParser<'r> {
    /// Replace the entity strategy with a custom resolver.
    #[must_use]
    pub fn with_resolver<'n>(self, resolver: &'n dyn EntityResolver) -> MarkupParser<'n> {
        MarkupParser {
            options: self.options,
            resolver,
        }
    }

    /// Options this parser was built with.
    #[must_use]
    pub const fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse markup into a document.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidInputKind`] for byte input that is not
    /// UTF-8, and [`ParseError::NestingTooDeep`] when nesting exceeds
    /// `max_depth`. Malformed markup is never an error.
    pub fn parse<'i>(&self, input: impl Into<MarkupInput<'i>>) -> Result<Document, ParseError> {
        self.parse_with_issues(input).map(|(doc, _)| doc)
    }

    /// Parse markup and also return the problems recovered from along the
    /// way.
    ///
    /// # Errors
    ///
    /// Same as [`MarkupParser::parse`].
    pub fn parse_with_issues<'i>(
        &self,
        input: impl Into<MarkupInput<'i>>,
    ) -> Result<(Document, Vec<ParseIssue>), ParseError> {
        let source = input.into().into_text()?;
        let mut state = ParseState::new(&source, &self.options, self.resolver);
        let roots = state.parse_level()?;
        Ok(state.finish(roots))
    }
}

impl ParseState<'_, '_> {
    /// Parse one level: everything up to the end of input or a closing tag.
    ///
    /// Returns the level's node ids in document order, normalized unless the
    /// enclosing tag is inline.
    pub(crate) fn parse_level(&mut self) -> Result<Vec<NodeId>, ParseError> {
        // Tags left over from a previous sibling's children are not siblings
        // of this level's tags. The lenient original kept the slot across
        // parents and linked cousins; siblings here stay within one parent.
        self.ancestors.truncate(self.depth);

        let mut items = Vec::new();
        let mut closed = false;
        while !self.cursor.is_eof() {
            if self.cursor.peek() == Some(b'<') {
                self.cursor.advance(1);
                match self.parse_tag()? {
                    TagOutcome::Produced { id, inline } => {
                        items.push(LevelItem::Tag { id, inline });
                    }
                    TagOutcome::Ignored => {}
                    TagOutcome::EndOfLevel => {
                        closed = true;
                        break;
                    }
                }
            } else {
                let text = self.parse_text();
                if !text.is_empty() {
                    items.push(LevelItem::Text(text));
                }
            }
        }

        let parent = self.current_parent();
        let parent_tag = parent.and_then(|id| self.builder.tag(id));
        let normalize = parent_tag.is_none_or(|data| !data.inline);
        if !closed {
            if let Some(name) = parent_tag.map(|data| data.name.clone()) {
                let offset = self.cursor.pos();
                self.issue(
                    IssueKind::UnclosedTag,
                    offset,
                    format!("<{name}> is still open at the end of input"),
                );
            }
        }

        let items = if normalize {
            normalize_level(items)
        } else {
            items
        };

        Ok(items
            .into_iter()
            .map(|item| match item {
                LevelItem::Tag { id, .. } => id,
                LevelItem::Text(text) => self.builder.alloc(NodeType::Text(text), parent),
            })
            .collect())
    }
}

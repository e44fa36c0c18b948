use quire_dom::{NodeId, NodeType, TagData};

use super::inline::is_inline;
use super::state::ParseState;
use crate::error::ParseError;
use crate::issue::IssueKind;
use crate::scanner::attributes::{ExtractedAttributes, extract_attributes};
use crate::scanner::tag::{scan_tag_args, scan_tag_name};

/// What the tag parser hands back to the node-sequence parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagOutcome {
    /// A tag was built; append it to the level.
    Produced { id: NodeId, inline: bool },
    /// Markup was consumed but adds nothing to the level.
    Ignored,
    /// A closing tag: the current level ends here.
    EndOfLevel,
}

impl ParseState<'_, '_> {
    /// Parse one tag. The cursor sits just after its `<`.
    pub(crate) fn parse_tag(&mut self) -> Result<TagOutcome, ParseError> {
        let offset = self.cursor.pos().saturating_sub(1);

        if self.options.skip_declarations && matches!(self.cursor.peek(), Some(b'!' | b'?')) {
            self.skip_declaration();
            return Ok(TagOutcome::Ignored);
        }

        let closing = self.cursor.peek() == Some(b'/');
        if closing {
            self.cursor.advance(1);
        }

        let name = scan_tag_name(&mut self.cursor);
        let args = scan_tag_args(&mut self.cursor);
        if !args.terminated {
            self.issue(
                IssueKind::UnterminatedTag,
                offset,
                format!("<{name}> tag is cut off by the end of input"),
            );
        }

        if closing {
            self.check_closing(&name, offset);
            return Ok(TagOutcome::EndOfLevel);
        }

        let ExtractedAttributes {
            attributes,
            classes,
        } = if args.raw.is_empty() {
            ExtractedAttributes::default()
        } else {
            extract_attributes(args.raw)
        };
        let inline = is_inline(&name);
        let parent = self.current_parent();
        let id = self.builder.alloc(
            NodeType::Tag(TagData {
                name,
                inline,
                self_closing: args.self_closing,
                attrs: attributes,
                classes,
            }),
            parent,
        );
        self.register(id);

        if !args.self_closing {
            if self.depth >= self.options.max_depth {
                return Err(ParseError::NestingTooDeep {
                    limit: self.options.max_depth,
                    offset,
                });
            }
            self.depth += 1;
            let children = self.parse_level()?;
            self.depth -= 1;
            self.builder.set_children(id, children);
        }

        Ok(TagOutcome::Produced { id, inline })
    }

    /// Consume `<!-- … -->`, `<!…>` or `<?…>` whole.
    fn skip_declaration(&mut self) {
        let found = if self.cursor.starts_with("!--") {
            self.cursor.skip_past("-->")
        } else {
            self.cursor.skip_past(">")
        };
        if !found {
            let offset = self.cursor.pos();
            self.issue(
                IssueKind::UnterminatedTag,
                offset,
                "markup declaration is cut off by the end of input".to_string(),
            );
        }
    }

    /// Report closing tags that do not match the innermost open tag. The
    /// closing tag ends the current level either way.
    fn check_closing(&mut self, name: &str, offset: usize) {
        let open = self
            .current_parent()
            .and_then(|id| self.builder.tag(id))
            .map(|data| data.name.clone());
        match open {
            None => self.issue(
                IssueKind::StrayClosingTag,
                offset,
                format!("</{name}> closes nothing; the rest of the input is ignored"),
            ),
            Some(open) if open != name => self.issue(
                IssueKind::MismatchedClosingTag,
                offset,
                format!("</{name}> closes <{open}>"),
            ),
            Some(_) => {}
        }
    }
}

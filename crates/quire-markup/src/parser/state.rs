use quire_common::warning::warn_once;
use quire_dom::{Document, DocumentBuilder, NodeId};

use crate::issue::{IssueKind, ParseIssue};
use crate::options::ParseOptions;
use crate::scanner::cursor::Cursor;
use crate::scanner::entity::EntityResolver;
use crate::scanner::text::{collapse_whitespace, scan_raw};

/// Mutable context of one parse: input position, nesting depth and the
/// currently open tag at each depth.
pub(crate) struct ParseState<'s, 'r> {
    pub(crate) cursor: Cursor<'s>,
    /// Current nesting level, 0 at the top.
    pub(crate) depth: usize,
    /// `ancestors[d]` is the tag most recently opened at depth `d`. Entries
    /// below `depth` form the chain of open tags.
    pub(crate) ancestors: Vec<NodeId>,
    pub(crate) builder: DocumentBuilder,
    pub(crate) options: &'r ParseOptions,
    resolver: &'r dyn EntityResolver,
    issues: Vec<ParseIssue>,
}

impl<'s, 'r> ParseState<'s, 'r> {
    pub(crate) fn new(
        source: &'s str,
        options: &'r ParseOptions,
        resolver: &'r dyn EntityResolver,
    ) -> Self {
        Self {
            cursor: Cursor::new(source),
            depth: 0,
            ancestors: Vec::new(),
            builder: DocumentBuilder::new(),
            options,
            resolver,
            issues: Vec::new(),
        }
    }

    /// The tag enclosing the current level, `None` at the top.
    pub(crate) fn current_parent(&self) -> Option<NodeId> {
        self.depth
            .checked_sub(1)
            .and_then(|d| self.ancestors.get(d).copied())
    }

    /// Make `id` the open tag of the current depth, linking it after the tag
    /// that previously held that slot.
    pub(crate) fn register(&mut self, id: NodeId) {
        if let Some(slot) = self.ancestors.get_mut(self.depth) {
            let prev = std::mem::replace(slot, id);
            self.builder.link_siblings(prev, id);
        } else {
            self.ancestors.push(id);
        }
    }

    /// Read literal text up to the next tag, resolving entity markers and
    /// collapsing control/space runs.
    pub(crate) fn parse_text(&mut self) -> String {
        let mut text = String::new();
        while let Some(b) = self.cursor.peek() {
            match b {
                b'<' => break,
                b'&' => {
                    let offset = self.cursor.pos();
                    let entity = self.resolver.resolve(self.cursor.rest());
                    self.cursor.advance(entity.consumed.max(1));
                    if !entity.decoded {
                        self.issue(
                            IssueKind::UndecodedEntity,
                            offset,
                            "entity reference left undecoded".to_string(),
                        );
                    }
                    text.push_str(&entity.text);
                }
                _ => text.push_str(scan_raw(&mut self.cursor)),
            }
        }
        collapse_whitespace(&text)
    }

    pub(crate) fn issue(&mut self, kind: IssueKind, offset: usize, message: String) {
        if self.options.emit_warnings {
            warn_once("Markup", &message);
        }
        self.issues.push(ParseIssue {
            kind,
            message,
            offset,
        });
    }

    pub(crate) fn finish(self, roots: Vec<NodeId>) -> (Document, Vec<ParseIssue>) {
        (self.builder.finish(roots), self.issues)
    }
}

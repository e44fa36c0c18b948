/// Position within the markup source.
///
/// Every marker the parser stops on (`<`, `>`, `/`, `&`, `"`) is ASCII, so
/// positions reached by scanning fall on `char` boundaries. [`Cursor::advance`]
/// snaps forward to the next boundary so a step of one byte never splits a
/// character.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'s> {
    source: &'s str,
    pos: usize,
}

impl<'s> Cursor<'s> {
    pub(crate) const fn new(source: &'s str) -> Self {
        Self { source, pos: 0 }
    }

    pub(crate) const fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) const fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    pub(crate) fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.pos + offset).copied()
    }

    pub(crate) fn advance(&mut self, n: usize) {
        let mut pos = self.pos.saturating_add(n).min(self.source.len());
        while !self.source.is_char_boundary(pos) {
            pos += 1;
        }
        self.pos = pos;
    }

    /// Unconsumed input.
    pub(crate) fn rest(&self) -> &'s str {
        self.source.get(self.pos..).unwrap_or("")
    }

    pub(crate) fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Source between two positions previously reported by [`Cursor::pos`].
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'s str {
        self.source.get(start..end).unwrap_or("")
    }

    /// Consume bytes while `pred` holds and return them.
    ///
    /// `pred` must answer the same for every byte of a multi-byte character
    /// (true for all of them or false for all of them).
    pub(crate) fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'s str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
        self.slice(start, self.pos)
    }

    /// Move past the first occurrence of `needle`, or to the end of input.
    /// Returns whether `needle` was found.
    pub(crate) fn skip_past(&mut self, needle: &str) -> bool {
        match self.rest().find(needle) {
            Some(at) => {
                self.advance(at + needle.len());
                true
            }
            None => {
                self.pos = self.source.len();
                false
            }
        }
    }
}

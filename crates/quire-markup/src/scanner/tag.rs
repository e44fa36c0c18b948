use super::cursor::Cursor;

/// Raw tag arguments, everything between the tag name and `>` or `/>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TagArgs<'s> {
    /// Trimmed argument text, possibly empty.
    pub raw: &'s str,
    /// The tag ended with `/>`.
    pub self_closing: bool,
    /// False if input ran out before `>` or `/>`.
    pub terminated: bool,
}

/// Read a tag identifier: a maximal run of ASCII letters and digits,
/// lowercased. An empty run yields an empty name.
pub(crate) fn scan_tag_name(cursor: &mut Cursor<'_>) -> String {
    cursor
        .take_while(|b| b.is_ascii_alphanumeric())
        .to_ascii_lowercase()
}

/// Read up to and including the closing `>` or `/>` of a tag.
pub(crate) fn scan_tag_args<'s>(cursor: &mut Cursor<'s>) -> TagArgs<'s> {
    let start = cursor.pos();
    loop {
        match cursor.peek() {
            None => {
                return TagArgs {
                    raw: cursor.slice(start, cursor.pos()).trim(),
                    self_closing: false,
                    terminated: false,
                };
            }
            Some(b'/') if cursor.peek_at(1) == Some(b'>') => {
                let raw = cursor.slice(start, cursor.pos()).trim();
                cursor.advance(2);
                return TagArgs {
                    raw,
                    self_closing: true,
                    terminated: true,
                };
            }
            Some(b'>') => {
                let raw = cursor.slice(start, cursor.pos()).trim();
                cursor.advance(1);
                return TagArgs {
                    raw,
                    self_closing: false,
                    terminated: true,
                };
            }
            Some(_) => cursor.advance(1),
        }
    }
}

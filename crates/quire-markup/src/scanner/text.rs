use super::cursor::Cursor;

/// Read literal text up to the next `<` or `&`.
pub(crate) fn scan_raw<'s>(cursor: &mut Cursor<'s>) -> &'s str {
    cursor.take_while(|b| b != b'<' && b != b'&')
}

/// Replace every maximal run of ASCII control characters (`0x00`-`0x1F`)
/// and spaces with a single space.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if matches!(c, '\u{0}'..='\u{1f}' | ' ') {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

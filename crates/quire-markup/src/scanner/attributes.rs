//! Extraction of `name="value"` pairs from raw tag arguments.

use quire_dom::{AttributesMap, ClassSet};

/// Attributes and class flags found in one tag's arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedAttributes {
    /// Every `name="value"` pair; a repeated name keeps its last value.
    pub attributes: AttributesMap,
    /// Words of the `class` value, `None` without a `class` attribute.
    pub classes: Option<ClassSet>,
}

/// Scan `args` for `name="value"` pairs.
///
/// A name is one or more of `[A-Za-z0-9_-]`; a value is double-quoted and
/// contains no `"`, `<` or `>`. Text that does not form a pair is skipped.
#[must_use]
pub fn extract_attributes(args: &str) -> ExtractedAttributes {
    let mut attributes = AttributesMap::new();
    let mut pos = 0;
    while pos < args.len() {
        match match_pair(args, pos) {
            Some((name, value, end)) => {
                let _ = attributes.insert(name.to_string(), value.to_string());
                pos = end;
            }
            None => pos += 1,
        }
    }

    let classes = attributes
        .get("class")
        .map(|value| value.split_whitespace().map(str::to_string).collect());

    ExtractedAttributes {
        attributes,
        classes,
    }
}

const fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Try to match one pair starting exactly at `start`.
/// Returns the name, the value and the position just past the closing quote.
fn match_pair(args: &str, start: usize) -> Option<(&str, &str, usize)> {
    let bytes = args.as_bytes();
    let name_len = bytes
        .get(start..)?
        .iter()
        .take_while(|&&b| is_name_byte(b))
        .count();
    if name_len == 0 {
        return None;
    }
    let name_end = start + name_len;
    if bytes.get(name_end..name_end + 2) != Some(b"=\"".as_slice()) {
        return None;
    }

    let value_start = name_end + 2;
    let value_len = bytes
        .get(value_start..)?
        .iter()
        .position(|&b| matches!(b, b'"' | b'<' | b'>'))?;
    let value_end = value_start + value_len;
    if bytes[value_end] != b'"' {
        return None;
    }

    Some((
        &args[start..name_end],
        &args[value_start..value_end],
        value_end + 1,
    ))
}

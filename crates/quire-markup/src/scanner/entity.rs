//! Entity strategies for the text scanner.
//!
//! The scanner hands the resolver the input starting at an `&` marker and
//! advances by however much the resolver consumed. Swapping the resolver
//! changes what a reference decodes to without touching the scanner.

use super::named_entities::lookup_entity;

/// Decodes an entity reference.
pub trait EntityResolver {
    /// Resolve the reference at the start of `rest`, which begins with `&`.
    ///
    /// Must consume at least the `&` marker.
    fn resolve(&self, rest: &str) -> ResolvedEntity;
}

/// Result of resolving one reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntity {
    /// Text to splice into the surrounding run.
    pub text: String,
    /// Bytes consumed, `&` included.
    pub consumed: usize,
    /// False when the reference was not understood.
    pub decoded: bool,
}

impl ResolvedEntity {
    /// Consume the marker and contribute nothing.
    #[must_use]
    pub const fn dropped() -> Self {
        Self {
            text: String::new(),
            consumed: 1,
            decoded: false,
        }
    }

    /// Consume the marker and keep it as a literal `&`.
    #[must_use]
    pub fn literal() -> Self {
        Self {
            text: "&".to_string(),
            consumed: 1,
            decoded: false,
        }
    }
}

/// Placeholder strategy: every `&` is consumed and yields empty text, so
/// `a &amp; b` reads as `a amp; b`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DropEntities;

impl EntityResolver for DropEntities {
    fn resolve(&self, _rest: &str) -> ResolvedEntity {
        ResolvedEntity::dropped()
    }
}

/// Decodes named references from the built-in table and numeric references
/// (`&#169;`, `&#xA9;`). Anything else is kept as a literal `&`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedEntities;

impl EntityResolver for NamedEntities {
    fn resolve(&self, rest: &str) -> ResolvedEntity {
        let body = rest.strip_prefix('&').unwrap_or(rest);
        let resolved = match body.strip_prefix('#') {
            Some(numeric) => resolve_numeric(numeric),
            None => resolve_named(body),
        };
        resolved.unwrap_or_else(ResolvedEntity::literal)
    }
}

fn resolve_named(body: &str) -> Option<ResolvedEntity> {
    let name_len = body.bytes().take_while(u8::is_ascii_alphanumeric).count();
    if name_len == 0 {
        return None;
    }
    if body.as_bytes().get(name_len) == Some(&b';') {
        if let Some(text) = lookup_entity(&body[..=name_len]) {
            return Some(ResolvedEntity {
                text: text.to_string(),
                consumed: name_len + 2,
                decoded: true,
            });
        }
    }
    lookup_entity(&body[..name_len]).map(|text| ResolvedEntity {
        text: text.to_string(),
        consumed: name_len + 1,
        decoded: true,
    })
}

/// `digits` follows `&#`.
fn resolve_numeric(digits: &str) -> Option<ResolvedEntity> {
    let (radix, body, prefix_len) = match digits.as_bytes().first() {
        Some(b'x' | b'X') => (16, &digits[1..], 3),
        _ => (10, digits, 2),
    };
    let len = body
        .bytes()
        .take_while(|b| char::from(*b).is_digit(radix))
        .count();
    if len == 0 {
        return None;
    }
    let terminated = body.as_bytes().get(len) == Some(&b';');
    let decoded = u32::from_str_radix(&body[..len], radix)
        .ok()
        .and_then(char::from_u32)
        .filter(|&c| c != '\0')
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    Some(ResolvedEntity {
        text: decoded.to_string(),
        consumed: prefix_len + len + usize::from(terminated),
        decoded: true,
    })
}

//! Named entity lookup table.
//!
//! A subset of the HTML named character references covering what documents
//! fed to the layout stage actually use: markup escapes, typographic
//! punctuation, currency, common math and Latin-1 letters.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Maps entity names (without the leading `&`) to their replacement text.
///
/// Names ending in `;` are the canonical forms. A handful of legacy names are
/// also accepted without the semicolon.
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Markup escapes
        ("amp;", "&"),
        ("amp", "&"),
        ("lt;", "<"),
        ("lt", "<"),
        ("gt;", ">"),
        ("gt", ">"),
        ("quot;", "\""),
        ("quot", "\""),
        ("apos;", "'"),
        ("nbsp;", "\u{00A0}"),
        ("nbsp", "\u{00A0}"),
        // Typography
        ("shy;", "\u{00AD}"),
        ("mdash;", "\u{2014}"),
        ("ndash;", "\u{2013}"),
        ("hellip;", "\u{2026}"),
        ("bull;", "\u{2022}"),
        ("middot;", "\u{00B7}"),
        ("lsquo;", "\u{2018}"),
        ("rsquo;", "\u{2019}"),
        ("ldquo;", "\u{201C}"),
        ("rdquo;", "\u{201D}"),
        ("laquo;", "\u{00AB}"),
        ("raquo;", "\u{00BB}"),
        ("para;", "\u{00B6}"),
        ("sect;", "\u{00A7}"),
        ("dagger;", "\u{2020}"),
        ("copy;", "\u{00A9}"),
        ("copy", "\u{00A9}"),
        ("reg;", "\u{00AE}"),
        ("reg", "\u{00AE}"),
        ("trade;", "\u{2122}"),
        // Currency
        ("cent;", "\u{00A2}"),
        ("pound;", "\u{00A3}"),
        ("euro;", "\u{20AC}"),
        ("yen;", "\u{00A5}"),
        // Math
        ("times;", "\u{00D7}"),
        ("divide;", "\u{00F7}"),
        ("plusmn;", "\u{00B1}"),
        ("minus;", "\u{2212}"),
        ("ne;", "\u{2260}"),
        ("le;", "\u{2264}"),
        ("ge;", "\u{2265}"),
        ("deg;", "\u{00B0}"),
        ("frac12;", "\u{00BD}"),
        ("frac14;", "\u{00BC}"),
        ("frac34;", "\u{00BE}"),
        // Arrows
        ("larr;", "\u{2190}"),
        ("rarr;", "\u{2192}"),
        ("uarr;", "\u{2191}"),
        ("darr;", "\u{2193}"),
        // Latin-1 letters
        ("agrave;", "\u{00E0}"),
        ("aacute;", "\u{00E1}"),
        ("acirc;", "\u{00E2}"),
        ("auml;", "\u{00E4}"),
        ("Agrave;", "\u{00C0}"),
        ("Aacute;", "\u{00C1}"),
        ("Auml;", "\u{00C4}"),
        ("ccedil;", "\u{00E7}"),
        ("Ccedil;", "\u{00C7}"),
        ("egrave;", "\u{00E8}"),
        ("eacute;", "\u{00E9}"),
        ("ecirc;", "\u{00EA}"),
        ("euml;", "\u{00EB}"),
        ("Egrave;", "\u{00C8}"),
        ("Eacute;", "\u{00C9}"),
        ("iacute;", "\u{00ED}"),
        ("iuml;", "\u{00EF}"),
        ("ntilde;", "\u{00F1}"),
        ("Ntilde;", "\u{00D1}"),
        ("oacute;", "\u{00F3}"),
        ("ocirc;", "\u{00F4}"),
        ("ouml;", "\u{00F6}"),
        ("Ouml;", "\u{00D6}"),
        ("uacute;", "\u{00FA}"),
        ("ugrave;", "\u{00F9}"),
        ("uuml;", "\u{00FC}"),
        ("Uuml;", "\u{00DC}"),
        ("szlig;", "\u{00DF}"),
    ])
});

/// Look up a named entity.
///
/// `name` excludes the leading `&` and includes the trailing `;` when the
/// source had one.
///
/// # Example
/// ```
/// use quire_markup::scanner::named_entities::lookup_entity;
///
/// assert_eq!(lookup_entity("amp;"), Some("&"));
/// assert_eq!(lookup_entity("amp"), Some("&"));
/// assert_eq!(lookup_entity("mdash"), None);
/// ```
#[must_use]
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    NAMED_ENTITIES.get(name).copied()
}

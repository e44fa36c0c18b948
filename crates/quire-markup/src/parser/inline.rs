use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

/// Tags that do not force block whitespace normalization on their siblings.
/// Every other tag name is block-level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum InlineTag {
    /// `<i>`
    I,
    /// `<em>`
    Em,
    /// `<u>`
    U,
    /// `<b>`
    B,
    /// `<strong>`
    Strong,
    /// `<a>`
    A,
}

/// Classify a lowercase tag name.
#[must_use]
pub fn is_inline(name: &str) -> bool {
    InlineTag::from_str(name).is_ok()
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_table_members_are_inline() {
        for tag in InlineTag::iter() {
            assert!(is_inline(&tag.to_string()), "{tag} should be inline");
        }
    }

    #[test]
    fn test_everything_else_is_block() {
        for name in ["p", "div", "span", "img", "br", "", "strongest", "B"] {
            assert!(!is_inline(name), "{name} should be block");
        }
    }
}

//! Conversion of caller input into markup text.

use std::borrow::Cow;
use std::fmt;

use crate::error::ParseError;

/// Raw markup handed to the parser: text, or something convertible to it.
///
/// Bytes are accepted and converted on parse; bytes that are not UTF-8 are
/// the one input the parser refuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupInput<'a> {
    /// Markup already held as text.
    Text(Cow<'a, str>),
    /// Markup held as bytes, expected to be UTF-8.
    Bytes(Cow<'a, [u8]>),
}

impl<'a> MarkupInput<'a> {
    /// Markup produced by a value's `Display` implementation.
    pub fn from_display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Self::Text(Cow::Owned(value.to_string()))
    }

    /// The markup as text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidInputKind`] if byte input is not UTF-8.
    pub fn into_text(self) -> Result<Cow<'a, str>, ParseError> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Bytes(Cow::Borrowed(bytes)) => std::str::from_utf8(bytes)
                .map(Cow::Borrowed)
                .map_err(|e| ParseError::InvalidInputKind {
                    valid_up_to: e.valid_up_to(),
                }),
            Self::Bytes(Cow::Owned(bytes)) => {
                String::from_utf8(bytes)
                    .map(Cow::Owned)
                    .map_err(|e| ParseError::InvalidInputKind {
                        valid_up_to: e.utf8_error().valid_up_to(),
                    })
            }
        }
    }
}

impl<'a> From<&'a str> for MarkupInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for MarkupInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for MarkupInput<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for MarkupInput<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a [u8]> for MarkupInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(Cow::Borrowed(bytes))
    }
}

impl From<Vec<u8>> for MarkupInput<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(Cow::Owned(bytes))
    }
}

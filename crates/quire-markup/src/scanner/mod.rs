//! Character-level scanning of markup.
//!
//! Everything here works on a [`cursor::Cursor`] and knows nothing about the
//! tree being built.

/// Tag-argument extraction.
pub mod attributes;
/// Byte cursor over the source.
pub(crate) mod cursor;
/// Entity resolution strategies.
pub mod entity;
/// Named entity lookup table.
pub mod named_entities;
/// Tag name and tag argument scanning.
pub(crate) mod tag;
/// Literal text scanning and control-run collapsing.
pub mod text;

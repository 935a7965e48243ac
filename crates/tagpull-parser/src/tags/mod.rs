//! Tag stream module.
//!
//! The grammar layer: recognizes text runs, start tags, end tags,
//! self-closing tags and their attributes from the token stream, with one
//! tag of lookahead.

/// Attribute and whitespace helpers for the tag stream.
pub mod helpers;
/// Tag stream cursor implementation.
pub mod stream;
/// Tag type produced by the tag stream.
pub mod tag;

pub use stream::TagStream;
pub use tag::Tag;

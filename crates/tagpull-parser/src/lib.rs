//! Pull-based streaming parser for XML-like markup.
//!
//! # Scope
//!
//! The parser is a chain of four cursors, each holding exactly one unit of
//! lookahead and computing the next unit only when asked:
//! - **Character source** ([`CharSource`]) over a caller-supplied [`CharInput`]
//! - **Tokenizer** ([`Tokenizer`]): alphanumeric runs and single punctuation
//!   or whitespace characters
//! - **Tag stream** ([`TagStream`]): text runs, start, end and self-closing
//!   tags with double-quoted attributes
//! - **Tree builder** ([`parse_element`]): recursive descent into an owned
//!   [`tagpull_tree::Element`] tree
//!
//! # Not Implemented
//!
//! - DTD or schema validation
//! - Namespaces
//! - Entity and escape decoding
//! - CDATA sections and comments
//! - Streaming output

/// Recursive-descent tree construction.
pub mod builder;
/// Caller-supplied character inputs.
pub mod input;
/// The character cursor.
pub mod source;
/// The grammar layer.
pub mod tags;
/// The token cursor.
pub mod tokenizer;

pub use builder::{
    build_children, build_element, parse_element, parse_fragment, parse_str, parse_with_issues,
};
pub use input::{CharInput, FnInput, IterInput, ReaderInput, StrInput, from_fn, str_input};
pub use source::{CharSource, CursorState};
pub use tags::{Tag, TagStream};
pub use tokenizer::{Token, Tokenizer};

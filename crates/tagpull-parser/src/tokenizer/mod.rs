//! Tokenizer module.
//!
//! Groups characters into runs of alphanumerics and single punctuation or
//! whitespace characters, with one token of lookahead.

/// Tokenizer cursor implementation.
pub mod core;
/// Token type produced by the tokenizer.
pub mod token;

pub use self::core::Tokenizer;
pub use token::Token;

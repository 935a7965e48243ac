//! Error taxonomy shared by the character source, tokenizer, tag stream and
//! element tree.
//!
//! Every failure aborts the parse that produced it. There is no partial tree
//! and no resumption of a failed stream.

use thiserror::Error;

/// Result alias used throughout tagpull.
pub type Result<T> = std::result::Result<T, MarkupError>;

/// A parse or access failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// The character source had zero characters when it was constructed.
    #[error("No characters to parse")]
    EmptyInput,

    /// A character or token was required but the source was exhausted
    /// in the middle of a grammar rule.
    #[error("Unexpected end of input {context}")]
    UnexpectedEndOfInput {
        /// Where the input ran out, e.g. "inside an attribute value".
        context: &'static str,
    },

    /// A required punctuation token was absent at its expected position.
    #[error("Unexpected Token, '{expected}' expected (found `{found}`)")]
    MalformedTag {
        /// The punctuation that was required.
        expected: char,
        /// The raw content of the token found instead.
        found: String,
    },

    /// A closing tag did not match the start tag currently being closed.
    #[error("Unexpected ending tag found, expected: {expected} found: {found}")]
    TagMismatch {
        /// Name of the innermost open start tag.
        expected: String,
        /// Name carried by the closing tag.
        found: String,
    },

    /// A view was requested that is not valid for the element's kind.
    #[error("Invalid access: {message}")]
    InvalidAccess {
        /// What was asked of which kind of element.
        message: &'static str,
    },
}

impl MarkupError {
    /// Shorthand for [`MarkupError::UnexpectedEndOfInput`].
    #[must_use]
    pub const fn end_of_input(context: &'static str) -> Self {
        Self::UnexpectedEndOfInput { context }
    }

    /// Shorthand for [`MarkupError::MalformedTag`].
    #[must_use]
    pub fn malformed(expected: char, found: impl Into<String>) -> Self {
        Self::MalformedTag {
            expected,
            found: found.into(),
        }
    }

    /// Returns true for failures caused by running out of input.
    ///
    /// Useful to callers feeding fragments that may simply be incomplete.
    #[must_use]
    pub const fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::UnexpectedEndOfInput { .. })
    }
}

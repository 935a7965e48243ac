use tagpull_common::{MarkupError, ParseIssue, Result};
use tagpull_tree::AttributesMap;

use super::tag::Tag;
use crate::input::CharInput;
use crate::source::CursorState;
use crate::tokenizer::Tokenizer;

pub(super) const IN_TAG: &str = "inside a tag";
pub(super) const IN_END_TAG: &str = "inside a closing tag";
pub(super) const IN_TEXT: &str = "inside text";

/// One tag of lookahead over a [`Tokenizer`].
///
/// [`peek`](TagStream::peek) returns the current tag without reading
/// anything; [`load_next_tag`](TagStream::load_next_tag) replaces it with the
/// next one. A fresh stream holds the [`Tag::Empty`] sentinel until it is
/// primed with [`skip_empty_tag`](TagStream::skip_empty_tag).
pub struct TagStream<I: CharInput> {
    pub(super) tokenizer: Tokenizer<I>,
    current: Tag,
    pub(super) state: CursorState,

    /// Reject content between an end tag's name and its `>` instead of
    /// ignoring it.
    strict_mode: bool,

    /// Issues recorded for input that was tolerated rather than rejected.
    issues: Vec<ParseIssue>,

    /// Number of tokens consumed so far.
    pub(super) tokens_consumed: usize,
}

impl<I: CharInput> TagStream<I> {
    /// Create a tag stream pulling characters from `input`.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::EmptyInput`] if `input` has no characters.
    pub fn new(input: I) -> Result<Self> {
        Ok(Self::from_tokenizer(Tokenizer::new(input)?))
    }

    /// Create a tag stream over an existing tokenizer.
    #[must_use]
    pub fn from_tokenizer(tokenizer: Tokenizer<I>) -> Self {
        let state = if tokenizer.has_next_token() {
            CursorState::Loaded
        } else {
            CursorState::TrailingUnconsumed
        };
        Self {
            tokenizer,
            current: Tag::Empty,
            state,
            strict_mode: false,
            issues: Vec::new(),
            tokens_consumed: 0,
        }
    }

    /// Enable strict mode: any non-whitespace content between an end tag's
    /// name and its `>` is a [`MarkupError::MalformedTag`].
    #[must_use]
    pub const fn with_strict_mode(mut self) -> Self {
        self.strict_mode = true;
        self
    }

    /// Returns true if strict mode is enabled.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict_mode
    }

    /// The current tag.
    #[must_use]
    pub const fn peek(&self) -> &Tag {
        &self.current
    }

    /// Returns true while tokens remain, or while the last token has been
    /// loaded but not yet consumed into a tag.
    #[must_use]
    pub fn has_next_tag(&self) -> bool {
        self.state != CursorState::Exhausted
    }

    /// Current cursor state.
    #[must_use]
    pub const fn state(&self) -> CursorState {
        self.state
    }

    /// Load the next tag if the current one is the empty sentinel.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`load_next_tag`](TagStream::load_next_tag).
    pub fn skip_empty_tag(&mut self) -> Result<()> {
        if self.current.is_empty() {
            self.load_next_tag()?;
        }
        Ok(())
    }

    /// Replace the current tag with the empty sentinel.
    ///
    /// Used once an element's closing tag has been consumed, so the next
    /// [`skip_empty_tag`](TagStream::skip_empty_tag) reads a fresh tag.
    pub fn unload_current_tag(&mut self) {
        self.current = Tag::Empty;
    }

    /// Parse the next tag and make it current.
    ///
    /// Whitespace tokens before the tag are skipped, except that the final
    /// token of the input is never skipped. A `<` token starts markup;
    /// anything else starts a text run.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnexpectedEndOfInput`] if the stream is
    /// exhausted or runs out inside a tag, and [`MarkupError::MalformedTag`]
    /// if required punctuation is missing.
    pub fn load_next_tag(&mut self) -> Result<()> {
        if !self.has_next_tag() {
            return Err(MarkupError::end_of_input("while looking for the next tag"));
        }

        let token = self.skip_whitespace(IN_TAG)?;
        self.current = if token.is_symbol('<') {
            self.parse_normal_tag()?
        } else {
            self.parse_text()?
        };
        Ok(())
    }

    /// Issues recorded so far.
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Take the recorded issues, leaving none behind.
    pub fn take_issues(&mut self) -> Vec<ParseIssue> {
        std::mem::take(&mut self.issues)
    }

    /// Record an issue once per distinct message.
    pub(super) fn record_issue(&mut self, message: String, is_error: bool) {
        if self.issues.iter().any(|issue| issue.message == message) {
            return;
        }
        let issue = if is_error {
            ParseIssue::error(message, self.tokens_consumed)
        } else {
            ParseIssue::warning(message, self.tokens_consumed)
        };
        self.issues.push(issue);
    }

    /// Accumulate raw token content up to the next `<` or the end of input.
    fn parse_text(&mut self) -> Result<Tag> {
        let mut content = String::new();
        while self.has_next_tag() {
            let token = self.token(IN_TEXT)?;
            if token.is_symbol('<') {
                break;
            }
            token.push_to(&mut content);
            self.advance_token(IN_TEXT)?;
        }

        if content.chars().all(char::is_whitespace) {
            self.record_issue("whitespace-only text at the end of input".to_string(), false);
        }
        Ok(Tag::Text(content))
    }

    /// Parse a start, end or self-closing tag. The current token is `<`.
    fn parse_normal_tag(&mut self) -> Result<Tag> {
        self.advance_token(IN_TAG)?;
        if self.token(IN_TAG)?.is_symbol('/') {
            return self.parse_end_tag();
        }

        let name = self.token(IN_TAG)?.content();
        let mut attributes = AttributesMap::new();
        let mut self_closing = false;
        // The first token of the loop is the name itself, never an attribute.
        let mut at_name_token = true;

        while self.has_next_tag() {
            let token = self.token(IN_TAG)?;
            if token.is_symbol('>') {
                break;
            }
            if token.is_symbol('/') {
                self_closing = true;
                self.advance_token(IN_TAG)?;
                self.expect_symbol('>', IN_TAG)?;
                break;
            }
            if token.is_alphanumeric() && !at_name_token {
                self.parse_attribute(&mut attributes)?;
            }
            self.advance_token(IN_TAG)?;
            at_name_token = false;
        }

        // Past the terminating `>`.
        self.advance_token(IN_TAG)?;

        Ok(if self_closing {
            Tag::SelfClosing { name, attributes }
        } else {
            Tag::Start { name, attributes }
        })
    }

    /// Parse `</name ... >`. The current token is `/`.
    fn parse_end_tag(&mut self) -> Result<Tag> {
        self.advance_token(IN_END_TAG)?;
        let name = self.token(IN_END_TAG)?.content();

        let mut ignored = String::new();
        let mut at_name_token = true;
        loop {
            let token = self.token(IN_END_TAG)?;
            if token.is_symbol('>') {
                break;
            }
            if !at_name_token {
                token.push_to(&mut ignored);
            }
            self.advance_token(IN_END_TAG)?;
            at_name_token = false;
        }

        let ignored = ignored.trim();
        if !ignored.is_empty() {
            if self.strict_mode {
                return Err(MarkupError::malformed('>', ignored));
            }
            self.record_issue(format!("ignored `{ignored}` in closing tag </{name}>"), true);
        }

        // Past the terminating `>`.
        self.advance_token(IN_END_TAG)?;
        Ok(Tag::End { name })
    }
}

impl<I: CharInput> Iterator for TagStream<I> {
    type Item = Result<Tag>;

    /// Load and yield each remaining tag. After an error the stream yields
    /// nothing further.
    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next_tag() {
            return None;
        }
        match self.load_next_tag() {
            Ok(()) => Some(Ok(self.current.clone())),
            Err(e) => {
                self.state = CursorState::Exhausted;
                Some(Err(e))
            }
        }
    }
}

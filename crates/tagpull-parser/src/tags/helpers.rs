//! Helper methods for the tag stream.
//!
//! This module contains the token-level plumbing the grammar is built on:
//! - Token access ("peek the current token", "consume it")
//! - Whitespace skipping
//! - Attribute parsing

use tagpull_common::{MarkupError, Result};
use tagpull_tree::AttributesMap;

use super::stream::TagStream;
use crate::input::CharInput;
use crate::source::CursorState;
use crate::tokenizer::Token;

const IN_ATTRIBUTE: &str = "inside an attribute";
const IN_ATTRIBUTE_VALUE: &str = "inside an attribute value";

// =============================================================================
// Token Access Helpers
// =============================================================================

impl<I: CharInput> TagStream<I> {
    /// The current token.
    ///
    /// Marks the stream as holding its trailing token once the tokenizer has
    /// nothing left behind it.
    pub(super) fn token(&mut self, context: &'static str) -> Result<Token> {
        if self.state == CursorState::Exhausted {
            return Err(MarkupError::end_of_input(context));
        }
        let token = self.tokenizer.peek()?.clone();
        if self.state == CursorState::Loaded && !self.tokenizer.has_next_token() {
            self.state = CursorState::TrailingUnconsumed;
        }
        Ok(token)
    }

    /// Consume the current token.
    ///
    /// Consuming the token that holds the last character exhausts the stream.
    pub(super) fn advance_token(&mut self, context: &'static str) -> Result<()> {
        self.step_tokenizer(context)?;
        self.tokens_consumed += 1;
        Ok(())
    }

    /// Consume the empty sentinel. It is not an input token, so it is not
    /// counted in `tokens_consumed`.
    fn skip_sentinel(&mut self, context: &'static str) -> Result<()> {
        self.step_tokenizer(context)
    }

    fn step_tokenizer(&mut self, context: &'static str) -> Result<()> {
        if !self.has_next_tag() {
            return Err(MarkupError::end_of_input(context));
        }
        self.tokenizer.advance()?;
        if !self.tokenizer.has_next_token() {
            self.state = CursorState::Exhausted;
        }
        Ok(())
    }

    /// Require the current token to be exactly `expected`, without consuming it.
    pub(super) fn expect_symbol(&mut self, expected: char, context: &'static str) -> Result<()> {
        let token = self.token(context)?;
        if token.is_symbol(expected) {
            Ok(())
        } else {
            Err(MarkupError::malformed(expected, token.content()))
        }
    }
}

// =============================================================================
// Whitespace Helpers
// =============================================================================

impl<I: CharInput> TagStream<I> {
    /// Skip whitespace tokens and return the first token that is not one.
    ///
    /// The empty sentinel counts as whitespace and is consumed first. The
    /// last token of the input is never skipped, even if it is whitespace.
    pub(super) fn skip_whitespace(&mut self, context: &'static str) -> Result<Token> {
        let mut token = self.token(context)?;
        if token.is_empty() {
            self.skip_sentinel(context)?;
            token = self.token(context)?;
        }
        while token.is_whitespace() && self.tokenizer.has_next_token() {
            self.advance_token(context)?;
            token = self.token(context)?;
        }
        Ok(token)
    }
}

// =============================================================================
// Attribute Helpers
// =============================================================================

impl<I: CharInput> TagStream<I> {
    /// Parse `name = "value"` starting at the current token and insert it
    /// into `attributes`. A repeated name overwrites the earlier value.
    ///
    /// Leaves the closing `"` as the current token.
    pub(super) fn parse_attribute(&mut self, attributes: &mut AttributesMap) -> Result<()> {
        let name = self.skip_whitespace(IN_ATTRIBUTE)?.content();
        self.advance_token(IN_ATTRIBUTE)?;

        let _ = self.skip_whitespace(IN_ATTRIBUTE)?;
        self.expect_symbol('=', IN_ATTRIBUTE)?;
        self.advance_token(IN_ATTRIBUTE)?;

        let _ = self.skip_whitespace(IN_ATTRIBUTE)?;
        self.expect_symbol('"', IN_ATTRIBUTE)?;
        self.advance_token(IN_ATTRIBUTE_VALUE)?;

        let mut value = String::new();
        loop {
            let token = self.token(IN_ATTRIBUTE_VALUE)?;
            if token.is_symbol('"') {
                break;
            }
            token.push_to(&mut value);
            self.advance_token(IN_ATTRIBUTE_VALUE)?;
        }

        if attributes.insert(name.clone(), value).is_some() {
            self.record_issue(format!("duplicate attribute `{name}`, keeping the last value"), false);
        }
        Ok(())
    }
}

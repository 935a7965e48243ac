use tagpull_common::{MarkupError, Result};

use super::token::Token;
use crate::input::CharInput;
use crate::source::{CharSource, CursorState};

/// One token of lookahead over a [`CharSource`].
///
/// The current token is computed lazily: [`peek`](Tokenizer::peek) loads it
/// on first access and [`advance`](Tokenizer::advance) drops it so the next
/// `peek` reads a fresh one. Before the first `advance` the current token is
/// the [`Token::Empty`] sentinel.
pub struct Tokenizer<I: CharInput> {
    source: CharSource<I>,
    // `None` means the previous token was consumed and the next one is not
    // loaded yet.
    current: Option<Token>,
    // Progress of the character cursor into tokens. `Exhausted` here means
    // every character is inside some token, not that the last token was
    // consumed.
    input_state: CursorState,
}

impl<I: CharInput> Tokenizer<I> {
    /// Create a tokenizer pulling from `input`.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::EmptyInput`] if `input` has no characters.
    pub fn new(input: I) -> Result<Self> {
        Ok(Self::from_source(CharSource::new(input)?))
    }

    /// Create a tokenizer over an existing character cursor.
    #[must_use]
    pub fn from_source(source: CharSource<I>) -> Self {
        Self {
            input_state: source.state(),
            source,
            current: Some(Token::Empty),
        }
    }

    /// The current lookahead token, loading it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnexpectedEndOfInput`] if a token is requested
    /// after every character has been tokenized.
    pub fn peek(&mut self) -> Result<&Token> {
        let token = match self.current.take() {
            Some(token) => token,
            None => self.load_next_token()?,
        };
        Ok(self.current.insert(token))
    }

    /// Consume the current token.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnexpectedEndOfInput`] if there is no token left
    /// to consume.
    pub fn advance(&mut self) -> Result<()> {
        if self.current.take().is_none() {
            let _ = self.load_next_token()?;
        }
        Ok(())
    }

    /// Returns true while some character has not yet been put into a token.
    ///
    /// This turns false as soon as the token holding the last character is
    /// loaded, even though that token can still be peeked.
    #[must_use]
    pub fn has_next_token(&self) -> bool {
        self.input_state != CursorState::Exhausted
    }

    /// Current cursor state, in terms of tokens.
    ///
    /// [`CursorState::TrailingUnconsumed`] means the current token holds the
    /// last character and has not been consumed. [`CursorState::Exhausted`]
    /// means that token has been consumed.
    #[must_use]
    pub const fn state(&self) -> CursorState {
        match (self.input_state, self.current.is_some()) {
            (CursorState::Exhausted, true) => CursorState::TrailingUnconsumed,
            (CursorState::Exhausted, false) => CursorState::Exhausted,
            (CursorState::Loaded | CursorState::TrailingUnconsumed, _) => CursorState::Loaded,
        }
    }

    /// Read one token starting at the current character.
    ///
    /// An alphanumeric character starts a greedy run that stops before the
    /// first non-alphanumeric character. Anything else is a token on its own.
    fn load_next_token(&mut self) -> Result<Token> {
        if self.input_state == CursorState::Exhausted {
            return Err(MarkupError::end_of_input("while reading a token"));
        }

        let mut word = String::new();
        loop {
            let c = self.source.peek()?;
            if c.is_alphanumeric() {
                word.push(c);
            } else if word.is_empty() {
                self.consume_char()?;
                return Ok(Token::Symbol(c));
            } else {
                // The non-alphanumeric character starts the next token.
                break;
            }

            self.consume_char()?;
            if self.input_state == CursorState::Exhausted {
                break;
            }
        }
        Ok(Token::Word(word))
    }

    /// Move past the current character. The last character is never
    /// advanced over; it is marked as taken instead.
    fn consume_char(&mut self) -> Result<()> {
        if self.source.has_more() {
            self.source.advance()?;
            if !self.source.has_more() {
                self.input_state = CursorState::TrailingUnconsumed;
            }
        } else {
            self.input_state = CursorState::Exhausted;
        }
        Ok(())
    }
}

impl<I: CharInput> Iterator for Tokenizer<I> {
    type Item = Result<Token>;

    /// Yield every real token once, skipping the initial sentinel.
    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.current, Some(Token::Empty)) {
            self.current = None;
        }
        if self.current.is_none() && !self.has_next_token() {
            return None;
        }
        let token = match self.peek() {
            Ok(token) => token.clone(),
            Err(e) => return Some(Err(e)),
        };
        self.current = None;
        Some(Ok(token))
    }
}

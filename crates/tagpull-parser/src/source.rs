//! The character layer: one character of lookahead over a [`CharInput`].

use strum_macros::Display;
use tagpull_common::{MarkupError, Result};

use crate::input::CharInput;

/// Where a cursor stands relative to the end of its stream.
///
/// Shared by the character, token and tag cursors so that the last unit of a
/// stream is a named state rather than a combination of flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CursorState {
    /// The current unit is loaded and more units follow it.
    Loaded,
    /// The current unit is the last one and has not been consumed yet.
    TrailingUnconsumed,
    /// The last unit has been consumed. Nothing further can be read.
    Exhausted,
}

/// One character of lookahead over a caller-supplied input.
pub struct CharSource<I: CharInput> {
    input: I,
    current: char,
    state: CursorState,
}

impl<I: CharInput> CharSource<I> {
    /// Wrap `input` and pull its first character.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::EmptyInput`] if `input` has no characters.
    pub fn new(mut input: I) -> Result<Self> {
        if !input.has_more() {
            return Err(MarkupError::EmptyInput);
        }
        let current = input.take_next();
        let state = if input.has_more() {
            CursorState::Loaded
        } else {
            CursorState::TrailingUnconsumed
        };
        Ok(Self {
            input,
            current,
            state,
        })
    }

    /// The current lookahead character.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnexpectedEndOfInput`] once the last character
    /// has been consumed.
    pub fn peek(&self) -> Result<char> {
        match self.state {
            CursorState::Exhausted => Err(MarkupError::end_of_input("after the last character")),
            CursorState::Loaded | CursorState::TrailingUnconsumed => Ok(self.current),
        }
    }

    /// Consume the current character and pull the next one, if any.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnexpectedEndOfInput`] if the source is
    /// already exhausted.
    pub fn advance(&mut self) -> Result<()> {
        match self.state {
            CursorState::Loaded => {
                self.current = self.input.take_next();
                if !self.input.has_more() {
                    self.state = CursorState::TrailingUnconsumed;
                }
            }
            CursorState::TrailingUnconsumed => self.state = CursorState::Exhausted,
            CursorState::Exhausted => {
                return Err(MarkupError::end_of_input("after the last character"));
            }
        }
        Ok(())
    }

    /// Returns true if a character exists after the current one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.state == CursorState::Loaded
    }

    /// Current cursor state.
    #[must_use]
    pub const fn state(&self) -> CursorState {
        self.state
    }
}

use core::fmt;

/// One lexical unit.
///
/// A token carries no position information. Its kind is implied by its
/// content: a greedy run of alphanumeric characters, or exactly one other
/// character (markup punctuation or whitespace).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Token {
    /// Sentinel for "nothing loaded yet". Only ever seen before the first
    /// real token.
    #[default]
    Empty,
    /// One or more alphanumeric characters.
    Word(String),
    /// Exactly one non-alphanumeric character.
    Symbol(char),
}

impl Token {
    /// Returns true for the [`Token::Empty`] sentinel.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns true if the token starts with an alphanumeric character.
    #[must_use]
    pub const fn is_alphanumeric(&self) -> bool {
        matches!(self, Self::Word(_))
    }

    /// Returns true for a single whitespace character.
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Self::Symbol(c) if c.is_whitespace())
    }

    /// Returns true if this is exactly the single character `c`.
    #[must_use]
    pub fn is_symbol(&self, c: char) -> bool {
        *self == Self::Symbol(c)
    }

    /// Append the raw content of the token to `out`.
    pub fn push_to(&self, out: &mut String) {
        match self {
            Self::Empty => {}
            Self::Word(word) => out.push_str(word),
            Self::Symbol(c) => out.push(*c),
        }
    }

    /// The raw content of the token as an owned string.
    #[must_use]
    pub fn content(&self) -> String {
        let mut out = String::new();
        self.push_to(&mut out);
        out
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Word(word) => f.write_str(word),
            Self::Symbol(c) => write!(f, "{c}"),
        }
    }
}

//! Character input capabilities.
//!
//! The parser never owns a document. It pulls characters one at a time from a
//! [`CharInput`] supplied by the caller, which may be backed by a string, an
//! iterator, a pair of closures or a byte stream.

use std::io::{self, BufRead};
use std::iter::Peekable;
use std::str::Chars;

/// A pull interface over a sequence of characters.
///
/// Contract: [`take_next`](CharInput::take_next) is only called after
/// [`has_more`](CharInput::has_more) returned true, and each call advances
/// the underlying source by exactly one character.
pub trait CharInput {
    /// Returns true if another character can be taken.
    fn has_more(&mut self) -> bool;

    /// Take the next character.
    ///
    /// What happens when the contract is broken is up to the implementation.
    /// [`IterInput`] and [`ReaderInput`] return `'\0'`; [`FnInput`] does
    /// whatever the caller's closure does.
    fn take_next(&mut self) -> char;
}

impl<T: CharInput + ?Sized> CharInput for &mut T {
    fn has_more(&mut self) -> bool {
        (**self).has_more()
    }

    fn take_next(&mut self) -> char {
        (**self).take_next()
    }
}

/// Any character iterator as an input.
pub struct IterInput<I: Iterator<Item = char>> {
    chars: Peekable<I>,
}

impl<I: Iterator<Item = char>> IterInput<I> {
    /// Wrap a character iterator.
    pub fn new(chars: I) -> Self {
        Self {
            chars: chars.peekable(),
        }
    }
}

impl<I: Iterator<Item = char>> CharInput for IterInput<I> {
    fn has_more(&mut self) -> bool {
        self.chars.peek().is_some()
    }

    fn take_next(&mut self) -> char {
        self.chars.next().unwrap_or_default()
    }
}

/// A cursor over a borrowed string.
pub type StrInput<'a> = IterInput<Chars<'a>>;

/// Create a cursor at the start of `input`.
#[must_use]
pub fn str_input(input: &str) -> StrInput<'_> {
    IterInput::new(input.chars())
}

/// The two caller-supplied capabilities as a pair of closures.
pub struct FnInput<H, N> {
    has_more: H,
    take_next: N,
}

/// Build an input from a `has_more` closure and a `take_next` closure.
pub const fn from_fn<H, N>(has_more: H, take_next: N) -> FnInput<H, N>
where
    H: FnMut() -> bool,
    N: FnMut() -> char,
{
    FnInput {
        has_more,
        take_next,
    }
}

impl<H, N> CharInput for FnInput<H, N>
where
    H: FnMut() -> bool,
    N: FnMut() -> char,
{
    fn has_more(&mut self) -> bool {
        (self.has_more)()
    }

    fn take_next(&mut self) -> char {
        (self.take_next)()
    }
}

/// Lazily decodes UTF-8 text from a buffered reader, one line at a time.
///
/// An I/O or decoding error ends the input early. Check
/// [`take_error`](ReaderInput::take_error) after parsing to tell a short
/// document from a failed read.
pub struct ReaderInput<R: BufRead> {
    reader: R,
    line: String,
    pos: usize,
    error: Option<io::Error>,
    finished: bool,
}

impl<R: BufRead> ReaderInput<R> {
    /// Wrap a buffered reader.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
            error: None,
            finished: false,
        }
    }

    /// The error that ended the input early, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn refill(&mut self) -> bool {
        if self.finished {
            return false;
        }
        self.line.clear();
        self.pos = 0;
        match self.reader.read_line(&mut self.line) {
            Ok(0) => {
                self.finished = true;
                false
            }
            Ok(_) => true,
            Err(e) => {
                self.error = Some(e);
                self.finished = true;
                false
            }
        }
    }
}

impl<R: BufRead> CharInput for ReaderInput<R> {
    fn has_more(&mut self) -> bool {
        self.pos < self.line.len() || self.refill()
    }

    fn take_next(&mut self) -> char {
        if !self.has_more() {
            return '\0';
        }
        match self.line[self.pos..].chars().next() {
            Some(c) => {
                self.pos += c.len_utf8();
                c
            }
            None => '\0',
        }
    }
}

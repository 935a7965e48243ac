//! Integration tests for the character cursor.

use std::cell::Cell;

use tagpull_common::MarkupError;
use tagpull_parser::{CharSource, CursorState, from_fn, str_input};

#[test]
fn test_empty_input_is_rejected() {
    let result = CharSource::new(str_input(""));
    assert!(matches!(result, Err(MarkupError::EmptyInput)));
}

#[test]
fn test_walks_to_exhaustion() {
    let mut source = CharSource::new(str_input("ab")).unwrap();
    assert_eq!(source.peek(), Ok('a'));
    assert_eq!(source.state(), CursorState::Loaded);
    assert!(source.has_more());

    source.advance().unwrap();
    assert_eq!(source.peek(), Ok('b'));
    assert_eq!(source.state(), CursorState::TrailingUnconsumed);
    assert!(!source.has_more());

    source.advance().unwrap();
    assert_eq!(source.state(), CursorState::Exhausted);
    assert!(matches!(
        source.peek(),
        Err(MarkupError::UnexpectedEndOfInput { .. })
    ));
    assert!(source.advance().is_err());
}

#[test]
fn test_single_character_is_trailing() {
    let source = CharSource::new(str_input("x")).unwrap();
    assert_eq!(source.state(), CursorState::TrailingUnconsumed);
    assert_eq!(source.state().to_string(), "TrailingUnconsumed");
    assert_eq!(source.peek(), Ok('x'));
}

#[test]
fn test_pulls_one_character_per_advance() {
    let data: Vec<char> = "abc".chars().collect();
    let taken = Cell::new(0usize);
    let input = from_fn(
        || taken.get() < data.len(),
        || {
            let c = data[taken.get()];
            taken.set(taken.get() + 1);
            c
        },
    );

    let mut source = CharSource::new(input).unwrap();
    assert_eq!(taken.get(), 1);
    source.advance().unwrap();
    assert_eq!(taken.get(), 2);
    assert_eq!(source.peek(), Ok('b'));
}

//! Integration tests for the tag stream.

use tagpull_common::MarkupError;
use tagpull_parser::{CursorState, StrInput, Tag, TagStream, str_input};
use tagpull_tree::AttributesMap;

/// Helper to create a tag stream over a string
fn stream(input: &str) -> TagStream<StrInput<'_>> {
    TagStream::new(str_input(input)).unwrap()
}

/// Helper to read every tag from a string
fn tags(input: &str) -> Result<Vec<Tag>, MarkupError> {
    stream(input).collect()
}

/// Helper to load the first tag of a string
fn first_tag(input: &str) -> Result<Tag, MarkupError> {
    let mut s = stream(input);
    s.load_next_tag()?;
    Ok(s.peek().clone())
}

fn attrs(pairs: &[(&str, &str)]) -> AttributesMap {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn start(name: &str, pairs: &[(&str, &str)]) -> Tag {
    Tag::Start {
        name: name.to_string(),
        attributes: attrs(pairs),
    }
}

fn end(name: &str) -> Tag {
    Tag::End {
        name: name.to_string(),
    }
}

// =============================================================================
// Tag kinds
// =============================================================================

#[test]
fn test_start_text_end() {
    assert_eq!(
        tags("<a>hi</a>").unwrap(),
        vec![start("a", &[]), Tag::Text("hi".to_string()), end("a")]
    );
}

#[test]
fn test_self_closing() {
    assert_eq!(
        tags("<x/>").unwrap(),
        vec![Tag::SelfClosing {
            name: "x".to_string(),
            attributes: AttributesMap::new(),
        }]
    );
}

#[test]
fn test_fresh_stream_holds_sentinel() {
    let mut s = stream("<a/>");
    assert!(s.peek().is_empty());
    s.skip_empty_tag().unwrap();
    assert!(s.peek().is_self_closing());
    // A loaded tag is not replaced by a second skip.
    s.skip_empty_tag().unwrap();
    assert!(s.peek().is_self_closing());
}

#[test]
fn test_unload_current_tag() {
    let mut s = stream("<a/>");
    s.load_next_tag().unwrap();
    s.unload_current_tag();
    assert_eq!(s.peek(), &Tag::Empty);
}

// =============================================================================
// Attributes
// =============================================================================

#[test]
fn test_attributes() {
    assert_eq!(
        first_tag("<x a=\"1\" b=\"2\">").unwrap(),
        start("x", &[("a", "1"), ("b", "2")])
    );
}

#[test]
fn test_attribute_whitespace_around_equals() {
    assert_eq!(
        first_tag("<x a = \"1\">").unwrap(),
        start("x", &[("a", "1")])
    );
}

#[test]
fn test_attribute_value_keeps_raw_content() {
    assert_eq!(
        first_tag("<x title=\"a b/c>d\">").unwrap(),
        start("x", &[("title", "a b/c>d")])
    );
}

#[test]
fn test_self_closing_with_attribute() {
    assert_eq!(
        first_tag("<x a=\"1\"/>").unwrap(),
        Tag::SelfClosing {
            name: "x".to_string(),
            attributes: attrs(&[("a", "1")]),
        }
    );
}

#[test]
fn test_duplicate_attribute_keeps_last_and_warns() {
    let mut s = stream("<x a=\"1\" a=\"2\"/>");
    s.load_next_tag().unwrap();
    assert_eq!(s.peek().attributes(), Some(&attrs(&[("a", "2")])));
    assert_eq!(s.issues().len(), 1);
    assert!(!s.issues()[0].is_error);
    assert!(s.issues()[0].message.contains("duplicate attribute `a`"));
}

// =============================================================================
// Malformed markup
// =============================================================================

#[test]
fn test_missing_equals() {
    assert_eq!(
        first_tag("<x a \"1\">"),
        Err(MarkupError::MalformedTag {
            expected: '=',
            found: "\"".to_string(),
        })
    );
}

#[test]
fn test_missing_quote() {
    assert_eq!(
        first_tag("<x a=1>"),
        Err(MarkupError::MalformedTag {
            expected: '"',
            found: "1".to_string(),
        })
    );
}

#[test]
fn test_self_closing_requires_gt() {
    assert_eq!(
        first_tag("<x/ >"),
        Err(MarkupError::MalformedTag {
            expected: '>',
            found: " ".to_string(),
        })
    );
}

#[test]
fn test_unterminated_attribute_value() {
    assert_eq!(
        first_tag("<x a=\"1"),
        Err(MarkupError::UnexpectedEndOfInput {
            context: "inside an attribute value",
        })
    );
}

#[test]
fn test_unterminated_tag() {
    assert!(matches!(
        first_tag("<x"),
        Err(MarkupError::UnexpectedEndOfInput { .. })
    ));
}

#[test]
fn test_iterator_stops_after_error() {
    let mut s = stream("<x a=1><y/>");
    assert!(matches!(s.next(), Some(Err(MarkupError::MalformedTag { .. }))));
    assert!(s.next().is_none());
}

// =============================================================================
// Closing tags and strict mode
// =============================================================================

#[test]
fn test_end_tag_content_ignored_with_issue() {
    let mut s = stream("</a junk>");
    s.load_next_tag().unwrap();
    assert_eq!(s.peek(), &end("a"));
    assert_eq!(s.issues().len(), 1);
    assert!(s.issues()[0].is_error);
    assert!(s.issues()[0].message.contains("junk"));
    // `<`, `/`, `a`, ` ` and `junk` were consumed before the `>`.
    assert_eq!(s.issues()[0].token_index, 5);
}

#[test]
fn test_end_tag_whitespace_is_not_an_issue() {
    let mut s = stream("</a >");
    s.load_next_tag().unwrap();
    assert_eq!(s.peek(), &end("a"));
    assert!(s.issues().is_empty());
}

#[test]
fn test_strict_mode_rejects_end_tag_content() {
    let mut s = stream("</a junk>").with_strict_mode();
    assert!(s.is_strict());
    assert_eq!(
        s.load_next_tag(),
        Err(MarkupError::MalformedTag {
            expected: '>',
            found: "junk".to_string(),
        })
    );
}

#[test]
fn test_take_issues_drains() {
    let mut s = stream("</a junk>");
    s.load_next_tag().unwrap();
    assert_eq!(s.take_issues().len(), 1);
    assert!(s.issues().is_empty());
}

// =============================================================================
// Text and whitespace
// =============================================================================

#[test]
fn test_leading_whitespace_is_skipped() {
    assert_eq!(
        tags("  hello world").unwrap(),
        vec![Tag::Text("hello world".to_string())]
    );
}

#[test]
fn test_text_keeps_trailing_whitespace() {
    assert_eq!(
        tags("<p>ab cd </p>").unwrap(),
        vec![start("p", &[]), Tag::Text("ab cd ".to_string()), end("p")]
    );
}

#[test]
fn test_whitespace_between_tags_is_skipped() {
    assert_eq!(
        tags("<a>\n\t<b/>\n</a>").unwrap().len(),
        3
    );
}

#[test]
fn test_trailing_whitespace_becomes_text() {
    let mut s = stream("<a/> ");
    s.load_next_tag().unwrap();
    s.load_next_tag().unwrap();
    assert_eq!(s.peek(), &Tag::Text(" ".to_string()));
    assert_eq!(s.issues().len(), 1);
    assert!(!s.has_next_tag());
}

// =============================================================================
// Exhaustion
// =============================================================================

#[test]
fn test_exhaustion() {
    let mut s = stream("x");
    assert!(s.has_next_tag());
    s.load_next_tag().unwrap();
    assert_eq!(s.peek(), &Tag::Text("x".to_string()));
    assert_eq!(s.state(), CursorState::Exhausted);
    assert!(!s.has_next_tag());
    assert!(matches!(
        s.load_next_tag(),
        Err(MarkupError::UnexpectedEndOfInput { .. })
    ));
}

#[test]
fn test_tag_display() {
    assert_eq!(start("x", &[("b", "2"), ("a", "1")]).to_string(), "<x a=\"1\" b=\"2\">");
    assert_eq!(end("x").to_string(), "</x>");
    assert_eq!(
        Tag::SelfClosing {
            name: "x".to_string(),
            attributes: AttributesMap::new(),
        }
        .to_string(),
        "<x/>"
    );
    assert_eq!(Tag::Empty.to_string(), "<empty>");
    assert_eq!(Tag::Text("hi".to_string()).to_string(), "hi");
}

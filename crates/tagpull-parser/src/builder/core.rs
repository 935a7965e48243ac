use tagpull_common::{MarkupError, ParseIssue, Result};
use tagpull_tree::Element;

use crate::input::{CharInput, str_input};
use crate::tags::{Tag, TagStream};

/// Build one element starting at the current tag.
///
/// Grammar:
///
/// ```text
/// element  := TEXT | SELF_CLOSING_TAG | START_TAG children END_TAG
/// children := element*
/// ```
///
/// A text or self-closing tag is a leaf and stays current; the caller moves
/// past it. For a start tag the matching end tag is consumed and the stream
/// is left holding the empty sentinel.
///
/// # Errors
///
/// Returns [`MarkupError::TagMismatch`] if a closing tag does not match the
/// innermost open tag (or there is no open tag at all), and
/// [`MarkupError::UnexpectedEndOfInput`] if the input ends before an open
/// tag is closed. Errors from the tag stream are propagated.
pub fn build_element<I: CharInput>(stream: &mut TagStream<I>) -> Result<Element> {
    stream.skip_empty_tag()?;

    let tag = stream.peek().clone();
    if tag.is_text() || tag.is_self_closing() {
        return tag.into_element(Vec::new());
    }

    let name = match &tag {
        Tag::Start { name, .. } => name.clone(),
        Tag::End { name } => {
            return Err(MarkupError::TagMismatch {
                expected: String::new(),
                found: name.clone(),
            });
        }
        Tag::Empty | Tag::Text(_) | Tag::SelfClosing { .. } => {
            return Err(MarkupError::end_of_input("before the first tag"));
        }
    };

    if !stream.has_next_tag() {
        return Err(MarkupError::end_of_input("before the closing tag of an open element"));
    }
    stream.load_next_tag()?;

    let children = build_children(stream, &name)?;
    stream.unload_current_tag();
    tag.into_element(children)
}

/// Build sibling elements until the end tag named `expected`.
///
/// The end tag is left as the current tag.
///
/// # Errors
///
/// Returns [`MarkupError::TagMismatch`] naming `expected` and the found name
/// if a different end tag comes first, and
/// [`MarkupError::UnexpectedEndOfInput`] if the input ends before it.
pub fn build_children<I: CharInput>(
    stream: &mut TagStream<I>,
    expected: &str,
) -> Result<Vec<Element>> {
    let mut children = Vec::new();
    loop {
        if let Tag::End { name } = stream.peek() {
            if name != expected {
                return Err(MarkupError::TagMismatch {
                    expected: expected.to_string(),
                    found: name.clone(),
                });
            }
            return Ok(children);
        }

        children.push(build_element(stream)?);

        if !stream.has_next_tag() {
            return Err(MarkupError::end_of_input(
                "before the closing tag of an open element",
            ));
        }
        stream.load_next_tag()?;
    }
}

/// Parse one top-level element from `stream`.
///
/// Call once per document or fragment root.
///
/// # Errors
///
/// See [`build_element`].
pub fn parse_element<I: CharInput>(stream: &mut TagStream<I>) -> Result<Element> {
    build_element(stream)
}

/// Parse the first element of a string.
///
/// # Errors
///
/// Returns [`MarkupError::EmptyInput`] for an empty string, otherwise see
/// [`build_element`].
pub fn parse_str(input: &str) -> Result<Element> {
    let mut stream = TagStream::new(str_input(input))?;
    parse_element(&mut stream)
}

/// Parse one element and return it with the issues the stream recorded.
///
/// # Errors
///
/// See [`build_element`].
pub fn parse_with_issues<I: CharInput>(
    mut stream: TagStream<I>,
) -> Result<(Element, Vec<ParseIssue>)> {
    let element = parse_element(&mut stream)?;
    Ok((element, stream.take_issues()))
}

/// Parse every top-level element until the input is exhausted.
///
/// Whitespace-only text between or after roots is dropped.
///
/// # Errors
///
/// See [`build_element`].
pub fn parse_fragment<I: CharInput>(stream: &mut TagStream<I>) -> Result<Vec<Element>> {
    let mut roots = Vec::new();
    while stream.has_next_tag() {
        let element = parse_element(stream)?;
        // A leaf stays current after it is built; step past it.
        stream.unload_current_tag();
        if element.as_text().is_some_and(|t| t.trim().is_empty()) {
            continue;
        }
        roots.push(element);
    }
    Ok(roots)
}

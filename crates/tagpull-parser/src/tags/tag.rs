use core::fmt;

use tagpull_common::{MarkupError, Result};
use tagpull_tree::{AttributesMap, Element};

/// One recognized unit of markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Tag {
    /// Sentinel for "no tag loaded yet".
    #[default]
    Empty,
    /// A run of character data.
    Text(String),
    /// `<name attr="value">`
    Start {
        /// The tag name.
        name: String,
        /// Attribute name to value, last occurrence wins.
        attributes: AttributesMap,
    },
    /// `</name>`
    End {
        /// The tag name.
        name: String,
    },
    /// `<name attr="value"/>`, both a start and an end.
    SelfClosing {
        /// The tag name.
        name: String,
        /// Attribute name to value, last occurrence wins.
        attributes: AttributesMap,
    },
}

impl Tag {
    /// Returns true for the [`Tag::Empty`] sentinel.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns true for a text run.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns true if the tag opens an element (start or self-closing).
    #[must_use]
    pub const fn is_start(&self) -> bool {
        matches!(self, Self::Start { .. } | Self::SelfClosing { .. })
    }

    /// Returns true if the tag closes an element (end or self-closing).
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self, Self::End { .. } | Self::SelfClosing { .. })
    }

    /// Returns true if the tag both opens and closes an element.
    #[must_use]
    pub const fn is_self_closing(&self) -> bool {
        matches!(self, Self::SelfClosing { .. })
    }

    /// The tag name, for every kind except text and the sentinel.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Start { name, .. } | Self::End { name } | Self::SelfClosing { name, .. } => {
                Some(name)
            }
            Self::Empty | Self::Text(_) => None,
        }
    }

    /// The attributes of a start or self-closing tag.
    #[must_use]
    pub const fn attributes(&self) -> Option<&AttributesMap> {
        match self {
            Self::Start { attributes, .. } | Self::SelfClosing { attributes, .. } => {
                Some(attributes)
            }
            Self::Empty | Self::Text(_) | Self::End { .. } => None,
        }
    }

    /// Build the element this tag opens, with the given children.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::InvalidAccess`] for an end tag or the sentinel,
    /// neither of which opens an element.
    pub fn into_element(self, children: Vec<Element>) -> Result<Element> {
        match self {
            Self::Text(content) => Ok(Element::Text(content)),
            Self::Start { name, attributes } | Self::SelfClosing { name, attributes } => {
                Ok(Element::markup(name, attributes, children))
            }
            Self::End { .. } | Self::Empty => Err(MarkupError::InvalidAccess {
                message: "only text, start and self-closing tags become elements",
            }),
        }
    }
}

fn write_attributes(f: &mut fmt::Formatter<'_>, attributes: &AttributesMap) -> fmt::Result {
    let mut sorted: Vec<_> = attributes.iter().collect();
    sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
    for (name, value) in sorted {
        write!(f, " {name}=\"{value}\"")?;
    }
    Ok(())
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "<empty>"),
            Self::Text(content) => f.write_str(content),
            Self::Start { name, attributes } => {
                write!(f, "<{name}")?;
                write_attributes(f, attributes)?;
                write!(f, ">")
            }
            Self::End { name } => write!(f, "</{name}>"),
            Self::SelfClosing { name, attributes } => {
                write!(f, "<{name}")?;
                write_attributes(f, attributes)?;
                write!(f, "/>")
            }
        }
    }
}

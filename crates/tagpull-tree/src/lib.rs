//! Element tree produced by the tagpull parser.
//!
//! # Design
//!
//! The tree is the only durable output of a parse. Each [`Element`] owns its
//! children outright: there is no sharing, no parent pointer and no cycle, so
//! a finished tree can be moved, cloned or dropped without touching the
//! cursors that built it.
//!
//! Text is its own variant rather than an element with a reserved attribute,
//! so asking a text node for its children (or a tag for its text) is an
//! [`MarkupError::InvalidAccess`] instead of a silent empty answer.

use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Write as _};

use serde::ser::{Serialize, SerializeMap, Serializer};
use tagpull_common::{MarkupError, Result};

/// Map of attribute names to values for a markup element.
///
/// Keys are unique; iteration order is unspecified.
pub type AttributesMap = HashMap<String, String>;

/// A node in the parsed tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// A run of character data between tags.
    Text(String),
    /// A tag with its attributes and child elements.
    Markup(MarkupElement),
}

/// Tag-specific data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupElement {
    /// The tag name, exactly as written.
    pub name: String,
    /// Attribute name to value.
    pub attributes: AttributesMap,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl MarkupElement {
    /// Returns the value of the named attribute if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attributes sorted by name, for stable output.
    #[must_use]
    pub fn sorted_attributes(&self) -> Vec<(&str, &str)> {
        let mut attrs: Vec<(&str, &str)> = self
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        attrs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        attrs
    }
}

impl Element {
    /// Create a text element.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Create a markup element.
    #[must_use]
    pub fn markup(
        name: impl Into<String>,
        attributes: AttributesMap,
        children: Vec<Self>,
    ) -> Self {
        Self::Markup(MarkupElement {
            name: name.into(),
            attributes,
            children,
        })
    }

    /// Returns true if this is a text element.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Get the markup data if this is a tag element.
    #[must_use]
    pub const fn as_markup(&self) -> Option<&MarkupElement> {
        match self {
            Self::Markup(data) => Some(data),
            Self::Text(_) => None,
        }
    }

    /// Get the text if this is a text element.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(content) => Some(content),
            Self::Markup(_) => None,
        }
    }

    /// Child elements of a tag element.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::InvalidAccess`] for a text element.
    pub fn children(&self) -> Result<&[Self]> {
        self.as_markup()
            .map(|data| data.children.as_slice())
            .ok_or(MarkupError::InvalidAccess {
                message: "tried to get the children of a text element",
            })
    }

    /// Name of a tag element.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::InvalidAccess`] for a text element.
    pub fn tag_name(&self) -> Result<&str> {
        self.as_markup()
            .map(|data| data.name.as_str())
            .ok_or(MarkupError::InvalidAccess {
                message: "tried to get the tag name of a text element",
            })
    }

    /// Attributes of a tag element.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::InvalidAccess`] for a text element.
    pub fn attributes(&self) -> Result<&AttributesMap> {
        self.as_markup()
            .map(|data| &data.attributes)
            .ok_or(MarkupError::InvalidAccess {
                message: "tried to get the attributes of a text element",
            })
    }

    /// Content of a text element.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::InvalidAccess`] for a tag element.
    pub fn text_content(&self) -> Result<&str> {
        self.as_text().ok_or(MarkupError::InvalidAccess {
            message: "tried to get the text content of a tag element",
        })
    }

    /// Value of the named attribute, or `None` for text and missing attributes.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.as_markup().and_then(|data| data.attribute(name))
    }

    /// Iterate over this element and all of its descendants in pre-order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// First tag element named `name`, depth-first, including `self`.
    #[must_use]
    pub fn find_first(&self, name: &str) -> Option<&Self> {
        self.descendants()
            .find(|e| e.as_markup().is_some_and(|data| data.name == name))
    }

    /// Number of levels in the subtree. A leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Text(_) => 1,
            Self::Markup(data) => 1 + data.children.iter().map(Self::depth).max().unwrap_or(0),
        }
    }

    /// Concatenated text of every text element in the subtree.
    #[must_use]
    pub fn collect_text(&self) -> String {
        self.descendants().filter_map(Self::as_text).collect()
    }

    /// Re-serialize the subtree as indented markup.
    ///
    /// Every element starts on a new line indented with one tab per level,
    /// beginning at `indent`. Tags are always written as explicit start/end
    /// pairs and attributes are sorted by name. Whitespace inside the
    /// original tags is not reproduced.
    #[must_use]
    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        self.render_into(&mut out, indent);
        out
    }

    fn render_into(&self, out: &mut String, indent: usize) {
        push_line_break(out, indent);
        match self {
            Self::Text(content) => out.push_str(content),
            Self::Markup(data) => {
                let _ = write!(out, "<{}", data.name);
                for (name, value) in data.sorted_attributes() {
                    let _ = write!(out, " {name}=\"{value}\"");
                }
                out.push('>');
                for child in &data.children {
                    child.render_into(out, indent + 1);
                }
                push_line_break(out, indent);
                let _ = write!(out, "</{}>", data.name);
            }
        }
    }
}

fn push_line_break(out: &mut String, indent: usize) {
    out.push('\n');
    for _ in 0..indent {
        out.push('\t');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Text(content) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "text")?;
                map.serialize_entry("content", content)?;
                map.end()
            }
            Self::Markup(data) => {
                let attributes: BTreeMap<&str, &str> =
                    data.sorted_attributes().into_iter().collect();
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("type", "element")?;
                map.serialize_entry("name", &data.name)?;
                map.serialize_entry("attributes", &attributes)?;
                map.serialize_entry("children", &data.children)?;
                map.end()
            }
        }
    }
}

/// Pre-order iterator over an element subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        if let Element::Markup(data) = current {
            self.stack.extend(data.children.iter().rev());
        }
        Some(current)
    }
}

/// Print an element tree for debugging.
pub fn print_tree(element: &Element, indent: usize) {
    let prefix = "  ".repeat(indent);
    match element {
        Element::Text(content) => {
            let display = content.replace('\n', "\\n").replace(' ', "\u{00B7}");
            println!("{prefix}\"{display}\"");
        }
        Element::Markup(data) => {
            if data.attributes.is_empty() {
                println!("{prefix}<{}>", data.name);
            } else {
                let attrs: Vec<String> = data
                    .sorted_attributes()
                    .into_iter()
                    .map(|(k, v)| format!("{k}=\"{v}\""))
                    .collect();
                println!("{prefix}<{} {}>", data.name, attrs.join(" "));
            }
            for child in &data.children {
                print_tree(child, indent + 1);
            }
        }
    }
}

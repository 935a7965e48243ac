//! Element tree builder module.

/// Recursive-descent tree construction over a tag stream.
pub mod core;

pub use self::core::{
    build_children, build_element, parse_element, parse_fragment, parse_str, parse_with_issues,
};

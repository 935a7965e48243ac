//! Parse issues with colored terminal output.
//!
//! The tag stream records input it tolerated instead of rejecting. Issues live
//! with the stream that produced them; nothing here is process-wide. Printing
//! is left to the front end.

use std::fmt;

use owo_colors::OwoColorize;

/// A recoverable oddity noticed while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Human-readable description of what was tolerated.
    pub message: String,
    /// Number of tokens consumed by the tag stream when the issue was recorded.
    pub token_index: usize,
    /// True when the input is wrong but parsing carried on anyway.
    pub is_error: bool,
}

impl ParseIssue {
    /// Create a warning-level issue.
    #[must_use]
    pub fn warning(message: impl Into<String>, token_index: usize) -> Self {
        Self {
            message: message.into(),
            token_index,
            is_error: false,
        }
    }

    /// Create an error-level issue.
    #[must_use]
    pub fn error(message: impl Into<String>, token_index: usize) -> Self {
        Self {
            message: message.into(),
            token_index,
            is_error: true,
        }
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (token {})", self.message, self.token_index)
    }
}

/// Print an issue to stderr.
///
/// # Example
/// ```ignore
/// report_issue("Tag Stream", &ParseIssue::warning("ignored `x` in closing tag", 7));
/// ```
pub fn report_issue(component: &str, issue: &ParseIssue) {
    let line = format!("[tagpull {component}] ⚠ {issue}");
    if issue.is_error {
        eprintln!("{}", line.red());
    } else {
        eprintln!("{}", line.yellow());
    }
}

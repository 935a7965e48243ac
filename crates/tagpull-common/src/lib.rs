//! Common utilities for the tagpull parser.
//!
//! This crate provides shared infrastructure used by every tagpull component:
//! - **Error taxonomy** - the single [`MarkupError`] type every stage returns
//! - **Issue reporting** - recoverable parse oddities and their colored terminal output

pub mod error;
pub mod issue;

pub use error::{MarkupError, Result};
pub use issue::{ParseIssue, report_issue};

//! Embedded code formatter boundary
//!
//! The general-purpose code formatter is an external collaborator: it takes
//! source text plus options and either returns formatted text or fails. The
//! failure is surfaced as a value so callers degrade explicitly instead of
//! catching panics; one malformed attribute must never abort the rest of
//! the document.

use crate::options::EmbeddedOptions;
use std::fmt;
use std::future::Future;

/// Errors an embedded formatter may report.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The source did not parse under the forced grammar.
    Syntax(String),
    /// The formatter failed for a reason other than bad input.
    Internal(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Syntax(msg) => write!(f, "syntax error in embedded code: {}", msg),
            FormatError::Internal(msg) => write!(f, "embedded formatter failed: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

/// A general-purpose code formatter for embedded attribute code.
///
/// Formatting may suspend (the host formatter typically runs out of
/// process), so the operation is a future; the tree walk awaits each call
/// before moving to the next attribute.
pub trait EmbeddedFormatter {
    fn format(
        &self,
        source: &str,
        options: &EmbeddedOptions,
    ) -> impl Future<Output = Result<String, FormatError>>;
}

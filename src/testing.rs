//! Testing utilities
//!
//! Test doubles for the embedded-formatter collaborator, shared by unit and
//! integration tests.
//!
//! ## Rule: script the formatter, don't emulate it
//!
//! The real embedded formatter is a full statement-language printer; tests
//! that try to reproduce its output drift out of date and assert on the
//! double instead of on this crate. Prefer [`ScriptedFormatter`] with the
//! exact input/output pair the scenario needs. [`StatementFormatter`] exists
//! for property-style tests where any whitespace-normalizing,
//! terminator-appending formatter will do, and [`FailingFormatter`] for the
//! degradation path.

use crate::formatter::{EmbeddedFormatter, FormatError};
use crate::markup::{MarkupNode, Position};
use crate::options::EmbeddedOptions;
use std::collections::HashMap;

/// Replays canned responses keyed on the exact source handed in.
///
/// Unscripted input is a syntax error, which doubles as a guard against a
/// test exercising a path it didn't mean to.
#[derive(Debug, Default, Clone)]
pub struct ScriptedFormatter {
    responses: HashMap<String, String>,
}

impl ScriptedFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script one exchange: `source` in, `formatted` out.
    pub fn on(mut self, source: impl Into<String>, formatted: impl Into<String>) -> Self {
        self.responses.insert(source.into(), formatted.into());
        self
    }
}

impl EmbeddedFormatter for ScriptedFormatter {
    async fn format(
        &self,
        source: &str,
        _options: &EmbeddedOptions,
    ) -> Result<String, FormatError> {
        match self.responses.get(source) {
            Some(formatted) => Ok(formatted.clone()),
            None => Err(FormatError::Syntax(format!("unscripted input: {source}"))),
        }
    }
}

/// Fails on every input. Exercises the keep-the-original fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingFormatter;

impl EmbeddedFormatter for FailingFormatter {
    async fn format(
        &self,
        _source: &str,
        _options: &EmbeddedOptions,
    ) -> Result<String, FormatError> {
        Err(FormatError::Internal("formatter unavailable".to_string()))
    }
}

/// A minimal statement printer: collapses runs of whitespace and terminates
/// the statement. Token content passes through untouched, which is exactly
/// the invariant reformatting must preserve.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatementFormatter;

impl EmbeddedFormatter for StatementFormatter {
    async fn format(
        &self,
        source: &str,
        _options: &EmbeddedOptions,
    ) -> Result<String, FormatError> {
        let mut formatted = source.split_whitespace().collect::<Vec<_>>().join(" ");
        formatted.push(';');
        formatted.push('\n');
        Ok(formatted)
    }
}

/// Shorthand for a positioned element, the common fixture shape.
pub fn element_at(name: &str, line: usize, column: usize) -> MarkupNode {
    MarkupNode::new(name).with_position(Position::new(line, column))
}

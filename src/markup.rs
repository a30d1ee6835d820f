//! Markup tree data model
//!
//! These types mirror the tree handed over by the host markup parser: elements
//! carry an ordered attribute list, optional children, and an optional source
//! position. The formatter only ever rewrites attribute values in place; it
//! never creates or removes nodes.
//!
//! Attribute order is part of the contract: values are reformatted in list
//! order, so attributes live in a `Vec`, not a map.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A line/column position in the original markup source.
///
/// Columns are 0-based offsets from the start of the line; an element that
/// opens at the very start of a line has column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A name/value pair on a markup element.
///
/// The value is optional: boolean attributes (`<details open>`) carry none,
/// and such attributes are never reformatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{}=\"{}\"", self.name, v),
            None => write!(f, "{}", self.name),
        }
    }
}

/// An element in the parsed markup tree.
///
/// Synthetic nodes (the document root, fragments) carry no position; their
/// attributes are still processed, with the indent defaulting to column 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkupNode {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<MarkupNode>,
    pub position: Option<Position>,
}

impl MarkupNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            position: None,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }

    /// The column this node starts at, or 0 when the parser supplied no
    /// position.
    pub fn base_indent(&self) -> usize {
        self.position.map(|p| p.column).unwrap_or(0)
    }

    /// Look up an attribute value by name. Convenience for tests and callers
    /// inspecting a mutated tree.
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .and_then(|a| a.value.as_deref())
    }
}

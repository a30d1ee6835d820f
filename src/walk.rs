//! Tree traversal
//!
//! Depth-first, pre-order: a node's attributes are rewritten before its
//! children are visited, children in document order, every node exactly
//! once. Each embedded format call is awaited before the next attribute is
//! touched, so the mutation order over the whole tree is deterministic.
//!
//! The walk holds the only reference to the tree for its duration; values
//! are rewritten through that exclusive borrow.

use crate::classify::classify;
use crate::formatter::EmbeddedFormatter;
use crate::markup::MarkupNode;
use crate::options::FormatOptions;
use crate::reformat::reformat;

/// Walk a markup tree, reformatting every attribute that holds code.
///
/// Attributes with no value or an empty value are left untouched, as is any
/// attribute the classifier rejects. The node's source column anchors the
/// indentation of multi-line values; synthetic nodes without a position
/// anchor at column 0.
pub async fn walk<F: EmbeddedFormatter>(
    node: &mut MarkupNode,
    options: &FormatOptions,
    formatter: &F,
) {
    let base_indent = node.base_indent();

    for attribute in &mut node.attributes {
        let kind = match classify(&attribute.name) {
            Some(kind) => kind,
            None => continue,
        };
        let code = match attribute.value.as_deref() {
            Some(code) if !code.is_empty() => code,
            _ => continue,
        };
        let formatted = reformat(
            code,
            kind.is_expression(),
            options,
            &attribute.name,
            base_indent,
            formatter,
        )
        .await;
        attribute.value = Some(formatted);
    }

    for child in &mut node.children {
        Box::pin(walk(child, options, formatter)).await;
    }
}

//! Host formatter integration
//!
//! The markup parser and printer are external collaborators; this module
//! holds the seam they plug into, plus the drivers that wire a whole run
//! together: parse the source, walk the tree rewriting embedded code, and
//! hand the mutated tree back to the printer.
//!
//! Markup syntax errors are the parser's to report and propagate through
//! unchanged. Only embedded-code failures are swallowed, inside the walk.

use crate::formatter::EmbeddedFormatter;
use crate::markup::MarkupNode;
use crate::options::FormatOptions;
use crate::walk::walk;

/// The host markup parser/printer pair.
pub trait MarkupParser {
    type Error;

    /// Parse markup source into a tree. Positions on the nodes anchor the
    /// re-indentation of attribute values.
    fn parse(&self, text: &str, options: &FormatOptions) -> Result<MarkupNode, Self::Error>;

    /// Render a (possibly mutated) tree back to markup text.
    fn print(&self, tree: &MarkupNode, options: &FormatOptions) -> String;
}

/// Parse and reformat, returning the mutated tree for the host to print.
///
/// This is the hook shape host formatters expect from a parser extension:
/// the tree comes back with every code attribute rewritten, and printing
/// stays with the host.
pub async fn format_tree<P, F>(
    text: &str,
    options: &FormatOptions,
    parser: &P,
    formatter: &F,
) -> Result<MarkupNode, P::Error>
where
    P: MarkupParser,
    F: EmbeddedFormatter,
{
    let mut tree = parser.parse(text, options)?;
    walk(&mut tree, options, formatter).await;
    Ok(tree)
}

/// Parse, reformat, and print in one call.
pub async fn format_source<P, F>(
    text: &str,
    options: &FormatOptions,
    parser: &P,
    formatter: &F,
) -> Result<String, P::Error>
where
    P: MarkupParser,
    F: EmbeddedFormatter,
{
    let tree = format_tree(text, options, parser, formatter).await?;
    Ok(parser.print(&tree, options))
}

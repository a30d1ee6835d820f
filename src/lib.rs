//! # alpine-fmt
//!
//! Reformats the expression code embedded in Alpine-style markup attributes
//! (`x-data`, `x-show`, `:class`, `@click`, ...) as part of a host markup
//! formatting run.
//!
//! The host parses the markup and prints the result; this crate sits in
//! between. [`walk`](walk::walk) visits the parsed tree, [`classify`]
//! decides which attributes hold code, and [`reformat`](reformat::reformat)
//! pushes each value through an external code formatter: wrapping bare
//! expressions so the statement grammar accepts them, stripping the wrap
//! artifacts afterwards, and aligning multi-line results with the element's
//! source column. A value that fails to format is kept as written.
//!
//! ## Testing
//!
//! Collaborators are faked with the doubles in [`testing`]; see that
//! module's notes before writing tests against the formatter seam.

pub mod classify;
pub mod formatter;
pub mod markup;
pub mod options;
pub mod pipeline;
pub mod reformat;
pub mod testing;
pub mod walk;

// Re-export commonly used types at crate root
pub use classify::{classify, EmbeddedCode};
pub use formatter::{EmbeddedFormatter, FormatError};
pub use markup::{Attribute, MarkupNode, Position};
pub use options::{EmbeddedGrammar, EmbeddedOptions, FormatOptions, OptionsError};
pub use pipeline::{format_source, format_tree, MarkupParser};
pub use reformat::reformat;
pub use walk::walk;

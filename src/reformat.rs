//! Expression reformatting
//!
//! Attribute code is reformatted in five steps: wrap, format, unwrap, trim,
//! re-flow. Expressions are wrapped in parentheses first because the
//! embedded grammar only parses statements, and a bare expression like
//! `{ open: false }` would otherwise read as a block. After formatting, the
//! artifacts of that trick (the added parens and statement terminators)
//! are stripped again, and the result is fitted to the markup column the
//! attribute lives at: collapsed to one line when it fits the print width,
//! re-indented one level past the element otherwise.
//!
//! Reformatting never fails. Any formatter error leaves the original value
//! untouched, so a malformed attribute costs only its own formatting.

use crate::formatter::EmbeddedFormatter;
use crate::options::{EmbeddedOptions, FormatOptions};

/// Rendered width of the attribute opener, `="` plus the closing quote.
const ATTRIBUTE_QUOTING_WIDTH: usize = 3;

/// Reformat one attribute value.
///
/// `is_expression` selects the paren-wrapping path; `attr_name` and
/// `base_indent` describe where the value will be reinserted, which decides
/// between the single-line and indented multi-line forms. On formatter
/// failure the original `code` is returned unchanged.
pub async fn reformat<F: EmbeddedFormatter>(
    code: &str,
    is_expression: bool,
    options: &FormatOptions,
    attr_name: &str,
    base_indent: usize,
    formatter: &F,
) -> String {
    let wrapped = if is_expression {
        format!("({})", code)
    } else {
        code.to_string()
    };

    let embedded = EmbeddedOptions::from_host(options);
    let formatted = match formatter.format(&wrapped, &embedded).await {
        Ok(text) => text,
        Err(_) => return code.to_string(),
    };

    let mut text = formatted.trim();
    if is_expression {
        text = strip_leading_terminator(text);
        // The terminator comes off before the parens: the formatter emits
        // `(...);`, and the `;` would otherwise mask the closing paren.
        text = strip_trailing_terminator(text);
        text = strip_outer_parens(text);
    }
    let text = strip_trailing_terminator(text);

    reflow(text, attr_name, base_indent, options)
}

/// Strip one leading `;` left by automatic-semicolon handling.
fn strip_leading_terminator(text: &str) -> &str {
    match text.strip_prefix(';') {
        Some(rest) => rest.trim(),
        None => text,
    }
}

/// Strip one trailing statement terminator; attribute values are not
/// statement lists.
fn strip_trailing_terminator(text: &str) -> &str {
    match text.strip_suffix(';') {
        Some(rest) => rest.trim(),
        None => text,
    }
}

/// Strip exactly one outer paren pair, the one added before formatting.
///
/// The original code never both started with `(` and ended with a paren
/// closing it, because the wrap put exactly one such pair around the whole
/// expression; a call like `f(x)` starts with `f`, so its parens survive.
fn strip_outer_parens(text: &str) -> &str {
    if text.starts_with('(') && text.ends_with(')') {
        text[1..text.len() - 1].trim()
    } else {
        text
    }
}

/// Fit formatted code to the column it will be reinserted at.
///
/// The single-line form wins when `indent + name + ="..."` fits the print
/// width. Otherwise the formatter's own line layout is kept, with every
/// non-blank continuation line pushed one indent level past the element's
/// column; the first line stays bare since it is concatenated right after
/// the opening quote.
fn reflow(text: &str, attr_name: &str, base_indent: usize, options: &FormatOptions) -> String {
    let collapsed = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let rendered_width = base_indent
        + attr_name.chars().count()
        + ATTRIBUTE_QUOTING_WIDTH
        + collapsed.chars().count();
    if rendered_width <= options.print_width {
        return collapsed;
    }

    let continuation = " ".repeat(base_indent + options.tab_width);
    let mut lines = text.lines();
    let mut out = lines.next().unwrap_or("").to_string();
    for line in lines {
        out.push('\n');
        if !line.trim().is_empty() {
            out.push_str(&continuation);
            out.push_str(line);
        }
    }
    out
}

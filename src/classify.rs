//! Attribute classification
//!
//! Decides which markup attributes hold executable code. Two declarative
//! pattern families cover the directive grammar:
//!
//! - expression attributes: `:prop` shorthand bindings and the
//!   `x-data`/`x-show`/`x-bind`/... directives, whose values must parse as a
//!   single expression;
//! - action attributes: `@event` shorthand handlers and `x-init`/`x-on`/
//!   `x-effect`, whose values are statement bodies.
//!
//! Everything else is plain markup data and is left alone. Classification is
//! a pure function of the attribute name; it never looks at the value, the
//! element, or sibling attributes.

use once_cell::sync::Lazy;
use regex::Regex;

/// Directive roots whose values are expressions, with an optional
/// `.modifier`/`:argument` tail.
static EXPRESSION_ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(:[\w\d-]+|x-(data|show|bind|text|html|model|modelable|if|id)([.\w\d\-:])*)")
        .unwrap()
});

/// Directive roots whose values are statement bodies. Unanchored: the `@`
/// shorthand and `x-on` family match anywhere in the name, which also covers
/// prefixed spellings some templating layers emit.
static ACTION_ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@[\w\d-]+|x-(init|on|effect)([.\w\d\-:])*").unwrap());

/// The kind of embedded code an attribute value holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddedCode {
    /// A single expression, e.g. `x-show="open"`.
    Expression,
    /// A statement body, e.g. `@click="open = !open"`.
    Action,
}

impl EmbeddedCode {
    pub fn is_expression(self) -> bool {
        matches!(self, EmbeddedCode::Expression)
    }
}

/// Classify an attribute name. Returns `None` for attributes that carry no
/// code. When a name matches both families the expression grammar wins.
pub fn classify(name: &str) -> Option<EmbeddedCode> {
    if EXPRESSION_ATTRIBUTE.is_match(name) {
        Some(EmbeddedCode::Expression)
    } else if ACTION_ATTRIBUTE.is_match(name) {
        Some(EmbeddedCode::Action)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_bindings_are_expressions() {
        assert_eq!(classify(":class"), Some(EmbeddedCode::Expression));
        assert_eq!(classify(":aria-hidden"), Some(EmbeddedCode::Expression));
    }

    #[test]
    fn directive_roots_are_expressions() {
        for name in [
            "x-data",
            "x-show",
            "x-bind:class",
            "x-text",
            "x-html",
            "x-model.lazy",
            "x-modelable",
            "x-if",
            "x-id",
        ] {
            assert_eq!(classify(name), Some(EmbeddedCode::Expression), "{name}");
        }
    }

    #[test]
    fn event_handlers_are_actions() {
        assert_eq!(classify("@click"), Some(EmbeddedCode::Action));
        assert_eq!(classify("@keydown.escape"), Some(EmbeddedCode::Action));
        assert_eq!(classify("x-on:click.prevent"), Some(EmbeddedCode::Action));
        assert_eq!(classify("x-init"), Some(EmbeddedCode::Action));
        assert_eq!(classify("x-effect"), Some(EmbeddedCode::Action));
    }

    #[test]
    fn plain_attributes_are_not_code() {
        for name in ["class", "id", "href", "data-foo", "aria-label", "x-cloak"] {
            assert_eq!(classify(name), None, "{name}");
        }
    }

    #[test]
    fn expression_family_is_prefix_anchored() {
        // Only a leading `:` or `x-` root counts as a binding...
        assert_eq!(classify("data-x-data"), None);
        assert_eq!(classify("foo:bar"), None);
        // ...while the action family matches anywhere.
        assert_eq!(classify("data-x-on:click"), Some(EmbeddedCode::Action));
    }

    #[test]
    fn modifier_tails_stay_in_family() {
        assert_eq!(
            classify("x-bind:style.camel"),
            Some(EmbeddedCode::Expression)
        );
        assert_eq!(
            classify("x-on:keydown.window.escape"),
            Some(EmbeddedCode::Action)
        );
    }
}

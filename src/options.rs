//! Formatting options
//!
//! The host formatter hands its whole option record through. Only two fields
//! matter to this crate, the target line width and the indent unit, so
//! everything else is retained as opaque values and forwarded unmodified to
//! the embedded code formatter. Host configuration files come in both JSON
//! and YAML flavors; loaders for both are provided.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Options for a whole formatting run, as received from the host.
///
/// Unknown fields are not an error: they are collected into `passthrough`
/// and travel on to the embedded formatter untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    /// Target maximum rendered line width.
    pub print_width: usize,
    /// Width of one indentation level, in spaces.
    pub tab_width: usize,
    /// Every other host option, forwarded opaquely.
    #[serde(flatten)]
    pub passthrough: Map<String, Value>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            print_width: 80,
            tab_width: 2,
            passthrough: Map::new(),
        }
    }
}

impl FormatOptions {
    /// Parse options from JSON host configuration text.
    pub fn from_json(text: &str) -> Result<Self, OptionsError> {
        serde_json::from_str(text).map_err(|e| OptionsError::InvalidJson(e.to_string()))
    }

    /// Parse options from YAML host configuration text.
    pub fn from_yaml(text: &str) -> Result<Self, OptionsError> {
        serde_yaml::from_str(text).map_err(|e| OptionsError::InvalidYaml(e.to_string()))
    }
}

/// Errors from loading host configuration text.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsError {
    /// The JSON configuration did not deserialize.
    InvalidJson(String),
    /// The YAML configuration did not deserialize.
    InvalidYaml(String),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::InvalidJson(msg) => write!(f, "invalid JSON options: {}", msg),
            OptionsError::InvalidYaml(msg) => write!(f, "invalid YAML options: {}", msg),
        }
    }
}

impl std::error::Error for OptionsError {}

/// Grammar the embedded formatter is forced to parse attribute code with.
///
/// Attribute values are framework expressions, not markup, so the embedded
/// formatter always runs with a fixed statement-language grammar regardless
/// of what the host run was formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddedGrammar {
    TypeScript,
}

impl EmbeddedGrammar {
    pub fn as_str(self) -> &'static str {
        match self {
            EmbeddedGrammar::TypeScript => "typescript",
        }
    }
}

/// The option record handed to the embedded formatter for one attribute.
///
/// Derived from the host's [`FormatOptions`] with the grammar and quote
/// style overridden: single quotes, because the value will be reinserted
/// inside a double-quoted attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedOptions {
    pub grammar: EmbeddedGrammar,
    pub single_quote: bool,
    pub print_width: usize,
    pub tab_width: usize,
    #[serde(flatten)]
    pub passthrough: Map<String, Value>,
}

impl EmbeddedOptions {
    pub fn from_host(host: &FormatOptions) -> Self {
        Self {
            grammar: EmbeddedGrammar::TypeScript,
            single_quote: true,
            print_width: host.print_width,
            tab_width: host.tab_width,
            passthrough: host.passthrough.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_host_formatter() {
        let options = FormatOptions::default();
        assert_eq!(options.print_width, 80);
        assert_eq!(options.tab_width, 2);
        assert!(options.passthrough.is_empty());
    }

    #[test]
    fn json_config_keeps_unknown_fields() {
        let options =
            FormatOptions::from_json(r#"{"printWidth": 100, "semi": false, "useTabs": true}"#)
                .expect("config to parse");
        assert_eq!(options.print_width, 100);
        assert_eq!(options.tab_width, 2);
        assert_eq!(options.passthrough["semi"], Value::Bool(false));
        assert_eq!(options.passthrough["useTabs"], Value::Bool(true));
    }

    #[test]
    fn yaml_config_parses() {
        let options =
            FormatOptions::from_yaml("printWidth: 72\ntabWidth: 4\n").expect("config to parse");
        assert_eq!(options.print_width, 72);
        assert_eq!(options.tab_width, 4);
    }

    #[test]
    fn malformed_config_reports_the_format() {
        assert!(matches!(
            FormatOptions::from_json("{"),
            Err(OptionsError::InvalidJson(_))
        ));
        assert!(matches!(
            FormatOptions::from_yaml(": ["),
            Err(OptionsError::InvalidYaml(_))
        ));
    }

    #[test]
    fn embedded_options_force_grammar_and_quotes() {
        let mut host = FormatOptions::default();
        host.passthrough
            .insert("semi".to_string(), Value::Bool(false));
        let embedded = EmbeddedOptions::from_host(&host);
        assert_eq!(embedded.grammar, EmbeddedGrammar::TypeScript);
        assert!(embedded.single_quote);
        assert_eq!(embedded.print_width, host.print_width);
        assert_eq!(embedded.passthrough["semi"], Value::Bool(false));
    }
}

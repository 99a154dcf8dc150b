// Library exports for chartopts

pub mod coerce;
pub mod error;
pub mod node;
pub mod options;
pub mod parser;
pub mod render;
pub mod schema;
pub mod trim;
pub mod value;

pub use error::{OptionError, OptionResult};
pub use node::Node;
pub use schema::{ExternalKeyMap, Schema, SlotDef, SlotKind};
pub use value::{Color, Input, SlotValue};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum OutputFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "js")]
    #[default]
    Literal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

impl QuoteStyle {
    pub fn as_char(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderOptions {
    #[serde(default = "default_indent")]
    pub indent: usize,
    #[serde(default)]
    pub quote: QuoteStyle,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_indent() -> usize { 2 }

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            quote: QuoteStyle::Single,
            format: OutputFormat::Literal,
        }
    }
}

impl RenderOptions {
    /// Render a node according to `format`.
    pub fn render(&self, node: &Node) -> String {
        self.render_value(&serde_json::Value::Object(node.to_dict()))
    }

    pub fn render_value(&self, value: &serde_json::Value) -> String {
        match self.format {
            OutputFormat::Literal => render::to_js_literal(value, self),
            OutputFormat::Json if self.indent == 0 => value.to_string(),
            OutputFormat::Json => {
                let indent = " ".repeat(self.indent);
                let mut out = Vec::new();
                let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
                let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
                match serde::Serialize::serialize(value, &mut ser) {
                    Ok(()) => String::from_utf8(out).unwrap_or_else(|_| value.to_string()),
                    Err(_) => value.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_options_defaults() {
        let opts: RenderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.indent, 2);
        assert_eq!(opts.quote, QuoteStyle::Single);
        assert_eq!(opts.format, OutputFormat::Literal);
    }

    #[test]
    fn test_render_options_overrides() {
        let opts: RenderOptions = serde_json::from_str(r#"{"indent": 4, "quote": "double", "format": "json"}"#).unwrap();
        assert_eq!(opts.indent, 4);
        assert_eq!(opts.quote, QuoteStyle::Double);
        assert_eq!(opts.format, OutputFormat::Json);
    }

    #[test]
    fn test_render_json_indent() {
        let opts = RenderOptions {
            format: OutputFormat::Json,
            ..RenderOptions::default()
        };
        assert_eq!(opts.render_value(&json!({"a": [1]})), "{\n  \"a\": [\n    1\n  ]\n}");

        let compact = RenderOptions { indent: 0, ..opts };
        assert_eq!(compact.render_value(&json!({"a": [1]})), "{\"a\":[1]}");
    }
}

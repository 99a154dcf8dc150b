// Renderer for JavaScript object-literal notation
//
// Emits unquoted keys where the key is a plain identifier and passes callback
// source through verbatim, so the output reads back through `parse_literal`
// into the same mapping.

use std::fmt::Write;

use serde_json::{Map, Value};

use crate::parser::callback::is_callback;
use crate::parser::lexer::is_identifier;
use crate::{QuoteStyle, RenderOptions};

/// Render `value` as object-literal text.
///
/// With `indent: 0` everything is written on one line.
pub fn to_js_literal(value: &Value, options: &RenderOptions) -> String {
    let mut out = String::new();
    write_value(&mut out, value, options, 0);
    out
}

fn write_value(out: &mut String, value: &Value, options: &RenderOptions, depth: usize) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) if is_callback(s) => out.push_str(s.trim()),
        Value::String(s) => write_string(out, s, options.quote),
        Value::Array(items) => write_array(out, items, options, depth),
        Value::Object(map) => write_object(out, map, options, depth),
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

fn newline(out: &mut String, options: &RenderOptions, depth: usize) {
    out.push('\n');
    out.extend(std::iter::repeat(' ').take(options.indent * depth));
}

fn write_array(out: &mut String, items: &[Value], options: &RenderOptions, depth: usize) {
    // scalar arrays (and stops/positions of scalars) stay on one line
    let multiline = options.indent > 0 && items.iter().any(|v| matches!(v, Value::Object(m) if !m.is_empty()));
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
            if !multiline {
                out.push(' ');
            }
        }
        if multiline {
            newline(out, options, depth + 1);
        }
        let child_depth = if multiline { depth + 1 } else { depth };
        if !multiline && is_container(item) {
            write_inline(out, item, options);
        } else {
            write_value(out, item, options, child_depth);
        }
    }
    if multiline && !items.is_empty() {
        newline(out, options, depth);
    }
    out.push(']');
}

fn write_object(out: &mut String, map: &Map<String, Value>, options: &RenderOptions, depth: usize) {
    if map.is_empty() {
        out.push_str("{}");
        return;
    }
    if options.indent == 0 {
        write_inline(out, &Value::Object(map.clone()), options);
        return;
    }
    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        newline(out, options, depth + 1);
        write_key(out, key, options.quote);
        out.push_str(": ");
        write_value(out, value, options, depth + 1);
    }
    newline(out, options, depth);
    out.push('}');
}

/// Single-line rendering for nested containers inside inline arrays.
fn write_inline(out: &mut String, value: &Value, options: &RenderOptions) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_inline(out, item, options);
            }
            out.push(']');
        }
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(map) => {
            out.push_str("{ ");
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_key(out, key, options.quote);
                out.push_str(": ");
                write_inline(out, item, options);
            }
            out.push_str(" }");
        }
        scalar => write_value(out, scalar, options, 0),
    }
}

fn write_key(out: &mut String, key: &str, quote: QuoteStyle) {
    if is_identifier(key) {
        out.push_str(key);
    } else {
        write_string(out, key, quote);
    }
}

fn write_string(out: &mut String, s: &str, quote: QuoteStyle) {
    let q = quote.as_char();
    out.push(q);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == q => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(q);
}

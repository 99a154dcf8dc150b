// Parser for JavaScript object-literal notation
//
// Accepts a superset of JSON: unquoted keys, single-quoted strings, trailing
// commas, comments, `undefined`, and callback expressions (kept verbatim as
// strings). An optional `var name =` prefix and trailing `;` are allowed
// around the top-level value.

use super::callback::callback;
use super::lexer::{identifier, keyword, number_literal, skip, string_literal, ws};
use crate::error::{OptionError, OptionResult};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{cut, eof, map, opt, value},
    error::{Error, ErrorKind},
    multi::separated_list0,
    sequence::{preceded, separated_pair, terminated, tuple},
    IResult,
};
use serde_json::{Map, Value};

fn key(input: &str) -> IResult<&str, String> {
    alt((
        string_literal,
        identifier,
        map(number_literal, |n| n.to_string()),
    ))(input)
}

/// Containers nested deeper than this are rejected rather than recursed into.
pub const MAX_DEPTH: usize = 128;

fn entry(input: &str, depth: usize) -> IResult<&str, (String, Value)> {
    separated_pair(ws(key), cut(char(':')), cut(ws(|i| nested(i, depth))))(input)
}

fn object(input: &str, depth: usize) -> IResult<&str, Value> {
    let (input, _) = char('{')(input)?;
    let (input, entries) = cut(separated_list0(ws(char(',')), ws(|i| entry(i, depth))))(input)?;
    let (input, _) = opt(ws(char(',')))(input)?;
    let (input, _) = cut(preceded(skip, char('}')))(input)?;

    let mut map = Map::with_capacity(entries.len());
    for (k, v) in entries {
        // later duplicates win, as in JavaScript
        map.insert(k, v);
    }
    Ok((input, Value::Object(map)))
}

fn array(input: &str, depth: usize) -> IResult<&str, Value> {
    let (input, _) = char('[')(input)?;
    let (input, items) = cut(separated_list0(ws(char(',')), ws(|i| nested(i, depth))))(input)?;
    let (input, _) = opt(ws(char(',')))(input)?;
    let (input, _) = cut(preceded(skip, char(']')))(input)?;
    Ok((input, Value::Array(items)))
}

fn constant(input: &str) -> IResult<&str, Value> {
    alt((
        value(Value::Bool(true), keyword("true")),
        value(Value::Bool(false), keyword("false")),
        value(Value::Null, keyword("null")),
        value(Value::Null, keyword("undefined")),
    ))(input)
}

/// A value inside a container at `depth`.
fn nested(input: &str, depth: usize) -> IResult<&str, Value> {
    if depth >= MAX_DEPTH && (input.starts_with('{') || input.starts_with('[')) {
        return Err(nom::Err::Failure(Error::new(input, ErrorKind::TooLarge)));
    }
    value_at(input, depth + 1)
}

fn value_at(input: &str, depth: usize) -> IResult<&str, Value> {
    match input.chars().next() {
        Some('{') => object(input, depth),
        Some('[') => array(input, depth),
        _ => alt((
            map(string_literal, Value::String),
            map(callback, |src| Value::String(src.to_string())),
            constant,
            map(number_literal, Value::Number),
        ))(input),
    }
}

/// Parse a single literal value
pub fn literal_value(input: &str) -> IResult<&str, Value> {
    value_at(input, 0)
}

fn declaration(input: &str) -> IResult<&str, ()> {
    value(
        (),
        tuple((
            alt((keyword("var"), keyword("let"), keyword("const"))),
            ws(identifier),
            char('='),
        )),
    )(input)
}

/// Parse a complete literal document
/// Format: [var name =] value [;]
pub fn parse_document(input: &str) -> IResult<&str, Value> {
    let (input, _) = skip(input)?;
    let (input, _) = opt(declaration)(input)?;
    terminated(ws(literal_value), tuple((opt(ws(tag(";"))), eof)))(input)
}

/// Parse literal text into a JSON value, reporting the failure position.
pub fn parse_literal(source: &str) -> OptionResult<Value> {
    match parse_document(source) {
        Ok((_, value)) => Ok(value),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let offset = source.len() - e.input.len();
            Err(OptionError::literal_syntax(source, offset, describe(&e)))
        }
        Err(nom::Err::Incomplete(_)) => Err(OptionError::literal_syntax(
            source,
            source.len(),
            "unexpected end of input",
        )),
    }
}

fn describe(e: &Error<&str>) -> String {
    let found = match e.input.chars().next() {
        Some(c) => format!("`{c}`"),
        None => "end of input".to_string(),
    };
    let what = match e.code {
        ErrorKind::Char => "unexpected character",
        ErrorKind::Eof => "unexpected trailing input",
        ErrorKind::Escaped => "invalid escape sequence",
        ErrorKind::TakeUntil => "unterminated string",
        ErrorKind::MapRes => "invalid number",
        ErrorKind::TooLarge => "containers nested too deeply",
        _ => "expected a value",
    };
    format!("{what} at {found}")
}

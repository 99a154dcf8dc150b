// Lexical helpers for JavaScript object-literal notation

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_until},
    character::complete::{alpha1, alphanumeric1, multispace1},
    combinator::{map, map_res, not, opt, peek, recognize, value},
    error::{Error, ErrorKind},
    multi::{many0, many0_count},
    number::complete::recognize_float,
    sequence::{delimited, pair, terminated, tuple},
    IResult,
};
use serde_json::Number;

fn line_comment(input: &str) -> IResult<&str, &str> {
    recognize(pair(tag("//"), opt(is_not("\r\n"))))(input)
}

fn block_comment(input: &str) -> IResult<&str, &str> {
    recognize(tuple((tag("/*"), take_until("*/"), tag("*/"))))(input)
}

/// Skip whitespace and comments
pub fn skip(input: &str) -> IResult<&str, ()> {
    value((), many0(alt((multispace1, line_comment, block_comment))))(input)
}

/// Wrap a parser so that it tolerates surrounding whitespace and comments
pub fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(skip, inner, skip)
}

/// Identifier as a borrowed slice: `[A-Za-z_$][A-Za-z0-9_$]*`
pub fn identifier_str(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"), tag("$"))),
        many0_count(alt((alphanumeric1, tag("_"), tag("$")))),
    ))(input)
}

pub fn identifier(input: &str) -> IResult<&str, String> {
    map(identifier_str, String::from)(input)
}

pub fn is_identifier(s: &str) -> bool {
    matches!(identifier_str(s), Ok(("", _)))
}

/// A reserved word that must not run on into an identifier (`true` but not `trueish`)
pub fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    terminated(
        tag(word),
        not(peek(alt((alphanumeric1, tag("_"), tag("$"))))),
    )
}

/// Single- or double-quoted string with JavaScript escapes
pub fn string_literal(input: &str) -> IResult<&str, String> {
    let quote = match input.chars().next() {
        Some(q @ ('"' | '\'')) => q,
        _ => return Err(nom::Err::Error(Error::new(input, ErrorKind::Char))),
    };

    let mut out = String::new();
    let mut chars = input.char_indices().skip(1);
    while let Some((i, c)) = chars.next() {
        match c {
            c if c == quote => return Ok((&input[i + c.len_utf8()..], out)),
            '\\' => {
                let (j, esc) = match chars.next() {
                    Some(pair) => pair,
                    None => return Err(nom::Err::Failure(Error::new(&input[i..], ErrorKind::Escaped))),
                };
                match esc {
                    'n' => out.push('\n'),
                    'r' => out.push('\r'),
                    't' => out.push('\t'),
                    'b' => out.push('\u{0008}'),
                    'f' => out.push('\u{000C}'),
                    'v' => out.push('\u{000B}'),
                    '0' => out.push('\0'),
                    // line continuation
                    '\n' => {}
                    'u' => {
                        let hex = input
                            .get(j + 1..j + 5)
                            .filter(|h| h.chars().all(|c| c.is_ascii_hexdigit()));
                        let decoded = hex
                            .and_then(|h| u32::from_str_radix(h, 16).ok())
                            .and_then(char::from_u32);
                        match decoded {
                            Some(ch) => {
                                out.push(ch);
                                for _ in 0..4 {
                                    chars.next();
                                }
                            }
                            None => return Err(nom::Err::Failure(Error::new(&input[i..], ErrorKind::Escaped))),
                        }
                    }
                    other => out.push(other),
                }
            }
            '\n' => return Err(nom::Err::Failure(Error::new(&input[i..], ErrorKind::Char))),
            other => out.push(other),
        }
    }

    Err(nom::Err::Failure(Error::new(input, ErrorKind::TakeUntil)))
}

/// Numeric literal, keeping integers as integers
pub fn number_literal(input: &str) -> IResult<&str, Number> {
    map_res(recognize_float, parse_number)(input)
}

fn parse_number(text: &str) -> Result<Number, String> {
    let digits = text.strip_prefix('+').unwrap_or(text);
    if !digits.contains(['.', 'e', 'E']) {
        if let Ok(n) = digits.parse::<i64>() {
            return Ok(Number::from(n));
        }
        if let Ok(n) = digits.parse::<u64>() {
            return Ok(Number::from(n));
        }
    }
    let f: f64 = digits.parse().map_err(|e| format!("{e}"))?;
    Number::from_f64(f).ok_or_else(|| format!("non-finite number: {text}"))
}

// Recognizer for embedded JavaScript callbacks
//
// Callback bodies are opaque: they are located by bracket balancing (skipping
// over string literals and comments) and captured verbatim.

use super::lexer::{identifier_str, keyword, skip, ws};
use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{all_consuming, opt, recognize},
    error::{Error, ErrorKind},
    sequence::tuple,
    IResult,
};

/// Byte length of the string/template literal or comment starting at
/// `rest`, if any.
fn opaque_span(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices();
    let (_, first) = chars.next()?;
    match first {
        '"' | '\'' | '`' => {
            let mut escaped = false;
            for (i, c) in chars {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == first {
                    return Some(i + c.len_utf8());
                }
            }
            Some(rest.len())
        }
        '/' if rest.starts_with("//") => Some(rest.find('\n').unwrap_or(rest.len())),
        '/' if rest.starts_with("/*") => Some(rest.find("*/").map(|i| i + 2).unwrap_or(rest.len())),
        _ => None,
    }
}

/// Matches a bracketed group starting with `open`, returning the whole group.
fn balanced<'a>(open: char, close: char) -> impl Fn(&'a str) -> IResult<&'a str, &'a str> {
    move |input: &'a str| {
        if !input.starts_with(open) {
            return Err(nom::Err::Error(Error::new(input, ErrorKind::Char)));
        }
        let mut depth = 0usize;
        let mut pos = 0;
        while pos < input.len() {
            let rest = &input[pos..];
            if let Some(len) = opaque_span(rest) {
                pos += len;
                continue;
            }
            let c = rest.chars().next().unwrap_or(close);
            if c == open {
                depth += 1;
            } else if c == close {
                depth -= 1;
                if depth == 0 {
                    let end = pos + c.len_utf8();
                    return Ok((&input[end..], &input[..end]));
                }
            }
            pos += c.len_utf8();
        }
        Err(nom::Err::Error(Error::new(input, ErrorKind::TakeUntil)))
    }
}

/// Expression body of an arrow function: runs until a top-level `,`, `}`
/// or `]`, or the end of input.
fn expression_body(input: &str) -> IResult<&str, &str> {
    let mut depth = 0usize;
    let mut pos = 0;
    while pos < input.len() {
        let rest = &input[pos..];
        if let Some(len) = opaque_span(rest) {
            pos += len;
            continue;
        }
        let c = rest.chars().next().unwrap_or(',');
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' if depth > 0 => depth -= 1,
            ',' if depth > 0 => {}
            ',' | ')' | ']' | '}' => break,
            _ => {}
        }
        pos += c.len_utf8();
    }
    let body = input[..pos].trim_end();
    if body.is_empty() {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify)));
    }
    Ok((&input[body.len()..], body))
}

/// `function name(args) { ... }`
fn function_expression(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        keyword("function"),
        skip,
        opt(identifier_str),
        skip,
        balanced('(', ')'),
        skip,
        balanced('{', '}'),
    )))(input)
}

/// `(args) => ...` or `arg => ...`
fn arrow_function(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        alt((balanced('(', ')'), identifier_str)),
        skip,
        tag("=>"),
        skip,
        alt((balanced('{', '}'), expression_body)),
    )))(input)
}

/// Any callback expression, returned verbatim
pub fn callback(input: &str) -> IResult<&str, &str> {
    alt((function_expression, arrow_function))(input)
}

/// `true` when the whole of `s` is a single callback expression.
pub fn is_callback(s: &str) -> bool {
    all_consuming(ws(callback))(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_expression() {
        let src = "function () { return this.y > 0 ? '}' : \"{\"; }, next";
        let (rest, body) = callback(src).unwrap();
        assert_eq!(body, "function () { return this.y > 0 ? '}' : \"{\"; }");
        assert_eq!(rest, ", next");
    }

    #[test]
    fn test_named_function_with_nested_braces() {
        let src = "function fmt(a, b) { if (a) { return {x: b}; } /* } */ }";
        let (rest, body) = callback(src).unwrap();
        assert_eq!(body, src);
        assert_eq!(rest, "");
    }

    #[test]
    fn test_arrow_function_block_and_expression() {
        let (rest, body) = callback("(e) => { console.log(e); }}").unwrap();
        assert_eq!(body, "(e) => { console.log(e); }");
        assert_eq!(rest, "}");

        let (rest, body) = callback("x => x * 2, y: 1").unwrap();
        assert_eq!(body, "x => x * 2");
        assert_eq!(rest, ", y: 1");

        let (rest, body) = callback("() => f(1, 2)]").unwrap();
        assert_eq!(body, "() => f(1, 2)");
        assert_eq!(rest, "]");
    }

    #[test]
    fn test_not_a_callback() {
        assert!(callback("functional").is_err());
        assert!(callback("(1 + 2)").is_err());
        assert!(callback("function () { unclosed").is_err());
        assert!(!is_callback("#999999"));
        assert!(!is_callback("function () {} trailing"));
        assert!(is_callback("  function () { return 1; }  "));
    }
}

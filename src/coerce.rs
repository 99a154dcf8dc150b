//! Generic coercion of raw inputs into canonical slot values.
//!
//! Every node type shares this one dispatcher. A slot's [`SlotKind`] decides
//! which inputs it accepts; anything else fails immediately with
//! [`OptionError::InvalidValue`] or [`OptionError::InvalidNodeShape`].
//!
//! Unset inputs (`null`, `""`, `{}`, `[]`, an empty node list) resolve to
//! `Ok(None)` for every kind.

use serde_json::{Map, Number, Value};

use crate::error::{OptionError, OptionResult};
use crate::node::Node;
use crate::options::color::{GRADIENT, PATTERN};
use crate::parser::parse_literal;
use crate::schema::{Schema, SlotDef, SlotKind};
use crate::value::{Color, Input, SlotValue};

/// Camel-case keys that mark a mapping (or literal string) as a gradient.
pub const GRADIENT_KEYS: &[&str] = &["linearGradient", "radialGradient"];
/// Internal-name spellings of the gradient discriminators.
pub const GRADIENT_NAMES: &[&str] = &["linear_gradient", "radial_gradient"];
pub const PATTERN_KEYS: &[&str] = &["patternOptions"];
pub const PATTERN_NAMES: &[&str] = &["pattern_options"];

/// Coerce `input` for slot `def` of `schema`.
pub fn coerce(schema: &'static Schema, def: &'static SlotDef, input: Input) -> OptionResult<Option<SlotValue>> {
    if is_unset(&input) {
        return Ok(None);
    }
    let slot = schema.qualified(def);

    match def.kind {
        SlotKind::Bool => match json(&slot, input, "expected a boolean")? {
            Value::Bool(b) => Ok(Some(SlotValue::Bool(b))),
            other => Err(OptionError::invalid_value(&slot, &other, "expected a boolean")),
        },
        SlotKind::Number => {
            let v = json(&slot, input, "expected a number")?;
            numeric(&v)
                .map(|n| Some(SlotValue::Number(n)))
                .ok_or_else(|| OptionError::invalid_value(&slot, &v, "expected a number"))
        }
        SlotKind::Integer { min } => integer(&slot, json(&slot, input, "expected an integer")?, min),
        SlotKind::Float { min, max } => float(&slot, json(&slot, input, "expected a number")?, min, max),
        SlotKind::Text => match json(&slot, input, "expected a string")? {
            Value::String(s) => Ok(Some(SlotValue::Text(s))),
            other => Err(OptionError::invalid_value(&slot, &other, "expected a string")),
        },
        SlotKind::Callback => match json(&slot, input, "expected a callback function")? {
            Value::String(s) => Ok(Some(SlotValue::Callback(s))),
            other => Err(OptionError::invalid_value(&slot, &other, "expected a callback function")),
        },
        SlotKind::Enum { allowed, fold_case } => enumeration(&slot, json(&slot, input, "expected a string")?, allowed, fold_case),
        SlotKind::NumberOrPercent => {
            let v = json(&slot, input, "expected a number or percentage")?;
            number_or_percent(&v)
                .map(Some)
                .ok_or_else(|| OptionError::invalid_value(&slot, &v, "expected a number or percentage string"))
        }
        SlotKind::NumberOrText => match json(&slot, input, "expected a number or string")? {
            Value::Number(n) => Ok(Some(SlotValue::Number(n))),
            Value::String(s) => Ok(Some(SlotValue::Text(s))),
            other => Err(OptionError::invalid_value(&slot, &other, "expected a number or string")),
        },
        SlotKind::Color => color(&slot, input),
        SlotKind::Node(target) => node(&slot, target, input).map(single),
        SlotKind::NodeOrBool(target) => match input {
            Input::Json(Value::Bool(b)) => Ok(Some(SlotValue::Bool(b))),
            other => node(&slot, target, other).map(single),
        },
        SlotKind::NodeOrList(target) => match input {
            list @ (Input::Nodes(_) | Input::Json(Value::Array(_))) => {
                node_list(&slot, target, list, false).map(|ns| Some(SlotValue::Nodes(ns)))
            }
            other => node(&slot, target, other).map(single),
        },
        SlotKind::NodeList { schema: target, wrap_single } => {
            node_list(&slot, target, input, wrap_single).map(|ns| Some(SlotValue::Nodes(ns)))
        }
        SlotKind::DataPoints(target) => data_points(&slot, target, input).map(|ns| Some(SlotValue::Nodes(ns))),
        SlotKind::Strings => strings(&slot, json(&slot, input, "expected a list of strings")?),
        SlotKind::Pair => pair(&slot, json(&slot, input, "expected an [x, y] position")?),
        SlotKind::Stops => stops(&slot, json(&slot, input, "expected gradient stops")?),
        SlotKind::Map => match json(&slot, input, "expected a mapping")? {
            Value::Object(m) => Ok(Some(SlotValue::Map(m))),
            other => Err(OptionError::invalid_value(&slot, &other, "expected a mapping")),
        },
    }
}

fn is_unset(input: &Input) -> bool {
    match input {
        Input::Json(Value::Null) => true,
        Input::Json(Value::String(s)) => s.is_empty(),
        Input::Json(Value::Array(items)) => items.is_empty(),
        Input::Json(Value::Object(map)) => map.is_empty(),
        Input::Nodes(nodes) => nodes.is_empty(),
        _ => false,
    }
}

/// Unwrap plain JSON; nodes and colors are not valid for scalar slots.
fn json(slot: &str, input: Input, reason: &str) -> OptionResult<Value> {
    match input {
        Input::Json(v) => Ok(v),
        other => Err(OptionError::invalid_value(slot, &other.describe(), reason)),
    }
}

// === Scalars ===

/// A JSON number, or a string holding a finite number.
fn numeric(v: &Value) -> Option<Number> {
    match v {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => parse_number(s.trim()),
        _ => None,
    }
}

fn parse_number(s: &str) -> Option<Number> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(Number::from(i));
    }
    s.parse::<f64>().ok().filter(|f| f.is_finite()).and_then(Number::from_f64)
}

fn is_percent(s: &str) -> bool {
    s.trim()
        .strip_suffix('%')
        .and_then(|n| n.trim().parse::<f64>().ok())
        .is_some_and(f64::is_finite)
}

/// Strings are validated first and kept verbatim when they hold a percentage
/// or a number; anything else must be a JSON number.
fn number_or_percent(v: &Value) -> Option<SlotValue> {
    match v {
        Value::String(s) if is_percent(s) || parse_number(s.trim()).is_some() => Some(SlotValue::Text(s.clone())),
        Value::String(_) => None,
        other => numeric(other).map(SlotValue::Number),
    }
}

fn integer(slot: &str, v: Value, min: Option<i64>) -> OptionResult<Option<SlotValue>> {
    let parsed = numeric(&v).and_then(|n| {
        n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        })
    });
    match (parsed, min) {
        (Some(i), Some(min)) if i < min => Err(OptionError::invalid_value(slot, &v, format!("expected an integer >= {min}"))),
        (Some(i), _) => Ok(Some(SlotValue::Number(Number::from(i)))),
        (None, _) => Err(OptionError::invalid_value(slot, &v, "expected an integer")),
    }
}

fn float(slot: &str, v: Value, min: f64, max: f64) -> OptionResult<Option<SlotValue>> {
    match numeric(&v) {
        Some(n) if n.as_f64().is_some_and(|f| f >= min && f <= max) => Ok(Some(SlotValue::Number(n))),
        _ => Err(OptionError::invalid_value(slot, &v, format!("expected a number between {min} and {max}"))),
    }
}

fn enumeration(slot: &str, v: Value, allowed: &'static [&'static str], fold_case: bool) -> OptionResult<Option<SlotValue>> {
    let found = match &v {
        Value::String(s) if fold_case => allowed.iter().find(|a| a.eq_ignore_ascii_case(s)),
        Value::String(s) => allowed.iter().find(|a| **a == s.as_str()),
        _ => None,
    };
    match found {
        Some(canonical) => Ok(Some(SlotValue::Text(canonical.to_string()))),
        None => Err(OptionError::invalid_value(slot, &v, format!("expected one of: {}", allowed.join(", ")))),
    }
}

fn strings(slot: &str, v: Value) -> OptionResult<Option<SlotValue>> {
    let items = match &v {
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(String::from))
            .collect::<Option<Vec<_>>>(),
        _ => None,
    };
    items
        .map(|items| Some(SlotValue::Strings(items)))
        .ok_or_else(|| OptionError::invalid_value(slot, &v, "expected a list of strings"))
}

fn pair(slot: &str, v: Value) -> OptionResult<Option<SlotValue>> {
    let items = match &v {
        Value::Array(items) if items.len() == 2 => items
            .iter()
            .map(|item| match number_or_percent(item)? {
                SlotValue::Text(s) => Some(Value::String(s)),
                SlotValue::Number(n) => Some(Value::Number(n)),
                _ => None,
            })
            .collect::<Option<Vec<_>>>(),
        _ => None,
    };
    items
        .map(|items| Some(SlotValue::List(items)))
        .ok_or_else(|| OptionError::invalid_value(slot, &v, "expected an [x, y] position of numbers or percentages"))
}

fn stops(slot: &str, v: Value) -> OptionResult<Option<SlotValue>> {
    let stop = |item: &Value| -> Option<Value> {
        match item.as_array()?.as_slice() {
            [offset, Value::String(color)] if !color.is_empty() => {
                let offset = numeric(offset).filter(|n| n.as_f64().is_some_and(|f| (0.0..=1.0).contains(&f)))?;
                Some(Value::Array(vec![Value::Number(offset), Value::String(color.clone())]))
            }
            _ => None,
        }
    };
    let items = match &v {
        Value::Array(items) => items.iter().map(stop).collect::<Option<Vec<_>>>(),
        _ => None,
    };
    items
        .map(|items| Some(SlotValue::List(items)))
        .ok_or_else(|| OptionError::invalid_value(slot, &v, "expected gradient stops as [[offset 0..1, color], ...]"))
}

// === Nodes ===

fn expect_schema(slot: &str, schema: &'static Schema, node: Node) -> OptionResult<Node> {
    if std::ptr::eq(node.schema(), schema) {
        Ok(node)
    } else {
        Err(OptionError::InvalidNodeShape {
            slot: slot.to_string(),
            expected: format!("a {} node", schema.name),
            value: format!("a {} node", node.schema().name),
        })
    }
}

/// A nested node with nothing set is the same as an unset slot.
fn single(node: Node) -> Option<SlotValue> {
    (!node.is_empty()).then(|| SlotValue::Node(Box::new(node)))
}

fn node(slot: &str, schema: &'static Schema, input: Input) -> OptionResult<Node> {
    match input {
        Input::Node(n) => expect_schema(slot, schema, n),
        Input::Json(Value::Object(m)) => Node::from_dict(schema, &m),
        other => Err(OptionError::invalid_shape(slot, &other.describe(), format!("a {} mapping", schema.name))),
    }
}

fn node_list(slot: &str, schema: &'static Schema, input: Input, wrap_single: bool) -> OptionResult<Vec<Node>> {
    let expected = || format!("a list of {} mappings", schema.name);
    match input {
        Input::Nodes(nodes) => nodes.into_iter().map(|n| expect_schema(slot, schema, n)).collect(),
        Input::Json(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(m) => Node::from_dict(schema, &m),
                other => Err(OptionError::invalid_shape(slot, &other, expected())),
            })
            .collect(),
        single @ (Input::Node(_) | Input::Json(Value::Object(_))) if wrap_single => {
            node(slot, schema, single).map(|n| vec![n])
        }
        other => Err(OptionError::invalid_shape(slot, &other.describe(), expected())),
    }
}

fn data_points(slot: &str, schema: &'static Schema, input: Input) -> OptionResult<Vec<Node>> {
    let items: Vec<Input> = match input {
        Input::Nodes(nodes) => nodes.into_iter().map(Input::Node).collect(),
        Input::Json(Value::Array(items)) => items.into_iter().map(Input::Json).collect(),
        single @ (Input::Node(_) | Input::Json(Value::Object(_))) => vec![single],
        other => {
            return Err(OptionError::invalid_shape(slot, &other.describe(), format!("a list of {} points", schema.name)));
        }
    };
    items.into_iter().map(|item| data_point(slot, schema, item)).collect()
}

/// Recognizers, in order: node, mapping, null, bare `y` number, `[x|name, y]` pair.
fn data_point(slot: &str, schema: &'static Schema, item: Input) -> OptionResult<Node> {
    match item {
        Input::Node(n) => expect_schema(slot, schema, n),
        Input::Json(Value::Object(m)) => Node::from_dict(schema, &m),
        Input::Json(Value::Null) => Ok(Node::new(schema)),
        Input::Json(y @ Value::Number(_)) if schema.has_slot("y") => Node::new(schema).with("y", y),
        Input::Json(Value::Array(items)) if items.len() == 2 && schema.has_slot("y") => {
            let mut items = items.into_iter();
            let first = items.next().unwrap_or(Value::Null);
            let y = items.next().unwrap_or(Value::Null);
            let first_slot = if first.is_string() { "name" } else { "x" };
            if !schema.has_slot(first_slot) {
                return Err(OptionError::invalid_shape(slot, &first, format!("a {} point without `{first_slot}`", schema.name)));
            }
            Node::new(schema).with(first_slot, first)?.with("y", y)
        }
        other => Err(OptionError::invalid_shape(
            slot,
            &other.describe(),
            format!("a {} point: mapping, number or [x, y] pair", schema.name),
        )),
    }
}

// === Colors ===

fn color(slot: &str, input: Input) -> OptionResult<Option<SlotValue>> {
    let resolved = match input {
        Input::Color(c) => c,
        Input::Node(n) if std::ptr::eq(n.schema(), &GRADIENT) => Color::Gradient(Box::new(n)),
        Input::Node(n) if std::ptr::eq(n.schema(), &PATTERN) => Color::Pattern(Box::new(n)),
        Input::Json(v) => resolve_color(slot, &v)?,
        other => {
            return Err(OptionError::invalid_value(slot, &other.describe(), "expected a color string, gradient or pattern"));
        }
    };
    discriminated(slot, &resolved)?;
    Ok(Some(SlotValue::Color(resolved)))
}

/// Structured colors must carry their discriminating slot, or their output
/// could not be told apart from any other mapping.
fn discriminated(slot: &str, color: &Color) -> OptionResult<()> {
    let (node, names) = match color {
        Color::Plain(_) => return Ok(()),
        Color::Gradient(node) => (node, GRADIENT_NAMES),
        Color::Pattern(node) => (node, PATTERN_NAMES),
    };
    if names.iter().any(|name| node.get(name).is_some()) {
        Ok(())
    } else {
        Err(OptionError::invalid_value(
            slot,
            &Value::Object(node.to_dict()),
            format!("a {} needs one of: {}", node.schema().name, names.join(", ")),
        ))
    }
}

type Recognizer = fn(&Value) -> bool;
type Resolver = fn(&str, &Value) -> OptionResult<Color>;

/// Evaluated top to bottom; the first recognizer that matches decides.
static COLOR_RECOGNIZERS: &[(Recognizer, Resolver)] = &[
    (is_gradient_mapping, gradient_from_mapping),
    (is_gradient_kwargs, gradient_from_kwargs),
    (is_pattern_mapping, pattern_from_mapping),
    (is_pattern_kwargs, pattern_from_kwargs),
    (is_gradient_literal, gradient_from_literal),
    (is_pattern_literal, pattern_from_literal),
    (Value::is_string, plain_color),
];

fn resolve_color(slot: &str, v: &Value) -> OptionResult<Color> {
    COLOR_RECOGNIZERS
        .iter()
        .find(|(recognize, _)| recognize(v))
        .map(|(_, resolve)| resolve(slot, v))
        .unwrap_or_else(|| Err(OptionError::invalid_value(slot, v, "unable to resolve value to a string, gradient or pattern")))
}

fn has_any_key(v: &Value, keys: &[&str]) -> bool {
    v.as_object().is_some_and(|m| keys.iter().any(|k| m.contains_key(*k)))
}

fn mentions_any(v: &Value, keys: &[&str]) -> bool {
    v.as_str().is_some_and(|s| keys.iter().any(|k| s.contains(k)))
}

fn is_gradient_mapping(v: &Value) -> bool {
    has_any_key(v, GRADIENT_KEYS)
}

fn is_gradient_kwargs(v: &Value) -> bool {
    has_any_key(v, GRADIENT_NAMES)
}

fn is_pattern_mapping(v: &Value) -> bool {
    has_any_key(v, PATTERN_KEYS)
}

fn is_pattern_kwargs(v: &Value) -> bool {
    has_any_key(v, PATTERN_NAMES)
}

fn is_gradient_literal(v: &Value) -> bool {
    mentions_any(v, GRADIENT_KEYS)
}

fn is_pattern_literal(v: &Value) -> bool {
    mentions_any(v, PATTERN_KEYS)
}

fn mapping<'v>(slot: &str, v: &'v Value) -> OptionResult<&'v Map<String, Value>> {
    v.as_object()
        .ok_or_else(|| OptionError::invalid_value(slot, v, "expected a mapping"))
}

/// External-key construction, falling back to the internal-name constructor.
///
/// The fallback is deliberate leniency for mappings that mix both spellings;
/// it is only taken when it recovers at least one slot, otherwise the
/// external-key error is reported.
fn lenient_from_mapping(slot: &str, schema: &'static Schema, m: &Map<String, Value>) -> OptionResult<Node> {
    match Node::from_dict(schema, m) {
        Ok(node) => Ok(node),
        Err(err) => match Node::from_kwargs(schema, m.iter().map(|(k, v)| (k.as_str(), v))) {
            Ok(node) if !node.is_empty() => {
                tracing::debug!(slot, error = %err, "{} mapping rejected by key; accepted by internal names", schema.name);
                Ok(node)
            }
            _ => Err(err),
        },
    }
}

fn gradient_from_mapping(slot: &str, v: &Value) -> OptionResult<Color> {
    lenient_from_mapping(slot, &GRADIENT, mapping(slot, v)?).map(|n| Color::Gradient(Box::new(n)))
}

fn gradient_from_kwargs(slot: &str, v: &Value) -> OptionResult<Color> {
    let m = mapping(slot, v)?;
    Node::from_kwargs(&GRADIENT, m.iter().map(|(k, v)| (k.as_str(), v))).map(|n| Color::Gradient(Box::new(n)))
}

fn pattern_from_mapping(slot: &str, v: &Value) -> OptionResult<Color> {
    lenient_from_mapping(slot, &PATTERN, mapping(slot, v)?).map(|n| Color::Pattern(Box::new(n)))
}

fn pattern_from_kwargs(slot: &str, v: &Value) -> OptionResult<Color> {
    let m = mapping(slot, v)?;
    Node::from_kwargs(&PATTERN, m.iter().map(|(k, v)| (k.as_str(), v))).map(|n| Color::Pattern(Box::new(n)))
}

/// Parse a string as literal notation. A string that merely mentions the
/// discriminator but does not parse is kept as a plain color string.
fn from_literal(slot: &str, v: &Value, schema: &'static Schema, names: &[&str]) -> Option<Node> {
    let text = v.as_str()?;
    let parsed = parse_literal(text).and_then(|value| match value {
        Value::Object(m) => Node::from_dict(schema, &m),
        other => Err(OptionError::invalid_shape(slot, &other, format!("a {} literal", schema.name))),
    });
    let parsed = parsed.and_then(|node| {
        if names.iter().any(|name| node.get(name).is_some()) {
            Ok(node)
        } else {
            Err(OptionError::invalid_value(slot, v, format!("a {} literal without {}", schema.name, names.join(" or "))))
        }
    });
    match parsed {
        Ok(node) => Some(node),
        Err(err) => {
            tracing::debug!(slot, error = %err, "{} literal did not parse; keeping the plain string", schema.name);
            None
        }
    }
}

fn gradient_from_literal(slot: &str, v: &Value) -> OptionResult<Color> {
    match from_literal(slot, v, &GRADIENT, GRADIENT_NAMES) {
        Some(node) => Ok(Color::Gradient(Box::new(node))),
        None => plain_color(slot, v),
    }
}

fn pattern_from_literal(slot: &str, v: &Value) -> OptionResult<Color> {
    match from_literal(slot, v, &PATTERN, PATTERN_NAMES) {
        Some(node) => Ok(Color::Pattern(Box::new(node))),
        None => plain_color(slot, v),
    }
}

fn plain_color(slot: &str, v: &Value) -> OptionResult<Color> {
    match v {
        Value::String(s) => Ok(Color::Plain(s.clone())),
        other => Err(OptionError::invalid_value(slot, other, "expected a color string")),
    }
}

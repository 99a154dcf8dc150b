// Raw inputs and canonical slot values

use serde_json::{Map, Number, Value};

use crate::node::Node;

/// A heterogeneous value handed to a slot setter.
///
/// Plain data arrives as JSON; already-built nodes and colors can be passed
/// through directly and are accepted as-is when they fit the slot.
#[derive(Debug, Clone)]
pub enum Input {
    Json(Value),
    Node(Node),
    Nodes(Vec<Node>),
    Color(Color),
}

impl Input {
    /// JSON view used in error messages.
    pub fn describe(&self) -> Value {
        match self {
            Input::Json(v) => v.clone(),
            Input::Node(n) => Value::Object(n.to_dict()),
            Input::Nodes(ns) => Value::Array(ns.iter().map(|n| Value::Object(n.to_dict())).collect()),
            Input::Color(c) => c.to_json(),
        }
    }
}

impl From<Value> for Input {
    fn from(v: Value) -> Self {
        Input::Json(v)
    }
}

impl From<&Value> for Input {
    fn from(v: &Value) -> Self {
        Input::Json(v.clone())
    }
}

impl From<Node> for Input {
    fn from(n: Node) -> Self {
        Input::Node(n)
    }
}

impl From<Vec<Node>> for Input {
    fn from(ns: Vec<Node>) -> Self {
        Input::Nodes(ns)
    }
}

impl From<Color> for Input {
    fn from(c: Color) -> Self {
        Input::Color(c)
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::Json(Value::String(s.to_string()))
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::Json(Value::String(s))
    }
}

impl From<bool> for Input {
    fn from(b: bool) -> Self {
        Input::Json(Value::Bool(b))
    }
}

impl From<i64> for Input {
    fn from(n: i64) -> Self {
        Input::Json(Value::from(n))
    }
}

impl From<i32> for Input {
    fn from(n: i32) -> Self {
        Input::Json(Value::from(n))
    }
}

impl From<f64> for Input {
    fn from(n: f64) -> Self {
        // NaN and infinities have no JSON form and arrive as null
        Input::Json(Value::from(n))
    }
}

impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Input::Json(Value::Null),
        }
    }
}

/// A color slot's value: a CSS color string, a gradient, or a pattern fill.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Plain(String),
    Gradient(Box<Node>),
    Pattern(Box<Node>),
}

impl Color {
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Color::Plain(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self, Color::Gradient(_))
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, Color::Pattern(_))
    }

    pub fn to_json(&self) -> Value {
        match self {
            Color::Plain(s) => Value::String(s.clone()),
            Color::Gradient(n) | Color::Pattern(n) => Value::Object(n.to_dict()),
        }
    }

    fn to_untrimmed_json(&self) -> Value {
        match self {
            Color::Plain(s) => Value::String(s.clone()),
            Color::Gradient(n) | Color::Pattern(n) => Value::Object(n.to_untrimmed_dict()),
        }
    }
}

/// Canonical form of a set slot. Unset slots are `None` on the node.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotValue {
    Bool(bool),
    Number(Number),
    Text(String),
    Callback(String),
    Color(Color),
    Node(Box<Node>),
    Nodes(Vec<Node>),
    Strings(Vec<String>),
    List(Vec<Value>),
    Map(Map<String, Value>),
}

impl SlotValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SlotValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SlotValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SlotValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SlotValue::Text(s) | SlotValue::Callback(s) => Some(s),
            SlotValue::Color(Color::Plain(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<&Color> {
        match self {
            SlotValue::Color(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            SlotValue::Node(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_nodes(&self) -> Option<&[Node]> {
        match self {
            SlotValue::Nodes(ns) => Some(ns),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            SlotValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// JSON form with nested nodes expanded to their untrimmed mappings.
    pub fn to_untrimmed_json(&self) -> Value {
        match self {
            SlotValue::Bool(b) => Value::Bool(*b),
            SlotValue::Number(n) => Value::Number(n.clone()),
            SlotValue::Text(s) | SlotValue::Callback(s) => Value::String(s.clone()),
            SlotValue::Color(c) => c.to_untrimmed_json(),
            SlotValue::Node(n) => Value::Object(n.to_untrimmed_dict()),
            SlotValue::Nodes(ns) => Value::Array(
                ns.iter()
                    .map(|n| Value::Object(n.to_untrimmed_dict()))
                    .collect(),
            ),
            SlotValue::Strings(items) => Value::Array(items.iter().cloned().map(Value::String).collect()),
            SlotValue::List(items) => Value::Array(items.clone()),
            SlotValue::Map(m) => Value::Object(m.clone()),
        }
    }
}

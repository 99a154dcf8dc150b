// Option nodes: one schema plus one optional value per declared slot

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::coerce::coerce;
use crate::error::{OptionError, OptionResult};
use crate::parser::parse_literal;
use crate::render::to_js_literal;
use crate::schema::{Schema, SlotDef};
use crate::trim::trim_map;
use crate::value::{Input, SlotValue};
use crate::RenderOptions;

/// A configured option object.
///
/// Slots are stored in declaration order; `None` means unset. Nodes are plain
/// owned values: attaching a node to a parent moves it (or a clone of it), so
/// a child is never shared between two parents.
#[derive(Clone)]
pub struct Node {
    schema: &'static Schema,
    values: Vec<Option<SlotValue>>,
}

impl Node {
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            values: vec![None; schema.len()],
        }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// `true` when no slot is set.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Coerce `value` into the slot with internal name `name`.
    ///
    /// On error the slot keeps its previous value.
    pub fn set(&mut self, name: &str, value: impl Into<Input>) -> OptionResult<()> {
        let (index, def) = self
            .schema
            .slot(name)
            .ok_or_else(|| OptionError::unknown_slot(self.schema.name, name))?;
        self.values[index] = coerce(self.schema, def, value.into())?;
        Ok(())
    }

    /// Builder form of [`Node::set`].
    pub fn with(mut self, name: &str, value: impl Into<Input>) -> OptionResult<Self> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Current value of a slot; `None` when unset or not declared.
    pub fn get(&self, name: &str) -> Option<&SlotValue> {
        let (index, _) = self.schema.slot(name)?;
        self.values[index].as_ref()
    }

    pub fn clear(&mut self, name: &str) -> OptionResult<()> {
        let (index, _) = self
            .schema
            .slot(name)
            .ok_or_else(|| OptionError::unknown_slot(self.schema.name, name))?;
        self.values[index] = None;
        Ok(())
    }

    /// Set slots with their definitions, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static SlotDef, &SlotValue)> + '_ {
        self.schema
            .slots()
            .zip(self.values.iter())
            .filter_map(|(def, value)| value.as_ref().map(|v| (def, v)))
    }

    // === Construction ===

    /// Keyword-style constructor keyed by internal attribute names.
    ///
    /// Names the schema does not declare are skipped.
    pub fn from_kwargs<I, K, V>(schema: &'static Schema, kwargs: I) -> OptionResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Input>,
    {
        let mut node = Node::new(schema);
        for (name, value) in kwargs {
            let name = name.as_ref();
            if schema.has_slot(name) {
                node.set(name, value)?;
            } else {
                tracing::trace!(schema = schema.name, name, "ignoring undeclared attribute");
            }
        }
        Ok(node)
    }

    /// Build a node from a wire-format mapping.
    ///
    /// Each slot takes the first present spelling among its external key,
    /// internal name and historical aliases. Undeclared keys are ignored.
    ///
    /// Spellings are assumed unambiguous; see [`Schema::check_keys`].
    #[tracing::instrument(level = "trace", skip_all, fields(schema = schema.name))]
    pub fn from_dict(schema: &'static Schema, data: &Map<String, Value>) -> OptionResult<Self> {
        let mut node = Node::new(schema);
        for (index, def) in schema.slots().enumerate() {
            if let Some(raw) = def.spellings().find_map(|k| data.get(k)) {
                node.values[index] = coerce(schema, def, Input::from(raw))?;
            }
        }

        let key_map = schema.key_map();
        for key in data.keys() {
            if key_map.internal(key).is_none() {
                tracing::debug!(schema = schema.name, key = key.as_str(), "ignoring undeclared key");
            }
        }
        Ok(node)
    }

    /// Like [`Node::from_dict`], for a value that must be a mapping.
    pub fn from_value(schema: &'static Schema, value: &Value) -> OptionResult<Self> {
        match value {
            Value::Object(map) => Node::from_dict(schema, map),
            other => Err(OptionError::invalid_shape(schema.name, other, format!("a {} mapping", schema.name))),
        }
    }

    /// Strict JSON text.
    pub fn from_json_str(schema: &'static Schema, text: &str) -> OptionResult<Self> {
        let value: Value = serde_json::from_str(text).map_err(|e| json_syntax(text, &e))?;
        Node::from_value(schema, &value)
    }

    /// Object-literal notation (unquoted keys, single quotes, callbacks).
    #[tracing::instrument(level = "trace", skip_all, fields(schema = schema.name))]
    pub fn from_js_literal(schema: &'static Schema, text: &str) -> OptionResult<Self> {
        let value = parse_literal(text)?;
        Node::from_value(schema, &value)
    }

    // === Output ===

    /// Every declared external key, unset slots as `null`. Nested nodes are
    /// expanded to their own untrimmed mappings.
    pub fn to_untrimmed_dict(&self) -> Map<String, Value> {
        self.schema
            .slots()
            .zip(self.values.iter())
            .map(|(def, value)| {
                let json = value.as_ref().map(SlotValue::to_untrimmed_json).unwrap_or(Value::Null);
                (def.key.to_string(), json)
            })
            .collect()
    }

    /// Minimal wire mapping: the untrimmed mapping with empty entries removed.
    pub fn to_dict(&self) -> Map<String, Value> {
        trim_map(&self.to_untrimmed_dict())
    }

    /// Compact JSON text of [`Node::to_dict`].
    pub fn to_json(&self) -> String {
        Value::Object(self.to_dict()).to_string()
    }

    pub fn to_js_literal(&self, options: &RenderOptions) -> String {
        to_js_literal(&Value::Object(self.to_dict()), options)
    }
}

/// Positions from serde_json are 1-based; the byte offset is rebuilt from them.
fn json_syntax(text: &str, e: &serde_json::Error) -> OptionError {
    let (line, column) = (e.line().max(1), e.column());
    let offset = text
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum::<usize>()
        + column.saturating_sub(1);
    OptionError::LiteralSyntax {
        line,
        column,
        offset: offset.min(text.len()),
        message: e.to_string(),
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema) && self.values == other.values
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.schema.name)?;
        let mut map = f.debug_map();
        for (def, value) in self.iter() {
            map.entry(&def.name, value);
        }
        map.finish()
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_dict().serialize(serializer)
    }
}

use serde_json::Value;

pub type OptionResult<T> = Result<T, OptionError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OptionError {
    #[error("invalid value for `{slot}`: {reason} (received {value})")]
    InvalidValue {
        slot: String,
        value: String,
        reason: String,
    },

    #[error("`{slot}` expects {expected} (received {value})")]
    InvalidNodeShape {
        slot: String,
        expected: String,
        value: String,
    },

    #[error("`{schema}` maps both `{first}` and `{second}` to external key `{key}`")]
    SchemaKeyConflict {
        schema: String,
        key: String,
        first: String,
        second: String,
    },

    #[error("literal syntax error at line {line}, column {column}: {message}")]
    LiteralSyntax {
        line: usize,
        column: usize,
        offset: usize,
        message: String,
    },

    #[error("`{schema}` has no slot named `{name}`")]
    UnknownSlot { schema: String, name: String },
}

impl OptionError {
    pub fn invalid_value(slot: impl Into<String>, value: &Value, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            slot: slot.into(),
            value: describe(value),
            reason: reason.into(),
        }
    }

    pub fn invalid_shape(slot: impl Into<String>, value: &Value, expected: impl Into<String>) -> Self {
        Self::InvalidNodeShape {
            slot: slot.into(),
            expected: expected.into(),
            value: describe(value),
        }
    }

    pub fn unknown_slot(schema: &str, name: &str) -> Self {
        Self::UnknownSlot {
            schema: schema.to_string(),
            name: name.to_string(),
        }
    }

    /// Builds a syntax error, translating a byte offset in `source` into a
    /// 1-based line and column.
    pub fn literal_syntax(source: &str, offset: usize, message: impl Into<String>) -> Self {
        let offset = offset.min(source.len());
        let before = &source[..offset];
        let line = before.matches('\n').count() + 1;
        let column = match before.rfind('\n') {
            Some(nl) => before[nl + 1..].chars().count() + 1,
            None => before.chars().count() + 1,
        };
        Self::LiteralSyntax {
            line,
            column,
            offset,
            message: message.into(),
        }
    }
}

fn describe(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{value:?}"))
}

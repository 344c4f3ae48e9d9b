use crate::error::{FormatError, Result};

/// A caller-supplied annotation stored in a format's metadata bag.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum MetaValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl MetaValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            MetaValue::Str(_) => "string",
            MetaValue::Int(_) => "integer",
            MetaValue::Bool(_) => "boolean",
        }
    }
}

impl From<&str> for MetaValue {
    fn from(v: &str) -> Self {
        MetaValue::Str(v.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(v: String) -> Self {
        MetaValue::Str(v)
    }
}

impl From<i64> for MetaValue {
    fn from(v: i64) -> Self {
        MetaValue::Int(v)
    }
}

impl From<i32> for MetaValue {
    fn from(v: i32) -> Self {
        MetaValue::Int(v as i64)
    }
}

impl From<u32> for MetaValue {
    fn from(v: u32) -> Self {
        MetaValue::Int(v as i64)
    }
}

impl From<bool> for MetaValue {
    fn from(v: bool) -> Self {
        MetaValue::Bool(v)
    }
}

impl From<Value<'_>> for MetaValue {
    fn from(v: Value<'_>) -> Self {
        match v {
            Value::Str(s) => MetaValue::Str(s.to_string()),
            Value::Int(i) => MetaValue::Int(i),
            Value::Bool(b) => MetaValue::Bool(b),
        }
    }
}

fn mismatch(expected: &'static str, got: &MetaValue) -> FormatError {
    FormatError::MetaTypeMismatch {
        expected,
        got: got.type_name(),
    }
}

impl<'a> TryFrom<&'a MetaValue> for &'a str {
    type Error = FormatError;

    fn try_from(v: &'a MetaValue) -> Result<Self> {
        match v {
            MetaValue::Str(s) => Ok(s.as_str()),
            other => Err(mismatch("string", other)),
        }
    }
}

impl TryFrom<&MetaValue> for i64 {
    type Error = FormatError;

    fn try_from(v: &MetaValue) -> Result<Self> {
        match v {
            MetaValue::Int(i) => Ok(*i),
            other => Err(mismatch("integer", other)),
        }
    }
}

impl TryFrom<&MetaValue> for bool {
    type Error = FormatError;

    fn try_from(v: &MetaValue) -> Result<Self> {
        match v {
            MetaValue::Bool(b) => Ok(*b),
            other => Err(mismatch("boolean", other)),
        }
    }
}

/// Borrowed view of an attribute, returned by the uniform accessor.
///
/// Fixed attributes and metadata entries share this type so filter and sort
/// code can handle any key without knowing what backs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Value<'a> {
    Str(&'a str),
    Int(i64),
    Bool(bool),
}

impl<'a> Value<'a> {
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl<'a> From<&'a MetaValue> for Value<'a> {
    fn from(v: &'a MetaValue) -> Self {
        match v {
            MetaValue::Str(s) => Value::Str(s),
            MetaValue::Int(i) => Value::Int(*i),
            MetaValue::Bool(b) => Value::Bool(*b),
        }
    }
}

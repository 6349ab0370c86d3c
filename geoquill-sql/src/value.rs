//! Owned bind-parameter values.

use geoquill_core::elements::{RasterElement, WkbElement, WktElement};

/// A value bound to a compiled statement parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Bytes(Vec<u8>),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

// Elements bind as the form their from-text constructor expects.

impl From<WktElement> for Value {
    fn from(value: WktElement) -> Self {
        Value::Text(value.as_ewkt())
    }
}

impl From<WkbElement> for Value {
    fn from(value: WkbElement) -> Self {
        Value::Bytes(value.into_bytes())
    }
}

impl From<RasterElement> for Value {
    fn from(value: RasterElement) -> Self {
        Value::Bytes(value.into_bytes())
    }
}

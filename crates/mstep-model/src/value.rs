use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Scalar value held under a reference identifier.
///
/// Every attribute value is a flag, an integer or a string; dates are stored
/// as unix timestamps. Every variant maps onto a JSON value without loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReferenceValue {
    Null,
    Bool(bool),
    Int(i64),
    String(String),
}

impl ReferenceValue {
    /// Converts into a JSON value for substitution into a match specification.
    pub fn to_json(&self) -> Value {
        match self {
            ReferenceValue::Null => Value::Null,
            ReferenceValue::Bool(value) => Value::Bool(*value),
            ReferenceValue::Int(value) => Value::Number((*value).into()),
            ReferenceValue::String(value) => Value::String(value.clone()),
        }
    }
}

impl fmt::Display for ReferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceValue::Null => f.write_str("null"),
            ReferenceValue::Bool(value) => write!(f, "{value}"),
            ReferenceValue::Int(value) => write!(f, "{value}"),
            ReferenceValue::String(value) => f.write_str(value),
        }
    }
}

impl From<bool> for ReferenceValue {
    fn from(value: bool) -> Self {
        ReferenceValue::Bool(value)
    }
}

impl From<i64> for ReferenceValue {
    fn from(value: i64) -> Self {
        ReferenceValue::Int(value)
    }
}

impl From<i32> for ReferenceValue {
    fn from(value: i32) -> Self {
        ReferenceValue::Int(i64::from(value))
    }
}

impl From<String> for ReferenceValue {
    fn from(value: String) -> Self {
        ReferenceValue::String(value)
    }
}

impl From<&str> for ReferenceValue {
    fn from(value: &str) -> Self {
        ReferenceValue::String(value.to_string())
    }
}

impl<T> From<Option<T>> for ReferenceValue
where
    T: Into<ReferenceValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(ReferenceValue::Null, Into::into)
    }
}

//! Typed claim values
//!
//! Custom claims are held as a [`ClaimValue`] so readers match on a variant
//! instead of downcasting. Raw JSON only appears at the wire boundary and in
//! the [`ClaimValue::Json`] fallback for structures none of the typed
//! variants describe.

use chrono::{DateTime, Utc};
use serde_json::{Number, Value};

/// A single claim value
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimValue {
    /// Text
    String(String),
    /// Integer
    Number(i64),
    /// Non-integer number
    Float(f64),
    /// Boolean
    Bool(bool),
    /// Instant, carried as whole seconds since the epoch
    Timestamp(DateTime<Utc>),
    /// Ordered sequence of strings
    Strings(Vec<String>),
    /// Any other JSON (objects, mixed arrays, null, integers beyond `i64`)
    Json(Value),
}

impl ClaimValue {
    /// Borrow as text
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ClaimValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Read as an integer
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ClaimValue::Number(n) => Some(*n),
            ClaimValue::Timestamp(t) => Some(t.timestamp()),
            _ => None,
        }
    }

    /// Read as a float; integers widen
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ClaimValue::Float(f) => Some(*f),
            ClaimValue::Number(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Read as a boolean
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ClaimValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow as a string sequence
    #[must_use]
    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            ClaimValue::Strings(v) => Some(v),
            _ => None,
        }
    }

    /// Read as an instant. Integers are taken as seconds since the epoch,
    /// which is how a decoded custom timestamp arrives.
    #[must_use]
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            ClaimValue::Timestamp(t) => Some(*t),
            ClaimValue::Number(n) => DateTime::from_timestamp(*n, 0),
            _ => None,
        }
    }

    /// Wire form
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            ClaimValue::String(s) => Value::String(s.clone()),
            ClaimValue::Number(n) => Value::Number((*n).into()),
            // NaN and infinities have no JSON form
            ClaimValue::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            ClaimValue::Bool(b) => Value::Bool(*b),
            ClaimValue::Timestamp(t) => Value::Number(t.timestamp().into()),
            ClaimValue::Strings(v) => {
                Value::Array(v.iter().cloned().map(Value::String).collect())
            }
            ClaimValue::Json(v) => v.clone(),
        }
    }
}

impl From<Value> for ClaimValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => ClaimValue::String(s),
            Value::Bool(b) => ClaimValue::Bool(b),
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => ClaimValue::Number(i),
                (None, Some(f)) if n.is_f64() => ClaimValue::Float(f),
                // Unsigned values above i64::MAX keep their exact digits
                _ => ClaimValue::Json(Value::Number(n)),
            },
            Value::Array(items) if items.iter().all(Value::is_string) => ClaimValue::Strings(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            other => ClaimValue::Json(other),
        }
    }
}

impl From<&ClaimValue> for Value {
    fn from(value: &ClaimValue) -> Self {
        value.to_json()
    }
}

impl From<String> for ClaimValue {
    fn from(s: String) -> Self {
        ClaimValue::String(s)
    }
}

impl From<&str> for ClaimValue {
    fn from(s: &str) -> Self {
        ClaimValue::String(s.to_string())
    }
}

impl From<i64> for ClaimValue {
    fn from(n: i64) -> Self {
        ClaimValue::Number(n)
    }
}

impl From<i32> for ClaimValue {
    fn from(n: i32) -> Self {
        ClaimValue::Number(i64::from(n))
    }
}

impl From<u32> for ClaimValue {
    fn from(n: u32) -> Self {
        ClaimValue::Number(i64::from(n))
    }
}

impl From<f64> for ClaimValue {
    fn from(f: f64) -> Self {
        ClaimValue::Float(f)
    }
}

impl From<bool> for ClaimValue {
    fn from(b: bool) -> Self {
        ClaimValue::Bool(b)
    }
}

impl From<DateTime<Utc>> for ClaimValue {
    fn from(t: DateTime<Utc>) -> Self {
        ClaimValue::Timestamp(t)
    }
}

impl From<Vec<String>> for ClaimValue {
    fn from(v: Vec<String>) -> Self {
        ClaimValue::Strings(v)
    }
}

impl From<&[&str]> for ClaimValue {
    fn from(v: &[&str]) -> Self {
        ClaimValue::Strings(v.iter().map(|s| (*s).to_string()).collect())
    }
}

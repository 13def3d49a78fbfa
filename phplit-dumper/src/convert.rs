//! Conversions from JSON and TOML documents into [`Value`]s.
//!
//! JSON objects and TOML tables become arrays with string keys (normalized
//! the way PHP normalizes numeric keys), keeping document order. Integers
//! too large for `i64` become floats, as `json_decode()` does.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::value::{Array, DateTimeValue, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::from(s),
            serde_json::Value::Array(items) => Self::Array(items.into_iter().collect()),
            serde_json::Value::Object(map) => Self::Array(Array::from_entries(map)),
        }
    }
}

impl From<toml::Value> for Value {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Self::from(s),
            toml::Value::Integer(i) => Self::Int(i),
            toml::Value::Float(f) => Self::Float(f),
            toml::Value::Boolean(b) => Self::Bool(b),
            toml::Value::Datetime(dt) => datetime_from_toml(&dt.to_string()),
            toml::Value::Array(items) => Self::Array(items.into_iter().collect()),
            toml::Value::Table(table) => Self::Array(Array::from_entries(table)),
        }
    }
}

/// Offset date-times keep their offset, local date-times and dates are
/// taken as UTC, and bare times stay strings.
fn datetime_from_toml(text: &str) -> Value {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        let value = if text.ends_with(['Z', 'z']) {
            DateTimeValue::from(dt.with_timezone(&Utc))
        } else {
            DateTimeValue::from(dt)
        };
        return Value::DateTime(value);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Value::DateTime(DateTimeValue::immutable(naive, "UTC"));
    }
    if let Some(midnight) = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Value::DateTime(DateTimeValue::immutable(midnight, "UTC"));
    }
    Value::from(text)
}

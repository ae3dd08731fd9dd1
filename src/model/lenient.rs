//! Tolerant field decoders for snapshot files.
//!
//! The stats plugin writes whatever it has: fields go missing, numbers arrive as strings,
//! and `null` shows up where a value was never recorded. These helpers turn all of that
//! into plain values instead of failing the whole snapshot.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn finite_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

/// Decodes a number, yielding `0.0` for anything that is not a finite number.
pub fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(finite_number(&value).unwrap_or(0.0))
}

/// Decodes an optional number, yielding `None` for anything that is not a finite number.
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(finite_number(&value))
}

/// Decodes a non-negative integer such as a lap time, yielding `0` otherwise.
pub fn unsigned_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = match &value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f.max(0.0) as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(number.unwrap_or(0))
}

/// Decodes an identifier or name that may have been written as a number.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

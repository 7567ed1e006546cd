//! Lenient deserializers for API fields.
//!
//! The DMS API is not consistent about numeric fields: the same id may come
//! back as `12` from one endpoint and `"12"` from another, and counts are
//! sometimes `null`. These helpers accept every shape seen on the wire.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Number or numeric string, missing/null/garbage becomes 0.
pub fn flexible_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_i64).unwrap_or_default())
}

/// Number or numeric string, anything else becomes `None`.
pub fn option_flexible_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_i64))
}

pub fn option_flexible_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64))
}

/// Reads an integer out of an arbitrary JSON object, trying several keys in order.
/// Used by report builders where the backend has shipped more than one spelling.
pub fn first_i64(obj: &Value, keys: &[&str]) -> i64 {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find_map(value_to_i64)
        .unwrap_or_default()
}

/// Reads a display string out of a JSON object: strings verbatim, numbers formatted.
pub fn display_field(obj: &Value, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "flexible_i64", default)]
        id: i64,
        #[serde(deserialize_with = "option_flexible_i64", default)]
        parent: Option<i64>,
        #[serde(deserialize_with = "option_flexible_f64", default)]
        amount: Option<f64>,
    }

    #[test]
    fn test_accepts_numbers_and_numeric_strings() {
        let row: Row = serde_json::from_value(json!({"id": "42", "parent": 7, "amount": "150.5"})).unwrap();
        assert_eq!(row.id, 42);
        assert_eq!(row.parent, Some(7));
        assert_eq!(row.amount, Some(150.5));
    }

    #[test]
    fn test_null_and_missing_fields() {
        let row: Row = serde_json::from_value(json!({"id": null, "parent": "n/a"})).unwrap();
        assert_eq!(row.id, 0);
        assert_eq!(row.parent, None);
        assert_eq!(row.amount, None);
    }

    #[test]
    fn test_first_i64_uses_fallback_keys() {
        let obj = json!({"totalRegistrations": 12, "total_assisted_pwd": "4"});
        assert_eq!(first_i64(&obj, &["total_registrations", "totalRegistrations"]), 12);
        assert_eq!(first_i64(&obj, &["total_assisted", "total_assisted_pwd"]), 4);
        assert_eq!(first_i64(&obj, &["missing"]), 0);
    }

    #[test]
    fn test_display_field() {
        let obj = json!({"name": "Accra", "count": 3});
        assert_eq!(display_field(&obj, "name"), "Accra");
        assert_eq!(display_field(&obj, "count"), "3");
        assert_eq!(display_field(&obj, "nope"), "");
    }
}

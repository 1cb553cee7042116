//! AttrValue - a single entry in the attribute store

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value held under an attribute key
///
/// Numbers accumulate; structured values (objects, arrays) replace whatever
/// was stored before.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Number(f64),
    Structured(Value),
}

impl AttrValue {
    /// Numeric view; structured values read as 0
    pub fn as_number(&self) -> f64 {
        match self {
            AttrValue::Number(n) => *n,
            AttrValue::Structured(_) => 0.0,
        }
    }

    /// Structured view, if this is not a plain number
    pub fn as_structured(&self) -> Option<&Value> {
        match self {
            AttrValue::Number(_) => None,
            AttrValue::Structured(value) => Some(value),
        }
    }
}

/// Whether a raw value replaces (object/array) rather than accumulates
pub fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Coerce a raw scalar to a number
///
/// Anything that is not a usable number degrades to 0: null, unparsable
/// strings, NaN. Numeric strings are parsed, booleans count as 0/1.
pub fn to_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(0.0)
            }
        }
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null => 0.0,
        Value::Object(_) | Value::Array(_) => 0.0,
    };
    sanitize(n)
}

/// Replace NaN with 0
pub fn sanitize(n: f64) -> f64 {
    if n.is_nan() {
        0.0
    } else {
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_number_coercion() {
        assert!((to_number(&json!(2)) - 2.0).abs() < f64::EPSILON);
        assert!((to_number(&json!("2")) - 2.0).abs() < f64::EPSILON);
        assert!((to_number(&json!(" 1.5 ")) - 1.5).abs() < f64::EPSILON);
        assert_eq!(to_number(&json!("abc")), 0.0);
        assert_eq!(to_number(&json!("")), 0.0);
        assert_eq!(to_number(&Value::Null), 0.0);
        assert_eq!(to_number(&json!(true)), 1.0);
    }

    #[test]
    fn test_nan_string_is_zero() {
        // "NaN" parses as f64::NAN
        assert_eq!(to_number(&json!("NaN")), 0.0);
        assert_eq!(sanitize(f64::NAN), 0.0);
    }

    #[test]
    fn test_structured_detection() {
        assert!(is_structured(&json!({"min": 1, "max": 2})));
        assert!(is_structured(&json!([1, 2])));
        assert!(!is_structured(&json!(3)));
        assert!(!is_structured(&json!("3")));
    }
}

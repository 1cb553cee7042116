//! AttributeStore - named attribute accumulator fed by every stat source

mod attr_value;
mod derived;

pub use attr_value::{is_structured, sanitize, to_number, AttrValue};
pub use derived::{
    DamageStats, DerivedStats, DpsStats, EhpStats, Reductions, Scram, SpeedStats, WeaponDamage,
    WeaponSpeed,
};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Additive key/value store for a build's attributes
///
/// Reads never create keys: an absent attribute reads as 0 and stays absent.
/// Numeric writes always add to the current total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeStore {
    attrs: HashMap<String, AttrValue>,
}

impl AttributeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Current numeric value of an attribute (0 if absent or structured)
    pub fn get(&self, key: &str) -> f64 {
        self.attrs.get(key).map(AttrValue::as_number).unwrap_or(0.0)
    }

    /// Structured value of an attribute, if one was set
    pub fn structured(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key).and_then(AttrValue::as_structured)
    }

    /// Replace an attribute with a structured value
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.attrs.insert(key.into(), AttrValue::Structured(value));
    }

    /// Add to an attribute, returning the new total
    ///
    /// NaN is treated as 0. Adding to a structured entry starts a fresh
    /// numeric total.
    pub fn add(&mut self, key: impl Into<String>, value: f64) -> f64 {
        let entry = self
            .attrs
            .entry(key.into())
            .or_insert(AttrValue::Number(0.0));
        let total = entry.as_number() + sanitize(value);
        *entry = AttrValue::Number(total);
        total
    }

    /// Write a raw value: structured values replace, scalars are coerced and added
    pub fn write(&mut self, key: impl Into<String>, value: &Value) {
        if is_structured(value) {
            self.set(key, value.clone());
        } else {
            self.add(key, to_number(value));
        }
    }

    /// Whether an attribute has ever been written
    pub fn contains(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    /// Remove an attribute entirely
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.attrs.remove(key)
    }

    /// Clear every attribute
    pub fn reset(&mut self) {
        self.attrs.clear();
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterate over all attributes
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttrValue)> {
        self.attrs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_get_empty_attribute() {
        let store = AttributeStore::new();
        assert_eq!(store.get("test"), 0.0);
        assert!(!store.contains("test"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_accumulates() {
        let mut store = AttributeStore::new();
        assert!((store.add("test", 1.0) - 1.0).abs() < f64::EPSILON);
        assert!((store.add("test", 2.0) - 3.0).abs() < f64::EPSILON);
        assert!((store.get("test") - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_write_string_number() {
        let mut store = AttributeStore::new();
        store.write("test", &json!("2"));
        assert!((store.get("test") - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_write_null_and_nan_keep_total() {
        let mut store = AttributeStore::new();
        store.write("test", &json!("2"));
        store.write("test", &Value::Null);
        store.add("test", f64::NAN);
        assert!((store.get("test") - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_structured_replaces() {
        let mut store = AttributeStore::new();
        store.write("damage", &json!({"min": 10, "max": 20}));
        store.write("damage", &json!({"min": 30, "max": 40}));
        assert_eq!(store.structured("damage"), Some(&json!({"min": 30, "max": 40})));
        assert_eq!(store.get("damage"), 0.0);
    }

    #[test]
    fn test_reset_clears() {
        let mut store = AttributeStore::new();
        store.add("strength", 10.0);
        store.reset();
        assert!(store.is_empty());
        assert_eq!(store.get("strength"), 0.0);
    }

    proptest! {
        #[test]
        fn prop_unwritten_keys_read_zero(key in "[a-z-]{1,16}") {
            let store = AttributeStore::new();
            prop_assert_eq!(store.get(&key), 0.0);
            prop_assert!(!store.contains(&key));
        }

        #[test]
        fn prop_add_is_order_independent(values in prop::collection::vec(-1000i32..1000, 0..32)) {
            let mut forward = AttributeStore::new();
            let mut backward = AttributeStore::new();
            for v in &values {
                forward.add("k", *v as f64);
            }
            for v in values.iter().rev() {
                backward.add("k", *v as f64);
            }
            let sum: f64 = values.iter().map(|v| *v as f64).sum();
            prop_assert!((forward.get("k") - sum).abs() < 1e-9);
            prop_assert!((backward.get("k") - sum).abs() < 1e-9);
        }
    }
}

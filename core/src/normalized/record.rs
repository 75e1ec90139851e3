use crate::error::CoreResult;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::sync::Arc;

/// The value held by one named field of a [`Record`].
///
/// `Absent` is the "never assigned" state and is distinct from the explicit
/// `Null` marker. `Present` never wraps a JSON `null`; use [`FieldValue::from`]
/// to build values so that invariant holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldValue {
    #[default]
    Absent,
    Null,
    Present(Arc<Value>),
}

impl FieldValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    pub fn is_null(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Present(v) => v.is_null(),
            FieldValue::Absent => false,
        }
    }

    /// Absent or null.
    pub fn is_empty(&self) -> bool {
        self.is_absent() || self.is_null()
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            FieldValue::Present(v) => Some(v.as_ref()),
            _ => None,
        }
    }

    /// String form used for sort keys: `None` for absent and null, otherwise
    /// the JavaScript `String(v)` rendering.
    pub fn to_sort_text(&self) -> Option<String> {
        match self {
            FieldValue::Present(v) if !v.is_null() => Some(js_string(v)),
            _ => None,
        }
    }
}

impl From<Value> for FieldValue {
    fn from(v: Value) -> Self {
        if v.is_null() {
            FieldValue::Null
        } else {
            FieldValue::Present(Arc::new(v))
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::from(Value::from(v))
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::from(Value::from(v))
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::from(Value::from(v))
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::from(Value::from(v))
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::from(Value::from(v))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(x) => x.into(),
            None => FieldValue::Null,
        }
    }
}

/// Renders a JSON value the way JavaScript's `String(v)` would.
pub fn js_string(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                js_number_string(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => s.clone(),
        // Array.prototype.join renders null/undefined elements as "".
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn js_number_string(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if f == 0.0 {
        return "0".to_string();
    }
    let abs = f.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let s = format!("{:e}", f);
        // JS always signs positive exponents: 1e+21.
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        };
    }
    if f.fract() == 0.0 {
        format!("{:.0}", f)
    } else {
        format!("{}", f)
    }
}

/// A dynamic record: named fields in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Unknown keys read as [`FieldValue::Absent`].
    pub fn get(&self, key: &str) -> &FieldValue {
        static ABSENT: FieldValue = FieldValue::Absent;
        self.fields.get(key).unwrap_or(&ABSENT)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn from_serialize<T: Serialize>(value: &T) -> CoreResult<Self> {
        let v = serde_json::to_value(value)?;
        Ok(serde_json::from_value(v)?)
    }

    pub fn to_json(&self) -> Value {
        let mut out = serde_json::Map::new();
        for (k, v) in &self.fields {
            match v {
                FieldValue::Absent => {}
                FieldValue::Null => {
                    out.insert(k.clone(), Value::Null);
                }
                FieldValue::Present(inner) => {
                    out.insert(k.clone(), inner.as_ref().clone());
                }
            }
        }
        Value::Object(out)
    }

    pub fn into_typed<T: DeserializeOwned>(&self) -> CoreResult<T> {
        Ok(serde_json::from_value(self.to_json())?)
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        static NULL: Value = Value::Null;
        serializer.collect_map(self.fields.iter().filter_map(|(k, v)| match v {
            FieldValue::Absent => None,
            FieldValue::Null => Some((k, &NULL)),
            FieldValue::Present(inner) => Some((k, inner.as_ref())),
        }))
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = serde_json::Map::<String, Value>::deserialize(deserializer)?;
        Ok(map
            .into_iter()
            .map(|(k, v)| (k, FieldValue::from(v)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_null_becomes_null_marker() {
        assert_eq!(FieldValue::from(Value::Null), FieldValue::Null);
        assert!(FieldValue::from(Value::Null).is_null());
        assert!(!FieldValue::from(Value::Null).is_absent());
    }

    #[test]
    fn unknown_key_reads_as_absent() {
        let r = Record::new().with("id", "1");
        assert!(r.get("missing").is_absent());
        assert!(!r.contains_key("missing"));
    }

    #[test]
    fn js_string_matches_javascript_coercion() {
        assert_eq!(js_string(&json!(30)), "30");
        assert_eq!(js_string(&json!(30.0)), "30");
        assert_eq!(js_string(&json!(2.5)), "2.5");
        assert_eq!(js_string(&json!(-0.0)), "0");
        assert_eq!(js_string(&json!(1e21)), "1e+21");
        assert_eq!(js_string(&json!(1e-7)), "1e-7");
        assert_eq!(js_string(&json!(true)), "true");
        assert_eq!(js_string(&json!([1, null, "a"])), "1,,a");
        assert_eq!(js_string(&json!({"a": 1})), "[object Object]");
    }

    #[test]
    fn serde_round_trip_preserves_field_order_and_nulls() {
        let raw = r#"{"zeta":1,"alpha":null,"mid":"x"}"#;
        let r: Record = serde_json::from_str(raw).unwrap();
        assert_eq!(r.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert!(r.get("alpha").is_null());
        assert_eq!(serde_json::to_string(&r).unwrap(), raw);
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let r = Record::new()
            .with("id", "1")
            .with("gone", FieldValue::Absent);
        assert_eq!(serde_json::to_string(&r).unwrap(), r#"{"id":"1"}"#);
    }

    #[test]
    fn typed_conversion_round_trips() {
        #[derive(Debug, Serialize, Deserialize, PartialEq)]
        struct Guest {
            id: String,
            name: String,
            age: u32,
        }
        let g = Guest {
            id: "g1".to_string(),
            name: "Ana".to_string(),
            age: 31,
        };
        let r = Record::from_serialize(&g).unwrap();
        assert_eq!(r.get("age").to_sort_text().as_deref(), Some("31"));
        let back: Guest = r.into_typed().unwrap();
        assert_eq!(back, g);
    }
}

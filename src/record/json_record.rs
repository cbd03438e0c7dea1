use serde_json::{Map, Value};

use super::{FieldValue, Record};

/// A library item backed by a JSON object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonRecord {
    fields: Map<String, Value>,
}

impl JsonRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Field names carrying a usable scalar
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|(_, v)| scalar(v).is_some())
            .map(|(k, _)| k.as_str())
    }
}

impl Record for JsonRecord {
    fn field(&self, name: &str) -> Option<FieldValue> {
        self.fields.get(name).and_then(scalar)
    }
}

impl From<Map<String, Value>> for JsonRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

// Booleans become 0/1 the way beets stores flags; null and containers are
// treated as missing.
fn scalar(value: &Value) -> Option<FieldValue> {
    match value {
        Value::String(s) => Some(FieldValue::Str(s.clone())),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(FieldValue::Int(i)),
            None => n.as_f64().map(FieldValue::Float),
        },
        Value::Bool(b) => Some(FieldValue::Int(i64::from(*b))),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

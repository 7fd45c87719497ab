//! Row records

use super::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One record of tabular data.
///
/// Fields are an open set keyed by name. JSON `null` fields are dropped on
/// decode and behave exactly like absent ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Option<Value>>")]
pub struct Row {
    #[serde(flatten)]
    fields: BTreeMap<String, Value>,
}

impl From<BTreeMap<String, Option<Value>>> for Row {
    fn from(raw: BTreeMap<String, Option<Value>>) -> Self {
        Self {
            fields: raw
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v)))
                .collect(),
        }
    }
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Text content of a field, if it holds text
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Rendering key, taken from the optional `id` field
    pub fn id(&self) -> Option<String> {
        self.get("id").map(|v| v.to_string())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_lookup() {
        let row = Row::new().with("id", 7).with("client", "Ada Byrne").with("confirmed", true);
        assert_eq!(row.id().as_deref(), Some("7"));
        assert_eq!(row.text("client"), Some("Ada Byrne"));
        assert_eq!(row.get("confirmed"), Some(&Value::Bool(true)));
        assert!(row.get("carer").is_none());
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn test_decode_drops_nulls() {
        let row: Row =
            serde_json::from_str(r#"{"id": "T-1", "carer": null, "duration_mins": 30}"#).unwrap();
        assert_eq!(row.len(), 2);
        assert!(row.get("carer").is_none());
        assert_eq!(row.get("duration_mins"), Some(&Value::Number(30.0)));
    }

    #[test]
    fn test_encode_flat_object() {
        let row = Row::new().with("id", "A-1").with("ack", false);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json, serde_json::json!({"id": "A-1", "ack": false}));
    }
}

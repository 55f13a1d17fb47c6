//! Record identifiers and the identifier resolver.
//!
//! The backend is inconsistent about which field carries a record's identity,
//! so every lookup goes through [`resolve_id`], which checks the same fields in
//! the same order everywhere. Caches keyed by anything else would silently
//! miss.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Fields that may carry a record identifier, in resolution order.
pub const ID_FIELDS: [&str; 5] = ["id", "_id", "sku", "productId", "product_id"];

/// A resolved record identifier.
///
/// Numeric identifiers are kept in their JSON text form, so `7` and `"7"`
/// address the same record and the same URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Create a new ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier carried by a JSON scalar: a non-empty string or a number.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Resolve the identifier of a raw backend record.
///
/// Returns the first present value among [`ID_FIELDS`]. Anything that is not
/// a JSON object resolves to `None`.
pub fn resolve_id(record: &Value) -> Option<RecordId> {
    let fields = record.as_object()?;
    ID_FIELDS
        .iter()
        .find_map(|field| fields.get(*field).and_then(RecordId::from_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_from_string() {
        let id: RecordId = "prod-456".into();
        assert_eq!(id.as_str(), "prod-456");
        assert_eq!(format!("{}", id), "prod-456");
    }

    #[test]
    fn test_resolution_order() {
        let record = json!({"sku": "A1", "_id": "mongo-1", "id": "primary"});
        assert_eq!(resolve_id(&record), Some(RecordId::new("primary")));

        let record = json!({"sku": "A1", "_id": "mongo-1"});
        assert_eq!(resolve_id(&record), Some(RecordId::new("mongo-1")));

        let record = json!({"sku": "A1", "productId": "P9"});
        assert_eq!(resolve_id(&record), Some(RecordId::new("A1")));

        let record = json!({"product_id": "P10", "productId": "P9"});
        assert_eq!(resolve_id(&record), Some(RecordId::new("P9")));

        let record = json!({"product_id": "P10"});
        assert_eq!(resolve_id(&record), Some(RecordId::new("P10")));
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let record = json!({"id": "", "_id": null, "sku": "A1"});
        assert_eq!(resolve_id(&record), Some(RecordId::new("A1")));
    }

    #[test]
    fn test_numeric_id() {
        let record = json!({"id": 42});
        assert_eq!(resolve_id(&record), Some(RecordId::new("42")));
    }

    #[test]
    fn test_no_identifier() {
        assert_eq!(resolve_id(&json!({"name": "Widget"})), None);
        assert_eq!(resolve_id(&json!({"id": {"nested": true}})), None);
        assert_eq!(resolve_id(&json!("A1")), None);
        assert_eq!(resolve_id(&Value::Null), None);
    }

    #[test]
    fn test_resolution_is_stable() {
        let record = json!({"_id": "x", "sku": "y"});
        let first = resolve_id(&record);
        for _ in 0..10 {
            assert_eq!(resolve_id(&record), first);
        }
    }
}

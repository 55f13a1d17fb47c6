//! Backend response shapes.
//!
//! The API does not agree with itself on field names or on whether a related
//! record is referenced by id or embedded whole. Everything that has to guess
//! lives here; the rest of the crate works with the canonical records built by
//! the adapters.

use serde_json::{Map, Value};

use crate::error::{json_type, ModelError};
use crate::ids::{resolve_id, RecordId};

/// Label preference for an embedded product.
pub const PRODUCT_LABEL_FIELDS: [&str; 4] = ["name", "title", "sku", "_id"];

/// Label preference for an embedded supplier.
pub const SUPPLIER_LABEL_FIELDS: [&str; 4] = ["name", "title", "contact", "_id"];

/// A canonical record adapted from a raw backend object.
pub trait Record: Sized + Clone {
    /// Singular, lowercase resource name ("product").
    const KIND: &'static str;

    /// Adapt one raw record.
    fn from_value(value: &Value) -> Result<Self, ModelError>;

    /// Identifier used in URLs and row actions.
    fn record_id(&self) -> Option<RecordId>;

    /// Key under which the record is cached.
    fn cache_key(&self) -> Option<RecordId> {
        self.record_id()
    }
}

/// A reference to another record, as the backend happened to send it.
#[derive(Debug, Clone, PartialEq)]
pub enum Reference {
    /// A bare id, sku or name.
    Key(String),
    /// The referenced record, embedded.
    Embedded(Map<String, Value>),
}

impl Reference {
    /// Interpret a single field value. Empty strings, null and other
    /// non-reference values yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self::Key(s.clone())),
            Value::Number(n) => Some(Self::Key(n.to_string())),
            Value::Object(map) => Some(Self::Embedded(map.clone())),
            _ => None,
        }
    }

    /// First present reference among `fields`.
    pub fn from_fields(object: &Map<String, Value>, fields: &[&str]) -> Option<Self> {
        fields
            .iter()
            .find_map(|field| object.get(*field).and_then(Self::from_value))
    }

    /// Display label. Embedded records use the first present field of
    /// `preference`, then their JSON text.
    pub fn label(&self, preference: &[&str]) -> String {
        match self {
            Self::Key(key) => key.clone(),
            Self::Embedded(map) => embedded_label(map, preference),
        }
    }

    /// Identifier of the referenced record.
    pub fn key(&self) -> Option<RecordId> {
        match self {
            Self::Key(key) => Some(RecordId::new(key.clone())),
            Self::Embedded(map) => resolve_id(&Value::Object(map.clone())),
        }
    }
}

/// Label of an object: first present field of `preference`, else its JSON text.
pub fn embedded_label(map: &Map<String, Value>, preference: &[&str]) -> String {
    preference
        .iter()
        .find_map(|field| text_field(map, field))
        .unwrap_or_else(|| Value::Object(map.clone()).to_string())
}

/// Scalar field as text. Empty strings count as absent.
pub fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numeric field; numeric strings are accepted.
pub fn number_field(object: &Map<String, Value>, key: &str) -> Option<f64> {
    match object.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Borrow a record as an object or report what it was instead.
pub fn as_object<'a>(
    kind: &'static str,
    value: &'a Value,
) -> Result<&'a Map<String, Value>, ModelError> {
    value.as_object().ok_or(ModelError::NotAnObject {
        kind,
        found: json_type(value),
    })
}

/// Raw records of a list response. A missing or `null` body is an empty list.
pub fn records_from_body(
    kind: &'static str,
    body: Option<Value>,
) -> Result<Vec<Value>, ModelError> {
    match body {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(ModelError::NotAList {
            kind,
            found: json_type(&other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_reference_from_scalar_and_object() {
        assert_eq!(
            Reference::from_value(&json!("P1")),
            Some(Reference::Key("P1".into()))
        );
        assert_eq!(
            Reference::from_value(&json!(12)),
            Some(Reference::Key("12".into()))
        );
        assert!(matches!(
            Reference::from_value(&json!({"name": "Bolt"})),
            Some(Reference::Embedded(_))
        ));
        assert_eq!(Reference::from_value(&json!("")), None);
        assert_eq!(Reference::from_value(&Value::Null), None);
        assert_eq!(Reference::from_value(&json!(false)), None);
    }

    #[test]
    fn test_reference_from_fields_takes_first_present() {
        let item = object(json!({"product": null, "productId": "P1", "sku": "A1"}));
        let reference = Reference::from_fields(&item, &["product", "productId", "sku"]);
        assert_eq!(reference, Some(Reference::Key("P1".into())));
    }

    #[test]
    fn test_embedded_label_preference() {
        let reference = Reference::from_value(&json!({"sku": "A1", "title": "Bolt M3"})).unwrap();
        assert_eq!(reference.label(&PRODUCT_LABEL_FIELDS), "Bolt M3");

        let reference = Reference::from_value(&json!({"contact": "ops@acme"})).unwrap();
        assert_eq!(reference.label(&SUPPLIER_LABEL_FIELDS), "ops@acme");
        assert_eq!(reference.label(&PRODUCT_LABEL_FIELDS), r#"{"contact":"ops@acme"}"#);
    }

    #[test]
    fn test_reference_key() {
        let embedded = Reference::from_value(&json!({"_id": "p-1", "name": "Bolt"})).unwrap();
        assert_eq!(embedded.key(), Some(RecordId::new("p-1")));

        let nameless = Reference::from_value(&json!({"name": "Bolt"})).unwrap();
        assert_eq!(nameless.key(), None);

        assert_eq!(Reference::Key("P1".into()).key(), Some(RecordId::new("P1")));
    }

    #[test]
    fn test_number_field_accepts_numeric_strings() {
        let map = object(json!({"a": 9.99, "b": "10", "c": "ten", "d": null}));
        assert_eq!(number_field(&map, "a"), Some(9.99));
        assert_eq!(number_field(&map, "b"), Some(10.0));
        assert_eq!(number_field(&map, "c"), None);
        assert_eq!(number_field(&map, "d"), None);
        assert_eq!(number_field(&map, "missing"), None);
    }

    #[test]
    fn test_records_from_body() {
        assert!(records_from_body("product", None).unwrap().is_empty());
        assert!(records_from_body("product", Some(Value::Null)).unwrap().is_empty());
        assert_eq!(records_from_body("product", Some(json!([1, 2]))).unwrap().len(), 2);
        assert_eq!(
            records_from_body("order", Some(json!({"data": []}))),
            Err(ModelError::NotAList {
                kind: "order",
                found: "object"
            })
        );
    }
}

//! Supplier records.

use serde::Serialize;
use serde_json::Value;

use crate::error::ModelError;
use crate::ids::{resolve_id, RecordId};
use crate::shape::{as_object, text_field, Record};

#[derive(Debug, Clone, PartialEq)]
pub struct Supplier {
    pub id: Option<RecordId>,
    pub name: String,
    pub contact: String,
}

impl Supplier {
    /// Value used to select this supplier on an order: the id, or the name
    /// when the backend sent no id.
    pub fn selection_key(&self) -> Option<RecordId> {
        self.id
            .clone()
            .or_else(|| (!self.name.is_empty()).then(|| RecordId::new(self.name.clone())))
    }
}

impl Record for Supplier {
    const KIND: &'static str = "supplier";

    fn from_value(value: &Value) -> Result<Self, ModelError> {
        let fields = as_object(Self::KIND, value)?;
        Ok(Self {
            id: resolve_id(value),
            name: text_field(fields, "name").unwrap_or_default(),
            contact: text_field(fields, "contact").unwrap_or_default(),
        })
    }

    fn record_id(&self) -> Option<RecordId> {
        self.id.clone()
    }

    // Suppliers without an id are still cached and selectable by name.
    fn cache_key(&self) -> Option<RecordId> {
        self.selection_key()
    }
}

/// Body of `POST /supplies` and `PUT /supplies/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierDraft {
    pub name: String,
    pub contact: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_adapt() {
        let supplier =
            Supplier::from_value(&json!({"_id": "s1", "name": "Acme", "contact": "ops@acme"}))
                .unwrap();
        assert_eq!(supplier.id, Some(RecordId::new("s1")));
        assert_eq!(supplier.cache_key(), Some(RecordId::new("s1")));
        assert_eq!(supplier.contact, "ops@acme");
    }

    #[test]
    fn test_name_is_fallback_key() {
        let supplier = Supplier::from_value(&json!({"name": "Acme"})).unwrap();
        assert_eq!(supplier.record_id(), None);
        assert_eq!(supplier.cache_key(), Some(RecordId::new("Acme")));
    }

    #[test]
    fn test_no_key_at_all() {
        let supplier = Supplier::from_value(&json!({"contact": "x"})).unwrap();
        assert_eq!(supplier.cache_key(), None);
    }
}

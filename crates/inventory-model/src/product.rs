//! Product records.

use serde::Serialize;
use serde_json::Value;

use crate::error::ModelError;
use crate::ids::{resolve_id, RecordId};
use crate::shape::{as_object, number_field, text_field, Record};

/// A product as last seen from the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Option<RecordId>,
    pub sku: String,
    pub name: String,
    pub price: Option<f64>,
    pub stock: Option<f64>,
}

impl Record for Product {
    const KIND: &'static str = "product";

    fn from_value(value: &Value) -> Result<Self, ModelError> {
        let fields = as_object(Self::KIND, value)?;
        Ok(Self {
            id: resolve_id(value),
            sku: text_field(fields, "sku").unwrap_or_default(),
            name: text_field(fields, "name").unwrap_or_default(),
            price: number_field(fields, "price"),
            stock: number_field(fields, "stock"),
        })
    }

    fn record_id(&self) -> Option<RecordId> {
        self.id.clone()
    }
}

/// Body of `POST /products` and `PUT /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDraft {
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub stock: u64,
}

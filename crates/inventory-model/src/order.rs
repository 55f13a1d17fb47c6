//! Order records.

use serde::Serialize;
use serde_json::Value;

use crate::error::ModelError;
use crate::ids::{resolve_id, RecordId};
use crate::shape::{
    as_object, embedded_label, number_field, text_field, Record, Reference, PRODUCT_LABEL_FIELDS,
};

/// Fields that may reference the product of a line item, in order.
pub const ITEM_PRODUCT_FIELDS: [&str; 5] = ["product", "productId", "product_id", "sku", "name"];

/// Fields that may reference the supplier of an order, in order.
pub const ORDER_SUPPLIER_FIELDS: [&str; 5] =
    ["supplier", "supplierId", "supplierName", "supplierObj", "supplier_info"];

/// One line of an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product: Option<Reference>,
    pub quantity: Option<f64>,
    pub price: Option<f64>,
    /// Identifier of the line item itself.
    pub item_id: Option<RecordId>,
    /// Label derived from the item when it carries no product reference.
    pub fallback_label: String,
}

impl OrderItem {
    /// Adapt one raw line item. A bare scalar is taken as the product
    /// reference itself.
    pub fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            let product = Reference::from_value(value);
            let fallback_label = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Self {
                product,
                quantity: None,
                price: None,
                item_id: None,
                fallback_label,
            };
        };

        Self {
            product: Reference::from_fields(fields, &ITEM_PRODUCT_FIELDS),
            quantity: number_field(fields, "qty").or_else(|| number_field(fields, "quantity")),
            price: number_field(fields, "price"),
            item_id: resolve_id(value),
            fallback_label: embedded_label(fields, &PRODUCT_LABEL_FIELDS),
        }
    }

    /// Id to preselect in a product selector: the referenced product's id,
    /// else the item's own.
    pub fn product_key(&self) -> Option<RecordId> {
        self.product
            .as_ref()
            .and_then(Reference::key)
            .or_else(|| self.item_id.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Option<RecordId>,
    pub items: Vec<OrderItem>,
    pub supplier: Option<Reference>,
    pub status: String,
}

impl Order {
    /// Value to preselect in the supplier selector.
    pub fn supplier_key(&self) -> Option<RecordId> {
        match self.supplier.as_ref()? {
            Reference::Key(key) => Some(RecordId::new(key.clone())),
            Reference::Embedded(map) => resolve_id(&Value::Object(map.clone()))
                .or_else(|| text_field(map, "name").map(RecordId::new)),
        }
    }
}

impl Record for Order {
    const KIND: &'static str = "order";

    fn from_value(value: &Value) -> Result<Self, ModelError> {
        let fields = as_object(Self::KIND, value)?;
        let items = match fields.get("items") {
            Some(Value::Array(items)) => items.iter().map(OrderItem::from_value).collect(),
            _ => Vec::new(),
        };

        Ok(Self {
            id: resolve_id(value),
            items,
            supplier: Reference::from_fields(fields, &ORDER_SUPPLIER_FIELDS),
            status: text_field(fields, "status").unwrap_or_default(),
        })
    }

    fn record_id(&self) -> Option<RecordId> {
        self.id.clone()
    }
}

/// One line of an order body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItemDraft {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub qty: f64,
    pub price: f64,
}

/// Body of `POST /orders` and `PUT /orders/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDraft {
    pub items: Vec<OrderItemDraft>,
    #[serde(rename = "supplierId")]
    pub supplier_id: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_adapt_order_with_keys() {
        let order = Order::from_value(&json!({
            "id": "O1",
            "items": [{"productId": "P1", "qty": 2, "price": 5}],
            "supplierId": "S1",
            "status": "pending"
        }))
        .unwrap();

        assert_eq!(order.id, Some(RecordId::new("O1")));
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].product, Some(Reference::Key("P1".into())));
        assert_eq!(order.items[0].quantity, Some(2.0));
        assert_eq!(order.items[0].price, Some(5.0));
        assert_eq!(order.supplier_key(), Some(RecordId::new("S1")));
        assert_eq!(order.status, "pending");
    }

    #[test]
    fn test_adapt_embedded_references() {
        let order = Order::from_value(&json!({
            "_id": "o-9",
            "items": [{"product": {"_id": "p-1", "name": "Bolt"}, "quantity": 3}],
            "supplier": {"_id": "s-1", "name": "Acme"}
        }))
        .unwrap();

        assert_eq!(order.items[0].product_key(), Some(RecordId::new("p-1")));
        assert_eq!(order.items[0].quantity, Some(3.0));
        assert_eq!(order.supplier_key(), Some(RecordId::new("s-1")));
        assert_eq!(order.status, "");
    }

    #[test]
    fn test_embedded_supplier_without_id_selects_by_name() {
        let order = Order::from_value(&json!({"supplierObj": {"name": "Acme"}})).unwrap();
        assert_eq!(order.supplier_key(), Some(RecordId::new("Acme")));
    }

    #[test]
    fn test_qty_wins_over_quantity() {
        let item = OrderItem::from_value(&json!({"sku": "A1", "qty": 4, "quantity": 9}));
        assert_eq!(item.quantity, Some(4.0));
    }

    #[test]
    fn test_item_without_product_reference() {
        let item = OrderItem::from_value(&json!({"_id": "line-1", "title": "Loose bolts"}));
        assert_eq!(item.product, None);
        assert_eq!(item.fallback_label, "Loose bolts");
        assert_eq!(item.product_key(), Some(RecordId::new("line-1")));
    }

    #[test]
    fn test_missing_items_is_empty() {
        let order = Order::from_value(&json!({"id": 3, "items": null})).unwrap();
        assert!(order.items.is_empty());
        assert_eq!(order.id, Some(RecordId::new("3")));
    }

    #[test]
    fn test_scalar_item_is_a_product_reference() {
        let order = Order::from_value(&json!({"id": "O1", "items": ["P1"]})).unwrap();
        assert_eq!(order.items[0].product, Some(Reference::Key("P1".into())));
        assert_eq!(order.items[0].quantity, None);
    }

    #[test]
    fn test_rejects_non_object_order() {
        assert!(matches!(
            Order::from_value(&json!("O1")),
            Err(ModelError::NotAnObject { kind: "order", found: "string" })
        ));
    }

    #[test]
    fn test_draft_wire_format() {
        let draft = OrderDraft {
            items: vec![OrderItemDraft {
                product_id: "P1".into(),
                qty: 2.0,
                price: 5.0,
            }],
            supplier_id: "S1".into(),
            status: "pending".into(),
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({
                "items": [{"productId": "P1", "qty": 2.0, "price": 5.0}],
                "supplierId": "S1",
                "status": "pending"
            })
        );
    }
}

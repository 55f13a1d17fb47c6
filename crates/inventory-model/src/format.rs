//! Display formatting for nested and variant fields.

use crate::order::{Order, OrderItem};
use crate::shape::{PRODUCT_LABEL_FIELDS, SUPPLIER_LABEL_FIELDS};

/// Format a number the way it appears in the API: `10`, `9.99`.
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// Format an optional number, empty when absent.
pub fn format_optional(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_default()
}

/// `"{product label} x{quantity}"`, quantity defaulting to 1.
pub fn format_order_item(item: &OrderItem) -> String {
    let label = match &item.product {
        Some(reference) => reference.label(&PRODUCT_LABEL_FIELDS),
        None => item.fallback_label.clone(),
    };
    let quantity = item.quantity.unwrap_or(1.0);
    format!("{} x{}", label, format_number(quantity))
}

/// All items of an order, `"; "`-separated.
pub fn format_order_items(items: &[OrderItem]) -> String {
    items
        .iter()
        .map(format_order_item)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Supplier label of an order, empty when the order names none.
pub fn format_supplier_field(order: &Order) -> String {
    order
        .supplier
        .as_ref()
        .map(|reference| reference.label(&SUPPLIER_LABEL_FIELDS))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Record;
    use serde_json::json;

    fn item(value: serde_json::Value) -> OrderItem {
        OrderItem::from_value(&value)
    }

    #[test]
    fn test_embedded_product_with_quantity() {
        assert_eq!(
            format_order_item(&item(json!({"product": {"name": "Bolt"}, "qty": 3}))),
            "Bolt x3"
        );
    }

    #[test]
    fn test_product_id_defaults_quantity() {
        assert_eq!(format_order_item(&item(json!({"productId": "X9"}))), "X9 x1");
    }

    #[test]
    fn test_label_preference_inside_embedded_product() {
        assert_eq!(
            format_order_item(&item(json!({"product": {"sku": "A1", "_id": "p1"}, "quantity": 2}))),
            "A1 x2"
        );
        assert_eq!(
            format_order_item(&item(json!({"product": {"price": 4}}))),
            r#"{"price":4} x1"#
        );
    }

    #[test]
    fn test_item_label_falls_back_to_item() {
        assert_eq!(
            format_order_item(&item(json!({"title": "Spare parts", "qty": 2}))),
            "Spare parts x2"
        );
        assert_eq!(format_order_item(&item(json!({"qty": 1}))), r#"{"qty":1} x1"#);
    }

    #[test]
    fn test_zero_quantity_is_kept() {
        assert_eq!(format_order_item(&item(json!({"sku": "A1", "qty": 0}))), "A1 x0");
    }

    #[test]
    fn test_format_order_items_joins() {
        let items = vec![item(json!({"productId": "P1", "qty": 2})), item(json!("P2"))];
        assert_eq!(format_order_items(&items), "P1 x2; P2 x1");
        assert_eq!(format_order_items(&[]), "");
    }

    #[test]
    fn test_supplier_field_shapes() {
        let order = |value: serde_json::Value| Order::from_value(&value).unwrap();

        assert_eq!(format_supplier_field(&order(json!({"supplierId": "S1"}))), "S1");
        assert_eq!(
            format_supplier_field(&order(json!({"supplier": {"name": "Acme", "_id": "s1"}}))),
            "Acme"
        );
        assert_eq!(
            format_supplier_field(&order(json!({"supplier_info": {"contact": "ops@acme"}}))),
            "ops@acme"
        );
        assert_eq!(format_supplier_field(&order(json!({}))), "");
    }

    #[test]
    fn test_format_is_pure() {
        let line = item(json!({"product": {"name": "Bolt"}, "qty": 3}));
        assert_eq!(format_order_item(&line), format_order_item(&line));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(9.99), "9.99");
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_optional(None), "");
    }
}

//! Table rendering.
//!
//! Records become display rows here and nowhere else. Nothing in this module
//! touches the network or the caches, so every function is a plain mapping
//! from records to strings.

use inventory_model::format::{format_optional, format_order_items, format_supplier_field};
use inventory_model::{Order, Product, Record, RecordId, Supplier};
use serde::Serialize;

/// One table row. Row actions are available only when `id` is known.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub id: Option<RecordId>,
    pub cells: Vec<String>,
}

impl Row {
    pub fn actionable(&self) -> bool {
        self.id.is_some()
    }
}

/// Rendered state of a resource table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    /// Singular resource name, used for action classes.
    pub kind: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Row>,
    /// Set when the last list failed. The table then shows only this message.
    pub error: Option<String>,
}

impl Table {
    pub fn new(kind: &'static str, headers: &[&'static str]) -> Self {
        Self {
            kind,
            headers: headers.to_vec(),
            rows: Vec::new(),
            error: None,
        }
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self.error = None;
        self
    }

    /// Replace all rows with a single error row.
    pub fn failed(mut self, message: impl Into<String>) -> Self {
        self.rows.clear();
        self.error = Some(message.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.error.is_none()
    }

    /// Render as an HTML `<table>`. Every column plus a trailing actions
    /// column; an error spans the whole width.
    pub fn to_html(&self) -> String {
        let head: String = self
            .headers
            .iter()
            .map(|h| format!("<th>{}</th>", escape_html(h)))
            .collect();

        let body: String = match &self.error {
            Some(message) => format!(
                r#"<tr><td colspan="{}">{}</td></tr>"#,
                self.headers.len(),
                escape_html(message)
            ),
            None => self.rows.iter().map(|row| self.render_row(row)).collect(),
        };

        format!(
            r#"<table class="{kind}-table">
    <thead><tr>{head}</tr></thead>
    <tbody>{body}</tbody>
</table>"#,
            kind = self.kind,
            head = head,
            body = body
        )
    }

    fn render_row(&self, row: &Row) -> String {
        let cells: String = row
            .cells
            .iter()
            .map(|c| format!("<td>{}</td>", escape_html(c)))
            .collect();

        let actions = match &row.id {
            Some(id) => format!(
                r#"<button class="edit-{kind}" data-id="{id}">Edit</button> <button class="delete-{kind}" data-id="{id}">Delete</button>"#,
                kind = self.kind,
                id = escape_html(id.as_str())
            ),
            None => format!(
                r#"<button class="edit-{kind}" disabled>Edit</button> <button class="delete-{kind}" disabled>Delete</button>"#,
                kind = self.kind
            ),
        };

        format!("<tr>{}<td>{}</td></tr>", cells, actions)
    }
}

/// An entry of a selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

pub const PRODUCT_HEADERS: [&str; 5] = ["SKU", "Name", "Price", "Stock", "Actions"];
pub const SUPPLIER_HEADERS: [&str; 3] = ["Name", "Contact", "Actions"];
pub const ORDER_HEADERS: [&str; 5] = ["ID", "Items", "Supplier", "Status", "Actions"];

pub fn product_row(product: &Product) -> Row {
    Row {
        id: product.record_id(),
        cells: vec![
            product.sku.clone(),
            product.name.clone(),
            format_optional(product.price),
            format_optional(product.stock),
        ],
    }
}

pub fn supplier_row(supplier: &Supplier) -> Row {
    Row {
        id: supplier.record_id(),
        cells: vec![supplier.name.clone(), supplier.contact.clone()],
    }
}

pub fn order_row(order: &Order) -> Row {
    let id = order.record_id();
    Row {
        cells: vec![
            id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            format_order_items(&order.items),
            format_supplier_field(order),
            order.status.clone(),
        ],
        id,
    }
}

/// Product selector entries: `"{name|sku|id} ({sku})"`. Products without
/// an id cannot be ordered and are left out.
pub fn product_options(products: &[Product]) -> Vec<SelectOption> {
    products
        .iter()
        .filter_map(|product| {
            let id = product.record_id()?;
            let label = [product.name.as_str(), product.sku.as_str()]
                .into_iter()
                .find(|s| !s.is_empty())
                .unwrap_or(id.as_str());
            Some(SelectOption {
                text: format!("{} ({})", label, product.sku),
                value: id.into_inner(),
            })
        })
        .collect()
}

/// Supplier selector entries: value is the id or name, text the name or value.
pub fn supplier_options(suppliers: &[Supplier]) -> Vec<SelectOption> {
    suppliers
        .iter()
        .filter_map(|supplier| {
            let value = supplier.selection_key()?.into_inner();
            let text = if supplier.name.is_empty() {
                value.clone()
            } else {
                supplier.name.clone()
            };
            Some(SelectOption { value, text })
        })
        .collect()
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(value: serde_json::Value) -> Product {
        Product::from_value(&value).unwrap()
    }

    #[test]
    fn test_product_row_cells() {
        let row = product_row(&product(
            json!({"_id": "p1", "sku": "A1", "name": "Widget", "price": 9.99, "stock": 10}),
        ));
        assert_eq!(row.id, Some(RecordId::new("p1")));
        assert_eq!(row.cells, vec!["A1", "Widget", "9.99", "10"]);
    }

    #[test]
    fn test_row_without_id_is_not_actionable() {
        let supplier = Supplier::from_value(&json!({"name": "Acme", "contact": "x"})).unwrap();
        let row = supplier_row(&supplier);
        assert!(!row.actionable());
        assert_eq!(row.cells, vec!["Acme", "x"]);
    }

    #[test]
    fn test_order_row_formats_nested_fields() {
        let order = Order::from_value(&json!({
            "_id": "o1",
            "items": [{"product": {"name": "Bolt"}, "qty": 3}, {"productId": "X9"}],
            "supplier": {"name": "Acme"},
            "status": "shipped"
        }))
        .unwrap();
        assert_eq!(
            order_row(&order).cells,
            vec!["o1", "Bolt x3; X9 x1", "Acme", "shipped"]
        );
    }

    #[test]
    fn test_html_escapes_and_disables() {
        let table = Table::new("product", &PRODUCT_HEADERS).with_rows(vec![
            product_row(&product(json!({"sku": "A1", "name": "<b>Bolt</b>"}))),
            Row {
                id: None,
                cells: vec!["".into(), "Loose".into(), "".into(), "".into()],
            },
        ]);
        let html = table.to_html();
        assert!(html.contains("<td>&lt;b&gt;Bolt&lt;/b&gt;</td>"));
        assert!(html.contains(r#"<button class="edit-product" data-id="A1">Edit</button>"#));
        assert!(html.contains(r#"<button class="delete-product" disabled>Delete</button>"#));
        assert!(html.contains("<th>SKU</th>"));
    }

    #[test]
    fn test_error_row_spans_table() {
        let table = Table::new("order", &ORDER_HEADERS).failed("Error loading orders");
        assert!(table
            .to_html()
            .contains(r#"<tr><td colspan="5">Error loading orders</td></tr>"#));
        assert!(table.rows.is_empty());
        assert!(!table.is_empty());
    }

    #[test]
    fn test_product_options() {
        let options = product_options(&[
            product(json!({"_id": "p1", "sku": "A1", "name": "Widget"})),
            product(json!({"_id": "p2", "sku": "B2"})),
            product(json!({"id": 7})),
            product(json!({"name": "No id"})),
        ]);
        assert_eq!(
            options,
            vec![
                SelectOption { value: "p1".into(), text: "Widget (A1)".into() },
                SelectOption { value: "p2".into(), text: "B2 (B2)".into() },
                SelectOption { value: "7".into(), text: "7 ()".into() },
            ]
        );
    }

    #[test]
    fn test_supplier_options() {
        let suppliers: Vec<Supplier> = [
            json!({"_id": "s1", "name": "Acme"}),
            json!({"name": "Globex"}),
            json!({"id": "s3"}),
            json!({"contact": "nobody"}),
        ]
        .iter()
        .map(|v| Supplier::from_value(v).unwrap())
        .collect();

        let options = supplier_options(&suppliers);
        assert_eq!(
            options,
            vec![
                SelectOption { value: "s1".into(), text: "Acme".into() },
                SelectOption { value: "Globex".into(), text: "Globex".into() },
                SelectOption { value: "s3".into(), text: "s3".into() },
            ]
        );
    }
}

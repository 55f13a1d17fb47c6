//! Form state and pre-flight validation.
//!
//! Forms hold raw user text. `validate` turns them into the request body or
//! the first failing rule; `from_record` fills them for editing.

use crate::error::ValidationError;
use crate::format::format_optional;
use crate::order::{Order, OrderDraft, OrderItemDraft};
use crate::product::{Product, ProductDraft};
use crate::supplier::{Supplier, SupplierDraft};

/// Non-negative, finite number.
fn parse_non_negative(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0)
}

/// Non-negative whole number. `"10.0"` is accepted.
fn parse_count(text: &str) -> Option<u64> {
    parse_non_negative(text)
        .filter(|n| n.fract() == 0.0 && *n <= u64::MAX as f64)
        .map(|n| n as u64)
}

fn required(text: &str, error: ValidationError) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(error)
    } else {
        Ok(trimmed.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub sku: String,
    pub name: String,
    pub price: String,
    pub stock: String,
}

impl ProductForm {
    pub fn from_record(product: &Product) -> Self {
        Self {
            sku: product.sku.clone(),
            name: product.name.clone(),
            price: format_optional(product.price),
            stock: format_optional(product.stock),
        }
    }

    pub fn validate(&self) -> Result<ProductDraft, ValidationError> {
        let sku = required(&self.sku, ValidationError::MissingSku)?;
        let name = required(&self.name, ValidationError::MissingProductName)?;
        let price = parse_non_negative(&self.price).ok_or(ValidationError::InvalidPrice)?;
        let stock = parse_count(&self.stock).ok_or(ValidationError::InvalidStock)?;
        Ok(ProductDraft {
            sku,
            name,
            price,
            stock,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierForm {
    pub name: String,
    pub contact: String,
}

impl SupplierForm {
    pub fn from_record(supplier: &Supplier) -> Self {
        Self {
            name: supplier.name.clone(),
            contact: supplier.contact.clone(),
        }
    }

    pub fn validate(&self) -> Result<SupplierDraft, ValidationError> {
        Ok(SupplierDraft {
            name: required(&self.name, ValidationError::MissingSupplierName)?,
            contact: required(&self.contact, ValidationError::MissingContact)?,
        })
    }
}

/// One item row of the order form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderItemRow {
    pub product_id: String,
    pub quantity: String,
    pub price: String,
}

impl OrderItemRow {
    pub fn new(
        product_id: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    fn is_blank(&self) -> bool {
        self.product_id.trim().is_empty()
            && self.quantity.trim().is_empty()
            && self.price.trim().is_empty()
    }

    fn validate(&self) -> Result<OrderItemDraft, ValidationError> {
        let product_id = required(&self.product_id, ValidationError::MissingItems)?;
        let qty = parse_non_negative(&self.quantity)
            .filter(|q| *q > 0.0)
            .ok_or(ValidationError::InvalidQuantity)?;
        let price = parse_non_negative(&self.price).ok_or(ValidationError::InvalidPrice)?;
        Ok(OrderItemDraft {
            product_id,
            qty,
            price,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    pub items: Vec<OrderItemRow>,
    pub supplier_id: String,
    pub status: String,
}

impl Default for OrderForm {
    // The form always shows at least one item row.
    fn default() -> Self {
        Self {
            items: vec![OrderItemRow::default()],
            supplier_id: String::new(),
            status: String::new(),
        }
    }
}

impl OrderForm {
    pub fn from_record(order: &Order) -> Self {
        let mut items: Vec<OrderItemRow> = order
            .items
            .iter()
            .map(|item| OrderItemRow {
                product_id: item
                    .product_key()
                    .map(|id| id.into_inner())
                    .unwrap_or_default(),
                quantity: format_optional(item.quantity),
                price: format_optional(item.price),
            })
            .collect();
        if items.is_empty() {
            items.push(OrderItemRow::default());
        }

        Self {
            items,
            supplier_id: order
                .supplier_key()
                .map(|id| id.into_inner())
                .unwrap_or_default(),
            status: order.status.clone(),
        }
    }

    /// Validate every non-blank item row, then supplier and status.
    pub fn validate(&self) -> Result<OrderDraft, ValidationError> {
        let items = self
            .items
            .iter()
            .filter(|row| !row.is_blank())
            .map(OrderItemRow::validate)
            .collect::<Result<Vec<_>, _>>()?;
        if items.is_empty() {
            return Err(ValidationError::MissingItems);
        }

        Ok(OrderDraft {
            items,
            supplier_id: required(&self.supplier_id, ValidationError::MissingSupplier)?,
            status: required(&self.status, ValidationError::MissingStatus)?,
        })
    }
}

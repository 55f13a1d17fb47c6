//! Records, forms and formatting for the inventory console.
//!
//! The backend sends products, suppliers and orders in several shapes. This
//! crate adapts them into canonical records once, at the boundary:
//!
//! - **Ids**: one resolver for every record identifier
//! - **Records**: `Product`, `Supplier`, `Order` and their request drafts
//! - **Forms**: raw form text, validation and edit prefill
//! - **Format**: display labels for nested order fields
//!
//! # Example
//!
//! ```rust
//! use inventory_model::prelude::*;
//! use serde_json::json;
//!
//! let order = Order::from_value(&json!({
//!     "_id": "o-1",
//!     "items": [{"product": {"name": "Bolt"}, "qty": 3}],
//!     "supplier": {"name": "Acme"}
//! }))
//! .unwrap();
//!
//! assert_eq!(order.record_id(), Some(RecordId::new("o-1")));
//! assert_eq!(format_order_items(&order.items), "Bolt x3");
//! assert_eq!(format_supplier_field(&order), "Acme");
//! ```

pub mod cache;
pub mod error;
pub mod form;
pub mod format;
pub mod ids;
pub mod order;
pub mod product;
pub mod shape;
pub mod supplier;

pub use cache::RecordCache;
pub use error::{ModelError, ValidationError};
pub use ids::{resolve_id, RecordId};
pub use shape::{Record, Reference};
pub use order::{Order, OrderDraft, OrderItem, OrderItemDraft};
pub use product::{Product, ProductDraft};
pub use supplier::{Supplier, SupplierDraft};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cache::RecordCache;
    pub use crate::error::{ModelError, ValidationError};
    pub use crate::ids::{resolve_id, RecordId};
    pub use crate::shape::{records_from_body, Record, Reference};

    pub use crate::form::{OrderForm, OrderItemRow, ProductForm, SupplierForm};
    pub use crate::format::{
        format_number, format_optional, format_order_item, format_order_items,
        format_supplier_field,
    };
    pub use crate::order::{Order, OrderDraft, OrderItem, OrderItemDraft};
    pub use crate::product::{Product, ProductDraft};
    pub use crate::supplier::{Supplier, SupplierDraft};
}

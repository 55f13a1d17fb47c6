//! Per-resource wiring for the generic controller.

use std::fmt::Debug;

use inventory_model::form::{OrderForm, ProductForm, SupplierForm};
use inventory_model::{
    Order, OrderDraft, Product, ProductDraft, Record, Supplier, SupplierDraft, ValidationError,
};
use serde::Serialize;

use crate::render::{
    order_row, product_row, supplier_row, Row, ORDER_HEADERS, PRODUCT_HEADERS, SUPPLIER_HEADERS,
};

/// A record type managed through a REST collection.
pub trait Resource: Record + Debug + Send + Sync + 'static {
    /// Collection path, e.g. `/products`.
    const COLLECTION: &'static str;
    /// Capitalized singular, e.g. `Product`.
    const LABEL: &'static str;
    /// Capitalized plural, e.g. `Products`.
    const PLURAL: &'static str;
    const HEADERS: &'static [&'static str];
    /// Append the new id to the creation notice.
    const ANNOUNCE_CREATED_ID: bool = false;

    type Form: Debug + Clone + Default + PartialEq;
    type Draft: Serialize;

    fn row(&self) -> Row;

    fn fill_form(&self) -> Self::Form;

    fn validate(form: &Self::Form) -> Result<Self::Draft, ValidationError>;

    /// Path of a single record. The id is percent-encoded as one path
    /// segment, since skus and supplier names may contain `/`, `#` or `?`.
    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::COLLECTION, urlencoding::encode(id))
    }
}

impl Resource for Product {
    const COLLECTION: &'static str = "/products";
    const LABEL: &'static str = "Product";
    const PLURAL: &'static str = "Products";
    const HEADERS: &'static [&'static str] = &PRODUCT_HEADERS;

    type Form = ProductForm;
    type Draft = ProductDraft;

    fn row(&self) -> Row {
        product_row(self)
    }

    fn fill_form(&self) -> ProductForm {
        ProductForm::from_record(self)
    }

    fn validate(form: &ProductForm) -> Result<ProductDraft, ValidationError> {
        form.validate()
    }
}

impl Resource for Supplier {
    const COLLECTION: &'static str = "/supplies";
    const LABEL: &'static str = "Supplier";
    const PLURAL: &'static str = "Suppliers";
    const HEADERS: &'static [&'static str] = &SUPPLIER_HEADERS;

    type Form = SupplierForm;
    type Draft = SupplierDraft;

    fn row(&self) -> Row {
        supplier_row(self)
    }

    fn fill_form(&self) -> SupplierForm {
        SupplierForm::from_record(self)
    }

    fn validate(form: &SupplierForm) -> Result<SupplierDraft, ValidationError> {
        form.validate()
    }
}

impl Resource for Order {
    const COLLECTION: &'static str = "/orders";
    const LABEL: &'static str = "Order";
    const PLURAL: &'static str = "Orders";
    const HEADERS: &'static [&'static str] = &ORDER_HEADERS;
    const ANNOUNCE_CREATED_ID: bool = true;

    type Form = OrderForm;
    type Draft = OrderDraft;

    fn row(&self) -> Row {
        order_row(self)
    }

    fn fill_form(&self) -> OrderForm {
        OrderForm::from_record(self)
    }

    fn validate(form: &OrderForm) -> Result<OrderDraft, ValidationError> {
        form.validate()
    }
}

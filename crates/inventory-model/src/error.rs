//! Model error types.

use thiserror::Error;

/// Local form validation failures. The message is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("SKU is required and cannot be empty")]
    MissingSku,

    #[error("Product Name is required")]
    MissingProductName,

    #[error("Price must be a valid number >= 0")]
    InvalidPrice,

    #[error("Stock must be a valid number >= 0")]
    InvalidStock,

    #[error("Supplier Name is required")]
    MissingSupplierName,

    #[error("Contact is required")]
    MissingContact,

    #[error("At least one item with a Product ID is required")]
    MissingItems,

    #[error("Quantity must be a positive number")]
    InvalidQuantity,

    #[error("Supplier is required")]
    MissingSupplier,

    #[error("Status is required")]
    MissingStatus,
}

/// Errors raised while adapting backend payloads.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A record was not a JSON object.
    #[error("Expected a {kind} object, got {found}")]
    NotAnObject { kind: &'static str, found: &'static str },

    /// A list endpoint returned something other than an array.
    #[error("Expected a list of {kind} records, got {found}")]
    NotAList { kind: &'static str, found: &'static str },

    /// Validation error.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// JSON type name for error messages.
pub(crate) fn json_type(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

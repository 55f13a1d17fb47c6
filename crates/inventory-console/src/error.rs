//! Console error types.

use inventory_data::FetchError;
use inventory_model::{ModelError, ValidationError};
use thiserror::Error;

/// Errors surfaced by controller operations.
///
/// By the time an operation returns one of these, the user has already been
/// told through the [`Prompter`](crate::Prompter) or the table's error row.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsoleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A row action was invoked on a record without an identifier.
    #[error("Cannot determine {kind} id to {action}")]
    MissingId {
        kind: &'static str,
        action: &'static str,
    },

    /// The single-record fetch succeeded but returned no body.
    #[error("{label} data not available")]
    NotAvailable { label: &'static str },

    /// The single-record fetch returned 404.
    #[error("{label} not retrievable by id from server. Refresh the {plural} list and try editing again.")]
    NotRetrievable {
        label: &'static str,
        plural: &'static str,
    },
}

impl ConsoleError {
    /// True when the failure happened before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::MissingId { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConsoleError::MissingId {
            kind: "product",
            action: "delete",
        };
        assert_eq!(err.to_string(), "Cannot determine product id to delete");
        assert!(err.is_local());

        let err = ConsoleError::NotRetrievable {
            label: "Order",
            plural: "Orders",
        };
        assert_eq!(
            err.to_string(),
            "Order not retrievable by id from server. Refresh the Orders list and try editing again."
        );
    }

    #[test]
    fn test_transparent_sources() {
        let err: ConsoleError = ValidationError::MissingSku.into();
        assert_eq!(err.to_string(), "SKU is required and cannot be empty");

        let err: ConsoleError = FetchError::HttpError {
            status: 500,
            message: "boom".into(),
        }
        .into();
        assert_eq!(err.to_string(), "HTTP 500: boom");
        assert!(!err.is_local());
    }
}

//! Commerce error types.

use thiserror::Error;

/// Errors raised by catalog construction and cart operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product cannot be added because it is out of stock.
    #[error("Product out of stock: {0}")]
    OutOfStock(String),

    /// Two catalog entries share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// A product record violates a catalog invariant.
    #[error("Invalid product {product_id}: {reason}")]
    InvalidProduct { product_id: String, reason: String },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CommerceError {
    pub(crate) fn invalid(product_id: &str, reason: impl Into<String>) -> Self {
        CommerceError::InvalidProduct {
            product_id: product_id.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

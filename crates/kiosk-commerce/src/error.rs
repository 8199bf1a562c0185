//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront commerce operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// The product has variant options and none was selected.
    #[error("A variant must be selected for this product")]
    VariantRequired,

    /// The selected variant is not offered or is out of stock.
    #[error("Variant not available: {label}")]
    VariantUnavailable { label: String },

    /// Checkout was attempted with an empty cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Checkout was attempted while another checkout is in flight.
    #[error("A checkout is already in progress")]
    CheckoutInFlight,

    /// The backend rejected the checkout, or the request never completed.
    #[error("{0}")]
    Rejected(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

//! Commerce domain types and logic for the kiosk storefront.
//!
//! This crate holds the pure, I/O-free half of the storefront:
//!
//! - **Catalog**: products and their variant options as received from the
//!   backend listing endpoint
//! - **Cart**: an ordered set of line items keyed by (product, variant) with
//!   derived total and count
//! - **Checkout**: the wire types submitted to and returned from the
//!   checkout endpoint
//!
//! # Example
//!
//! ```rust
//! use kiosk_commerce::prelude::*;
//!
//! let product = Product::new("sku-42", "Trail Runner", Amount::new(450_000));
//!
//! let mut cart = Cart::new();
//! cart.add(&product, None);
//! cart.add(&product, None);
//!
//! assert_eq!(cart.count(), 2);
//! assert_eq!(cart.total(), Amount::new(900_000));
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod money;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Amount;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Amount;

    // Catalog
    pub use crate::catalog::{Product, VariantOption};

    // Cart
    pub use crate::cart::{Cart, LineItem};

    // Checkout
    pub use crate::checkout::{
        CheckoutItem, CheckoutRequest, CustomerProfile, OrderConfirmation, PaymentMethod,
    };
}

//! Storefront services for the kiosk client.
//!
//! Composes the commerce domain types ([`kiosk_commerce`]) with the HTTP
//! transport ([`kiosk_data`]) into the four pieces a storefront UI sits on:
//!
//! - **Catalog query**: filtered product listing with graceful degradation
//!   and a stale-response guard
//! - **Cart controller**: caller-side preconditions around the cart
//!   (mandatory variant selection, stock gating, quantity clamping)
//! - **Checkout orchestrator**: the Idle/Pending/Succeeded/Failed lifecycle
//!   of a checkout request
//! - **Confirmation view**: a read-only projection of a successful order
//!
//! Everything runs on a single logical thread of control; the only
//! suspension points are the two backend requests.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod confirmation;

#[cfg(test)]
pub(crate) mod testing;

pub use cart::CartController;
pub use catalog::{CatalogFilter, CatalogService, CatalogState, SearchTicket};
pub use checkout::{CheckoutOrchestrator, CheckoutState};
pub use config::StoreConfig;
pub use confirmation::ConfirmationView;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::CartController;
    pub use crate::catalog::{CatalogFilter, CatalogService, CatalogState};
    pub use crate::checkout::{CheckoutOrchestrator, CheckoutState};
    pub use crate::config::StoreConfig;
    pub use crate::confirmation::ConfirmationView;
    pub use kiosk_commerce::prelude::*;
    pub use kiosk_data::prelude::*;
}

//! Checkout orchestration.
//!
//! Drives the lifecycle of a checkout request against `POST /checkout`:
//!
//! ```text
//! Idle -> Pending -> Succeeded (until dismissed)
//!                 -> Failed    (retry allowed)
//! ```
//!
//! A settled request always leaves Pending. There is no retry, no timeout
//! override, and no cancellation: a request that never settles leaves the
//! orchestrator Pending indefinitely (known limitation, acceptable because
//! the rest of the interface stays usable).

use crate::config::StoreConfig;
use kiosk_commerce::cart::Cart;
use kiosk_commerce::checkout::{
    CheckoutRequest, CustomerProfile, ErrorDetail, OrderConfirmation, PaymentMethod,
};
use kiosk_commerce::error::CommerceError;
use kiosk_data::Transport;
use tracing::{info, warn};

/// Message surfaced when the backend gives no structured detail.
pub const GENERIC_FAILURE: &str = "Checkout failed, please try again";

/// Lifecycle state of the checkout orchestrator.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CheckoutState {
    /// No checkout in progress.
    #[default]
    Idle,
    /// A request is in flight; further checkouts are refused.
    Pending,
    /// The order was placed; persists until dismissed.
    Succeeded(OrderConfirmation),
    /// The checkout was rejected or the request failed; retry is allowed.
    Failed(String),
}

impl CheckoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::Idle => "idle",
            CheckoutState::Pending => "pending",
            CheckoutState::Succeeded(_) => "succeeded",
            CheckoutState::Failed(_) => "failed",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, CheckoutState::Pending)
    }
}

/// Converts the cart plus a payment method into a checkout request and
/// tracks its lifecycle.
pub struct CheckoutOrchestrator<T: Transport> {
    transport: T,
    base_url: String,
    clear_cart_on_success: bool,
    customer: CustomerProfile,
    state: CheckoutState,
}

impl<T: Transport> CheckoutOrchestrator<T> {
    /// Create a new orchestrator in the Idle state.
    pub fn new(config: &StoreConfig, transport: T) -> Self {
        Self {
            transport,
            base_url: config.base_url.clone(),
            clear_cart_on_success: config.clear_cart_on_success,
            customer: CustomerProfile::placeholder(),
            state: CheckoutState::Idle,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// The confirmation of the last successful checkout, if not dismissed.
    pub fn confirmation(&self) -> Option<&OrderConfirmation> {
        match &self.state {
            CheckoutState::Succeeded(confirmation) => Some(confirmation),
            _ => None,
        }
    }

    /// Submit the cart for checkout.
    ///
    /// Preconditions (checked before any request is issued):
    /// - the cart must be non-empty
    /// - no other checkout may be Pending
    ///
    /// The cart is left untouched on failure so the user can retry. On
    /// success it is cleared only under the clear-on-success policy.
    /// Transport failures and backend rejections are handled identically:
    /// both settle in Failed with a message, returned as
    /// [`CommerceError::Rejected`] so the caller can notify the user.
    pub async fn checkout(
        &mut self,
        cart: &mut Cart,
        method: PaymentMethod,
    ) -> Result<(), CommerceError> {
        if self.state.is_pending() {
            return Err(CommerceError::CheckoutInFlight);
        }
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let request = CheckoutRequest::from_cart(cart, self.customer.clone(), method);
        let body = serde_json::to_vec(&request)?;
        let url = format!("{}/checkout", self.base_url);

        self.state = CheckoutState::Pending;
        info!(method = method.as_str(), items = request.items.len(), "checkout submitted");

        // Every arm below settles the state; Pending never survives a
        // completed request.
        match self.transport.post_json(&url, &body).await {
            Err(e) => {
                warn!(error = %e, "checkout transport failure");
                self.fail(GENERIC_FAILURE.to_string())
            }
            Ok(response) if !response.is_success() => {
                let message = response
                    .json::<ErrorDetail>()
                    .ok()
                    .and_then(|body| body.detail)
                    .filter(|detail| !detail.is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string());
                warn!(status = response.status, %message, "checkout rejected");
                self.fail(message)
            }
            Ok(response) => match response.json::<OrderConfirmation>() {
                Ok(confirmation) => {
                    info!(total = %confirmation.total, "checkout succeeded");
                    if self.clear_cart_on_success {
                        cart.clear();
                    }
                    self.state = CheckoutState::Succeeded(confirmation);
                    Ok(())
                }
                Err(e) => {
                    warn!(error = %e, "checkout succeeded but response was unreadable");
                    self.fail(GENERIC_FAILURE.to_string())
                }
            },
        }
    }

    /// Dismiss the confirmation (or a lingering failure) and return to Idle.
    pub fn dismiss(&mut self) {
        self.state = CheckoutState::Idle;
    }

    fn fail(&mut self, message: String) -> Result<(), CommerceError> {
        self.state = CheckoutState::Failed(message.clone());
        Err(CommerceError::Rejected(message))
    }
}

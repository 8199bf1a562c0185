//! Order confirmation view-model.

use kiosk_commerce::checkout::OrderConfirmation;

/// Read-only projection of a successful checkout, ready for rendering.
/// Dismissal lives on the orchestrator
/// ([`CheckoutOrchestrator::dismiss`](crate::checkout::CheckoutOrchestrator::dismiss)),
/// not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationView {
    /// Formatted total, e.g. `Rp 150.000`.
    pub total: String,
    /// Payment method display name.
    pub payment_method: &'static str,
    /// Payment instructions from the backend.
    pub instructions: String,
    /// Scannable QR artifact, for QRIS payments.
    pub qr_url: Option<String>,
}

impl ConfirmationView {
    /// Project a confirmation for display.
    pub fn project(confirmation: &OrderConfirmation) -> Self {
        Self {
            total: confirmation.total.to_string(),
            payment_method: confirmation.payment_method.display_name(),
            instructions: confirmation.instructions.clone(),
            qr_url: confirmation.qris_qr_url.clone(),
        }
    }

    /// Whether a QR artifact should be rendered.
    pub fn has_qr(&self) -> bool {
        self.qr_url.is_some()
    }
}

impl From<&OrderConfirmation> for ConfirmationView {
    fn from(confirmation: &OrderConfirmation) -> Self {
        Self::project(confirmation)
    }
}

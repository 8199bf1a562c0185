//! Checkout wire types.
//!
//! `CheckoutRequest` is derived from a cart snapshot at the moment of
//! checkout and is never stored; `OrderConfirmation` is the backend's
//! success response and lives until the user dismisses it.

use crate::cart::Cart;
use crate::ids::ProductId;
use crate::money::Amount;
use serde::{Deserialize, Serialize};

/// How the customer pays for the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    /// Pay the courier on delivery.
    #[default]
    #[serde(rename = "COD")]
    CashOnDelivery,
    /// Pay by scanning a QRIS code.
    #[serde(rename = "QRIS")]
    QrisTransfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "COD",
            PaymentMethod::QrisTransfer => "QRIS",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
            PaymentMethod::QrisTransfer => "QRIS Transfer",
        }
    }
}

/// Customer contact details sent with a checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

impl CustomerProfile {
    /// The fixed guest profile. Collecting real customer details is an
    /// external collaborator concern; the backend contract only requires
    /// the fields to be present.
    pub fn placeholder() -> Self {
        Self {
            name: "Guest Customer".to_string(),
            email: "guest@example.com".to_string(),
            phone: "08123456789".to_string(),
            address: "Jl. Contoh No. 1".to_string(),
            city: "Jakarta".to_string(),
            postal_code: "12345".to_string(),
        }
    }
}

/// One purchased line in a checkout request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Quantity.
    pub quantity: u32,
    /// Selected variant label; omitted from the JSON body when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// The body of `POST /checkout`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutItem>,
    pub customer: CustomerProfile,
    pub payment_method: PaymentMethod,
}

impl CheckoutRequest {
    /// Build a request from the current cart snapshot.
    pub fn from_cart(cart: &Cart, customer: CustomerProfile, method: PaymentMethod) -> Self {
        let items = cart
            .items()
            .iter()
            .map(|line| CheckoutItem {
                product_id: line.id.clone(),
                quantity: line.quantity,
                size: line.variant.clone(),
            })
            .collect();
        Self {
            items,
            customer,
            payment_method: method,
        }
    }
}

/// The backend's response to a successful checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    /// Total amount charged.
    pub total: Amount,
    /// Payment method the order was placed with.
    pub payment_method: PaymentMethod,
    /// Human-readable payment instructions.
    pub instructions: String,
    /// Scannable QR artifact, present only for QRIS payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qris_qr_url: Option<String>,
}

/// The optional structured body of a rejected checkout.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    #[test]
    fn test_request_wire_shape_omits_absent_size() {
        let mut cart = Cart::new();
        cart.add(&Product::new("p1", "Plain", Amount::new(100_000)), None);

        let request =
            CheckoutRequest::from_cart(&cart, CustomerProfile::placeholder(), PaymentMethod::default());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["payment_method"], "COD");
        assert_eq!(json["items"][0]["product_id"], "p1");
        assert_eq!(json["items"][0]["quantity"], 1);
        assert!(json["items"][0].get("size").is_none());
        assert_eq!(json["customer"]["postal_code"], "12345");
    }

    #[test]
    fn test_request_wire_shape_includes_size_and_qris() {
        let mut cart = Cart::new();
        cart.add(&Product::new("p1", "Runner", Amount::new(100_000)), Some("42"));

        let request = CheckoutRequest::from_cart(
            &cart,
            CustomerProfile::placeholder(),
            PaymentMethod::QrisTransfer,
        );
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["payment_method"], "QRIS");
        assert_eq!(json["items"][0]["size"], "42");
    }

    #[test]
    fn test_confirmation_parses_optional_qr() {
        let with_qr: OrderConfirmation = serde_json::from_str(
            r#"{"total": 150000, "payment_method": "QRIS",
                "instructions": "Scan to pay", "qris_qr_url": "http://x/qr.png"}"#,
        )
        .unwrap();
        assert_eq!(with_qr.total, Amount::new(150_000));
        assert_eq!(with_qr.qris_qr_url.as_deref(), Some("http://x/qr.png"));

        let without_qr: OrderConfirmation = serde_json::from_str(
            r#"{"total": 80000, "payment_method": "COD", "instructions": "Pay the courier"}"#,
        )
        .unwrap();
        assert_eq!(without_qr.payment_method, PaymentMethod::CashOnDelivery);
        assert!(without_qr.qris_qr_url.is_none());
    }

    #[test]
    fn test_error_detail_tolerates_missing_field() {
        let body: ErrorDetail = serde_json::from_str("{}").unwrap();
        assert!(body.detail.is_none());

        let body: ErrorDetail =
            serde_json::from_str(r#"{"detail": "Stock insufficient"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("Stock insufficient"));
    }
}

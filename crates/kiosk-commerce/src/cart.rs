//! Cart and line item types.
//!
//! Line items are keyed by (product id, variant label). An absent variant
//! and an empty-string variant are the same identity, so the same logical
//! purchase never appears on two lines.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Amount;
use serde::{Deserialize, Serialize};

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
    pub id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Unit price.
    pub unit_price: Amount,
    /// Image reference.
    pub image: String,
    /// Quantity, always at least 1.
    pub quantity: u32,
    /// Selected variant label, if the product has variants.
    pub variant: Option<String>,
}

impl LineItem {
    /// Line subtotal (unit price × quantity).
    pub fn subtotal(&self) -> Amount {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }

    fn matches(&self, id: &ProductId, variant: Option<&str>) -> bool {
        &self.id == id && self.variant.as_deref() == variant
    }
}

/// An ordered collection of line items.
///
/// Insertion order is the display order. `total()` and `count()` are
/// derived on every read; nothing is cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product to the cart.
    ///
    /// A line with the same (product, variant) identity has its quantity
    /// incremented by 1; otherwise a new line with quantity 1 is appended.
    ///
    /// Mandatory variant selection is a caller precondition and is not
    /// checked here.
    pub fn add(&mut self, product: &Product, variant: Option<&str>) {
        let variant = normalize_variant(variant);
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|l| l.matches(&product.id, variant.as_deref()))
        {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }
        self.items.push(LineItem {
            id: product.id.clone(),
            title: product.title.clone(),
            unit_price: product.price,
            image: product.image.clone(),
            quantity: 1,
            variant,
        });
    }

    /// Replace the quantity of the matching line, clamped to a minimum
    /// of 1. Quantity 0 is unreachable through this path; removal is a
    /// separate operation.
    ///
    /// Returns false (no-op) if no line matches.
    pub fn set_quantity(&mut self, id: &ProductId, variant: Option<&str>, quantity: u32) -> bool {
        let variant = normalize_variant(variant);
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|l| l.matches(id, variant.as_deref()))
        {
            line.quantity = quantity.max(1);
            true
        } else {
            false
        }
    }

    /// Remove the matching line. Returns false (no-op) if absent.
    pub fn remove(&mut self, id: &ProductId, variant: Option<&str>) -> bool {
        let variant = normalize_variant(variant);
        let len_before = self.items.len();
        self.items
            .retain(|l| !l.matches(id, variant.as_deref()));
        self.items.len() < len_before
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get the matching line, if present.
    pub fn get(&self, id: &ProductId, variant: Option<&str>) -> Option<&LineItem> {
        let variant = normalize_variant(variant);
        self.items.iter().find(|l| l.matches(id, variant.as_deref()))
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of unit price × quantity across all lines.
    pub fn total(&self) -> Amount {
        self.items
            .iter()
            .fold(Amount::zero(), |acc, l| acc.saturating_add(l.subtotal()))
    }

    /// Sum of quantities, used for the cart badge.
    pub fn count(&self) -> u64 {
        self.items.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Normalize a variant label: an empty string is the same as no variant.
fn normalize_variant(variant: Option<&str>) -> Option<String> {
    variant.filter(|v| !v.is_empty()).map(str::to_string)
}

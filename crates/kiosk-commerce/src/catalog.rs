//! Catalog types.
//!
//! Products arrive fully formed from the backend listing endpoint and are
//! immutable once received; the cart reads them but never mutates them.

use crate::ids::ProductId;
use crate::money::Amount;
use serde::{Deserialize, Serialize};

/// A purchasable item in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: Amount,
    /// Image reference.
    #[serde(default)]
    pub image: String,
    /// Variant options (e.g. sizes), in display order. Empty for products
    /// with a single implicit SKU.
    #[serde(default)]
    pub sizes: Vec<VariantOption>,
}

impl Product {
    /// Create a new product without variants.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Amount) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            price,
            image: String::new(),
            sizes: Vec::new(),
        }
    }

    /// Check if the product carries variant options. When it does, a
    /// variant selection is mandatory before the product can be added to
    /// a cart.
    pub fn has_variants(&self) -> bool {
        !self.sizes.is_empty()
    }

    /// Look up a variant option by label.
    pub fn variant(&self, label: &str) -> Option<&VariantOption> {
        self.sizes.iter().find(|v| v.label == label)
    }
}

/// A selectable variant of a product (e.g. a size).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariantOption {
    /// Variant label (e.g. "42").
    pub label: String,
    /// Remaining stock. Zero makes the variant unselectable but it stays
    /// visible in listings.
    #[serde(default)]
    pub stock: u32,
}

impl VariantOption {
    /// Create a new variant option.
    pub fn new(label: impl Into<String>, stock: u32) -> Self {
        Self {
            label: label.into(),
            stock,
        }
    }

    /// Check if the variant can currently be selected.
    pub fn is_selectable(&self) -> bool {
        self.stock > 0
    }
}

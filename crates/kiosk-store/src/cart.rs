//! Cart controller: the caller-side rules around the cart.
//!
//! The cart itself ([`kiosk_commerce::cart::Cart`]) only enforces its own
//! identity and ordering invariants. The preconditions the UI relies on —
//! mandatory variant selection, stock gating, the quantity floor, and the
//! "open the drawer after adding" signal — live here.

use kiosk_commerce::cart::Cart;
use kiosk_commerce::catalog::Product;
use kiosk_commerce::error::CommerceError;
use kiosk_commerce::ids::ProductId;
use tracing::debug;

/// Owns the cart and the drawer-open presentation signal.
#[derive(Debug, Default)]
pub struct CartController {
    cart: Cart,
    drawer_open: bool,
}

impl CartController {
    /// Create a controller with an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product, validating the variant selection first.
    ///
    /// Rejected without touching the cart when:
    /// - the product has variants and none was selected
    /// - the selected label is not one the product offers
    /// - the selected variant is out of stock
    ///
    /// On success the cart drawer is signalled open.
    pub fn add_product(
        &mut self,
        product: &Product,
        variant: Option<&str>,
    ) -> Result<(), CommerceError> {
        let selected = variant.filter(|v| !v.is_empty());
        if product.has_variants() {
            let label = selected.ok_or(CommerceError::VariantRequired)?;
            let option = product
                .variant(label)
                .ok_or_else(|| CommerceError::VariantUnavailable {
                    label: label.to_string(),
                })?;
            if !option.is_selectable() {
                return Err(CommerceError::VariantUnavailable {
                    label: label.to_string(),
                });
            }
        }

        self.cart.add(product, selected);
        self.drawer_open = true;
        debug!(product = %product.id, variant = ?selected, "added to cart");
        Ok(())
    }

    /// Replace a line's quantity, clamped to a minimum of 1.
    pub fn change_quantity(
        &mut self,
        id: &ProductId,
        variant: Option<&str>,
        quantity: u32,
    ) -> bool {
        self.cart.set_quantity(id, variant, quantity)
    }

    /// Increase a line's quantity by 1.
    pub fn increment(&mut self, id: &ProductId, variant: Option<&str>) -> bool {
        match self.cart.get(id, variant) {
            Some(line) => {
                let next = line.quantity.saturating_add(1);
                self.cart.set_quantity(id, variant, next)
            }
            None => false,
        }
    }

    /// Decrease a line's quantity by 1, never below 1.
    pub fn decrement(&mut self, id: &ProductId, variant: Option<&str>) -> bool {
        match self.cart.get(id, variant) {
            Some(line) => {
                let next = line.quantity.saturating_sub(1).max(1);
                self.cart.set_quantity(id, variant, next)
            }
            None => false,
        }
    }

    /// Remove a line entirely.
    pub fn remove(&mut self, id: &ProductId, variant: Option<&str>) -> bool {
        self.cart.remove(id, variant)
    }

    /// The cart contents.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Mutable access for checkout (e.g. the clear-on-success policy).
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Whether the presentation layer should show the cart drawer.
    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Open the cart drawer.
    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    /// Close the cart drawer.
    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }
}

//! Monetary amounts.
//!
//! The backend quotes prices as non-negative whole numbers in a single
//! implicit currency (rupiah, which has no minor unit in this API), so
//! amounts are plain integers rather than a full multi-currency money type.
//! Integer representation avoids the floating-point precision issues that
//! plague monetary calculations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative whole-number monetary amount.
///
/// Serializes as a bare number, matching the backend's `price` and `total`
/// fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// Create a new amount.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw numeric value.
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if this is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiply by a quantity, saturating at the numeric maximum.
    pub const fn saturating_mul(&self, quantity: u64) -> Self {
        Self(self.0.saturating_mul(quantity))
    }

    /// Add another amount, saturating at the numeric maximum.
    pub const fn saturating_add(&self, other: Amount) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Amount {
    /// Format as a grouped rupiah string, e.g. `Rp 150.000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        write!(f, "Rp {}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Amount::new(0).to_string(), "Rp 0");
        assert_eq!(Amount::new(999).to_string(), "Rp 999");
        assert_eq!(Amount::new(1_000).to_string(), "Rp 1.000");
        assert_eq!(Amount::new(150_000).to_string(), "Rp 150.000");
        assert_eq!(Amount::new(1_234_567).to_string(), "Rp 1.234.567");
    }

    #[test]
    fn test_saturating_arithmetic() {
        let price = Amount::new(u64::MAX);
        assert_eq!(price.saturating_mul(2).value(), u64::MAX);
        assert_eq!(price.saturating_add(Amount::new(1)).value(), u64::MAX);
    }

    #[test]
    fn test_serde_transparent() {
        let amount: Amount = serde_json::from_str("150000").unwrap();
        assert_eq!(amount, Amount::new(150_000));
        assert_eq!(serde_json::to_string(&amount).unwrap(), "150000");
    }
}

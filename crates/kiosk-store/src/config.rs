//! Store configuration.

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend base URL.
pub const BASE_URL_VAR: &str = "KIOSK_BACKEND_URL";

/// Environment variable enabling the clear-cart-on-success policy.
pub const CLEAR_CART_VAR: &str = "KIOSK_CLEAR_CART_ON_SUCCESS";

/// Configuration for the storefront services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,
    /// Whether a successful checkout empties the cart. Off by default:
    /// the cart stays as-is so the same cart can be checked out again.
    pub clear_cart_on_success: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            clear_cart_on_success: false,
        }
    }
}

impl StoreConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(BASE_URL_VAR) {
            if !url.is_empty() {
                config.base_url = url.trim_end_matches('/').to_string();
            }
        }
        if let Ok(flag) = std::env::var(CLEAR_CART_VAR) {
            config.clear_cart_on_success = matches!(flag.as_str(), "1" | "true" | "yes");
        }
        config
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url: String = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Override the clear-on-success policy.
    pub fn with_clear_cart_on_success(mut self, clear: bool) -> Self {
        self.clear_cart_on_success = clear;
        self
    }
}

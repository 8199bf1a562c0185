//! HTTP client utilities for the kiosk storefront.
//!
//! The storefront reaches its backend through exactly two endpoints, so
//! this crate stays small: a [`Transport`] trait covering the two verbs
//! the services need, a reqwest-backed [`HttpTransport`], and a
//! [`Response`] type that decouples the services from the transport.
//!
//! # Example
//!
//! ```rust,ignore
//! use kiosk_data::{HttpTransport, Transport};
//!
//! let transport = HttpTransport::new();
//! let response = transport.get("http://localhost:8000/products").await?;
//! if response.is_success() {
//!     let products: Vec<Product> = response.json()?;
//! }
//! ```

mod error;
mod response;
mod transport;

pub use error::FetchError;
pub use response::Response;
pub use transport::{HttpTransport, Transport};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchError, HttpTransport, Response, Transport};
}

//! Catalog query service.
//!
//! Builds filtered listing requests against `GET /products` and degrades
//! gracefully: any transport failure, non-2xx status, or non-array body
//! yields an empty listing rather than an error.

use crate::config::StoreConfig;
use kiosk_commerce::catalog::Product;
use kiosk_data::Transport;
use tracing::{debug, warn};
use url::form_urlencoded;

/// Listing filters. Empty strings are dropped at construction so no empty
/// query parameters are ever sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    query: Option<String>,
    category: Option<String>,
}

impl CatalogFilter {
    /// No filters: the full listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query. An empty string clears it.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query: String = query.into();
        self.query = (!query.is_empty()).then_some(query);
        self
    }

    /// Set the category filter. An empty string clears it.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category: String = category.into();
        self.category = (!category.is_empty()).then_some(category);
        self
    }

    /// Encode the filters as a query string, empty when no filters are set.
    fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(q) = &self.query {
            serializer.append_pair("q", q);
        }
        if let Some(category) = &self.category {
            serializer.append_pair("category", category);
        }
        serializer.finish()
    }
}

/// Fetches product listings from the backend.
pub struct CatalogService<T: Transport> {
    transport: T,
    base_url: String,
}

impl<T: Transport> CatalogService<T> {
    /// Create a new catalog service.
    pub fn new(config: &StoreConfig, transport: T) -> Self {
        Self {
            transport,
            base_url: config.base_url.clone(),
        }
    }

    /// Fetch the listing for the given filters.
    ///
    /// Failures are absorbed: the listing degrades to "no results" and the
    /// cause is logged, never surfaced as an error.
    pub async fn search(&self, filter: &CatalogFilter) -> Vec<Product> {
        let url = self.products_url(filter);
        debug!(%url, "catalog search");

        let response = match self.transport.get(&url).await {
            Ok(response) => response,
            Err(e) => {
                warn!(%url, error = %e, "catalog request failed, listing degrades to empty");
                return Vec::new();
            }
        };

        if !response.is_success() {
            warn!(%url, status = response.status, "catalog returned error status");
            return Vec::new();
        }

        match response.json::<Vec<Product>>() {
            Ok(products) => products,
            Err(e) => {
                warn!(%url, error = %e, "catalog body was not a product array");
                Vec::new()
            }
        }
    }

    fn products_url(&self, filter: &CatalogFilter) -> String {
        let query = filter.to_query_string();
        if query.is_empty() {
            format!("{}/products", self.base_url)
        } else {
            format!("{}/products?{}", self.base_url, query)
        }
    }
}

/// Ticket identifying one issued search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// The displayed listing, guarded against out-of-order search completion.
///
/// Concurrent searches are neither coalesced nor cancelled, so a search
/// that was issued earlier can resolve later. Each search takes a ticket
/// from [`begin_search`](Self::begin_search); a response is applied only
/// if no newer search has been issued since.
#[derive(Debug, Default)]
pub struct CatalogState {
    products: Vec<Product>,
    issued: u64,
}

impl CatalogState {
    /// Create an empty listing state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new search and get its ticket.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.issued += 1;
        SearchTicket(self.issued)
    }

    /// Replace the listing with a search result. Returns false and leaves
    /// the listing untouched when the ticket has been superseded.
    pub fn apply(&mut self, ticket: SearchTicket, products: Vec<Product>) -> bool {
        if ticket.0 < self.issued {
            debug!(ticket = ticket.0, issued = self.issued, "discarding stale search result");
            return false;
        }
        self.products = products;
        true
    }

    /// The current listing.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;
    use kiosk_commerce::money::Amount;
    use kiosk_data::Response;

    fn listing_body() -> Vec<u8> {
        br#"[{"id": "p1", "title": "Runner", "price": 100000,
             "sizes": [{"label": "42", "stock": 3}]}]"#
            .to_vec()
    }

    fn service(transport: FakeTransport) -> CatalogService<FakeTransport> {
        CatalogService::new(&StoreConfig::default(), transport)
    }

    #[tokio::test]
    async fn test_search_without_filters_sends_no_query_params() {
        let transport = FakeTransport::new();
        transport.push_response(Response::new(200, listing_body()));
        let service = service(transport);

        let products = service.search(&CatalogFilter::new()).await;

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price, Amount::new(100_000));
        assert_eq!(
            service.transport.urls(),
            vec!["http://localhost:8000/products"]
        );
    }

    #[tokio::test]
    async fn test_search_encodes_nonempty_filters() {
        let transport = FakeTransport::new();
        transport.push_response(Response::new(200, b"[]".to_vec()));
        let service = service(transport);

        let filter = CatalogFilter::new()
            .with_query("trail shoes")
            .with_category("Running");
        service.search(&filter).await;

        assert_eq!(
            service.transport.urls(),
            vec!["http://localhost:8000/products?q=trail+shoes&category=Running"]
        );
    }

    #[test]
    fn test_empty_filter_strings_are_dropped() {
        let filter = CatalogFilter::new().with_query("").with_category("");
        assert_eq!(filter, CatalogFilter::new());
        assert_eq!(filter.to_query_string(), "");
    }

    #[tokio::test]
    async fn test_transport_failure_degrades_to_empty() {
        let transport = FakeTransport::new();
        transport.push_error("connection refused");
        let service = service(transport);

        assert!(service.search(&CatalogFilter::new()).await.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_degrades_to_empty() {
        let transport = FakeTransport::new();
        transport.push_response(Response::new(500, b"oops".to_vec()));
        let service = service(transport);

        assert!(service.search(&CatalogFilter::new()).await.is_empty());
    }

    #[tokio::test]
    async fn test_non_array_body_degrades_to_empty() {
        let transport = FakeTransport::new();
        transport.push_response(Response::new(200, br#"{"message": "hi"}"#.to_vec()));
        let service = service(transport);

        assert!(service.search(&CatalogFilter::new()).await.is_empty());
    }

    #[test]
    fn test_stale_search_result_is_discarded() {
        let mut state = CatalogState::new();
        let first = state.begin_search();
        let second = state.begin_search();

        let newer = vec![kiosk_commerce::catalog::Product::new(
            "p2",
            "Newer",
            Amount::new(1),
        )];
        assert!(state.apply(second, newer));

        let stale = vec![kiosk_commerce::catalog::Product::new(
            "p1",
            "Stale",
            Amount::new(1),
        )];
        assert!(!state.apply(first, stale));

        assert_eq!(state.products().len(), 1);
        assert_eq!(state.products()[0].title, "Newer");
    }

    #[test]
    fn test_latest_search_result_is_applied() {
        let mut state = CatalogState::new();
        let ticket = state.begin_search();
        assert!(state.apply(ticket, Vec::new()));
    }
}

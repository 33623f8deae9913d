//! Data structures and traits for search request dispatch

use std::future::Future;
use std::pin::Pin;

/// A completed search response: status code plus body text.
///
/// The body is only meaningful when the status is 200; the controller renders
/// a synthesized `Error: <status>` message for anything else.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body, treated as an HTML fragment on success
    pub body: String,
}

/// Transport-level failure: the request never produced a status code
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection, DNS, or protocol failure before any response arrived
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Convenience alias for the outcome of a dispatched search request
pub type FetchResult = Result<SearchResponse, FetchError>;

/// Dispatches one search request for a query string.
///
/// `fetch` returns a boxed future so the controller can spawn it without
/// tying its own lifetime to the fetcher. Implementations must not retry or
/// cache; the controller owns the timing.
pub trait SearchFetcher: Send + Sync + 'static {
    /// Issue one GET request for `query` and resolve with its outcome
    fn fetch(&self, query: String) -> Pin<Box<dyn Future<Output = FetchResult> + Send + 'static>>;
}

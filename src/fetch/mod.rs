//! Search request dispatch
//!
//! [`SearchFetcher`] is the seam between the controller and the network;
//! [`HttpSearchClient`] is the production implementation over `reqwest`.

pub mod client;
pub mod types;

pub use client::HttpSearchClient;
pub use types::{FetchError, FetchResult, SearchFetcher, SearchResponse};

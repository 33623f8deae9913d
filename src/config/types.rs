//! Core configuration types for the live-search controller
//!
//! This module contains the `SearchConfig` struct that defines the search
//! endpoint and debounce timing for a bound controller.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default debounce interval: 500 milliseconds
///
/// The request is dispatched 500 ms after the user stops typing. Long enough
/// to coalesce bursts of keystrokes into a single request, short enough that
/// results still feel live.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Default search endpoint path
///
/// Host-relative, matching the page contract (`GET /search?raw=true&q=...`).
/// `HttpSearchClient` requires an absolute http/https URL, so hosts using the
/// HTTP client must override this with a full endpoint URL.
pub const DEFAULT_ENDPOINT: &str = "/search";

/// Configuration for a live-search controller binding
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub(crate) endpoint: String,
    pub(crate) debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl SearchConfig {
    /// Create a config with the default endpoint and debounce interval
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search endpoint URL
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the debounce interval in milliseconds
    #[must_use]
    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// The search endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The debounce interval in milliseconds
    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms
    }

    /// The debounce interval as a `Duration`
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

//! Configuration module for the live-search controller
//!
//! This module provides the `SearchConfig` struct with fluent setters and
//! sensible defaults matching the historical search-box behavior.

// Sub-modules
pub mod types;

// Re-exports for public API
pub use types::{DEFAULT_DEBOUNCE_MS, DEFAULT_ENDPOINT, SearchConfig};

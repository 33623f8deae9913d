pub mod config;
pub mod controller;
pub mod fetch;
pub mod fragment;
pub mod surface;

pub use config::SearchConfig;
pub use controller::{LiveSearchController, SearchHandle};
pub use fetch::{FetchError, FetchResult, HttpSearchClient, SearchFetcher, SearchResponse};
pub use fragment::first_link;
pub use surface::{MemoryPage, MemorySurface, PageDocument, UiSurface};

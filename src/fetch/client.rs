//! HTTP search client over `reqwest`

use std::future::Future;
use std::pin::Pin;

use anyhow::{Result, anyhow};
use url::Url;

use super::types::{FetchError, FetchResult, SearchFetcher, SearchResponse};
use crate::config::SearchConfig;

/// Production [`SearchFetcher`] issuing `GET <endpoint>?raw=true&q=<query>`
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSearchClient {
    /// Build a client for the endpoint in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an absolute http or https URL.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let endpoint = Url::parse(config.endpoint())
            .map_err(|e| anyhow!("invalid search endpoint '{}': {e}", config.endpoint()))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(anyhow!(
                "search endpoint '{}' must use http or https",
                endpoint
            ));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
        })
    }

    /// The full request URL for a query, with `q` percent-encoded
    #[must_use]
    pub fn request_url(&self, query: &str) -> String {
        format!("{}?raw=true&q={}", self.endpoint, urlencoding::encode(query))
    }
}

impl SearchFetcher for HttpSearchClient {
    fn fetch(&self, query: String) -> Pin<Box<dyn Future<Output = FetchResult> + Send + 'static>> {
        let url = self.request_url(&query);
        let client = self.client.clone();

        Box::pin(async move {
            log::debug!("search request: {url}");
            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            Ok(SearchResponse { status, body })
        })
    }
}

//! Test utilities and helper functions for the livesearch test suite

use std::future::Future;
use std::pin::Pin;

use livesearch::fetch::{FetchError, FetchResult, SearchFetcher, SearchResponse};
use tokio::sync::{mpsc, oneshot};

/// Initialize test logging (idempotent)
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A request the controller has dispatched, waiting for the test to answer
#[allow(dead_code)]
pub struct PendingRequest {
    /// Query string the request was issued for
    pub query: String,
    /// Send the response here to complete the request
    pub reply: oneshot::Sender<FetchResult>,
}

/// Fetcher that hands every dispatched request to the test.
///
/// Each `fetch` call surfaces a [`PendingRequest`] on the paired receiver and
/// resolves only when the test answers through the oneshot, so tests control
/// response ordering exactly (including out-of-order stale responses).
pub struct ScriptedFetcher {
    dispatched: mpsc::UnboundedSender<PendingRequest>,
}

/// Build a scripted fetcher plus the receiver of its dispatched requests
#[allow(dead_code)]
pub fn scripted_fetcher() -> (ScriptedFetcher, mpsc::UnboundedReceiver<PendingRequest>) {
    let (dispatched, requests) = mpsc::unbounded_channel();
    (ScriptedFetcher { dispatched }, requests)
}

impl SearchFetcher for ScriptedFetcher {
    fn fetch(&self, query: String) -> Pin<Box<dyn Future<Output = FetchResult> + Send + 'static>> {
        let (reply, response) = oneshot::channel();
        let _ = self.dispatched.send(PendingRequest { query, reply });
        Box::pin(async move {
            response
                .await
                .unwrap_or_else(|_| Err(FetchError::Transport("request abandoned".to_string())))
        })
    }
}

/// A 200 response carrying `body`
#[allow(dead_code)]
pub fn ok(body: &str) -> FetchResult {
    Ok(SearchResponse {
        status: 200,
        body: body.to_string(),
    })
}

/// A non-200 response with an empty body
#[allow(dead_code)]
pub fn status(code: u16) -> FetchResult {
    Ok(SearchResponse {
        status: code,
        body: String::new(),
    })
}

/// Give the controller task enough scheduler turns to drain its queue.
///
/// Does not advance the paused clock; pending debounce timers stay pending.
#[allow(dead_code)]
pub async fn settle() {
    for _ in 0..32 {
        tokio::task::yield_now().await;
    }
}

//! Controller state machine and event loop

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::events::{SearchHandle, UiEvent};
use crate::config::SearchConfig;
use crate::fetch::{FetchResult, SearchFetcher};
use crate::surface::{PageDocument, UiSurface};

/// Debounced live-search controller bound to one page's search UI.
///
/// Runs as a single task: UI events arrive through a [`SearchHandle`], the
/// debounce deadline is a lone `Option<Instant>` in the select loop (so at
/// most one timer is ever pending), and fetch tasks report back through an
/// outcome channel. In-flight requests are never cancelled when superseded;
/// responses render in arrival order and the last one wins. That reproduces
/// the historical search-box behavior, stale-response race included.
pub struct LiveSearchController<S: UiSurface, F: SearchFetcher> {
    surface: S,
    fetcher: Arc<F>,
    debounce: Duration,
    /// Last query value recorded at key-press time. Updated before the timer
    /// fires, not when the request completes, so retyping an earlier value
    /// within the debounce window compares against what was last recorded.
    last_recorded: String,
    events: UnboundedReceiver<UiEvent>,
    outcome_tx: UnboundedSender<FetchResult>,
    outcomes: UnboundedReceiver<FetchResult>,
}

impl<S: UiSurface, F: SearchFetcher> LiveSearchController<S, F> {
    /// Bind a controller to the page's search UI.
    ///
    /// Returns `None` when the page has no search form; that is not an error,
    /// the feature simply does not apply to this page. If the query input is
    /// empty at bind time its text is focused for immediate typing.
    pub fn bind<P>(page: &P, fetcher: F, config: &SearchConfig) -> Option<(Self, SearchHandle)>
    where
        P: PageDocument<Surface = S>,
    {
        let surface = page.search_surface()?;
        if surface.query_value().is_empty() {
            surface.focus_query();
        }

        let (event_tx, events) = mpsc::unbounded_channel();
        let (outcome_tx, outcomes) = mpsc::unbounded_channel();

        let controller = Self {
            surface,
            fetcher: Arc::new(fetcher),
            debounce: config.debounce(),
            last_recorded: String::new(),
            events,
            outcome_tx,
            outcomes,
        };

        Some((controller, SearchHandle { events: event_tx }))
    }

    /// Run the controller loop until every [`SearchHandle`] is dropped
    pub async fn run(mut self) {
        let mut deadline: Option<Instant> = None;

        loop {
            tokio::select! {
                event = self.events.recv() => match event {
                    Some(UiEvent::KeyPress) => {
                        // The input value only settles after the triggering
                        // event finishes dispatching; read it one turn later.
                        tokio::task::yield_now().await;
                        self.handle_key_press(&mut deadline);
                    }
                    Some(UiEvent::Submit) => self.handle_submit(),
                    None => break,
                },
                _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)),
                    if deadline.is_some() =>
                {
                    deadline = None;
                    self.dispatch();
                }
                Some(outcome) = self.outcomes.recv() => self.render(outcome),
            }
        }

        log::debug!("live-search controller stopped");
    }

    /// Spawn the controller loop onto the current runtime
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    fn handle_key_press(&mut self, deadline: &mut Option<Instant>) {
        let value = self.surface.query_value();
        // Arrow keys and retyped characters produce no net change
        if value == self.last_recorded {
            return;
        }

        log::debug!("query changed: {:?} -> {value:?}", self.last_recorded);
        self.last_recorded = value;
        // Stale results belong to the old query; drop them right away
        self.surface.clear_results();
        // Overwriting the deadline cancels any pending timer
        *deadline = Some(Instant::now() + self.debounce);
    }

    /// The debounce timer elapsed: dispatch one request for the current value
    fn dispatch(&self) {
        let query = self.surface.query_value();
        log::debug!("dispatching search for {query:?}");

        let fetch = self.fetcher.fetch(query);
        let outcome_tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            // Receiver gone means the controller stopped; nothing to render
            let _ = outcome_tx.send(fetch.await);
        });
    }

    fn render(&self, outcome: FetchResult) {
        match outcome {
            Ok(response) if response.status == 200 => {
                self.surface.set_results(&response.body);
            }
            Ok(response) => {
                log::warn!("search endpoint returned status {}", response.status);
                self.surface.set_results(&format!("Error: {}", response.status));
            }
            Err(err) => {
                log::warn!("search request failed: {err}");
                self.surface.set_results("Error: network");
            }
        }
    }

    fn handle_submit(&self) {
        if self.surface.query_value().is_empty() {
            return;
        }
        if let Some(href) = self.surface.first_result_link() {
            log::debug!("submit: jumping to first result {href}");
            self.surface.activate_link(&href);
        }
    }
}

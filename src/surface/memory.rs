//! In-memory search surface for DOM-less hosts and tests
//!
//! `MemorySurface` keeps the query value and the rendered fragment as plain
//! strings behind mutexes, records link activations instead of navigating,
//! and resolves the first result link by parsing the rendered fragment.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::fragment::first_link;
use crate::surface::{PageDocument, UiSurface};

/// Thread-safe in-memory implementation of [`UiSurface`]
#[derive(Debug, Default)]
pub struct MemorySurface {
    value: Mutex<String>,
    results: Mutex<String>,
    activations: Mutex<Vec<String>>,
    query_focused: AtomicBool,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query input text, as the host does when the user types
    pub fn set_value(&self, value: &str) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = value.to_string();
    }

    /// Current content of the results container
    pub fn rendered_results(&self) -> String {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Every link activated through this surface, oldest first
    pub fn activations(&self) -> Vec<String> {
        self.activations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether the query input has been focused
    pub fn query_focused(&self) -> bool {
        self.query_focused.load(Ordering::Relaxed)
    }
}

impl UiSurface for MemorySurface {
    fn query_value(&self) -> String {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_results(&self, html: &str) {
        *self.results.lock().unwrap_or_else(PoisonError::into_inner) = html.to_string();
    }

    fn first_result_link(&self) -> Option<String> {
        first_link(&self.rendered_results())
    }

    fn activate_link(&self, href: &str) {
        log::debug!("activating link: {href}");
        self.activations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(href.to_string());
    }

    fn focus_query(&self) {
        self.query_focused.store(true, Ordering::Relaxed);
    }
}

/// In-memory page: either carries a search surface or does not
#[derive(Debug, Default)]
pub struct MemoryPage {
    surface: Option<Arc<MemorySurface>>,
}

impl MemoryPage {
    /// A page with the full search UI (form, query input, results container)
    #[must_use]
    pub fn with_search_ui() -> Self {
        Self {
            surface: Some(Arc::new(MemorySurface::new())),
        }
    }

    /// A page with no search form
    #[must_use]
    pub fn without_search_ui() -> Self {
        Self { surface: None }
    }

    /// Direct access to the surface, for hosts that drive it
    pub fn surface(&self) -> Option<&Arc<MemorySurface>> {
        self.surface.as_ref()
    }
}

impl PageDocument for MemoryPage {
    type Surface = Arc<MemorySurface>;

    fn search_surface(&self) -> Option<Self::Surface> {
        self.surface.clone()
    }
}

//! UI adapter seam between the controller and the host-owned search widgets
//!
//! The controller never touches a real document. Hosts implement [`UiSurface`]
//! over whatever UI they own (a DOM bridge, a TUI pane, the in-memory surface
//! in [`memory`]) and [`PageDocument`] to perform the identifier lookup that
//! decides whether the page has a search UI at all.

pub mod memory;

pub use memory::{MemoryPage, MemorySurface};

use std::sync::Arc;

// =============================================================================
// Constants
// =============================================================================

/// Identifier of the search form element
///
/// A page without an element carrying this identifier has no search UI and
/// binding is a silent no-op.
pub const SEARCH_FORM_ID: &str = "search";

/// Identifier of the query text input
pub const QUERY_INPUT_ID: &str = "q";

/// Identifier of the results container
///
/// After a successful response this container holds the raw fragment returned
/// by the server, including the anchors that form submission activates.
pub const RESULTS_CONTAINER_ID: &str = "results";

// =============================================================================
// Traits
// =============================================================================

/// Host-owned search UI: a query input plus a results container.
///
/// All methods are synchronous; implementations with shared state use interior
/// mutability. The controller reads the query value and writes the results
/// content, but never owns the widgets' lifecycle.
pub trait UiSurface: Send + Sync + 'static {
    /// Current text of the query input
    fn query_value(&self) -> String;

    /// Replace the results container content with a raw HTML fragment.
    ///
    /// The fragment is injected verbatim, never escaped or re-parsed.
    fn set_results(&self, html: &str);

    /// Empty the results container
    fn clear_results(&self) {
        self.set_results("");
    }

    /// The `href` of the first anchor in the results container, in document
    /// order, if any
    fn first_result_link(&self) -> Option<String>;

    /// Navigate to a result link, as if the user had clicked it
    fn activate_link(&self, href: &str);

    /// Move focus to the query input and select its text
    fn focus_query(&self);
}

impl<T: UiSurface> UiSurface for Arc<T> {
    fn query_value(&self) -> String {
        T::query_value(self)
    }

    fn set_results(&self, html: &str) {
        T::set_results(self, html);
    }

    fn first_result_link(&self) -> Option<String> {
        T::first_result_link(self)
    }

    fn activate_link(&self, href: &str) {
        T::activate_link(self, href);
    }

    fn focus_query(&self) {
        T::focus_query(self);
    }
}

/// Identifier lookup over a host page.
///
/// Returns the search surface when the page carries the documented widgets
/// ([`SEARCH_FORM_ID`], [`QUERY_INPUT_ID`], [`RESULTS_CONTAINER_ID`]), `None`
/// when it does not.
pub trait PageDocument {
    type Surface: UiSurface;

    /// Locate the search UI on this page, if present
    fn search_surface(&self) -> Option<Self::Surface>;
}

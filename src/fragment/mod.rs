//! Anchor extraction from raw HTML fragments
//!
//! The server returns results as a raw fragment; form submission jumps to the
//! first link it contains. This module does that lookup with `scraper`.

use scraper::{Html, Selector};

/// Return the `href` of the first anchor in the fragment, in document order.
///
/// Anchors without an `href` attribute are skipped. Returns `None` for empty
/// or linkless fragments.
#[must_use]
pub fn first_link(html: &str) -> Option<String> {
    if html.trim().is_empty() {
        return None;
    }

    let fragment = Html::parse_fragment(html);
    let selector = Selector::parse("a[href]").unwrap();
    fragment
        .select(&selector)
        .find_map(|anchor| anchor.value().attr("href"))
        .map(str::to_string)
}

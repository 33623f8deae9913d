//! Controller binding against pages with and without a search UI

use livesearch::{LiveSearchController, MemoryPage, SearchConfig};

mod common;
use common::scripted_fetcher;

#[tokio::test]
async fn page_without_search_form_binds_to_nothing() {
    let page = MemoryPage::without_search_ui();
    let (fetcher, _requests) = scripted_fetcher();

    // Not an error: the feature just does not apply to this page
    assert!(LiveSearchController::bind(&page, fetcher, &SearchConfig::default()).is_none());
}

#[tokio::test]
async fn empty_query_input_is_focused_at_bind() {
    let page = MemoryPage::with_search_ui();
    let surface = page.surface().unwrap().clone();
    let (fetcher, _requests) = scripted_fetcher();

    let bound = LiveSearchController::bind(&page, fetcher, &SearchConfig::default());
    assert!(bound.is_some());
    assert!(surface.query_focused());
}

#[tokio::test]
async fn prefilled_query_input_is_left_alone() {
    let page = MemoryPage::with_search_ui();
    let surface = page.surface().unwrap().clone();
    surface.set_value("tokio");
    let (fetcher, _requests) = scripted_fetcher();

    let bound = LiveSearchController::bind(&page, fetcher, &SearchConfig::default());
    assert!(bound.is_some());
    assert!(!surface.query_focused());
}

#[tokio::test]
async fn controller_stops_when_every_handle_is_dropped() {
    let page = MemoryPage::with_search_ui();
    let (fetcher, _requests) = scripted_fetcher();
    let (controller, handle) =
        LiveSearchController::bind(&page, fetcher, &SearchConfig::default()).unwrap();
    let task = controller.spawn();

    drop(handle);
    task.await.unwrap();
}

//! The debounced live-search state machine
//!
//! [`LiveSearchController`] mediates between user keystrokes and the search
//! endpoint: it deduplicates unchanged queries, debounces bursts of typing
//! into a single request, renders raw result fragments, and jumps to the
//! first result link on form submission.

pub mod core;
pub mod events;

pub use self::core::LiveSearchController;
pub use events::SearchHandle;

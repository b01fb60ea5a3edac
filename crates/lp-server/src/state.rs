//! Application state.
//!
//! Shared state for all request handlers.

use std::path::PathBuf;

use lp_site::Page;

/// Application state shared across all handlers.
///
/// The page is composed once per server run; load-failure reports mutate
/// asset state through a shared reference.
pub(crate) struct AppState {
    /// The composed landing page.
    pub(crate) page: Page,
    /// Directory the page's image URLs resolve against.
    pub(crate) static_dir: PathBuf,
}

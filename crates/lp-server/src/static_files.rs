//! Static file serving.
//!
//! Serves the fallback script embedded in the binary and every other path
//! from the configured static directory.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::http::header;
use axum::response::IntoResponse;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// URL path of the image fallback script.
pub(crate) const FALLBACK_SCRIPT_PATH: &str = "/assets/fallback.js";

const FALLBACK_SCRIPT: &str = include_str!("../assets/fallback.js");

/// Create router for static file serving.
///
/// Unmatched paths fall through to `static_dir`; missing files and paths
/// leaving the directory answer 404.
pub(crate) fn static_router(static_dir: &Path) -> Router<Arc<AppState>> {
    Router::new()
        .route(FALLBACK_SCRIPT_PATH, axum::routing::get(fallback_script))
        .fallback_service(ServeDir::new(static_dir))
}

async fn fallback_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        FALLBACK_SCRIPT,
    )
}

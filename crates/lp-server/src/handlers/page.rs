//! Landing page endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use lp_renderer::HtmlBackend;
use lp_site::PageRenderer;

use crate::state::AppState;
use crate::static_files::FALLBACK_SCRIPT_PATH;

/// Handle GET /.
///
/// Renders the page with the current asset states. Hidden assets carry the
/// `hidden` attribute, so the response must not be cached.
pub(crate) async fn get_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let meta = PageRenderer::document_meta().with_script(FALLBACK_SCRIPT_PATH);
    let result = state.page.render_with::<HtmlBackend>(&meta);

    if !result.hidden_assets.is_empty() {
        tracing::debug!(hidden = ?result.hidden_assets, "Rendering page with hidden assets");
    }

    (
        [(header::CACHE_CONTROL, "no-store")],
        Html(result.output),
    )
}

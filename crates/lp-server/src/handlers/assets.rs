//! Asset state API.
//!
//! Lists the page's image assets and accepts load-failure reports from the
//! browser-side loader.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use lp_assets::{DisplayState, ImageAsset};
use lp_sections::SectionKind;
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Asset item for JSON responses.
#[derive(Debug, Serialize)]
pub(crate) struct AssetResponse {
    /// Asset id, as in the `data-asset` attribute.
    id: String,
    /// Image URL.
    src: String,
    /// Alternative text.
    alt: String,
    /// Owning section slug.
    section: SectionKind,
    /// Current display state.
    state: DisplayState,
}

impl AssetResponse {
    fn new(section: SectionKind, asset: &ImageAsset) -> Self {
        Self {
            id: asset.id().to_owned(),
            src: asset.source_url().to_owned(),
            alt: asset.alt_text().to_owned(),
            section,
            state: asset.display_state(),
        }
    }
}

/// Response for GET /api/assets.
#[derive(Serialize)]
pub(crate) struct AssetsResponse {
    /// Assets in document order.
    assets: Vec<AssetResponse>,
}

/// Handle GET /api/assets.
pub(crate) async fn list_assets(State(state): State<Arc<AppState>>) -> Json<AssetsResponse> {
    let assets = state
        .page
        .assets()
        .map(|(section, asset)| AssetResponse::new(section, asset))
        .collect();

    Json(AssetsResponse { assets })
}

/// Handle POST /api/assets/{id}/failure.
///
/// Hides the asset. Repeated reports leave the state unchanged.
pub(crate) async fn report_failure(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<AssetResponse>, ServerError> {
    let (section, asset) = state
        .page
        .assets()
        .find(|(_, asset)| asset.id() == id)
        .ok_or_else(|| ServerError::AssetNotFound(id.clone()))?;

    if asset.on_load_failure() {
        tracing::debug!(asset = %id, section = %section, "Browser reported image failure");
    }

    Ok(Json(AssetResponse::new(section, asset)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_asset_response_serialization() {
        let asset = ImageAsset::new("customer-logo-1", "/img/customer-logo-1.png", "客户标志");
        let json = serde_json::to_value(AssetResponse::new(SectionKind::CustomerLogos, &asset))
            .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "customer-logo-1",
                "src": "/img/customer-logo-1.png",
                "alt": "客户标志",
                "section": "customer-logos",
                "state": "visible",
            })
        );
    }

    #[test]
    fn test_hidden_state_serialization() {
        let asset = ImageAsset::new("hero", "/img/hero-automation.png", "");
        asset.on_load_failure();
        let json = serde_json::to_value(AssetResponse::new(SectionKind::Hero, &asset)).unwrap();
        assert_eq!(json["state"], "hidden");
        assert_eq!(json["section"], "hero");
    }
}

//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No image asset with the given id.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// The configured host and port do not form a socket address.
    #[error("Invalid address {address}: {source}")]
    Address {
        /// Address as configured.
        address: String,
        /// Parse error.
        #[source]
        source: std::net::AddrParseError,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::AssetNotFound(id) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Asset not found", "id": id}),
            ),
            Self::Address { .. } | Self::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": self.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

//! Preview server for the LP landing page.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - the rendered landing page at `/`
//! - the asset state API used by the browser-side image fallback
//! - page images and other files from the static directory
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use lp_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7979,
//!         static_dir: PathBuf::from("static"),
//!         probe: true,
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum server (lp-server)
//!                        │
//!                        ├─► GET /            ──► Page::render_with (current asset states)
//!                        │
//!                        ├─► /api/assets      ──► asset list / failure reports
//!                        │                          │
//!                        │                          └─► ImageAsset::on_load_failure
//!                        │
//!                        └─► Static files (fallback script, static dir)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use lp_assets::FsAssetLoader;
use lp_site::PageRenderer;
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory the page's image URLs resolve against.
    pub static_dir: PathBuf,
    /// Probe assets against `static_dir` before serving.
    pub probe: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            static_dir: PathBuf::from("static"),
            probe: true,
        }
    }
}

/// Run the server.
///
/// Composes the page once; it lives for the whole run, so failure reports
/// from any client hide the asset for every later request.
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let page = PageRenderer::compose();

    if config.probe {
        let report = lp_site::probe(&page, &FsAssetLoader::new(&config.static_dir));
        if !report.is_clean() {
            tracing::warn!(
                hidden = report.failures.len(),
                static_dir = %config.static_dir.display(),
                "Some images failed to load and are hidden"
            );
        }
    }

    let state = Arc::new(AppState {
        page,
        static_dir: config.static_dir,
    });

    let app = app::create_router(state);

    let address = format!("{}:{}", config.host, config.port);
    let addr: SocketAddr = address
        .parse()
        .map_err(|source| ServerError::Address {
            address: address.clone(),
            source,
        })?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from LP config.
#[must_use]
pub fn server_config_from_lp_config(config: &lp_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        static_dir: config.site_resolved.static_dir.clone(),
        probe: config.site_resolved.probe,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_server_config_from_lp_config() {
        let config = lp_config::Config::default();
        let server = server_config_from_lp_config(&config);

        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 7979);
        assert_eq!(server.static_dir, PathBuf::from("./static"));
        assert!(server.probe);
    }

    #[tokio::test]
    async fn test_run_server_rejects_invalid_address() {
        let config = ServerConfig {
            host: "not a host".to_owned(),
            probe: false,
            ..Default::default()
        };

        let err = run_server(config).await.unwrap_err();
        assert!(matches!(err, ServerError::Address { .. }));
    }
}

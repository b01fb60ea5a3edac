//! Landing page composition for LP.
//!
//! This crate provides:
//! - [`PageRenderer`]: composes the fixed, ordered landing page
//! - [`Page`]: the composed sections and their image assets
//! - [`probe`]: runs an [`AssetLoader`](lp_assets::AssetLoader) over every
//!   asset and hides the ones that fail
//!
//! # Quick Start
//!
//! ```
//! use lp_site::PageRenderer;
//!
//! let page = PageRenderer::compose();
//! assert!(page.hidden_assets().is_empty());
//!
//! page.on_load_failure("hero");
//! let html = page.render_html();
//! assert!(html.contains(r#"data-asset="hero" loading="lazy" hidden>"#));
//! ```

mod landing;
mod page;
mod probe;

pub use page::{Page, PageRenderer};
pub use probe::{ProbeFailure, ProbeReport, probe};

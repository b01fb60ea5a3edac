//! Trait-based landing page renderer with pluggable backends.
//!
//! This crate provides a generic [`SectionRenderer`] that turns a list of
//! [`Section`](lp_sections::Section) descriptors into output using the
//! [`RenderBackend`] trait.
//!
//! # Architecture
//!
//! - [`HtmlBackend`]: semantic HTML5 with `lp-*` class names for the stylesheet
//! - [`TextBackend`]: plain-text outline for terminals and snapshots
//!
//! The renderer walks sections in order and decides *what* to emit; the
//! backend decides *how*. Image visibility is read from each asset's display
//! state at render time, so a hidden asset never reaches the layout.
//!
//! # Example
//!
//! ```
//! use lp_assets::ImageAsset;
//! use lp_renderer::{HtmlBackend, SectionRenderer};
//! use lp_sections::{LogoStrip, Section};
//!
//! let sections = vec![Section::CustomerLogos(LogoStrip {
//!     title: "Customers",
//!     logos: vec![ImageAsset::new("logo-1", "/img/logo-1.png", "Logo")],
//! })];
//! let result = SectionRenderer::<HtmlBackend>::new().render(&sections);
//! assert!(result.output.contains(r#"data-asset="logo-1""#));
//! ```

mod backend;
mod document;
mod escape;
mod html;
mod renderer;
mod text;

pub use backend::RenderBackend;
pub use document::DocumentMeta;
pub use escape::escape_html;
pub use html::HtmlBackend;
pub use renderer::{RenderResult, SectionRenderer};
pub use text::TextBackend;

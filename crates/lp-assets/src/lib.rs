//! Image assets and static file lookup for the landing page.
//!
//! This crate owns the only piece of conditional behavior on the page: an
//! [`ImageAsset`] starts out [`DisplayState::Visible`] and is hidden for good
//! once its resource fails to load.
//!
//! # Architecture
//!
//! - [`ImageAsset`]: one image reference with a lock-free, one-way display state
//! - [`AssetLoader`]: the external resource loader seam, reporting
//!   [`AssetLoadFailure`] for images that cannot be fetched or decoded
//! - [`FsAssetLoader`]: checks assets against a static directory on disk
//! - [`MockLoader`]: in-memory loader for tests (behind `mock` feature flag)
//!
//! Image URLs resolve to files under the static directory with
//! [`resolve_url`]; [`mime_for`] names their expected type.
//!
//! # Example
//!
//! ```
//! use lp_assets::{DisplayState, ImageAsset};
//!
//! let hero = ImageAsset::new("hero", "/img/hero-automation.png", "AI 自动化图形");
//! assert_eq!(hero.display_state(), DisplayState::Visible);
//!
//! hero.on_load_failure();
//! hero.on_load_failure();
//! assert_eq!(hero.display_state(), DisplayState::Hidden);
//! ```

mod asset;
mod fs;
mod loader;
#[cfg(feature = "mock")]
mod mock;
mod static_files;

pub use asset::{DisplayState, ImageAsset};
pub use fs::FsAssetLoader;
pub use loader::{AssetLoadFailure, AssetLoader};
#[cfg(feature = "mock")]
pub use mock::MockLoader;
pub use static_files::{mime_for, resolve_url};

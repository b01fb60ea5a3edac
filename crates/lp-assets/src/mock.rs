//! Mock resource loader for testing.
//!
//! Provides [`MockLoader`] for unit testing without filesystem access.

use std::collections::HashSet;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{AssetLoadFailure, AssetLoader, ImageAsset};

/// Mock loader for testing.
///
/// Every asset loads successfully unless its id was registered with
/// [`with_failure`](Self::with_failure).
///
/// # Example
///
/// ```ignore
/// use lp_assets::{AssetLoader, ImageAsset, MockLoader};
///
/// let loader = MockLoader::new().with_failure("hero");
/// let hero = ImageAsset::new("hero", "/img/hero-automation.png", "");
/// assert!(loader.load(&hero).is_err());
/// ```
#[derive(Debug, Default)]
pub struct MockLoader {
    failing: RwLock<HashSet<String>>,
    calls: AtomicUsize,
}

impl MockLoader {
    /// Create a loader where every asset loads.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make loads of the given asset id fail.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(self, id: impl Into<String>) -> Self {
        self.failing.write().unwrap().insert(id.into());
        self
    }

    /// Make loads of every given asset id fail.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failures<I, S>(self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.failing
            .write()
            .unwrap()
            .extend(ids.into_iter().map(Into::into));
        self
    }

    /// Number of `load` calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl AssetLoader for MockLoader {
    fn load(&self, asset: &ImageAsset) -> Result<(), AssetLoadFailure> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if self.failing.read().unwrap().contains(asset.id()) {
            return Err(AssetLoadFailure::Unavailable(asset.source_url().to_owned()));
        }
        Ok(())
    }
}

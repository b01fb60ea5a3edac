//! Image asset entity.

use std::sync::atomic::{AtomicBool, Ordering};

/// Whether an image takes part in the rendered layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DisplayState {
    /// Rendered normally.
    #[default]
    Visible,
    /// Suppressed after a load failure. Occupies no layout space.
    Hidden,
}

impl DisplayState {
    /// Lowercase name used in HTML data attributes and JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
        }
    }

    /// Returns `true` for [`DisplayState::Visible`].
    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

impl std::fmt::Display for DisplayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single decorative or illustrative image on the page.
///
/// Each asset owns its display state. The state only ever moves from
/// [`DisplayState::Visible`] to [`DisplayState::Hidden`]; there is no way back.
/// The flag is atomic so that failure signals for different images can be
/// delivered from any thread without coordinating with each other.
#[derive(Debug)]
pub struct ImageAsset {
    id: String,
    source_url: String,
    alt_text: String,
    hidden: AtomicBool,
}

impl ImageAsset {
    /// Create a visible asset.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        source_url: impl Into<String>,
        alt_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_url: source_url.into(),
            alt_text: alt_text.into(),
            hidden: AtomicBool::new(false),
        }
    }

    /// Stable identifier, unique within a page (e.g. `hero`, `customer-logo-3`).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// URL the resource loader fetches.
    #[must_use]
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Alternative text.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    /// Current display state.
    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        if self.hidden.load(Ordering::Acquire) {
            DisplayState::Hidden
        } else {
            DisplayState::Visible
        }
    }

    /// Returns `true` while no load failure has been observed.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.display_state().is_visible()
    }

    /// Handle a failed fetch or decode of this asset's resource.
    ///
    /// Hides the asset permanently. Calling it again is a no-op. Returns
    /// `true` only for the call that performed the transition.
    pub fn on_load_failure(&self) -> bool {
        !self.hidden.swap(true, Ordering::AcqRel)
    }
}

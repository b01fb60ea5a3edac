//! Page composition and asset fallback.

use lp_assets::ImageAsset;
use lp_renderer::{
    DocumentMeta, HtmlBackend, RenderBackend, RenderResult, SectionRenderer, TextBackend,
};
use lp_sections::{Section, SectionKind};

use crate::landing;

/// Composes the landing page.
///
/// Takes no input and cannot fail: the section list is fixed.
pub struct PageRenderer;

impl PageRenderer {
    /// Compose the page. Every image asset starts out visible.
    #[must_use]
    pub fn compose() -> Page {
        Page {
            sections: landing::sections(),
        }
    }

    /// Document metadata for the landing page shell.
    #[must_use]
    pub fn document_meta() -> DocumentMeta {
        DocumentMeta::new(landing::TITLE, landing::DESCRIPTION, landing::LANG)
    }
}

/// A composed page: ordered sections owning their image assets.
///
/// `Page` is `Sync`: load-failure signals may be delivered through a shared
/// reference from any thread while the page is rendered.
#[derive(Debug)]
pub struct Page {
    sections: Vec<Section>,
}

impl Page {
    /// Sections in document order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section kinds in document order.
    #[must_use]
    pub fn section_order(&self) -> Vec<SectionKind> {
        self.sections.iter().map(Section::kind).collect()
    }

    /// First section of the given kind.
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind() == kind)
    }

    /// All image assets with their owning section, in document order.
    pub fn assets(&self) -> impl Iterator<Item = (SectionKind, &ImageAsset)> {
        self.sections
            .iter()
            .flat_map(|s| s.images().iter().map(move |asset| (s.kind(), asset)))
    }

    /// Look up an asset by id.
    #[must_use]
    pub fn asset(&self, id: &str) -> Option<&ImageAsset> {
        self.assets()
            .map(|(_, asset)| asset)
            .find(|asset| asset.id() == id)
    }

    /// Assets currently hidden, in document order.
    #[must_use]
    pub fn hidden_assets(&self) -> Vec<&ImageAsset> {
        self.assets()
            .map(|(_, asset)| asset)
            .filter(|asset| !asset.is_visible())
            .collect()
    }

    /// Deliver a load-failure signal for the asset with the given id.
    ///
    /// Returns `None` for an unknown id, otherwise whether this call hid the
    /// asset (`false` if it was already hidden).
    pub fn on_load_failure(&self, id: &str) -> Option<bool> {
        self.asset(id).map(ImageAsset::on_load_failure)
    }

    /// Render the sections with backend `B`, without a document shell.
    #[must_use]
    pub fn render_body<B: RenderBackend>(&self) -> RenderResult {
        SectionRenderer::<B>::new().render(&self.sections)
    }

    /// Render a complete document with backend `B`.
    #[must_use]
    pub fn render_with<B: RenderBackend>(&self, meta: &DocumentMeta) -> RenderResult {
        SectionRenderer::<B>::new().render_document(meta, &self.sections)
    }

    /// Render the complete HTML document with the default metadata.
    #[must_use]
    pub fn render_html(&self) -> String {
        self.render_with::<HtmlBackend>(&PageRenderer::document_meta())
            .output
    }

    /// Render the plain-text outline with the default metadata.
    #[must_use]
    pub fn render_text(&self) -> String {
        self.render_with::<TextBackend>(&PageRenderer::document_meta())
            .output
    }
}

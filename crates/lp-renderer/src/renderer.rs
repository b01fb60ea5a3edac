//! Generic section renderer with pluggable backend.

use std::marker::PhantomData;

use lp_assets::ImageAsset;
use lp_sections::{
    ActionGrid, BusinessBenefits, CardGrid, Footer, Hero, LogoStrip, MediaSide, NavBar, Section,
    SectionKind, SplitBlock, TrustBlock,
};

use crate::backend::RenderBackend;
use crate::document::DocumentMeta;

/// Marker in front of benefit bullets.
const CHECK_MARK: &str = "✔";

/// Result of rendering sections.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderResult {
    /// Rendered output (body only, or a full document from [`SectionRenderer::render_document`]).
    pub output: String,
    /// Kinds of the rendered sections, in output order.
    pub sections: Vec<SectionKind>,
    /// Ids of images rendered in the hidden state, in output order.
    pub hidden_assets: Vec<String>,
}

/// Generic section renderer with pluggable backend.
///
/// Walks sections in order and delegates every element to the backend `B`.
/// Repeated blocks (links, cards, logos) are rendered by iterating their
/// descriptors, so every image goes through [`RenderBackend::image`].
pub struct SectionRenderer<B: RenderBackend> {
    output: String,
    sections: Vec<SectionKind>,
    hidden_assets: Vec<String>,
    _backend: PhantomData<B>,
}

impl<B: RenderBackend> Default for SectionRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: RenderBackend> SectionRenderer<B> {
    /// Create a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(16 * 1024),
            sections: Vec::new(),
            hidden_assets: Vec::new(),
            _backend: PhantomData,
        }
    }

    /// Render sections into a body fragment.
    pub fn render(&mut self, sections: &[Section]) -> RenderResult {
        for section in sections {
            self.section(section);
        }
        RenderResult {
            output: std::mem::take(&mut self.output),
            sections: std::mem::take(&mut self.sections),
            hidden_assets: std::mem::take(&mut self.hidden_assets),
        }
    }

    /// Render sections wrapped in a complete document.
    pub fn render_document(&mut self, meta: &DocumentMeta, sections: &[Section]) -> RenderResult {
        let mut result = self.render(sections);
        let mut document = String::with_capacity(result.output.len() + 512);
        B::document(meta, &result.output, &mut document);
        result.output = document;
        result
    }

    fn section(&mut self, section: &Section) {
        let kind = section.kind();
        self.sections.push(kind);

        B::section_start(kind, &mut self.output);
        B::block_start("container", &mut self.output);
        match section {
            Section::Nav(nav) => self.nav(nav),
            Section::Hero(hero) => self.hero(hero),
            Section::FeatureGrid(grid) => self.card_grid(grid),
            Section::BusinessBenefits(benefits) => self.business_benefits(benefits),
            Section::AiCapabilities(grid) => self.action_grid(grid),
            Section::AudienceSegments(split) | Section::AiPotential(split) => self.split(split),
            Section::TrustCompliance(trust) => self.trust(trust),
            Section::CustomerLogos(strip) => self.logo_strip(strip),
            Section::Footer(footer) => self.footer(footer),
        }
        B::block_end(&mut self.output);
        B::section_end(kind, &mut self.output);
    }

    fn nav(&mut self, nav: &NavBar) {
        let out = &mut self.output;
        B::label(nav.brand, "logo", out);
        B::link_list(&nav.links, "nav-links", out);
        B::block_start("nav-buttons", out);
        B::button(&nav.login, out);
        B::button(&nav.cta, out);
        B::block_end(out);
    }

    fn hero(&mut self, hero: &Hero) {
        B::block_start("hero-text", &mut self.output);
        B::heading(1, &hero.title_lines, "hero-title", &mut self.output);
        B::paragraph(hero.subtitle, "hero-subtitle", &mut self.output);
        B::block_start("hero-buttons", &mut self.output);
        for action in &hero.actions {
            B::button(action, &mut self.output);
        }
        B::block_end(&mut self.output);
        B::block_end(&mut self.output);

        B::block_start("hero-media", &mut self.output);
        self.image(&hero.image, "hero-image");
        B::block_end(&mut self.output);
    }

    fn section_header(&mut self, title: &str, subtitle: &str) {
        B::block_start("section-header", &mut self.output);
        B::heading(2, &[title], "section-title", &mut self.output);
        B::paragraph(subtitle, "section-subtitle", &mut self.output);
        B::block_end(&mut self.output);
    }

    fn card_grid(&mut self, grid: &CardGrid) {
        self.section_header(grid.title, grid.subtitle);
        let out = &mut self.output;
        B::block_start("grid lp-grid-3", out);
        for card in &grid.cards {
            B::block_start("card", out);
            B::icon(card.icon, card.accent, "card-icon", out);
            B::heading(3, &[card.title], "card-title", out);
            B::paragraph(card.text, "card-text", out);
            B::block_end(out);
        }
        B::block_end(out);
    }

    fn business_benefits(&mut self, benefits: &BusinessBenefits) {
        self.split(&benefits.split);
        let out = &mut self.output;
        B::block_start("grid lp-grid-6", out);
        for department in &benefits.departments {
            B::block_start("department", out);
            B::icon(department.icon, lp_sections::Accent::Gray, "small-icon", out);
            B::label(department.label, "small-icon-text", out);
            B::block_end(out);
        }
        B::block_end(out);
    }

    fn action_grid(&mut self, grid: &ActionGrid) {
        self.section_header(grid.title, grid.subtitle);
        let out = &mut self.output;
        B::block_start("grid lp-grid-3", out);
        for card in &grid.cards {
            B::block_start("card lp-card-gradient", out);
            B::heading(3, &[card.title], "card-title", out);
            B::paragraph(card.text, "card-text", out);
            B::button(
                &lp_sections::Button::new(card.action, lp_sections::ButtonStyle::White),
                out,
            );
            B::block_end(out);
        }
        B::block_end(out);
    }

    fn split(&mut self, split: &SplitBlock) {
        let side = match split.image_side {
            MediaSide::Left => "split lp-media-left",
            MediaSide::Right => "split lp-media-right",
        };
        B::block_start(side, &mut self.output);

        if split.image_side == MediaSide::Left {
            self.split_media(&split.image);
        }

        B::block_start("split-text", &mut self.output);
        B::heading(2, &[split.title], "section-title", &mut self.output);
        B::paragraph(split.subtitle, "section-subtitle", &mut self.output);
        if !split.bullets.is_empty() {
            B::bullet_list(&split.bullets, CHECK_MARK, &mut self.output);
        }
        if let Some(action) = &split.action {
            B::button(action, &mut self.output);
        }
        B::block_end(&mut self.output);

        if split.image_side == MediaSide::Right {
            self.split_media(&split.image);
        }

        B::block_end(&mut self.output);
    }

    fn split_media(&mut self, image: &ImageAsset) {
        B::block_start("split-media", &mut self.output);
        self.image(image, "image");
        B::block_end(&mut self.output);
    }

    fn trust(&mut self, trust: &TrustBlock) {
        let out = &mut self.output;
        B::block_start("split lp-trust", out);
        B::block_start("grid lp-grid-3", out);
        for feature in &trust.features {
            B::block_start("trust-feature", out);
            B::icon(feature.icon, feature.accent, "card-icon", out);
            B::heading(3, &[feature.title], "card-title", out);
            B::paragraph(feature.text, "card-text", out);
            B::block_end(out);
        }
        B::block_end(out);
        B::block_start("split-text", out);
        B::heading(2, &[trust.title], "section-title", out);
        B::paragraph(trust.subtitle, "section-subtitle", out);
        B::button(&trust.action, out);
        B::block_end(out);
        B::block_end(out);
    }

    fn logo_strip(&mut self, strip: &LogoStrip) {
        B::heading(2, &[strip.title], "section-title", &mut self.output);
        B::block_start("customer-logos", &mut self.output);
        for logo in &strip.logos {
            self.image(logo, "customer-logo");
        }
        B::block_end(&mut self.output);
    }

    fn footer(&mut self, footer: &Footer) {
        let out = &mut self.output;
        B::block_start("footer-top", out);
        B::heading(2, &[footer.title], "footer-title", out);
        B::email_form(footer.email_placeholder, &footer.submit, out);
        B::block_end(out);

        B::divider(out);

        B::block_start("footer-nav", out);
        for column in &footer.columns {
            B::block_start("footer-column", out);
            B::heading(4, &[column.title], "footer-column-title", out);
            B::link_list(&column.links, "footer-links", out);
            B::block_end(out);
        }
        B::block_start("footer-column lp-footer-social", out);
        B::heading(4, &[footer.social_title], "footer-column-title", out);
        B::link_row(&footer.social_links, "social-links", out);
        B::select(&footer.languages, "language-select", out);
        B::block_end(out);
        B::block_end(out);

        B::paragraph(footer.copyright, "footer-copyright", out);
    }

    fn image(&mut self, asset: &ImageAsset, class: &str) {
        if !asset.is_visible() {
            self.hidden_assets.push(asset.id().to_owned());
        }
        B::image(asset, class, &mut self.output);
    }
}

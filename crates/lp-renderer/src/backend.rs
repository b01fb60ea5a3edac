//! Render backend trait.

use lp_assets::ImageAsset;
use lp_sections::{Accent, Button, LinkDescriptor, SectionKind};

use crate::DocumentMeta;

/// Format-specific output for page elements.
///
/// Every method appends to `out`. `class` arguments are structural hints
/// for the styling layer; backends without styling ignore them.
pub trait RenderBackend {
    /// Wrap a rendered body into a complete document.
    fn document(meta: &DocumentMeta, body: &str, out: &mut String);

    /// Open a top-level section.
    fn section_start(kind: SectionKind, out: &mut String);

    /// Close a top-level section.
    fn section_end(kind: SectionKind, out: &mut String);

    /// Open a layout container.
    fn block_start(class: &str, out: &mut String);

    /// Close the innermost layout container.
    fn block_end(out: &mut String);

    /// Heading of the given level; each line renders on its own line.
    fn heading(level: u8, lines: &[&str], class: &str, out: &mut String);

    /// Paragraph of text.
    fn paragraph(text: &str, class: &str, out: &mut String);

    /// Plain text with no block semantics (brand marks, captions).
    fn label(text: &str, class: &str, out: &mut String);

    /// List of links, one per item.
    fn link_list(links: &[LinkDescriptor], class: &str, out: &mut String);

    /// Inline row of links.
    fn link_row(links: &[LinkDescriptor], class: &str, out: &mut String);

    /// Action button.
    fn button(button: &Button, out: &mut String);

    /// Emoji icon badge.
    fn icon(icon: &str, accent: Accent, class: &str, out: &mut String);

    /// List of text items, each prefixed with `marker`.
    fn bullet_list(items: &[&str], marker: &str, out: &mut String);

    /// Image element. Hidden assets must not take layout space.
    fn image(asset: &ImageAsset, class: &str, out: &mut String);

    /// Email field with submit button.
    fn email_form(placeholder: &str, submit: &Button, out: &mut String);

    /// Static option selector.
    fn select(options: &[&str], class: &str, out: &mut String);

    /// Horizontal rule.
    fn divider(out: &mut String);
}

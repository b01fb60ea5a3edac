//! Plain-text backend.
//!
//! Produces a line-oriented outline of the page: one line per element,
//! sections introduced by `== slug ==`. Containers and styling hints are
//! dropped. Hidden images are omitted entirely.

use std::fmt::Write;

use lp_assets::ImageAsset;
use lp_sections::{Accent, Button, LinkDescriptor, SectionKind};

use crate::backend::RenderBackend;
use crate::document::DocumentMeta;

/// Plain-text render backend.
pub struct TextBackend;

impl RenderBackend for TextBackend {
    fn document(meta: &DocumentMeta, body: &str, out: &mut String) {
        writeln!(out, "{}", meta.title).unwrap();
        writeln!(out, "{}", meta.description).unwrap();
        out.push('\n');
        out.push_str(body);
    }

    fn section_start(kind: SectionKind, out: &mut String) {
        writeln!(out, "== {} ==", kind.slug()).unwrap();
    }

    fn section_end(_kind: SectionKind, out: &mut String) {
        out.push('\n');
    }

    fn block_start(_class: &str, _out: &mut String) {}

    fn block_end(_out: &mut String) {}

    fn heading(level: u8, lines: &[&str], _class: &str, out: &mut String) {
        let marks = "#".repeat(usize::from(level.clamp(1, 6)));
        writeln!(out, "{marks} {}", lines.concat()).unwrap();
    }

    fn paragraph(text: &str, _class: &str, out: &mut String) {
        writeln!(out, "{text}").unwrap();
    }

    fn label(text: &str, _class: &str, out: &mut String) {
        writeln!(out, "{text}").unwrap();
    }

    fn link_list(links: &[LinkDescriptor], _class: &str, out: &mut String) {
        for link in links {
            writeln!(out, "- [{}]({})", link.label, link.target_url).unwrap();
        }
    }

    fn link_row(links: &[LinkDescriptor], _class: &str, out: &mut String) {
        let row: Vec<String> = links
            .iter()
            .map(|link| format!("[{}]({})", link.label, link.target_url))
            .collect();
        writeln!(out, "{}", row.join(" ")).unwrap();
    }

    fn button(button: &Button, out: &mut String) {
        writeln!(out, "[ {} ]", button.label).unwrap();
    }

    fn icon(icon: &str, _accent: Accent, _class: &str, out: &mut String) {
        writeln!(out, "{icon}").unwrap();
    }

    fn bullet_list(items: &[&str], marker: &str, out: &mut String) {
        for item in items {
            writeln!(out, "{marker} {item}").unwrap();
        }
    }

    fn image(asset: &ImageAsset, _class: &str, out: &mut String) {
        if asset.is_visible() {
            writeln!(out, "![{}]({})", asset.alt_text(), asset.source_url()).unwrap();
        }
    }

    fn email_form(placeholder: &str, submit: &Button, out: &mut String) {
        writeln!(out, "<{placeholder}> [ {} ]", submit.label).unwrap();
    }

    fn select(options: &[&str], _class: &str, out: &mut String) {
        writeln!(out, "({})", options.join(" | ")).unwrap();
    }

    fn divider(out: &mut String) {
        out.push_str("---\n");
    }
}

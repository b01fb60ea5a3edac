//! HTML backend for page rendering.
//!
//! Produces semantic HTML5 output with `lp-*` class names.

use std::fmt::Write;

use lp_assets::ImageAsset;
use lp_sections::{Accent, Button, LinkDescriptor, SectionKind};

use crate::backend::RenderBackend;
use crate::document::DocumentMeta;
use crate::escape::escape_html;

/// HTML render backend.
///
/// Produces semantic HTML5 with:
/// - `<header>` / `<section>` / `<footer>` per section, tagged with `data-section`
/// - `<img data-asset>` per image; hidden assets carry the `hidden` attribute
/// - escaped text and attribute values throughout
pub struct HtmlBackend;

impl HtmlBackend {
    fn section_tag(kind: SectionKind) -> &'static str {
        match kind {
            SectionKind::Nav => "header",
            SectionKind::Footer => "footer",
            _ => "section",
        }
    }
}

impl RenderBackend for HtmlBackend {
    fn document(meta: &DocumentMeta, body: &str, out: &mut String) {
        write!(
            out,
            "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{}</title>\n<meta name=\"description\" content=\"{}\">\n",
            escape_html(&meta.lang),
            escape_html(&meta.title),
            escape_html(&meta.description)
        )
        .unwrap();
        for href in &meta.stylesheets {
            writeln!(out, r#"<link rel="stylesheet" href="{}">"#, escape_html(href)).unwrap();
        }
        for src in &meta.scripts {
            writeln!(out, r#"<script src="{}" defer></script>"#, escape_html(src)).unwrap();
        }
        out.push_str("</head>\n<body>\n");
        out.push_str(body);
        out.push_str("\n</body>\n</html>\n");
    }

    fn section_start(kind: SectionKind, out: &mut String) {
        let slug = kind.slug();
        write!(
            out,
            r#"<{} class="lp-section lp-{slug}" data-section="{slug}">"#,
            Self::section_tag(kind)
        )
        .unwrap();
    }

    fn section_end(kind: SectionKind, out: &mut String) {
        writeln!(out, "</{}>", Self::section_tag(kind)).unwrap();
    }

    fn block_start(class: &str, out: &mut String) {
        write!(out, r#"<div class="lp-{class}">"#).unwrap();
    }

    fn block_end(out: &mut String) {
        out.push_str("</div>");
    }

    fn heading(level: u8, lines: &[&str], class: &str, out: &mut String) {
        let level = level.clamp(1, 6);
        write!(out, r#"<h{level} class="lp-{class}">"#).unwrap();
        if let [line] = lines {
            out.push_str(&escape_html(line));
        } else {
            for line in lines {
                write!(out, r#"<span class="lp-line">{}</span>"#, escape_html(line)).unwrap();
            }
        }
        write!(out, "</h{level}>").unwrap();
    }

    fn paragraph(text: &str, class: &str, out: &mut String) {
        write!(out, r#"<p class="lp-{class}">{}</p>"#, escape_html(text)).unwrap();
    }

    fn label(text: &str, class: &str, out: &mut String) {
        write!(out, r#"<span class="lp-{class}">{}</span>"#, escape_html(text)).unwrap();
    }

    fn link_list(links: &[LinkDescriptor], class: &str, out: &mut String) {
        write!(out, r#"<ul class="lp-{class}">"#).unwrap();
        for link in links {
            write!(
                out,
                r#"<li><a href="{}" class="lp-{class}-link">{}</a></li>"#,
                escape_html(link.target_url),
                escape_html(link.label)
            )
            .unwrap();
        }
        out.push_str("</ul>");
    }

    fn link_row(links: &[LinkDescriptor], class: &str, out: &mut String) {
        write!(out, r#"<div class="lp-{class}">"#).unwrap();
        for link in links {
            write!(
                out,
                r#"<a href="{}" class="lp-{class}-link">{}</a>"#,
                escape_html(link.target_url),
                escape_html(link.label)
            )
            .unwrap();
        }
        out.push_str("</div>");
    }

    fn button(button: &Button, out: &mut String) {
        write!(
            out,
            r#"<button type="button" class="lp-button lp-button-{}">{}</button>"#,
            button.style.as_str(),
            escape_html(button.label)
        )
        .unwrap();
    }

    fn icon(icon: &str, accent: Accent, class: &str, out: &mut String) {
        write!(
            out,
            r#"<div class="lp-{class} lp-accent-{}"><span>{}</span></div>"#,
            accent.as_str(),
            escape_html(icon)
        )
        .unwrap();
    }

    fn bullet_list(items: &[&str], marker: &str, out: &mut String) {
        out.push_str(r#"<ul class="lp-feature-list">"#);
        for item in items {
            write!(
                out,
                r#"<li class="lp-feature-item"><span class="lp-feature-icon">{}</span><p class="lp-feature-text">{}</p></li>"#,
                escape_html(marker),
                escape_html(item)
            )
            .unwrap();
        }
        out.push_str("</ul>");
    }

    fn image(asset: &ImageAsset, class: &str, out: &mut String) {
        let hidden_attr = if asset.is_visible() { "" } else { " hidden" };
        write!(
            out,
            r#"<img src="{}" alt="{}" class="lp-{class}" data-asset="{}" loading="lazy"{hidden_attr}>"#,
            escape_html(asset.source_url()),
            escape_html(asset.alt_text()),
            escape_html(asset.id())
        )
        .unwrap();
    }

    fn email_form(placeholder: &str, submit: &Button, out: &mut String) {
        write!(
            out,
            r#"<div class="lp-footer-form"><input type="email" placeholder="{}" class="lp-footer-input">"#,
            escape_html(placeholder)
        )
        .unwrap();
        Self::button(submit, out);
        out.push_str("</div>");
    }

    fn select(options: &[&str], class: &str, out: &mut String) {
        write!(out, r#"<select class="lp-{class}">"#).unwrap();
        for option in options {
            write!(out, "<option>{}</option>", escape_html(option)).unwrap();
        }
        out.push_str("</select>");
    }

    fn divider(out: &mut String) {
        out.push_str(r#"<hr class="lp-divider">"#);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp_sections::ButtonStyle;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_visible_image() {
        let mut out = String::new();
        let asset = ImageAsset::new("hero", "/img/hero-automation.png", "AI 自动化图形");
        HtmlBackend::image(&asset, "hero-image", &mut out);
        assert_eq!(
            out,
            r#"<img src="/img/hero-automation.png" alt="AI 自动化图形" class="lp-hero-image" data-asset="hero" loading="lazy">"#
        );
    }

    #[test]
    fn test_hidden_image_has_hidden_attribute() {
        let mut out = String::new();
        let asset = ImageAsset::new("hero", "/img/hero-automation.png", "");
        asset.on_load_failure();
        HtmlBackend::image(&asset, "hero-image", &mut out);
        assert!(out.ends_with(" hidden>"), "{out}");
    }

    #[test]
    fn test_image_attributes_escaped() {
        let mut out = String::new();
        let asset = ImageAsset::new("x", "/img/a.png?a=1&b=2", r#"say "hi""#);
        HtmlBackend::image(&asset, "image", &mut out);
        assert!(out.contains(r#"src="/img/a.png?a=1&amp;b=2""#));
        assert!(out.contains(r#"alt="say &quot;hi&quot;""#));
    }

    #[test]
    fn test_section_tags() {
        let mut out = String::new();
        HtmlBackend::section_start(SectionKind::Nav, &mut out);
        HtmlBackend::section_end(SectionKind::Nav, &mut out);
        assert_eq!(
            out,
            "<header class=\"lp-section lp-nav\" data-section=\"nav\"></header>\n"
        );

        let mut out = String::new();
        HtmlBackend::section_start(SectionKind::CustomerLogos, &mut out);
        assert_eq!(
            out,
            r#"<section class="lp-section lp-customer-logos" data-section="customer-logos">"#
        );
    }

    #[test]
    fn test_heading_single_line() {
        let mut out = String::new();
        HtmlBackend::heading(2, &["加速您业务的创新"], "section-title", &mut out);
        assert_eq!(out, r#"<h2 class="lp-section-title">加速您业务的创新</h2>"#);
    }

    #[test]
    fn test_heading_multi_line() {
        let mut out = String::new();
        HtmlBackend::heading(1, &["您能看到并", "理解的自动化。"], "hero-title", &mut out);
        assert_eq!(
            out,
            r#"<h1 class="lp-hero-title"><span class="lp-line">您能看到并</span><span class="lp-line">理解的自动化。</span></h1>"#
        );
    }

    #[test]
    fn test_heading_level_clamped() {
        let mut out = String::new();
        HtmlBackend::heading(9, &["x"], "t", &mut out);
        assert_eq!(out, r#"<h6 class="lp-t">x</h6>"#);
    }

    #[test]
    fn test_link_list() {
        let mut out = String::new();
        let links = [
            LinkDescriptor::new("博客", "#blog"),
            LinkDescriptor::new("社区", "#community"),
        ];
        HtmlBackend::link_list(&links, "footer-links", &mut out);
        assert_eq!(
            out,
            concat!(
                r#"<ul class="lp-footer-links">"#,
                r##"<li><a href="#blog" class="lp-footer-links-link">博客</a></li>"##,
                r##"<li><a href="#community" class="lp-footer-links-link">社区</a></li>"##,
                "</ul>"
            )
        );
    }

    #[test]
    fn test_button() {
        let mut out = String::new();
        HtmlBackend::button(&Button::new("免费开始", ButtonStyle::Cta), &mut out);
        assert_eq!(
            out,
            r#"<button type="button" class="lp-button lp-button-cta">免费开始</button>"#
        );
    }

    #[test]
    fn test_select() {
        let mut out = String::new();
        HtmlBackend::select(&["English", "中文"], "language-select", &mut out);
        assert_eq!(
            out,
            r#"<select class="lp-language-select"><option>English</option><option>中文</option></select>"#
        );
    }

    #[test]
    fn test_document_shell() {
        let meta = DocumentMeta::new("Title & Co", "Desc", "zh-CN")
            .with_stylesheet("/assets/landing.css")
            .with_script("/assets/fallback.js");
        let mut out = String::new();
        HtmlBackend::document(&meta, "<main></main>", &mut out);

        assert!(out.starts_with("<!DOCTYPE html>\n<html lang=\"zh-CN\">"));
        assert!(out.contains("<title>Title &amp; Co</title>"));
        assert!(out.contains(r#"<meta name="description" content="Desc">"#));
        assert!(out.contains(r#"<link rel="stylesheet" href="/assets/landing.css">"#));
        assert!(out.contains(r#"<script src="/assets/fallback.js" defer></script>"#));
        assert!(out.contains("<body>\n<main></main>\n</body>"));
    }
}

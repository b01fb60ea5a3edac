//! Image fallback behavior on the composed landing page.

use std::thread;

use lp_assets::{DisplayState, MockLoader};
use lp_renderer::TextBackend;
use lp_sections::SectionKind;
use lp_site::{PageRenderer, probe};
use pretty_assertions::assert_eq;

fn states(page: &lp_site::Page) -> Vec<(String, DisplayState)> {
    page.assets()
        .map(|(_, a)| (a.id().to_owned(), a.display_state()))
        .collect()
}

#[test]
fn test_every_asset_visible_after_composition() {
    let page = PageRenderer::compose();

    let states = states(&page);
    assert_eq!(states.len(), 14);
    assert!(
        states.iter().all(|(_, s)| *s == DisplayState::Visible),
        "{states:?}"
    );

    let html = page.render_html();
    assert_eq!(html.matches("<img ").count(), 14);
    assert!(!html.contains(" hidden>"));
}

#[test]
fn test_hero_failure_hides_only_hero() {
    let page = PageRenderer::compose();
    page.on_load_failure("hero");

    for (id, state) in states(&page) {
        let expected = if id == "hero" {
            DisplayState::Hidden
        } else {
            DisplayState::Visible
        };
        assert_eq!(state, expected, "{id}");
    }

    let text = page.render_body::<TextBackend>().output;
    assert!(text.contains("# 您能看到并理解的自动化。"));
    assert!(text.contains("[ 预约演示 ]"));
    assert!(!text.contains("![AI 自动化图形]"));

    let html = page.render_html();
    assert!(html.contains(r#"data-asset="hero" loading="lazy" hidden>"#));
    assert!(html.contains(r#"<h1 class="lp-hero-title">"#));
}

#[test]
fn test_all_logo_failures_keep_logo_strip() {
    let page = PageRenderer::compose();
    let logos: Vec<_> = page
        .assets()
        .filter(|(kind, _)| *kind == SectionKind::CustomerLogos)
        .map(|(_, a)| a.id().to_owned())
        .collect();
    assert_eq!(logos.len(), 10);

    let loader = MockLoader::new().with_failures(logos.iter().cloned());
    let report = probe(&page, &loader);
    assert_eq!(report.failures.len(), 10);

    for id in &logos {
        assert_eq!(
            page.asset(id).unwrap().display_state(),
            DisplayState::Hidden,
            "{id}"
        );
    }
    assert!(page.asset("hero").unwrap().is_visible());

    let result = page.render_body::<lp_renderer::HtmlBackend>();
    assert!(result.sections.contains(&SectionKind::CustomerLogos));
    assert!(result.output.contains(r#"data-section="customer-logos""#));
    assert!(result.output.contains("加入数千家通过 Make 实现转型的企业"));
    assert_eq!(result.hidden_assets, logos);
}

#[test]
fn test_repeated_failure_is_idempotent() {
    let page = PageRenderer::compose();

    assert_eq!(page.on_load_failure("business-automation"), Some(true));
    let after_first = states(&page);
    let first_html = page.render_html();

    assert_eq!(page.on_load_failure("business-automation"), Some(false));
    assert_eq!(states(&page), after_first);
    assert_eq!(page.render_html(), first_html);
}

#[test]
fn test_section_order_is_deterministic() {
    let expected = vec![
        SectionKind::Nav,
        SectionKind::Hero,
        SectionKind::FeatureGrid,
        SectionKind::BusinessBenefits,
        SectionKind::AiCapabilities,
        SectionKind::AudienceSegments,
        SectionKind::AiPotential,
        SectionKind::TrustCompliance,
        SectionKind::CustomerLogos,
        SectionKind::Footer,
    ];

    for _ in 0..3 {
        let page = PageRenderer::compose();
        assert_eq!(page.section_order(), expected);
        assert_eq!(page.render_body::<TextBackend>().sections, expected);
    }

    let first = PageRenderer::compose().render_html();
    let second = PageRenderer::compose().render_html();
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_failure_signals() {
    let page = PageRenderer::compose();
    let ids: Vec<_> = page.assets().map(|(_, a)| a.id().to_owned()).collect();

    let transitions: usize = thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    ids.iter()
                        .rev()
                        .filter(|id| page.on_load_failure(id) == Some(true))
                        .count()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    assert_eq!(transitions, ids.len());
    assert_eq!(page.hidden_assets().len(), ids.len());
}

#[test]
fn test_footer_structure() {
    let page = PageRenderer::compose();
    let html = page.render_body::<lp_renderer::HtmlBackend>().output;

    assert_eq!(html.matches(r#"<div class="lp-footer-column">"#).count(), 4);
    assert!(html.contains(r#"<input type="email" placeholder="输入您的邮箱""#));
    assert!(html.contains(r#"<select class="lp-language-select">"#));
    assert!(html.contains("© 2025 Make. 版权所有。"));
}

//! Benchmarks for page composition and rendering.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lp_assets::MockLoader;
use lp_renderer::{HtmlBackend, TextBackend};
use lp_site::{PageRenderer, probe};

fn bench_compose(c: &mut Criterion) {
    c.bench_function("compose_page", |b| b.iter(PageRenderer::compose));
}

fn bench_render(c: &mut Criterion) {
    let page = PageRenderer::compose();
    let meta = PageRenderer::document_meta();

    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Bytes(page.render_html().len() as u64));

    group.bench_function("html", |b| {
        b.iter(|| page.render_with::<HtmlBackend>(&meta));
    });
    group.bench_function("text", |b| {
        b.iter(|| page.render_with::<TextBackend>(&meta));
    });

    group.finish();
}

fn bench_render_with_hidden_assets(c: &mut Criterion) {
    let page = PageRenderer::compose();
    for (_, asset) in page.assets() {
        asset.on_load_failure();
    }

    c.bench_function("render_html_all_hidden", |b| b.iter(|| page.render_html()));
}

fn bench_probe(c: &mut Criterion) {
    let loader = MockLoader::new().with_failures(["hero", "customer-logo-5"]);

    c.bench_function("probe_mock_loader", |b| {
        b.iter(|| {
            let page = PageRenderer::compose();
            probe(&page, &loader)
        });
    });
}

criterion_group!(
    benches,
    bench_compose,
    bench_render,
    bench_render_with_hidden_assets,
    bench_probe
);
criterion_main!(benches);

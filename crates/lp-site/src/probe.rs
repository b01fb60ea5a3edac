//! Load probing.
//!
//! Drives an [`AssetLoader`] over every asset of a composed page and delivers
//! failure signals. Loads run on the rayon pool in no particular order; the
//! report is still listed in document order.

use std::time::Instant;

use lp_assets::{AssetLoadFailure, AssetLoader};
use lp_sections::SectionKind;
use rayon::prelude::*;

use crate::Page;

/// One asset that failed to load.
#[derive(Debug)]
pub struct ProbeFailure {
    /// Asset id.
    pub asset_id: String,
    /// Section owning the asset.
    pub section: SectionKind,
    /// Loader error.
    pub error: AssetLoadFailure,
}

/// Outcome of a probe run.
#[derive(Debug, Default)]
pub struct ProbeReport {
    /// Number of assets checked.
    pub checked: usize,
    /// Failed assets in document order.
    pub failures: Vec<ProbeFailure>,
}

impl ProbeReport {
    /// Whether every asset loaded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of assets that loaded.
    #[must_use]
    pub fn loaded(&self) -> usize {
        self.checked - self.failures.len()
    }
}

/// Load every asset of `page` with `loader`.
///
/// Each failure hides its asset. Assets already hidden are checked again;
/// hiding them twice has no further effect.
pub fn probe<L: AssetLoader + ?Sized>(page: &Page, loader: &L) -> ProbeReport {
    let start = Instant::now();
    let assets: Vec<_> = page.assets().collect();

    let failures: Vec<ProbeFailure> = assets
        .par_iter()
        .filter_map(|&(section, asset)| {
            let error = loader.load(asset).err()?;
            asset.on_load_failure();
            Some(ProbeFailure {
                asset_id: asset.id().to_owned(),
                section,
                error,
            })
        })
        .collect();

    for failure in &failures {
        tracing::debug!(
            asset = %failure.asset_id,
            section = %failure.section,
            error = %failure.error,
            "Image hidden"
        );
    }
    tracing::info!(
        checked = assets.len(),
        failed = failures.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Probed page assets"
    );

    ProbeReport {
        checked: assets.len(),
        failures,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use lp_assets::{DisplayState, FsAssetLoader, MockLoader};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::PageRenderer;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[test]
    fn test_probe_all_loaded() {
        let page = PageRenderer::compose();
        let loader = MockLoader::new();

        let report = probe(&page, &loader);

        assert!(report.is_clean());
        assert_eq!(report.checked, 14);
        assert_eq!(report.loaded(), 14);
        assert_eq!(loader.calls(), 14);
        assert!(page.hidden_assets().is_empty());
    }

    #[test]
    fn test_probe_failures_in_document_order() {
        let page = PageRenderer::compose();
        let loader =
            MockLoader::new().with_failures(["customer-logo-3", "ai-interconnected", "hero"]);

        let report = probe(&page, &loader);

        let failed: Vec<_> = report
            .failures
            .iter()
            .map(|f| (f.asset_id.as_str(), f.section))
            .collect();
        assert_eq!(
            failed,
            vec![
                ("hero", SectionKind::Hero),
                ("ai-interconnected", SectionKind::AiPotential),
                ("customer-logo-3", SectionKind::CustomerLogos),
            ]
        );
        assert_eq!(
            page.asset("hero").unwrap().display_state(),
            DisplayState::Hidden
        );
        assert!(page.asset("team-automation").unwrap().is_visible());
    }

    #[test]
    fn test_probe_twice_is_idempotent() {
        let page = PageRenderer::compose();
        let loader = MockLoader::new().with_failure("business-automation");

        probe(&page, &loader);
        let first: Vec<_> = page.assets().map(|(_, a)| a.display_state()).collect();
        let report = probe(&page, &loader);
        let second: Vec<_> = page.assets().map(|(_, a)| a.display_state()).collect();

        assert_eq!(first, second);
        assert_eq!(report.failures.len(), 1);
    }

    #[test]
    fn test_probe_against_static_dir() {
        let dir = tempfile::tempdir().unwrap();
        let img = dir.path().join("img");
        fs::create_dir_all(&img).unwrap();
        fs::write(img.join("hero-automation.png"), PNG_HEADER).unwrap();
        fs::write(img.join("team-automation.png"), b"").unwrap();

        let page = PageRenderer::compose();
        let report = probe(&page, &FsAssetLoader::new(dir.path()));

        assert_eq!(report.checked, 14);
        assert_eq!(report.loaded(), 1);
        assert!(page.asset("hero").unwrap().is_visible());

        let team = report
            .failures
            .iter()
            .find(|f| f.asset_id == "team-automation")
            .unwrap();
        assert!(matches!(team.error, AssetLoadFailure::Empty(_)));

        let logo = report
            .failures
            .iter()
            .find(|f| f.asset_id == "customer-logo-1")
            .unwrap();
        assert!(matches!(logo.error, AssetLoadFailure::NotFound(_)));
    }
}

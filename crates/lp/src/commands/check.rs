//! `lp check` command implementation.

use std::path::PathBuf;

use clap::Args;
use lp_assets::FsAssetLoader;
use lp_config::{CliSettings, Config};
use lp_site::{PageRenderer, ProbeReport};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover lp.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Static directory the image URLs resolve against (overrides config).
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Fail when any image would be hidden.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            static_dir: self.static_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let static_dir = &config.site_resolved.static_dir;

        output.info(&format!("Static directory: {}", static_dir.display()));

        let page = PageRenderer::compose();
        let report = lp_site::probe(&page, &FsAssetLoader::new(static_dir));
        tracing::debug!(
            checked = report.checked,
            hidden = report.failures.len(),
            strict = self.strict,
            "Checked page images"
        );

        for (section, asset) in page.assets() {
            let line = format!(
                "{:<24} {:<18} {}",
                asset.id(),
                section.slug(),
                asset.source_url()
            );
            match report.failures.iter().find(|f| f.asset_id == asset.id()) {
                Some(failure) => {
                    output.error(&format!("✗ {line}"));
                    output.detail(&format!("    {}", failure.error));
                }
                None => output.success(&format!("✓ {line}")),
            }
        }

        let summary = summary(&report);
        if report.is_clean() {
            output.success(&summary);
            return Ok(());
        }

        output.warning(&summary);
        if self.strict {
            return Err(CliError::Validation(format!(
                "{} image(s) failed to load",
                report.failures.len()
            )));
        }
        Ok(())
    }
}

fn summary(report: &ProbeReport) -> String {
    format!(
        "{} images checked: {} visible, {} hidden",
        report.checked,
        report.loaded(),
        report.failures.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary() {
        let dir = tempfile::tempdir().unwrap();
        let page = PageRenderer::compose();
        let report = lp_site::probe(&page, &FsAssetLoader::new(dir.path()));

        assert_eq!(
            summary(&report),
            "14 images checked: 0 visible, 14 hidden"
        );
    }

    #[test]
    fn test_strict_fails_on_hidden_images() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("lp.toml");
        std::fs::write(&config_path, "").unwrap();

        let args = CheckArgs {
            config: Some(config_path),
            static_dir: None,
            strict: true,
        };
        let err = args.execute().unwrap_err();
        assert_eq!(err.to_string(), "14 image(s) failed to load");
    }

    #[test]
    fn test_lenient_check_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("lp.toml");
        std::fs::write(&config_path, "").unwrap();

        let args = CheckArgs {
            config: Some(config_path),
            static_dir: None,
            strict: false,
        };
        assert!(args.execute().is_ok());
    }
}

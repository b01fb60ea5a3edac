//! `lp render` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use lp_assets::FsAssetLoader;
use lp_config::{CliSettings, Config};
use lp_renderer::{HtmlBackend, RenderResult, TextBackend};
use lp_site::{Page, PageRenderer};

use crate::error::CliError;
use crate::output::Output;

/// Output format for the rendered page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Complete HTML document.
    #[default]
    Html,
    /// Plain-text outline.
    Text,
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to configuration file (default: auto-discover lp.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file, or `-` for stdout (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Static directory the image URLs resolve against (overrides config).
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Probe images before rendering and hide the ones that fail.
    #[arg(long)]
    probe: bool,

    /// Render without probing; every image stays visible.
    #[arg(long, conflicts_with = "probe")]
    no_probe: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let explicit_output = self.output.is_some();
        let cli_settings = CliSettings {
            static_dir: self.static_dir,
            output: self.output,
            probe: super::resolve_flag(self.probe, self.no_probe),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let page = PageRenderer::compose();
        if config.site_resolved.probe {
            probe_page(&page, &config.site_resolved.static_dir, &output);
        }

        let result = render(&page, self.format);
        tracing::debug!(
            format = ?self.format,
            sections = result.sections.len(),
            hidden = result.hidden_assets.len(),
            "Rendered page"
        );

        let configured = &config.site_resolved.output;
        if configured.as_os_str() == "-" {
            std::io::stdout().lock().write_all(result.output.as_bytes())?;
            return Ok(());
        }

        let target = if explicit_output {
            configured.clone()
        } else {
            output_path(configured, self.format)
        };
        write_document(&target, &result.output)?;
        output.success(&format!("Page rendered to {}", target.display()));
        Ok(())
    }
}

/// Render the page in the requested format.
fn render(page: &Page, format: Format) -> RenderResult {
    let meta = PageRenderer::document_meta();
    match format {
        Format::Html => page.render_with::<HtmlBackend>(&meta),
        Format::Text => page.render_with::<TextBackend>(&meta),
    }
}

/// Adjust a configured output path to the chosen format.
///
/// A text outline replaces an `.html` extension with `.txt`.
fn output_path(configured: &Path, format: Format) -> PathBuf {
    let is_html = configured
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"));
    if format == Format::Text && is_html {
        configured.with_extension("txt")
    } else {
        configured.to_path_buf()
    }
}

/// Probe the page against `static_dir`, reporting hidden images as warnings.
pub(crate) fn probe_page(page: &Page, static_dir: &Path, output: &Output) {
    let report = lp_site::probe(page, &FsAssetLoader::new(static_dir));
    tracing::info!(
        static_dir = %static_dir.display(),
        checked = report.checked,
        hidden = report.failures.len(),
        "Probed images"
    );
    for failure in &report.failures {
        output.warning(&format!(
            "Hiding {} ({}): {}",
            failure.asset_id, failure.section, failure.error
        ));
    }
}

/// Write the document, creating parent directories as needed.
fn write_document(path: &Path, document: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, document)?;
    Ok(())
}

//! `lp serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use lp_config::{CliSettings, Config};
use lp_server::{run_server, server_config_from_lp_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover lp.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Static directory the image URLs resolve against (overrides config).
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long, env = "LP_HOST")]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long, env = "LP_PORT")]
    port: Option<u16>,

    /// Probe images on startup and hide the ones that fail.
    #[arg(long)]
    probe: bool,

    /// Skip the startup probe; only browser reports hide images.
    #[arg(long, conflicts_with = "probe")]
    no_probe: bool,

    /// Enable verbose output (request and probe logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            static_dir: self.static_dir,
            probe: super::resolve_flag(self.probe, self.no_probe),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Starting server on http://{}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Static directory: {}",
            config.site_resolved.static_dir.display()
        ));
        if config.site_resolved.probe {
            output.info("Startup probe: enabled");
        } else {
            output.info("Startup probe: disabled");
        }

        run_server(server_config_from_lp_config(&config)).await?;

        Ok(())
    }
}

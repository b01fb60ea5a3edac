//! LP CLI - Landing page renderer.
//!
//! Provides commands for:
//! - `render`: Write the landing page as HTML or a text outline
//! - `check`: Probe every page image against the static directory
//! - `serve`: Start the preview server

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, RenderArgs, ServeArgs};
use output::Output;

/// LP - Landing page renderer.
#[derive(Parser)]
#[command(name = "lp", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the landing page.
    Render(RenderArgs),
    /// Check that every page image loads.
    Check(CheckArgs),
    /// Start the preview server.
    Serve(ServeArgs),
}

/// --verbose enables INFO level, otherwise use RUST_LOG or default to WARN.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(args.execute())
        }
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_args() {
        let cli = Cli::try_parse_from(["lp", "render", "-o", "-", "--format", "text"]).unwrap();
        assert!(matches!(cli.command, Commands::Render(_)));
    }

    #[test]
    fn test_probe_flags_conflict() {
        let result = Cli::try_parse_from(["lp", "render", "--probe", "--no-probe"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_filter_levels() {
        assert_eq!(log_filter(true).to_string(), "info");
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(log_filter(false).to_string(), "warn");
        }
    }

    #[test]
    fn test_serve_verbose() {
        let cli = Cli::try_parse_from(["lp", "serve", "-v", "-p", "8080"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve(ref args) if args.verbose));
    }
}

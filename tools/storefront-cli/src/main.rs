//! Storefront CLI - static export and inspection for the storefront.
//!
//! Commands:
//! - `storefront export` - Render every page to static HTML
//! - `storefront catalog` - Validate a catalog and report prices
//! - `storefront config` - Print the resolved site configuration

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CatalogArgs, ConfigArgs, ExportArgs};

/// Storefront CLI - export and inspect the storefront
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print results as JSON
    #[arg(long = "output-json", global = true)]
    output_json: bool,

    /// Site config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every page to static HTML files
    Export(ExportArgs),

    /// Validate a catalog and print each product with its discount
    Catalog(CatalogArgs),

    /// Print the resolved site configuration as TOML
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose > 0, cli.output_json);
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Export(args) => commands::export::run(args, &ctx),
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `-v` picks the level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
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
    fn test_catalog_json_file_and_output_json() {
        let cli = Cli::try_parse_from([
            "storefront",
            "--output-json",
            "catalog",
            "--json",
            "catalog.json",
            "--format",
            "json",
        ])
        .unwrap();

        assert!(cli.output_json);
        let Commands::Catalog(args) = cli.command else {
            panic!("expected catalog command");
        };
        assert_eq!(args.file.as_deref(), Some("catalog.json"));
        assert_eq!(args.format, commands::CatalogFormat::Json);
    }

    #[test]
    fn test_catalog_without_flags() {
        let cli = Cli::try_parse_from(["storefront", "catalog"]).unwrap();
        assert!(!cli.output_json);
        assert!(matches!(cli.command, Commands::Catalog(ref args) if args.file.is_none()));
    }
}

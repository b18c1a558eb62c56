//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod export;

use clap::{Args, ValueEnum};

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Output directory.
    #[arg(short, long, default_value = "dist")]
    pub out: String,

    /// Skip writing 404.html.
    #[arg(long)]
    pub no_404: bool,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Catalog JSON file (default: the built-in sample catalog).
    #[arg(long = "json", value_name = "FILE")]
    pub file: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = CatalogFormat::Table)]
    pub format: CatalogFormat,

    /// Only list featured products.
    #[arg(long)]
    pub featured: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CatalogFormat {
    Table,
    Json,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    /// Check the config and exit without printing it.
    #[arg(long)]
    pub validate: bool,
}

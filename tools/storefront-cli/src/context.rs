//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_core::SiteConfig;

use crate::output::Output;

/// Config file names searched for when `--config` is not given.
const CONFIG_NAMES: [&str; 2] = ["site.toml", ".storefront.toml"];

/// Execution context for CLI commands.
pub struct Context {
    /// Resolved site configuration.
    pub config: SiteConfig,
    /// Where the config came from, `None` for built-in defaults.
    pub config_path: Option<PathBuf>,
    pub output: Output,
    pub cwd: PathBuf,
}

impl Context {
    /// Load the site config from `config_path`, or from the nearest config
    /// file above the working directory, or fall back to the defaults.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let path = match config_path {
            Some(path) => Some(resolve(&cwd, path)),
            None => find_config(&cwd),
        };

        let config = match &path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading site config");
                SiteConfig::load(path)
                    .with_context(|| format!("Failed to load {}", path.display()))?
            }
            None => {
                tracing::debug!("no site config found, using defaults");
                SiteConfig::default()
            }
        };

        Ok(Self {
            config,
            config_path: path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

/// Walk up from `start` looking for a config file.
fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .flat_map(|dir| CONFIG_NAMES.iter().map(move |name| dir.join(name)))
        .find(|candidate| candidate.is_file())
}

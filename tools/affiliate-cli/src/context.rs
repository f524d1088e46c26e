//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use affiliate_commerce::catalog::{Catalog, SkippedEntry};
use affiliate_commerce::link::{LinkGenerator, RandomTokenSource};
use affiliate_commerce::view::ProductView;
use anyhow::{Context as _, Result};

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Loaded catalog.
    pub catalog: Arc<Catalog>,
    /// Entries dropped while loading the catalog.
    pub skipped: Vec<SkippedEntry>,
}

impl Context {
    /// Load config and catalog.
    pub fn load(
        config_path: Option<&str>,
        catalog_override: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            find_config(&cwd)?.unwrap_or_default()
        };

        let catalog_path = resolve_path(&cwd, config.catalog_path(catalog_override));
        output.debug(&format!("Loading catalog from {}", catalog_path.display()));

        let load = Catalog::load(&catalog_path)
            .with_context(|| format!("Failed to load catalog {}", catalog_path.display()))?;

        for entry in &load.skipped {
            output.warn(&format!("Skipped catalog entry #{}: {}", entry.index, entry.reason));
        }

        Ok(Self {
            config,
            output,
            catalog: Arc::new(load.catalog),
            skipped: load.skipped,
        })
    }

    /// A fresh interactive view over the catalog.
    pub fn product_view(&self) -> ProductView<RandomTokenSource> {
        let settings = &self.config.links;
        let generator = LinkGenerator::new(settings, RandomTokenSource::new(settings.token_length));
        ProductView::new(Arc::clone(&self.catalog), generator)
    }
}

/// Find a config file in the directory tree.
///
/// The nearest file wins. A file that exists but fails to load is an error,
/// not a reason to keep walking.
pub fn find_config(start: &Path) -> Result<Option<CliConfig>> {
    let config_names = ["affiliate.toml", ".affiliate.toml", "affiliate.json"];

    let mut current = start.to_path_buf();
    loop {
        for name in &config_names {
            let config_path = current.join(name);
            if config_path.exists() {
                let config = CliConfig::load(&config_path.to_string_lossy())?;
                return Ok(Some(config));
            }
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}

/// Resolve a path relative to the working directory.
fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}

//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shop_commerce::checkout::CheckoutHandoff;
use shop_commerce::listing::LOAD_ERROR_MESSAGE;
use shop_commerce::storefront::{Storefront, StorefrontView};
use shop_data::{source_for, CatalogLoader, DriveLinkRewriter, NoRewrite};
use shop_observability::StructuredLogger;

use crate::config::{ShopConfig, CONFIG_FILE_NAMES};
use crate::handoff::{BrowserHandoff, PrintHandoff};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopConfig,
    /// File the configuration was read from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Session logger.
    pub logger: StructuredLogger,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(PathBuf::from(path)),
            None => find_config(&cwd),
        };
        let config = match &config_path {
            Some(path) => ShopConfig::load(path)?,
            None => ShopConfig::default(),
        };

        let logger = config.logger(output.is_verbose())?;
        if let Some(path) = &config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            logger,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Catalog location with relative file paths resolved against the
    /// directory of the config file (or the working directory).
    pub fn catalog_location(&self) -> String {
        let source = &self.config.catalog.source;
        if source.starts_with("http://") || source.starts_with("https://") {
            return source.clone();
        }

        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty());
        match base {
            Some(dir) if Path::new(source).is_relative() => {
                dir.join(source).display().to_string()
            }
            _ => self.resolve_path(source).display().to_string(),
        }
    }

    /// Build the catalog loader described by the config.
    pub fn catalog_loader(&self) -> Result<CatalogLoader> {
        let source = source_for(&self.catalog_location(), self.config.catalog.timeout());
        let loader = CatalogLoader::new(source)
            .with_currency(self.config.currency()?)
            .with_logger(&self.logger);

        Ok(if self.config.catalog.rewrite_drive_links {
            loader.with_rewriter(DriveLinkRewriter)
        } else {
            loader.with_rewriter(NoRewrite)
        })
    }

    /// Create a storefront session and load the catalog into it.
    ///
    /// A failed load is reported and leaves the session in its failed state;
    /// only configuration problems are returned as errors.
    pub async fn load_storefront<V: StorefrontView>(&self, view: V) -> Result<Storefront<V>> {
        let mut shop = Storefront::new(view)
            .with_currency(self.config.currency()?)
            .with_link(self.config.message_link())
            .with_logger(&self.logger);

        let loader = self.catalog_loader()?;
        let spinner = self
            .output
            .spinner(&format!("Loading catalog from {}", loader.location()));
        let result = loader.load_into(&mut shop).await;
        spinner.finish_and_clear();

        if let Err(e) = result {
            self.output.debug(&e.to_string());
            self.output.warn(LOAD_ERROR_MESSAGE);
        }

        Ok(shop)
    }

    /// Pick the checkout hand-off: the browser unless disabled by config or
    /// by the caller.
    pub fn handoff(&self, open_browser: bool) -> Box<dyn CheckoutHandoff> {
        if open_browser && self.config.checkout.open_browser {
            Box::new(BrowserHandoff)
        } else {
            Box::new(PrintHandoff::new(self.output.clone()))
        }
    }
}

/// Find a config file in the directory tree, nearest first.
fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

//! Catalog loader.

use std::time::Instant;

use shop_commerce::catalog::Catalog;
use shop_commerce::storefront::{Storefront, StorefrontView};
use shop_commerce::Currency;
use shop_observability::StructuredLogger;

use crate::error::LoadError;
use crate::record::parse_catalog;
use crate::rewrite::{ImageRewriter, NoRewrite};
use crate::source::CatalogSource;

/// Loads the catalog once per session.
///
/// There is no retry: a failed load leaves the storefront in its failed
/// state until the session is restarted.
pub struct CatalogLoader {
    source: Box<dyn CatalogSource>,
    rewriter: Box<dyn ImageRewriter>,
    currency: Currency,
    logger: StructuredLogger,
}

impl CatalogLoader {
    /// Create a loader pricing products in INR, with no image rewriting.
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            rewriter: Box::new(NoRewrite),
            currency: Currency::INR,
            logger: StructuredLogger::disabled(),
        }
    }

    pub fn with_rewriter(mut self, rewriter: impl ImageRewriter + 'static) -> Self {
        self.rewriter = Box::new(rewriter);
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_logger(mut self, logger: &StructuredLogger) -> Self {
        self.logger = logger.for_component("catalog");
        self
    }

    /// Source location, for display.
    pub fn location(&self) -> String {
        self.source.location()
    }

    /// Fetch, validate and rewrite the catalog.
    pub async fn load(&self) -> Result<Catalog, LoadError> {
        let started = Instant::now();
        let location = self.source.location();

        let result = self
            .source
            .fetch()
            .await
            .and_then(|bytes| parse_catalog(&bytes, self.currency));

        match result {
            Ok(mut catalog) => {
                catalog.map_products(|product| {
                    product.image = self.rewriter.rewrite(&product.image);
                });
                self.logger
                    .info_builder("catalog loaded")
                    .field("source", location)
                    .field_i64("categories", catalog.categories().len() as i64)
                    .field_i64("products", catalog.product_count() as i64)
                    .duration_ms("elapsed_ms", started.elapsed())
                    .emit();
                Ok(catalog)
            }
            Err(e) => {
                self.logger
                    .error_builder("catalog load failed")
                    .field("source", location)
                    .field("error", e.to_string())
                    .emit();
                Err(e)
            }
        }
    }

    /// Load the catalog into a storefront, moving it to the ready or the
    /// failed state.
    pub async fn load_into<V: StorefrontView>(
        &self,
        shop: &mut Storefront<V>,
    ) -> Result<(), LoadError> {
        match self.load().await {
            Ok(catalog) => {
                shop.catalog_loaded(catalog);
                Ok(())
            }
            Err(e) => {
                shop.catalog_failed(e.to_string());
                Err(e)
            }
        }
    }
}

//! Catalog loading for the storefront.
//!
//! A [`CatalogLoader`] pulls the catalog document from a [`CatalogSource`]
//! (HTTP or local file), validates it into a [`Catalog`](shop_commerce::catalog::Catalog)
//! and passes image URLs through an [`ImageRewriter`].

mod error;
mod loader;
mod record;
mod rewrite;
mod source;

pub use error::LoadError;
pub use loader::CatalogLoader;
pub use record::{parse_catalog, ProductRecord};
pub use rewrite::{DriveLinkRewriter, ImageRewriter, NoRewrite};
pub use source::{source_for, CatalogSource, FileSource, HttpSource};

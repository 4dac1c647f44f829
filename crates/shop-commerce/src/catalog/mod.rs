//! Product catalog module.
//!
//! Contains the product record, the category-ordered catalog, and the
//! category filter used by listings.

mod catalog;
mod filter;
mod product;

pub use catalog::{Catalog, CategoryProducts};
pub use filter::{CategoryFilter, ALL_CATEGORIES};
pub use product::Product;

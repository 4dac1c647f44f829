//! Shopping cart module.
//!
//! Contains the cart store, its line items, and totals.

mod pricing;
mod store;

pub use pricing::CartTotals;
pub use store::{Adjustment, CartLine, CartStore};

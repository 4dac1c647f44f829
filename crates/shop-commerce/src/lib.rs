//! Catalog, cart and checkout domain logic for the storefront.
//!
//! - **Catalog**: products grouped by category key, in catalog order
//! - **Listing**: category filter joined with cart state, ready for rendering
//! - **Cart**: in-memory line items with totals
//! - **Checkout**: order message formatting and the hand-off port
//! - **Storefront**: the session object wiring the above to a view
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_commerce::prelude::*;
//!
//! let mut shop = Storefront::new(NullView);
//! shop.catalog_loaded(catalog);
//! shop.add_to_cart(&ProductId::new("1"))?;
//! let url = shop.checkout(&handoff)?;
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod listing;
pub mod storefront;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, CategoryFilter, CategoryProducts, Product};

    // Cart
    pub use crate::cart::{Adjustment, CartLine, CartStore, CartTotals};

    // Listing
    pub use crate::listing::{project, CardAction, Listing, ListingEntry, ListingState};

    // Checkout
    pub use crate::checkout::{
        format_order, CheckoutHandoff, DetailView, HandoffError, MessageLink,
    };

    // Session
    pub use crate::storefront::{CatalogState, Notice, NullView, Storefront, StorefrontView};
}

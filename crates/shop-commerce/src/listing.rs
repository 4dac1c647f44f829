//! Listing projection: category filter joined with cart state.
//!
//! This is the data half of the catalog renderer. It decides which
//! products are visible and which card action each shows; turning the
//! result into markup is left to the presentation layer.

use crate::cart::CartStore;
use crate::catalog::{Catalog, CategoryFilter, Product};
use serde::{Deserialize, Serialize};

/// Placeholder shown when a category has no visible products.
pub const EMPTY_CATEGORY_MESSAGE: &str = "No products available in this category.";

/// Placeholder shown when the catalog could not be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading products. Please refresh the page.";

/// Action a product card offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardAction {
    /// Product is not in the cart: offer "Add to Cart".
    Add,
    /// Product is in the cart: offer a quantity stepper.
    Stepper { quantity: i64 },
}

/// One visible product and its card action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub product: Product,
    pub action: CardAction,
}

impl ListingEntry {
    /// Quantity in the cart, zero when absent.
    pub fn cart_quantity(&self) -> i64 {
        match self.action {
            CardAction::Add => 0,
            CardAction::Stepper { quantity } => quantity,
        }
    }
}

/// The projected listing for one filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Filter the listing was projected for.
    pub filter: CategoryFilter,
    /// Heading ("All Products", "Fruits", ...).
    pub title: String,
    /// Visible products in display order.
    pub entries: Vec<ListingEntry>,
}

impl Listing {
    /// Check if no product is visible.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Placeholder text to show instead of the grid, if any.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_CATEGORY_MESSAGE)
    }
}

/// What the product grid shows for the current catalog state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListingState {
    /// Catalog fetch still pending: the grid stays blank.
    Loading,
    /// Catalog fetch failed: the grid shows the error placeholder.
    Failed,
    /// Catalog loaded.
    Ready(Listing),
}

impl ListingState {
    /// Placeholder text to show instead of the grid, if any.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ListingState::Loading => None,
            ListingState::Failed => Some(LOAD_ERROR_MESSAGE),
            ListingState::Ready(listing) => listing.placeholder(),
        }
    }

    /// The listing, once the catalog is loaded.
    pub fn listing(&self) -> Option<&Listing> {
        match self {
            ListingState::Ready(listing) => Some(listing),
            _ => None,
        }
    }
}

/// Project the catalog through a filter and the cart.
///
/// `All` concatenates every category in catalog order; an unknown
/// category yields an empty listing. Products explicitly flagged
/// unavailable never appear. Projection is pure: the same inputs always
/// give the same listing.
pub fn project(catalog: &Catalog, filter: &CategoryFilter, cart: &CartStore) -> Listing {
    let entries = catalog
        .products_for(filter)
        .filter(|product| product.is_listed())
        .map(|product| {
            let action = match cart.quantity_of(&product.id) {
                Some(quantity) if quantity > 0 => CardAction::Stepper { quantity },
                _ => CardAction::Add,
            };
            ListingEntry {
                product: product.clone(),
                action,
            }
        })
        .collect();

    Listing {
        filter: filter.clone(),
        title: filter.title(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn product(id: &str, name: &str, available: Option<bool>) -> Product {
        let mut product = Product::new(id, name, "1kg", Money::from_decimal(100.0, Currency::INR));
        product.available = available;
        product
    }

    fn catalog() -> Catalog {
        Catalog::new()
            .with_category(
                "fruits",
                vec![
                    product("1", "Apple", Some(true)),
                    product("2", "Durian", Some(false)),
                    product("3", "Mango", None),
                ],
            )
            .with_category(
                "dairy",
                vec![product("4", "Milk", None), product("5", "Paneer", Some(false))],
            )
            .with_category("snacks", vec![product("6", "Chips", Some(false))])
    }

    fn names(listing: &Listing) -> Vec<&str> {
        listing.entries.iter().map(|e| e.product.name.as_str()).collect()
    }

    #[test]
    fn test_all_concatenates_in_catalog_order() {
        let cart = CartStore::new(Currency::INR);
        let listing = project(&catalog(), &CategoryFilter::All, &cart);

        assert_eq!(listing.title, "All Products");
        assert_eq!(names(&listing), vec!["Apple", "Mango", "Milk"]);
    }

    #[test]
    fn test_all_equals_union_of_categories() {
        let catalog = catalog();
        let cart = CartStore::new(Currency::INR);

        let union: Vec<ListingEntry> = catalog
            .category_keys()
            .flat_map(|key| project(&catalog, &CategoryFilter::new(key), &cart).entries)
            .collect();
        let all = project(&catalog, &CategoryFilter::All, &cart);

        assert_eq!(all.entries, union);
    }

    #[test]
    fn test_unavailable_never_listed() {
        let catalog = catalog();
        let cart = CartStore::new(Currency::INR);
        let filters = [
            CategoryFilter::All,
            CategoryFilter::new("fruits"),
            CategoryFilter::new("dairy"),
            CategoryFilter::new("snacks"),
        ];

        for filter in &filters {
            let listing = project(&catalog, filter, &cart);
            assert!(listing.entries.iter().all(|e| e.product.available != Some(false)));
        }
    }

    #[test]
    fn test_empty_category_has_placeholder() {
        let cart = CartStore::new(Currency::INR);
        let listing = project(&catalog(), &CategoryFilter::new("snacks"), &cart);

        assert!(listing.is_empty());
        assert_eq!(listing.title, "Snacks");
        assert_eq!(listing.placeholder(), Some(EMPTY_CATEGORY_MESSAGE));

        let unknown = project(&catalog(), &CategoryFilter::new("toys"), &cart);
        assert_eq!(unknown.placeholder(), Some(EMPTY_CATEGORY_MESSAGE));
    }

    #[test]
    fn test_cart_quantity_switches_to_stepper() {
        let catalog = catalog();
        let mut cart = CartStore::new(Currency::INR);
        let mango = catalog.find_product(&ProductId::new("3")).unwrap().clone();
        cart.add_or_increment(&mango, 2).unwrap();

        let listing = project(&catalog, &CategoryFilter::new("fruits"), &cart);
        assert_eq!(listing.entries[0].action, CardAction::Add);
        assert_eq!(listing.entries[1].action, CardAction::Stepper { quantity: 2 });
        assert_eq!(listing.entries[1].cart_quantity(), 2);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let catalog = catalog();
        let cart = CartStore::new(Currency::INR);
        let first = project(&catalog, &CategoryFilter::All, &cart);
        let second = project(&catalog, &CategoryFilter::All, &cart);
        assert_eq!(first, second);
    }

    #[test]
    fn test_state_placeholders() {
        assert_eq!(ListingState::Loading.placeholder(), None);
        assert_eq!(ListingState::Failed.placeholder(), Some(LOAD_ERROR_MESSAGE));
    }
}

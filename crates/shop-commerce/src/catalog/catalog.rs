//! The loaded catalog: products grouped by category, in declared order.

use crate::catalog::{CategoryFilter, Product};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Products of a single category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryProducts {
    /// Category key as declared in the catalog document.
    pub key: String,
    /// Products in declared order.
    pub products: Vec<Product>,
}

/// Mapping from category key to ordered products.
///
/// Categories keep the order in which the catalog document declared them,
/// which is the order the "all" listing concatenates them in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Catalog {
    categories: Vec<CategoryProducts>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category. A repeated key replaces the earlier products in place.
    pub fn insert_category(&mut self, key: impl Into<String>, products: Vec<Product>) {
        let key = key.into();
        match self.categories.iter_mut().find(|c| c.key == key) {
            Some(existing) => existing.products = products,
            None => self.categories.push(CategoryProducts { key, products }),
        }
    }

    /// Builder-style `insert_category`.
    pub fn with_category(mut self, key: impl Into<String>, products: Vec<Product>) -> Self {
        self.insert_category(key, products);
        self
    }

    /// All categories in declared order.
    pub fn categories(&self) -> &[CategoryProducts] {
        &self.categories
    }

    /// Category keys in declared order.
    pub fn category_keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.key.as_str())
    }

    /// Products of one category, if it exists.
    pub fn category(&self, key: &str) -> Option<&[Product]> {
        self.categories
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.products.as_slice())
    }

    /// Products selected by a filter, before availability is applied.
    pub fn products_for<'a>(
        &'a self,
        filter: &'a CategoryFilter,
    ) -> Box<dyn Iterator<Item = &'a Product> + 'a> {
        match filter {
            CategoryFilter::All => Box::new(self.products()),
            CategoryFilter::Named(key) => {
                Box::new(self.category(key).unwrap_or_default().iter())
            }
        }
    }

    /// Every product, categories concatenated in declared order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.categories.iter().flat_map(|c| c.products.iter())
    }

    /// Find a product by ID (first occurrence in catalog order).
    pub fn find_product(&self, id: &ProductId) -> Option<&Product> {
        self.products().find(|p| &p.id == id)
    }

    /// Total number of products across categories.
    pub fn product_count(&self) -> usize {
        self.categories.iter().map(|c| c.products.len()).sum()
    }

    /// Whether the catalog holds no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Apply a transformation to every product (used for image rewriting).
    pub fn map_products(&mut self, mut f: impl FnMut(&mut Product)) {
        for category in &mut self.categories {
            category.products.iter_mut().for_each(&mut f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: i64, name: &str) -> Product {
        Product::new(id, name, "1kg", Money::new(10000, Currency::INR))
    }

    #[test]
    fn test_declared_order_is_kept() {
        let catalog = Catalog::new()
            .with_category("vegetables", vec![product(3, "Onion")])
            .with_category("fruits", vec![product(1, "Apple"), product(2, "Mango")]);

        let keys: Vec<&str> = catalog.category_keys().collect();
        assert_eq!(keys, vec!["vegetables", "fruits"]);

        let names: Vec<&str> = catalog.products().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Onion", "Apple", "Mango"]);
        assert_eq!(catalog.product_count(), 3);
    }

    #[test]
    fn test_repeated_key_replaces_in_place() {
        let catalog = Catalog::new()
            .with_category("fruits", vec![product(1, "Apple")])
            .with_category("dairy", vec![product(4, "Milk")])
            .with_category("fruits", vec![product(2, "Mango")]);

        let keys: Vec<&str> = catalog.category_keys().collect();
        assert_eq!(keys, vec!["fruits", "dairy"]);
        assert_eq!(catalog.category("fruits").unwrap()[0].name, "Mango");
    }

    #[test]
    fn test_products_for_unknown_category_is_empty() {
        let catalog = Catalog::new().with_category("fruits", vec![product(1, "Apple")]);
        let filter = CategoryFilter::new("toys");
        assert_eq!(catalog.products_for(&filter).count(), 0);
    }

    #[test]
    fn test_find_product() {
        let catalog = Catalog::new().with_category("fruits", vec![product(1, "Apple")]);
        assert_eq!(catalog.find_product(&ProductId::new("1")).unwrap().name, "Apple");
        assert!(catalog.find_product(&ProductId::new("9")).is_none());
    }
}

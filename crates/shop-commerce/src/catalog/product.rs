//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Identifier, unique within the catalog.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit label (e.g., "1kg", "500ml").
    pub unit: String,
    /// Unit price.
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Free-text description shown in the detail view.
    pub description: String,
    /// Availability flag. Only an explicit `false` hides the product.
    pub available: Option<bool>,
}

impl Product {
    /// Create an available product with no image or description.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        unit: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit: unit.into(),
            price,
            image: String::new(),
            description: String::new(),
            available: None,
        }
    }

    /// Set the availability flag.
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether the product may appear in listings.
    pub fn is_listed(&self) -> bool {
        self.available != Some(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_missing_flag_is_listed() {
        let product = Product::new("1", "Apple", "1kg", Money::new(10000, Currency::INR));
        assert!(product.is_listed());
        assert!(product.clone().with_available(true).is_listed());
        assert!(!product.with_available(false).is_listed());
    }
}

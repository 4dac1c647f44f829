//! Wire format of the catalog document.
//!
//! The document is a JSON object whose keys are category keys and whose
//! values are arrays of product records. Key order is the display order.

use serde::Deserialize;
use serde_json::Value;
use shop_commerce::catalog::{Catalog, Product};
use shop_commerce::{Currency, Money, ProductId};

use crate::error::LoadError;

/// A product record as it appears in the catalog document.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub unit: String,
    /// Price in major units.
    pub price: f64,
    /// Empty when the record has no image.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub available: Option<bool>,
}

impl ProductRecord {
    /// Convert into a domain product priced in `currency`.
    pub fn into_product(self, currency: Currency) -> Result<Product, LoadError> {
        let price = Money::try_from_decimal(self.price, currency)
            .filter(|_| self.price >= 0.0)
            .ok_or_else(|| {
                LoadError::malformed(format!(
                    "product {} has invalid price {}",
                    self.id, self.price
                ))
            })?;

        Ok(Product {
            id: self.id,
            name: self.name,
            unit: self.unit,
            price,
            image: self.image,
            description: self.description,
            available: self.available,
        })
    }
}

/// Parse and validate a catalog document.
pub fn parse_catalog(bytes: &[u8], currency: Currency) -> Result<Catalog, LoadError> {
    let root: Value = serde_json::from_slice(bytes)
        .map_err(|e| LoadError::malformed(format!("invalid JSON: {}", e)))?;

    let Value::Object(categories) = root else {
        return Err(LoadError::malformed("root must be an object of categories"));
    };

    let mut catalog = Catalog::new();
    for (key, records) in categories {
        let Value::Array(records) = records else {
            return Err(LoadError::malformed(format!(
                "category {:?} must be an array",
                key
            )));
        };

        let products = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let record: ProductRecord = serde_json::from_value(record).map_err(|e| {
                    LoadError::malformed(format!("{}[{}]: {}", key, index, e))
                })?;
                record.into_product(currency)
            })
            .collect::<Result<Vec<_>, _>>()?;

        catalog.insert_category(key, products);
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::catalog::CategoryFilter;

    const DOCUMENT: &str = r#"{
        "vegetables": [
            {"id": 7, "name": "Onion", "unit": "1kg", "price": 40, "image": "", "description": "Red onions"}
        ],
        "fruits": [
            {"id": "1", "name": "Apple", "unit": "1kg", "price": 100, "image": "a.png", "description": "Crisp", "available": true},
            {"id": 2, "name": "Durian", "unit": "1pc", "price": 12.5, "image": "d.png", "description": "Pungent", "available": false}
        ]
    }"#;

    #[test]
    fn test_parse_preserves_category_order() {
        let catalog = parse_catalog(DOCUMENT.as_bytes(), Currency::INR).unwrap();
        let keys: Vec<&str> = catalog.category_keys().collect();
        assert_eq!(keys, vec!["vegetables", "fruits"]);
        assert_eq!(catalog.product_count(), 3);
    }

    #[test]
    fn test_parse_converts_records() {
        let catalog = parse_catalog(DOCUMENT.as_bytes(), Currency::INR).unwrap();

        let onion = catalog.find_product(&ProductId::new("7")).unwrap();
        assert_eq!(onion.price, Money::new(4000, Currency::INR));
        assert_eq!(onion.available, None);

        let durian = catalog.find_product(&ProductId::new("2")).unwrap();
        assert_eq!(durian.price.display_compact(), "\u{20b9}12.5");
        assert!(!durian.is_listed());

        let filter = CategoryFilter::new("fruits");
        let fruits: Vec<_> = catalog
            .products_for(&filter)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(fruits, vec!["Apple", "Durian"]);
    }

    #[test]
    fn test_rejects_non_object_root() {
        let result = parse_catalog(b"[]", Currency::INR);
        assert!(matches!(result, Err(LoadError::Malformed(_))));
    }

    #[test]
    fn test_rejects_non_array_category() {
        let result = parse_catalog(br#"{"fruits": {"id": 1}}"#, Currency::INR);
        assert!(matches!(result, Err(LoadError::Malformed(_))));
    }

    #[test]
    fn test_rejects_missing_fields() {
        let result = parse_catalog(br#"{"fruits": [{"id": 1, "name": "Apple"}]}"#, Currency::INR);
        match result {
            Err(LoadError::Malformed(reason)) => assert!(reason.starts_with("fruits[0]")),
            other => panic!("expected malformed error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_negative_price() {
        let document = br#"{"fruits": [{"id": 1, "name": "Apple", "unit": "1kg", "price": -1, "image": "", "description": ""}]}"#;
        let result = parse_catalog(document, Currency::INR);
        assert!(matches!(result, Err(LoadError::Malformed(_))));
    }

    #[test]
    fn test_rejects_price_beyond_minor_unit_range() {
        let document = br#"{"fruits": [{"id": 1, "name": "Apple", "unit": "1kg", "price": 1e20, "image": "", "description": ""}]}"#;
        match parse_catalog(document, Currency::INR) {
            Err(LoadError::Malformed(reason)) => assert!(reason.contains("invalid price")),
            other => panic!("expected malformed error, got {:?}", other),
        }
    }

    #[test]
    fn test_image_and_description_default_to_empty() {
        let document = br#"{"grains": [{"id": 2, "name": "Rice", "unit": "5kg", "price": 300}]}"#;
        let catalog = parse_catalog(document, Currency::INR).unwrap();

        let rice = catalog.find_product(&ProductId::new("2")).unwrap();
        assert_eq!(rice.image, "");
        assert_eq!(rice.description, "");
        assert_eq!(rice.price, Money::new(30000, Currency::INR));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let result = parse_catalog(b"<html>", Currency::INR);
        assert!(matches!(result, Err(LoadError::Malformed(_))));
    }

    #[test]
    fn test_empty_document_is_empty_catalog() {
        let catalog = parse_catalog(b"{}", Currency::INR).unwrap();
        assert!(catalog.is_empty());
    }
}

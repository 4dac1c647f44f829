//! Category filter for listings.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Sentinel category key selecting every category.
pub const ALL_CATEGORIES: &str = "all";

/// Which part of the catalog a listing shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Every category, flattened in catalog order.
    #[default]
    All,
    /// A single category by key.
    Named(String),
}

impl CategoryFilter {
    /// Create a filter from a category key, mapping the sentinel to `All`.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        if key == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(key)
        }
    }

    /// The category key (the sentinel for `All`).
    pub fn key(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(key) => key,
        }
    }

    /// Heading shown above the listing.
    ///
    /// `All` reads "All Products"; a named category has its first
    /// character upper-cased.
    pub fn title(&self) -> String {
        match self {
            CategoryFilter::All => "All Products".to_string(),
            CategoryFilter::Named(key) => {
                let mut chars = key.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CategoryFilter::new(s))
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        CategoryFilter::new(s)
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        CategoryFilter::new(s)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_maps_to_all() {
        assert_eq!(CategoryFilter::new("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::new("fruits"),
            CategoryFilter::Named("fruits".to_string())
        );
    }

    #[test]
    fn test_titles() {
        assert_eq!(CategoryFilter::All.title(), "All Products");
        assert_eq!(CategoryFilter::new("fruits").title(), "Fruits");
        assert_eq!(CategoryFilter::new("").title(), "");
    }
}

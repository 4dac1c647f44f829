//! Product detail view state machine.

use crate::catalog::Product;

/// The detail (modal) view of a single product.
///
/// `Closed` until a product is viewed; `Open` carries the selected product
/// and the quantity picked so far, which never drops below one.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailView {
    #[default]
    Closed,
    Open { product: Product, quantity: i64 },
}

impl DetailView {
    /// Show a product with the quantity reset to one.
    pub fn open(&mut self, product: Product) {
        *self = DetailView::Open {
            product,
            quantity: 1,
        };
    }

    /// Close the view, dropping the selection.
    pub fn close(&mut self) {
        *self = DetailView::Closed;
    }

    /// Increase the picked quantity. No-op when closed.
    pub fn increase(&mut self) {
        if let DetailView::Open { quantity, .. } = self {
            *quantity = quantity.saturating_add(1);
        }
    }

    /// Decrease the picked quantity, never below one. No-op when closed.
    pub fn decrease(&mut self) {
        if let DetailView::Open { quantity, .. } = self {
            if *quantity > 1 {
                *quantity -= 1;
            }
        }
    }

    /// Check if the view is open.
    pub fn is_open(&self) -> bool {
        matches!(self, DetailView::Open { .. })
    }

    /// The selected product, while open.
    pub fn product(&self) -> Option<&Product> {
        match self {
            DetailView::Open { product, .. } => Some(product),
            DetailView::Closed => None,
        }
    }

    /// The picked quantity, while open.
    pub fn quantity(&self) -> Option<i64> {
        match self {
            DetailView::Open { quantity, .. } => Some(*quantity),
            DetailView::Closed => None,
        }
    }
}

//! Commerce error types.

use thiserror::Error;

use crate::checkout::HandoffError;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the loaded catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product is flagged unavailable and cannot be ordered.
    #[error("Product is unavailable: {0}")]
    ProductUnavailable(String),

    /// The catalog has not been loaded (or failed to load).
    #[error("Catalog is not loaded")]
    CatalogUnavailable,

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Cart line index does not address a line.
    #[error("Cart line {index} is out of range (cart has {len} lines)")]
    LineIndexOutOfRange { index: usize, len: usize },

    /// Checkout attempted with nothing in the cart.
    #[error("Your cart is empty!")]
    EmptyCart,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,

    /// The checkout link could not be handed off.
    #[error(transparent)]
    Handoff(#[from] HandoffError),
}

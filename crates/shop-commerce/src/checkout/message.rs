//! Order message formatting.

use std::fmt::Write as _;

use crate::cart::CartStore;
use crate::error::CommerceError;

/// First line of every order message.
pub const ORDER_GREETING: &str = "Hi! I want to place an order:";

/// Serialize the cart into a human-readable order message.
///
/// One line per cart entry with name, unit, unit price, quantity and
/// subtotal, then a blank line and the grand total. An empty cart is
/// rejected.
pub fn format_order(cart: &CartStore) -> Result<String, CommerceError> {
    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    let mut message = format!("{}\n\n", ORDER_GREETING);
    for line in cart.lines() {
        let _ = writeln!(
            message,
            "{} ({}) - {} \u{00d7} {} = {}",
            line.product.name,
            line.product.unit,
            line.product.price.display_compact(),
            line.quantity,
            line.subtotal()?.display_compact(),
        );
    }

    let _ = write!(message, "\nTotal: {}", cart.total_price()?.display_compact());
    Ok(message)
}

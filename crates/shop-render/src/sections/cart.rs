//! Cart section - count badge and cart panel.

use shop_commerce::cart::{CartLine, CartStore, CartTotals};

use crate::escape::html_escape;

/// Text shown in the cart panel when there are no lines.
pub const EMPTY_CART_TEXT: &str = "Your cart is empty";

/// Render the header cart badge.
pub fn render_cart_count(totals: &CartTotals) -> String {
    format!(
        r#"<span class="cart-count" id="cartCount">{}</span>"#,
        totals.item_count
    )
}

/// Render the cart panel: one row per line, the total and the checkout button.
pub fn render_cart_panel(cart: &CartStore, totals: &CartTotals) -> String {
    let items = if cart.is_empty() {
        format!(r#"<p class="empty-cart">{}</p>"#, EMPTY_CART_TEXT)
    } else {
        cart.lines()
            .iter()
            .enumerate()
            .map(|(index, line)| render_cart_line(index, line))
            .collect()
    };

    format!(
        r#"<aside class="cart-sidebar" id="cartSidebar" data-section="cart">
    <div class="cart-header">
        <h2>Your Cart</h2>
    </div>
    <div class="cart-items" id="cartItems">
        {}
    </div>
    <div class="cart-footer">
        <div class="cart-total">
            <span>Total:</span>
            <span id="totalPrice">{}</span>
        </div>
        <button class="checkout-btn" id="checkoutBtn">Checkout</button>
    </div>
</aside>"#,
        items,
        html_escape(&totals.total_price.display_compact())
    )
}

fn render_cart_line(index: usize, line: &CartLine) -> String {
    format!(
        r#"<div class="cart-item" data-product-id="{}">
    <div class="cart-item-info">
        <h4>{}</h4>
        <p class="cart-item-unit">{}</p>
        <p class="cart-item-price">{} &times; {}</p>
    </div>
    <div class="cart-item-controls">
        <button class="qty-change" data-index="{index}" data-action="decrease">&minus;</button>
        <span>{}</span>
        <button class="qty-change" data-index="{index}" data-action="increase">+</button>
        <button class="remove-btn" data-index="{index}" aria-label="Remove">&#128465;</button>
    </div>
</div>"#,
        html_escape(line.product.id.as_str()),
        html_escape(&line.product.name),
        html_escape(&line.product.unit),
        html_escape(&line.product.price.display_compact()),
        line.quantity,
        line.quantity,
    )
}

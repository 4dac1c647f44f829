//! Detail section - product modal.

use shop_commerce::checkout::DetailView;

use crate::escape::html_escape;

/// Render the product detail modal. A closed view renders a hidden shell.
pub fn render_detail(detail: &DetailView) -> String {
    let DetailView::Open { product, quantity } = detail else {
        return r#"<div class="modal" id="productModal" data-section="detail" style="display: none"></div>"#
            .to_string();
    };

    let id = html_escape(product.id.as_str());
    format!(
        r#"<div class="modal" id="productModal" data-section="detail" data-product-id="{}" style="display: block">
    <div class="modal-content">
        <button class="close-modal" aria-label="Close">&times;</button>
        <img src="{}" alt="{}" id="modalImage" class="modal-image">
        <div class="modal-info">
            <h2 id="modalName">{}</h2>
            <p id="modalDescription">{}</p>
            <p class="modal-unit">Unit: <span id="modalUnit">{}</span></p>
            <p class="modal-price"><span id="modalPrice">{}</span></p>
            <div class="quantity-selector">
                <button class="qty-btn" data-action="decrease">&minus;</button>
                <input type="number" id="modalQuantity" value="{}" min="1" readonly>
                <button class="qty-btn" data-action="increase">+</button>
            </div>
            <button class="add-to-cart-btn" data-product-id="{}">Add to Cart</button>
        </div>
    </div>
</div>"#,
        id,
        html_escape(&product.image),
        html_escape(&product.name),
        html_escape(&product.name),
        html_escape(&product.description),
        html_escape(&product.unit),
        html_escape(&product.price.display_compact()),
        quantity,
        id
    )
}

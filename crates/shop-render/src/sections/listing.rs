//! Listing section - category heading and product grid.

use shop_commerce::listing::{CardAction, Listing, ListingEntry, ListingState};

use crate::escape::html_escape;

/// Render the listing section for the current catalog state.
///
/// Loading renders an empty grid; a failed load or an empty category
/// renders the placeholder text instead of cards.
pub fn render_listing(state: &ListingState) -> String {
    match state {
        ListingState::Loading => render_section("loading", "", String::new()),
        ListingState::Failed => render_section("failed", "", render_placeholder(state.placeholder())),
        ListingState::Ready(listing) => render_section(
            "ready",
            &render_heading(listing),
            render_grid_contents(listing),
        ),
    }
}

fn render_section(state: &str, heading: &str, grid: String) -> String {
    format!(
        r#"<section class="product-section" data-section="listing" data-state="{}">
    {}
    <div class="product-grid" id="productGrid">
        {}
    </div>
</section>"#,
        state, heading, grid
    )
}

fn render_heading(listing: &Listing) -> String {
    format!(
        r#"<h2 class="section-title" data-category="{}">{}</h2>"#,
        html_escape(listing.filter.key()),
        html_escape(&listing.title)
    )
}

fn render_grid_contents(listing: &Listing) -> String {
    if listing.is_empty() {
        return render_placeholder(listing.placeholder());
    }
    listing.entries.iter().map(render_product_card).collect()
}

fn render_placeholder(text: Option<&str>) -> String {
    match text {
        Some(text) => format!(
            r#"<p class="grid-placeholder" style="text-align: center; padding: 2rem;">{}</p>"#,
            html_escape(text)
        ),
        None => String::new(),
    }
}

/// Render one product card.
///
/// The card carries two control sets: the button row shown on wide
/// screens and the price footer shown on narrow ones. Both reflect the
/// same card action.
pub fn render_product_card(entry: &ListingEntry) -> String {
    let product = &entry.product;
    let id = html_escape(product.id.as_str());
    let price = html_escape(&product.price.display_compact());

    let (buttons, footer_action) = match entry.action {
        CardAction::Add => (
            format!(
                r#"<button class="product-btn product-btn-add" data-product-id="{}">Add to Cart</button>"#,
                id
            ),
            format!(
                r#"<button class="product-btn product-btn-add-footer" data-product-id="{}">Add to Cart</button>"#,
                id
            ),
        ),
        CardAction::Stepper { quantity } => {
            let stepper = render_card_stepper(&id, quantity);
            (stepper.clone(), stepper)
        }
    };

    format!(
        r#"<article class="product-card" data-product-id="{}">
    <img src="{}" alt="{}" class="product-image" loading="lazy">
    <div class="product-info">
        <div class="product-header">
            <div class="product-details">
                <h3 class="product-name">{}</h3>
                <p class="product-unit">{}</p>
            </div>
            <p class="product-price">{}</p>
        </div>
        <div class="product-buttons">
            <button class="product-btn product-btn-view" data-product-id="{}">View</button>
            {}
        </div>
        <div class="product-footer">
            <p class="product-price-footer">{}</p>
            {}
        </div>
    </div>
</article>"#,
        id,
        html_escape(&product.image),
        html_escape(&product.name),
        html_escape(&product.name),
        html_escape(&product.unit),
        price,
        id,
        buttons,
        price,
        footer_action
    )
}

fn render_card_stepper(id: &str, quantity: i64) -> String {
    format!(
        r#"<div class="product-qty-controls">
                <button class="qty-btn-card" data-action="decrease" data-product-id="{id}">&minus;</button>
                <span class="qty-display">{quantity}</span>
                <button class="qty-btn-card" data-action="increase" data-product-id="{id}">+</button>
            </div>"#
    )
}

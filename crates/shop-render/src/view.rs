//! HTML presentation of the storefront view port.

use shop_commerce::cart::{CartStore, CartTotals};
use shop_commerce::checkout::DetailView;
use shop_commerce::listing::ListingState;
use shop_commerce::storefront::{Notice, StorefrontView};
use shop_commerce::{Currency, Money};

use crate::sections::{
    render_cart_count, render_cart_panel, render_detail, render_listing, render_notice,
};

/// Keeps the latest markup of every page region.
///
/// Each storefront re-render replaces the fragment of its region, so the
/// view always mirrors the session state.
#[derive(Debug, Clone)]
pub struct HtmlView {
    cart_count: String,
    cart_panel: String,
    listing: String,
    detail: String,
    notices: Vec<String>,
    renders: usize,
}

impl HtmlView {
    /// A view showing an empty cart and a loading listing.
    pub fn new() -> Self {
        let cart = CartStore::default();
        let totals = CartTotals {
            item_count: 0,
            line_count: 0,
            total_price: Money::zero(Currency::default()),
        };

        Self {
            cart_count: render_cart_count(&totals),
            cart_panel: render_cart_panel(&cart, &totals),
            listing: render_listing(&ListingState::Loading),
            detail: render_detail(&DetailView::Closed),
            notices: Vec::new(),
            renders: 0,
        }
    }

    pub fn cart_count(&self) -> &str {
        &self.cart_count
    }

    pub fn cart_panel(&self) -> &str {
        &self.cart_panel
    }

    pub fn listing(&self) -> &str {
        &self.listing
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Notices raised since the last [`take_notices`](Self::take_notices).
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    /// Number of region re-renders received.
    pub fn render_count(&self) -> usize {
        self.renders
    }
}

impl Default for HtmlView {
    fn default() -> Self {
        Self::new()
    }
}

impl StorefrontView for HtmlView {
    fn render_totals(&mut self, totals: &CartTotals) {
        self.cart_count = render_cart_count(totals);
        self.renders += 1;
    }

    fn render_cart(&mut self, cart: &CartStore, totals: &CartTotals) {
        self.cart_panel = render_cart_panel(cart, totals);
        self.renders += 1;
    }

    fn render_listing(&mut self, listing: &ListingState) {
        self.listing = render_listing(listing);
        self.renders += 1;
    }

    fn render_detail(&mut self, detail: &DetailView) {
        self.detail = render_detail(detail);
        self.renders += 1;
    }

    fn notify(&mut self, notice: &Notice) {
        self.notices.push(render_notice(notice));
    }
}

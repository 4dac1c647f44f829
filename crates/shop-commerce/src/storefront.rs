//! The storefront session.
//!
//! Owns the catalog state, the cart, the current category filter and the
//! detail view, and pushes every change to a [`StorefrontView`]. Each cart
//! mutation triggers a full refresh before returning: totals, then the cart
//! panel, then the product listing.

use serde::{Deserialize, Serialize};
use shop_observability::StructuredLogger;

use crate::cart::{Adjustment, CartStore, CartTotals};
use crate::catalog::{Catalog, CategoryFilter, Product};
use crate::checkout::{format_order, CheckoutHandoff, DetailView, MessageLink};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::listing::{project, ListingState};
use crate::money::Currency;

/// Notice text after an add.
pub const ADDED_TO_CART: &str = "Added to cart!";

/// Warning text for an empty-cart checkout.
pub const CART_EMPTY_WARNING: &str = "Your cart is empty!";

/// Transient user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "level", content = "text", rename_all = "snake_case")]
pub enum Notice {
    /// Short-lived confirmation (dismissed after a couple of seconds).
    Info(String),
    /// Blocking warning the user must acknowledge.
    Warning(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(text) | Notice::Warning(text) => text,
        }
    }
}

/// Loading state of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    /// Fetch still pending.
    Loading,
    /// Catalog available.
    Ready(Catalog),
    /// Fetch failed; the reason is kept for diagnostics.
    Failed(String),
}

/// Presentation port the storefront re-renders through.
pub trait StorefrontView {
    /// Cart badge and totals changed.
    fn render_totals(&mut self, totals: &CartTotals);

    /// Cart panel must be redrawn.
    fn render_cart(&mut self, cart: &CartStore, totals: &CartTotals);

    /// Product grid must be redrawn.
    fn render_listing(&mut self, listing: &ListingState);

    /// Detail view opened, changed, or closed.
    fn render_detail(&mut self, _detail: &DetailView) {}

    /// Show a transient notice.
    fn notify(&mut self, _notice: &Notice) {}
}

/// A view that renders nothing, for headless sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl StorefrontView for NullView {
    fn render_totals(&mut self, _totals: &CartTotals) {}
    fn render_cart(&mut self, _cart: &CartStore, _totals: &CartTotals) {}
    fn render_listing(&mut self, _listing: &ListingState) {}
}

/// One storefront session (a page lifetime).
pub struct Storefront<V> {
    catalog: CatalogState,
    cart: CartStore,
    filter: CategoryFilter,
    detail: DetailView,
    link: MessageLink,
    view: V,
    logger: StructuredLogger,
}

impl<V: StorefrontView> Storefront<V> {
    /// Create a session with an empty INR cart, waiting for the catalog.
    pub fn new(view: V) -> Self {
        Self {
            catalog: CatalogState::Loading,
            cart: CartStore::new(Currency::INR),
            filter: CategoryFilter::All,
            detail: DetailView::Closed,
            link: MessageLink::default(),
            view,
            logger: StructuredLogger::disabled(),
        }
    }

    /// Price the cart in another currency (resets the cart).
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.cart = CartStore::new(currency);
        self
    }

    /// Set the checkout link builder.
    pub fn with_link(mut self, link: MessageLink) -> Self {
        self.link = link;
        self
    }

    /// Attach a logger.
    pub fn with_logger(mut self, logger: &StructuredLogger) -> Self {
        self.logger = logger.for_component("storefront");
        self
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    pub fn catalog_state(&self) -> &CatalogState {
        &self.catalog
    }

    /// The catalog, once loaded.
    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.catalog {
            CatalogState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// What the product grid currently shows.
    pub fn listing_state(&self) -> ListingState {
        match &self.catalog {
            CatalogState::Loading => ListingState::Loading,
            CatalogState::Failed(_) => ListingState::Failed,
            CatalogState::Ready(catalog) => {
                ListingState::Ready(project(catalog, &self.filter, &self.cart))
            }
        }
    }

    /// Install a freshly loaded catalog and render the listing.
    pub fn catalog_loaded(&mut self, catalog: Catalog) {
        self.logger
            .info_builder("catalog ready")
            .field_i64("categories", catalog.categories().len() as i64)
            .field_i64("products", catalog.product_count() as i64)
            .emit();
        self.catalog = CatalogState::Ready(catalog);
        self.render_listing();
    }

    /// Record a failed catalog load; the listing shows the error placeholder.
    pub fn catalog_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        self.logger
            .error_builder("catalog unavailable")
            .field("reason", reason.clone())
            .emit();
        self.catalog = CatalogState::Failed(reason);
        self.render_listing();
    }

    /// Switch the category filter and re-render the listing.
    pub fn select_category(&mut self, filter: impl Into<CategoryFilter>) {
        self.filter = filter.into();
        self.logger
            .debug_builder("category selected")
            .field("category", self.filter.key())
            .emit();
        self.render_listing();
    }

    /// Add one unit of a product straight from its card.
    pub fn add_to_cart(&mut self, product_id: &ProductId) -> Result<i64, CommerceError> {
        self.add_quantity(product_id, 1)
    }

    /// Add `quantity` units of a product in one step.
    pub fn add_quantity(&mut self, product_id: &ProductId, quantity: i64) -> Result<i64, CommerceError> {
        let product = self.orderable_product(product_id)?;
        let quantity = self.cart.add_or_increment(&product, quantity)?;
        self.log_line("line added", product_id, quantity);
        self.refresh()?;
        self.view.notify(&Notice::Info(ADDED_TO_CART.to_string()));
        Ok(quantity)
    }

    /// Step a product's quantity from its card stepper.
    ///
    /// Products without a cart line are ignored and nothing is re-rendered.
    pub fn adjust(&mut self, product_id: &ProductId, delta: i64) -> Result<Adjustment, CommerceError> {
        let outcome = self.cart.adjust_quantity(product_id, delta)?;
        match outcome {
            Adjustment::Missing => return Ok(outcome),
            Adjustment::Updated(quantity) => self.log_line("line adjusted", product_id, quantity),
            Adjustment::Removed => self.log_line("line removed", product_id, 0),
        }
        self.refresh()?;
        Ok(outcome)
    }

    /// Cart panel "+" on the line at `index`.
    pub fn cart_increment(&mut self, index: usize) -> Result<i64, CommerceError> {
        let quantity = self.cart.increment_at(index)?;
        self.refresh()?;
        Ok(quantity)
    }

    /// Cart panel "−" on the line at `index` (stops at one).
    pub fn cart_decrement(&mut self, index: usize) -> Result<i64, CommerceError> {
        let quantity = self.cart.decrement_at(index)?;
        self.refresh()?;
        Ok(quantity)
    }

    /// Cart panel remove on the line at `index`.
    pub fn remove_line(&mut self, index: usize) -> Result<(), CommerceError> {
        let line = self.cart.remove(index)?;
        self.log_line("line removed", &line.product.id, 0);
        self.refresh()?;
        Ok(())
    }

    /// Open the detail view for a product.
    pub fn open_detail(&mut self, product_id: &ProductId) -> Result<(), CommerceError> {
        let product = self.orderable_product(product_id)?;
        self.detail.open(product);
        self.view.render_detail(&self.detail);
        Ok(())
    }

    /// Detail view "+".
    pub fn detail_increase(&mut self) {
        self.detail.increase();
        self.view.render_detail(&self.detail);
    }

    /// Detail view "−" (stops at one).
    pub fn detail_decrease(&mut self) {
        self.detail.decrease();
        self.view.render_detail(&self.detail);
    }

    /// Close the detail view (close button or outside click).
    pub fn close_detail(&mut self) {
        self.detail.close();
        self.view.render_detail(&self.detail);
    }

    /// Add the detail view's selection to the cart and close it.
    ///
    /// Returns the line's new quantity, or `None` when the view was closed.
    pub fn confirm_detail(&mut self) -> Result<Option<i64>, CommerceError> {
        let (product, picked) = match &self.detail {
            DetailView::Open { product, quantity } => (product.clone(), *quantity),
            DetailView::Closed => return Ok(None),
        };

        let quantity = self.cart.add_or_increment(&product, picked)?;
        self.log_line("line added", &product.id, quantity);
        self.refresh()?;
        self.close_detail();
        self.view.notify(&Notice::Info(ADDED_TO_CART.to_string()));
        Ok(Some(quantity))
    }

    /// Format the order and hand the deep link off.
    ///
    /// An empty cart is rejected with a warning notice and nothing is sent.
    pub fn checkout<H: CheckoutHandoff + ?Sized>(&mut self, handoff: &H) -> Result<String, CommerceError> {
        if self.cart.is_empty() {
            self.logger.warn("checkout attempted with an empty cart");
            self.view.notify(&Notice::Warning(CART_EMPTY_WARNING.to_string()));
            return Err(CommerceError::EmptyCart);
        }

        let message = format_order(&self.cart)?;
        let url = self.link.url_for(&message);
        handoff.open(&url)?;

        let totals = self.cart.totals()?;
        self.logger
            .info_builder("checkout handed off")
            .field_i64("items", totals.item_count)
            .field("total", totals.total_price.display_compact())
            .emit();
        Ok(url)
    }

    /// Recompute totals and re-render cart panel and listing, in that order.
    pub fn refresh(&mut self) -> Result<CartTotals, CommerceError> {
        let totals = self.cart.totals()?;
        self.view.render_totals(&totals);
        self.view.render_cart(&self.cart, &totals);
        self.render_listing();
        Ok(totals)
    }

    fn render_listing(&mut self) {
        let state = self.listing_state();
        self.view.render_listing(&state);
    }

    fn orderable_product(&self, product_id: &ProductId) -> Result<Product, CommerceError> {
        let catalog = self.catalog().ok_or(CommerceError::CatalogUnavailable)?;
        let product = catalog
            .find_product(product_id)
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))?;
        if !product.is_listed() {
            return Err(CommerceError::ProductUnavailable(product_id.to_string()));
        }
        Ok(product.clone())
    }

    fn log_line(&self, message: &str, product_id: &ProductId, quantity: i64) {
        self.logger
            .debug_builder(message)
            .field("product_id", product_id.as_str())
            .field_i64("quantity", quantity)
            .emit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::HandoffError;
    use crate::listing::{CardAction, LOAD_ERROR_MESSAGE};
    use crate::money::Money;
    use std::cell::RefCell;

    /// Records every callback in call order.
    #[derive(Default)]
    struct RecordingView {
        events: Vec<String>,
        last_listing: Option<ListingState>,
        notices: Vec<Notice>,
    }

    impl StorefrontView for RecordingView {
        fn render_totals(&mut self, totals: &CartTotals) {
            self.events.push(format!("totals:{}", totals.item_count));
        }

        fn render_cart(&mut self, cart: &CartStore, _totals: &CartTotals) {
            self.events.push(format!("cart:{}", cart.len()));
        }

        fn render_listing(&mut self, listing: &ListingState) {
            self.events.push("listing".to_string());
            self.last_listing = Some(listing.clone());
        }

        fn render_detail(&mut self, detail: &DetailView) {
            self.events.push(format!("detail:{}", detail.is_open()));
        }

        fn notify(&mut self, notice: &Notice) {
            self.notices.push(notice.clone());
        }
    }

    #[derive(Default)]
    struct CapturingHandoff {
        urls: RefCell<Vec<String>>,
    }

    impl CheckoutHandoff for CapturingHandoff {
        fn open(&self, url: &str) -> Result<(), HandoffError> {
            self.urls.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct FailingHandoff;

    impl CheckoutHandoff for FailingHandoff {
        fn open(&self, url: &str) -> Result<(), HandoffError> {
            Err(HandoffError::new(url, "no browser"))
        }
    }

    fn rupees(amount: f64) -> Money {
        Money::from_decimal(amount, Currency::INR)
    }

    fn catalog() -> Catalog {
        Catalog::new()
            .with_category(
                "fruits",
                vec![Product::new("1", "Apple", "1kg", rupees(100.0)).with_available(true)],
            )
            .with_category(
                "grains",
                vec![
                    Product::new("2", "Rice", "5kg", rupees(300.0)),
                    Product::new("3", "Millet", "1kg", rupees(90.0)).with_available(false),
                ],
            )
    }

    fn shop() -> Storefront<RecordingView> {
        let mut shop = Storefront::new(RecordingView::default())
            .with_link(MessageLink::to_recipient("910000000000"));
        shop.catalog_loaded(catalog());
        shop.view_mut().events.clear();
        shop
    }

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    fn listing_action(shop: &Storefront<RecordingView>, product: &str) -> Option<CardAction> {
        shop.view()
            .last_listing
            .as_ref()
            .and_then(|state| state.listing())
            .and_then(|listing| listing.entries.iter().find(|e| e.product.id.as_str() == product))
            .map(|e| e.action)
    }

    #[test]
    fn test_mutation_refresh_order() {
        let mut shop = shop();
        shop.add_to_cart(&id("1")).unwrap();

        assert_eq!(shop.view().events, vec!["totals:1", "cart:1", "listing"]);
        assert_eq!(shop.view().notices, vec![Notice::Info(ADDED_TO_CART.to_string())]);
        assert_eq!(listing_action(&shop, "1"), Some(CardAction::Stepper { quantity: 1 }));
    }

    #[test]
    fn test_overflowing_add_leaves_session_usable() {
        let mut shop = shop();

        assert!(matches!(
            shop.add_quantity(&id("2"), 1_000_000_000_000_000),
            Err(CommerceError::Overflow)
        ));
        assert!(shop.cart().is_empty());
        assert!(shop.view().events.is_empty());
        assert!(shop.view().notices.is_empty());

        shop.add_to_cart(&id("1")).unwrap();
        assert_eq!(shop.cart().len(), 1);
        assert_eq!(shop.view().events, vec!["totals:1", "cart:1", "listing"]);
    }

    #[test]
    fn test_apple_scenario_through_session() {
        let mut shop = shop();

        shop.add_to_cart(&id("1")).unwrap();
        assert_eq!(shop.cart().total_price().unwrap(), rupees(100.0));

        assert_eq!(shop.adjust(&id("1"), 1).unwrap(), Adjustment::Updated(2));
        assert_eq!(shop.cart().total_price().unwrap(), rupees(200.0));
        assert_eq!(listing_action(&shop, "1"), Some(CardAction::Stepper { quantity: 2 }));

        assert_eq!(shop.adjust(&id("1"), -5).unwrap(), Adjustment::Removed);
        assert!(shop.cart().is_empty());
        assert_eq!(shop.cart().total_price().unwrap(), rupees(0.0));
        assert_eq!(listing_action(&shop, "1"), Some(CardAction::Add));
    }

    #[test]
    fn test_add_quantity_rejects_non_positive() {
        let mut shop = shop();
        assert_eq!(shop.add_quantity(&id("2"), 3).unwrap(), 3);
        assert!(matches!(
            shop.add_quantity(&id("2"), 0),
            Err(CommerceError::InvalidQuantity(0))
        ));
        assert_eq!(shop.cart().quantity_of(&id("2")), Some(3));
    }

    #[test]
    fn test_adjust_missing_renders_nothing() {
        let mut shop = shop();
        assert_eq!(shop.adjust(&id("2"), 1).unwrap(), Adjustment::Missing);
        assert!(shop.view().events.is_empty());
    }

    #[test]
    fn test_unavailable_product_cannot_be_added() {
        let mut shop = shop();
        assert!(matches!(
            shop.add_to_cart(&id("3")),
            Err(CommerceError::ProductUnavailable(_))
        ));
        assert!(matches!(
            shop.add_to_cart(&id("42")),
            Err(CommerceError::ProductNotFound(_))
        ));
        assert!(shop.cart().is_empty());
    }

    #[test]
    fn test_add_before_catalog_loaded() {
        let mut shop = Storefront::new(NullView);
        assert!(matches!(
            shop.add_to_cart(&id("1")),
            Err(CommerceError::CatalogUnavailable)
        ));
        assert_eq!(shop.listing_state(), ListingState::Loading);
    }

    #[test]
    fn test_catalog_failure_shows_placeholder() {
        let mut shop = Storefront::new(RecordingView::default());
        shop.catalog_failed("HTTP 404");

        let state = shop.view().last_listing.clone().unwrap();
        assert_eq!(state, ListingState::Failed);
        assert_eq!(state.placeholder(), Some(LOAD_ERROR_MESSAGE));
    }

    #[test]
    fn test_select_category_rerenders_listing() {
        let mut shop = shop();
        shop.select_category("grains");

        assert_eq!(shop.view().events, vec!["listing"]);
        let state = shop.view().last_listing.clone().unwrap();
        let listing = state.listing().unwrap();
        assert_eq!(listing.title, "Grains");
        assert_eq!(listing.entries.len(), 1);
    }

    #[test]
    fn test_detail_flow() {
        let mut shop = shop();
        shop.open_detail(&id("2")).unwrap();
        shop.detail_increase();
        shop.detail_increase();
        shop.detail_decrease();
        assert_eq!(shop.detail().quantity(), Some(2));

        assert_eq!(shop.confirm_detail().unwrap(), Some(2));
        assert!(!shop.detail().is_open());
        assert_eq!(shop.cart().quantity_of(&id("2")), Some(2));
        assert_eq!(
            shop.view().events,
            vec![
                "detail:true",
                "detail:true",
                "detail:true",
                "detail:true",
                "totals:2",
                "cart:1",
                "listing",
                "detail:false",
            ]
        );

        shop.open_detail(&id("2")).unwrap();
        assert_eq!(shop.detail().quantity(), Some(1));
        shop.close_detail();
        assert_eq!(shop.confirm_detail().unwrap(), None);
    }

    #[test]
    fn test_cart_panel_operations() {
        let mut shop = shop();
        shop.add_to_cart(&id("1")).unwrap();
        shop.add_to_cart(&id("2")).unwrap();

        assert_eq!(shop.cart_increment(1).unwrap(), 2);
        assert_eq!(shop.cart_decrement(1).unwrap(), 1);
        assert_eq!(shop.cart_decrement(1).unwrap(), 1);

        shop.remove_line(0).unwrap();
        assert_eq!(shop.cart().len(), 1);
        assert!(matches!(
            shop.remove_line(5),
            Err(CommerceError::LineIndexOutOfRange { index: 5, len: 1 })
        ));
        assert_eq!(shop.cart().len(), 1);
    }

    #[test]
    fn test_checkout_hands_off_encoded_message() {
        let mut shop = shop();
        shop.add_to_cart(&id("2")).unwrap();
        shop.adjust(&id("2"), 1).unwrap();

        let handoff = CapturingHandoff::default();
        let url = shop.checkout(&handoff).unwrap();

        assert_eq!(handoff.urls.borrow().as_slice(), &[url.clone()]);
        assert!(url.starts_with("https://wa.me/910000000000?text=Hi!%20I%20want"));
        assert!(url.contains("Rice%20(5kg)%20-%20%E2%82%B9300%20%C3%97%202%20%3D%20%E2%82%B9600"));
        assert!(url.ends_with("Total%3A%20%E2%82%B9600"));
    }

    #[test]
    fn test_empty_checkout_warns_and_sends_nothing() {
        let mut shop = shop();
        let handoff = CapturingHandoff::default();

        assert!(matches!(shop.checkout(&handoff), Err(CommerceError::EmptyCart)));
        assert!(handoff.urls.borrow().is_empty());
        assert_eq!(
            shop.view().notices,
            vec![Notice::Warning(CART_EMPTY_WARNING.to_string())]
        );
    }

    #[test]
    fn test_handoff_failure_surfaces() {
        let mut shop = shop();
        shop.add_to_cart(&id("1")).unwrap();
        assert!(matches!(
            shop.checkout(&FailingHandoff),
            Err(CommerceError::Handoff(_))
        ));
    }
}

//! Interactive terminal storefront.

use anyhow::{bail, Result};
use console::style;
use dialoguer::Select;
use shop_commerce::cart::{CartLine, CartStore, CartTotals};
use shop_commerce::catalog::{CategoryFilter, Product, ALL_CATEGORIES};
use shop_commerce::checkout::CheckoutHandoff;
use shop_commerce::listing::{CardAction, ListingEntry, ListingState, LOAD_ERROR_MESSAGE};
use shop_commerce::storefront::{Notice, Storefront, StorefrontView};
use shop_commerce::{CommerceError, ProductId};

use super::BrowseArgs;
use crate::context::Context;
use crate::output::Output;

/// Terminal presentation of the storefront.
///
/// Regions are printed on demand by the menu loop; the view only surfaces
/// notices and tracks the cart badge.
pub struct TerminalView {
    output: Output,
    totals: Option<CartTotals>,
}

impl TerminalView {
    pub fn new(output: Output) -> Self {
        Self {
            output,
            totals: None,
        }
    }

    /// Cart badge text for the main menu.
    pub fn badge(&self) -> String {
        match &self.totals {
            Some(totals) if !totals.is_empty() => format!(
                "{} item(s), {}",
                totals.item_count,
                totals.total_price.display_compact()
            ),
            _ => "empty".to_string(),
        }
    }
}

impl StorefrontView for TerminalView {
    fn render_totals(&mut self, totals: &CartTotals) {
        self.totals = Some(*totals);
    }

    fn render_cart(&mut self, cart: &CartStore, _totals: &CartTotals) {
        self.output.debug(&format!("cart has {} line(s)", cart.len()));
    }

    fn render_listing(&mut self, listing: &ListingState) {
        if let ListingState::Failed = listing {
            self.output.warn(LOAD_ERROR_MESSAGE);
        }
    }

    fn notify(&mut self, notice: &Notice) {
        self.output.notice(notice);
    }
}

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("browse is interactive and does not support --json");
    }

    let mut shop = ctx.load_storefront(TerminalView::new(ctx.output.clone())).await?;
    if shop.catalog().is_none() {
        bail!(LOAD_ERROR_MESSAGE);
    }
    if let Some(category) = args.category {
        shop.select_category(category);
    }

    let handoff = ctx.handoff(!args.no_open);

    loop {
        let items = [
            format!("Products: {}", shop.filter().title()),
            "Change category".to_string(),
            format!("Cart ({})", shop.view().badge()),
            "Checkout".to_string(),
            "Quit".to_string(),
        ];
        let choice = Select::new()
            .with_prompt("Storefront")
            .items(&items)
            .default(0)
            .interact()?;

        match choice {
            0 => browse_products(&mut shop, ctx)?,
            1 => choose_category(&mut shop)?,
            2 => manage_cart(&mut shop, ctx)?,
            3 => checkout(&mut shop, handoff.as_ref(), ctx)?,
            _ => break,
        }
    }

    Ok(())
}

fn browse_products(shop: &mut Storefront<TerminalView>, ctx: &Context) -> Result<()> {
    loop {
        let ListingState::Ready(listing) = shop.listing_state() else {
            return Ok(());
        };

        ctx.output.header(&listing.title);
        if let Some(placeholder) = listing.placeholder() {
            ctx.output.info(placeholder);
            return Ok(());
        }

        let mut items: Vec<String> = listing.entries.iter().map(entry_label).collect();
        items.push("Back".to_string());

        let choice = Select::new()
            .with_prompt("Choose a product")
            .items(&items)
            .default(0)
            .interact()?;

        match listing.entries.get(choice) {
            Some(entry) => product_menu(shop, &entry.product.id, ctx)?,
            None => return Ok(()),
        }
    }
}

#[derive(Clone, Copy)]
enum ProductAction {
    Details,
    Add,
    Increase,
    Decrease,
    Back,
}

fn product_menu(
    shop: &mut Storefront<TerminalView>,
    product_id: &ProductId,
    ctx: &Context,
) -> Result<()> {
    loop {
        let actions: Vec<(String, ProductAction)> = match shop.cart().quantity_of(product_id) {
            None => vec![
                ("View details".to_string(), ProductAction::Details),
                ("Add to cart".to_string(), ProductAction::Add),
                ("Back".to_string(), ProductAction::Back),
            ],
            Some(quantity) => vec![
                ("View details".to_string(), ProductAction::Details),
                (format!("+ (in cart: {})", quantity), ProductAction::Increase),
                ("\u{2212}".to_string(), ProductAction::Decrease),
                ("Back".to_string(), ProductAction::Back),
            ],
        };
        let labels: Vec<&str> = actions.iter().map(|(label, _)| label.as_str()).collect();

        let choice = Select::new()
            .with_prompt(product_id.as_str())
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[choice].1 {
            ProductAction::Details => detail_view(shop, product_id, ctx)?,
            ProductAction::Add => {
                shop.add_to_cart(product_id)?;
            }
            ProductAction::Increase => {
                shop.adjust(product_id, 1)?;
            }
            ProductAction::Decrease => {
                shop.adjust(product_id, -1)?;
            }
            ProductAction::Back => return Ok(()),
        }
    }
}

fn detail_view(
    shop: &mut Storefront<TerminalView>,
    product_id: &ProductId,
    ctx: &Context,
) -> Result<()> {
    shop.open_detail(product_id)?;
    if let Some(product) = shop.detail().product() {
        print_detail(&ctx.output, product);
    }

    loop {
        let quantity = shop.detail().quantity().unwrap_or(1);
        let items = [
            "Increase".to_string(),
            "Decrease".to_string(),
            format!("Add {} to cart", quantity),
            "Close".to_string(),
        ];
        let choice = Select::new()
            .with_prompt(format!("Quantity: {}", quantity))
            .items(&items)
            .default(2)
            .interact()?;

        match choice {
            0 => shop.detail_increase(),
            1 => shop.detail_decrease(),
            2 => {
                shop.confirm_detail()?;
                return Ok(());
            }
            _ => {
                shop.close_detail();
                return Ok(());
            }
        }
    }
}

fn print_detail(output: &Output, product: &Product) {
    output.header(&product.name);
    if !product.description.is_empty() {
        output.info(&product.description);
    }
    output.kv("Unit", &product.unit);
    output.kv("Price", &product.price.display_compact());
    if !product.image.is_empty() {
        output.kv("Image", &product.image);
    }
}

fn choose_category(shop: &mut Storefront<TerminalView>) -> Result<()> {
    let mut keys = vec![ALL_CATEGORIES.to_string()];
    if let Some(catalog) = shop.catalog() {
        keys.extend(catalog.category_keys().map(str::to_string));
    }
    let labels: Vec<String> = keys
        .iter()
        .map(|key| CategoryFilter::new(key.as_str()).title())
        .collect();
    let current = keys
        .iter()
        .position(|key| key == shop.filter().key())
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt("Category")
        .items(&labels)
        .default(current)
        .interact()?;

    shop.select_category(keys[choice].as_str());
    Ok(())
}

fn manage_cart(shop: &mut Storefront<TerminalView>, ctx: &Context) -> Result<()> {
    loop {
        if shop.cart().is_empty() {
            ctx.output.info("Your cart is empty");
            return Ok(());
        }

        let totals = shop.cart().totals()?;
        ctx.output.header("Your Cart");
        ctx.output.kv("Total", &totals.total_price.display_compact());

        let mut items: Vec<String> = shop.cart().lines().iter().map(cart_line_label).collect();
        items.push("Back".to_string());

        let index = Select::new()
            .with_prompt("Choose a line")
            .items(&items)
            .default(0)
            .interact()?;
        if index >= shop.cart().len() {
            return Ok(());
        }

        let choice = Select::new()
            .with_prompt(&items[index])
            .items(&["+", "\u{2212}", "Remove", "Back"])
            .default(0)
            .interact()?;

        match choice {
            0 => {
                shop.cart_increment(index)?;
            }
            1 => {
                shop.cart_decrement(index)?;
            }
            2 => shop.remove_line(index)?,
            _ => {}
        }
    }
}

fn checkout<H: CheckoutHandoff + ?Sized>(
    shop: &mut Storefront<TerminalView>,
    handoff: &H,
    ctx: &Context,
) -> Result<()> {
    match shop.checkout(handoff) {
        Ok(url) => {
            ctx.output.success("Order handed off");
            ctx.output.debug(&url);
            Ok(())
        }
        // The view already showed the warning.
        Err(CommerceError::EmptyCart) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Menu label for a listing entry.
fn entry_label(entry: &ListingEntry) -> String {
    let product = &entry.product;
    let label = format!(
        "{} ({}) {}",
        product.name,
        product.unit,
        product.price.display_compact()
    );
    match entry.action {
        CardAction::Add => label,
        CardAction::Stepper { quantity } => {
            format!("{} {}", label, style(format!("[in cart: {}]", quantity)).green())
        }
    }
}

/// Menu label for a cart line.
fn cart_line_label(line: &CartLine) -> String {
    format!(
        "{} ({}) {} \u{00d7} {}",
        line.product.name,
        line.product.unit,
        line.product.price.display_compact(),
        line.quantity
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::{Currency, Money};

    fn rice() -> Product {
        Product::new("2", "Rice", "5kg", Money::new(30000, Currency::INR))
    }

    #[test]
    fn test_entry_label() {
        let entry = ListingEntry {
            product: rice(),
            action: CardAction::Add,
        };
        assert_eq!(entry_label(&entry), "Rice (5kg) \u{20b9}300");

        let in_cart = ListingEntry {
            product: rice(),
            action: CardAction::Stepper { quantity: 2 },
        };
        assert!(entry_label(&in_cart).contains("[in cart: 2]"));
    }

    #[test]
    fn test_cart_line_label() {
        let line = CartLine {
            product: rice(),
            quantity: 3,
        };
        assert_eq!(cart_line_label(&line), "Rice (5kg) \u{20b9}300 \u{00d7} 3");
    }

    #[test]
    fn test_badge_tracks_totals() {
        let mut shop = Storefront::new(TerminalView::new(Output::new(false, true)));
        assert_eq!(shop.view().badge(), "empty");

        shop.catalog_loaded(
            shop_commerce::catalog::Catalog::new().with_category("grains", vec![rice()]),
        );
        shop.add_to_cart(&ProductId::new("2")).unwrap();
        assert_eq!(shop.view().badge(), "1 item(s), \u{20b9}300");
    }
}

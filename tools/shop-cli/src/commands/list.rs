//! Print a category listing.

use anyhow::{bail, Result};
use shop_commerce::catalog::CategoryFilter;
use shop_commerce::listing::ListingState;
use shop_commerce::storefront::NullView;

use super::ListArgs;
use crate::context::Context;
use crate::output::{cart_badge, truncate};

const WIDTHS: [usize; 5] = [10, 28, 10, 10, 6];

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.load_storefront(NullView).await?;
    let filter = args
        .category
        .as_deref()
        .map(CategoryFilter::new)
        .unwrap_or_default();
    shop.select_category(filter);

    let state = shop.listing_state();
    let listing = match &state {
        ListingState::Ready(listing) => listing,
        _ => bail!("{}", state.placeholder().unwrap_or("Catalog is not loaded")),
    };

    if ctx.output.is_json() {
        ctx.output.json(listing);
        return Ok(());
    }

    ctx.output.header(&listing.title);
    if let Some(placeholder) = listing.placeholder() {
        ctx.output.info(placeholder);
        return Ok(());
    }

    ctx.output.table_row(&["ID", "NAME", "UNIT", "PRICE", "CART"], &WIDTHS);
    for entry in &listing.entries {
        let product = &entry.product;
        ctx.output.table_row(
            &[
                &truncate(product.id.as_str(), WIDTHS[0]),
                &truncate(&product.name, WIDTHS[1]),
                &truncate(&product.unit, WIDTHS[2]),
                &product.price.display_compact(),
                &cart_badge(&entry.action),
            ],
            &WIDTHS,
        );
    }

    if let Some(catalog) = shop.catalog() {
        ctx.output.info("");
        ctx.output.info(&format!(
            "{} product(s) shown; categories: {}",
            listing.entries.len(),
            catalog.category_keys().collect::<Vec<_>>().join(", ")
        ));
    }

    Ok(())
}

//! Render the storefront page as HTML.

use anyhow::{Context as _, Result};
use shop_commerce::catalog::CategoryFilter;
use shop_render::{render_category_nav, render_page, HtmlView};

use super::order::fill_cart;
use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.load_storefront(HtmlView::new()).await?;

    let filter = args
        .category
        .as_deref()
        .map(CategoryFilter::new)
        .unwrap_or_default();
    shop.select_category(filter);

    if !args.add.is_empty() {
        fill_cart(&mut shop, &args.add)?;
        shop.view_mut().take_notices();
    }
    shop.refresh()?;

    let nav = match shop.catalog() {
        Some(catalog) => render_category_nav(catalog.category_keys(), shop.filter()),
        None => render_category_nav(std::iter::empty::<&str>(), shop.filter()),
    };
    let page = render_page(&args.title, &nav, shop.view());

    match &args.out {
        Some(out) => {
            let path = ctx.resolve_path(out);
            tokio::fs::write(&path, &page)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ctx.output.success(&format!("Wrote {}", path.display()));
            ctx.output.debug(&format!("{} bytes", page.len()));
        }
        None => print!("{}", page),
    }

    Ok(())
}

//! One-shot order: fill a cart from the command line and hand it off.

use std::str::FromStr;

use anyhow::{Context as _, Result};
use serde::Serialize;
use shop_commerce::checkout::format_order;
use shop_commerce::storefront::{NullView, Storefront, StorefrontView};
use shop_commerce::ProductId;

use super::OrderArgs;
use crate::context::Context;

/// A cart entry given on the command line: `id=qty`, or `id` for one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Error parsing a [`OrderItem`].
#[derive(Debug, thiserror::Error)]
pub enum OrderItemError {
    #[error("missing product id in {0:?}")]
    MissingId(String),

    #[error("quantity must be a positive integer, got {0:?}")]
    BadQuantity(String),
}

impl FromStr for OrderItem {
    type Err = OrderItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = match s.split_once('=') {
            Some((id, qty)) => {
                let quantity = qty
                    .trim()
                    .parse::<i64>()
                    .ok()
                    .filter(|q| *q > 0)
                    .ok_or_else(|| OrderItemError::BadQuantity(qty.to_string()))?;
                (id.trim(), quantity)
            }
            None => (s.trim(), 1),
        };

        if id.is_empty() {
            return Err(OrderItemError::MissingId(s.to_string()));
        }

        Ok(Self {
            product_id: ProductId::new(id),
            quantity,
        })
    }
}

/// Add every entry to the storefront cart, in order.
pub fn fill_cart<V: StorefrontView>(shop: &mut Storefront<V>, lines: &[OrderItem]) -> Result<()> {
    for line in lines {
        shop.add_quantity(&line.product_id, line.quantity)
            .with_context(|| format!("Cannot add product {}", line.product_id))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct OrderSummary<'a> {
    message: &'a str,
    url: &'a str,
    items: i64,
    total: String,
}

/// Run the order command.
pub async fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.load_storefront(NullView).await?;
    fill_cart(&mut shop, &args.items)?;

    let message = format_order(shop.cart())?;
    let totals = shop.cart().totals()?;

    ctx.output.header("Order");
    for line in message.lines() {
        ctx.output.info(line);
    }

    let handoff = ctx.handoff(!args.no_open);
    let url = shop.checkout(handoff.as_ref())?;

    if ctx.output.is_json() {
        ctx.output.json(&OrderSummary {
            message: &message,
            url: &url,
            items: totals.item_count,
            total: totals.total_price.display_compact(),
        });
    } else {
        ctx.output.success(&format!(
            "Order for {} item(s), {} handed off",
            totals.item_count,
            totals.total_price.display_compact()
        ));
        ctx.output.debug(&url);
    }

    Ok(())
}

//! Cart store and line items.

use crate::cart::CartTotals;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line in the cart: a product snapshot and its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The product as it was when first added.
    pub product: Product,
    /// Quantity, always positive while the line exists.
    pub quantity: i64,
}

impl CartLine {
    /// Line subtotal (unit price × quantity).
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// Result of a relative quantity adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// No line exists for the product; the cart is unchanged.
    Missing,
    /// The line now holds this quantity.
    Updated(i64),
    /// The quantity dropped to zero or below and the line was removed.
    Removed,
}

/// The shopping cart.
///
/// Lines are kept in insertion order and there is at most one line per
/// product ID. All operations are synchronous and immediately consistent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl CartStore {
    /// Create an empty cart pricing in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add `quantity` of a product, incrementing its line if one exists.
    ///
    /// Returns the line's resulting quantity. On error the cart is unchanged.
    pub fn add_or_increment(&mut self, product: &Product, quantity: i64) -> Result<i64, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        if let Some(index) = self.position(&product.id) {
            let new_quantity = self.lines[index]
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            self.check_priced(Some(index), &self.lines[index].product, new_quantity)?;
            self.lines[index].quantity = new_quantity;
            return Ok(new_quantity);
        }

        self.check_priced(None, product, quantity)?;
        self.lines.push(CartLine {
            product: product.clone(),
            quantity,
        });
        Ok(quantity)
    }

    /// Add `delta` to a product's quantity, removing the line at zero or below.
    ///
    /// Adjusting a product that is not in the cart is a no-op.
    pub fn adjust_quantity(
        &mut self,
        product_id: &ProductId,
        delta: i64,
    ) -> Result<Adjustment, CommerceError> {
        let Some(index) = self.position(product_id) else {
            return Ok(Adjustment::Missing);
        };

        let new_quantity = self.lines[index]
            .quantity
            .checked_add(delta)
            .ok_or(CommerceError::Overflow)?;

        if new_quantity <= 0 {
            self.lines.remove(index);
            return Ok(Adjustment::Removed);
        }

        self.check_priced(Some(index), &self.lines[index].product, new_quantity)?;
        self.lines[index].quantity = new_quantity;
        Ok(Adjustment::Updated(new_quantity))
    }

    /// Remove the line at `index`.
    ///
    /// An index past the end is rejected and leaves the cart unchanged.
    pub fn remove(&mut self, index: usize) -> Result<CartLine, CommerceError> {
        self.check_index(index)?;
        Ok(self.lines.remove(index))
    }

    /// Increase the quantity of the line at `index` by one.
    pub fn increment_at(&mut self, index: usize) -> Result<i64, CommerceError> {
        self.check_index(index)?;
        let new_quantity = self.lines[index]
            .quantity
            .checked_add(1)
            .ok_or(CommerceError::Overflow)?;
        self.check_priced(Some(index), &self.lines[index].product, new_quantity)?;
        self.lines[index].quantity = new_quantity;
        Ok(new_quantity)
    }

    /// Decrease the quantity of the line at `index` by one, never below one.
    ///
    /// Removing a line from the cart panel goes through [`CartStore::remove`].
    pub fn decrement_at(&mut self, index: usize) -> Result<i64, CommerceError> {
        self.check_index(index)?;
        let line = &mut self.lines[index];
        if line.quantity > 1 {
            line.quantity -= 1;
        }
        Ok(line.quantity)
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line quantities.
    pub fn total_item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of price × quantity over all lines.
    pub fn total_price(&self) -> Result<Money, CommerceError> {
        let subtotals = self
            .lines
            .iter()
            .map(CartLine::subtotal)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(subtotals.iter(), self.currency).ok_or(CommerceError::Overflow)
    }

    /// Recompute all totals.
    pub fn totals(&self) -> Result<CartTotals, CommerceError> {
        Ok(CartTotals {
            item_count: self.total_item_count(),
            line_count: self.lines.len(),
            total_price: self.total_price()?,
        })
    }

    /// Current quantity of a product, if it has a line.
    pub fn quantity_of(&self, product_id: &ProductId) -> Option<i64> {
        self.lines
            .iter()
            .find(|l| &l.product.id == product_id)
            .map(|l| l.quantity)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Currency totals are expressed in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.lines.iter().position(|l| &l.product.id == product_id)
    }

    /// Check that the cart still totals with `quantity` of `product` in place
    /// of the line at `replacing` (or as a new line), before mutating.
    fn check_priced(
        &self,
        replacing: Option<usize>,
        product: &Product,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        let own = product
            .price
            .try_multiply(quantity)
            .ok_or(CommerceError::Overflow)?;

        self.lines
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != replacing)
            .try_fold(
                (own, quantity),
                |(total, items), (_, line)| -> Result<(Money, i64), CommerceError> {
                    let total = total
                        .try_add(&line.subtotal()?)
                        .ok_or(CommerceError::Overflow)?;
                    let items = items
                        .checked_add(line.quantity)
                        .ok_or(CommerceError::Overflow)?;
                    Ok((total, items))
                },
            )
            .map(|_| ())
    }

    fn check_index(&self, index: usize) -> Result<(), CommerceError> {
        if index >= self.lines.len() {
            return Err(CommerceError::LineIndexOutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        Ok(())
    }
}

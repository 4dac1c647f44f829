//! Cart totals.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals recomputed after every cart mutation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of all line quantities (the cart badge count).
    pub item_count: i64,
    /// Number of distinct lines.
    pub line_count: usize,
    /// Sum of price × quantity over all lines.
    pub total_price: Money,
}

impl CartTotals {
    /// Check if the totals describe an empty cart.
    pub fn is_empty(&self) -> bool {
        self.line_count == 0
    }
}

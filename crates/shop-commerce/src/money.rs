//! Money type for representing monetary values.
//!
//! Uses minor-unit integer representation (paise, cents) so that cart
//! totals never accumulate floating-point error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            _ => None,
        }
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., paise for INR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a decimal amount in major units.
    ///
    /// ```
    /// use shop_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::INR);
    /// assert_eq!(price.amount_minor, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_minor = (amount * currency.minor_per_major() as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    /// Like [`Money::from_decimal`], but `None` when the amount is not finite
    /// or its minor-unit value does not fit in an `i64`.
    pub fn try_from_decimal(amount: f64, currency: Currency) -> Option<Self> {
        let minor = (amount * currency.minor_per_major() as f64).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range.
        if !minor.is_finite() || minor < i64::MIN as f64 || minor >= i64::MAX as f64 {
            return None;
        }
        Some(Self::new(minor as i64, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Convert to a decimal value in major units.
    pub fn to_decimal(&self) -> f64 {
        self.amount_minor as f64 / self.currency.minor_per_major() as f64
    }

    /// Format with fixed decimals (e.g., "₹49.90").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), self.to_decimal())
    }

    /// Format the way order messages show prices: whole amounts without
    /// decimals ("₹300"), fractional amounts without trailing zeros ("₹12.5").
    pub fn display_compact(&self) -> String {
        let per_major = self.currency.minor_per_major().unsigned_abs();
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        let whole = abs / per_major;
        let fraction = abs % per_major;

        if fraction == 0 {
            return format!("{}{}{}", sign, self.currency.symbol(), whole);
        }

        let places = self.currency.decimal_places() as usize;
        let digits = format!("{:0places$}", fraction);
        format!(
            "{}{}{}.{}",
            sign,
            self.currency.symbol(),
            whole,
            digits.trim_end_matches('0')
        )
    }

    /// Try to add another Money value, returning None on currency
    /// mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_minor
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_compact())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(300.0, Currency::INR);
        assert_eq!(m.amount_minor, 30000);

        let m = Money::from_decimal(100.0, Currency::JPY);
        assert_eq!(m.amount_minor, 100);
    }

    #[test]
    fn test_try_from_decimal_rejects_out_of_range() {
        assert_eq!(
            Money::try_from_decimal(12.5, Currency::INR),
            Some(Money::new(1250, Currency::INR))
        );
        assert_eq!(Money::try_from_decimal(1e20, Currency::INR), None);
        assert_eq!(Money::try_from_decimal(f64::INFINITY, Currency::INR), None);
        assert_eq!(Money::try_from_decimal(f64::NAN, Currency::INR), None);
    }

    #[test]
    fn test_display_compact_whole_amount() {
        let m = Money::from_decimal(600.0, Currency::INR);
        assert_eq!(m.display_compact(), "\u{20b9}600");
    }

    #[test]
    fn test_display_compact_trims_zeros() {
        assert_eq!(Money::new(1250, Currency::INR).display_compact(), "\u{20b9}12.5");
        assert_eq!(Money::new(1205, Currency::INR).display_compact(), "\u{20b9}12.05");
        assert_eq!(Money::new(-500, Currency::USD).display_compact(), "-$5");
    }

    #[test]
    fn test_display_fixed() {
        let m = Money::new(4990, Currency::INR);
        assert_eq!(m.display(), "\u{20b9}49.90");
    }

    #[test]
    fn test_try_add_mismatch() {
        let inr = Money::new(1000, Currency::INR);
        let usd = Money::new(1000, Currency::USD);
        assert!(inr.try_add(&usd).is_none());
    }

    #[test]
    fn test_try_multiply_overflow() {
        let m = Money::new(i64::MAX / 2, Currency::INR);
        assert!(m.try_multiply(3).is_none());
        assert_eq!(m.try_multiply(1), Some(m));
    }

    #[test]
    fn test_try_sum() {
        let values = [Money::new(100, Currency::INR), Money::new(250, Currency::INR)];
        let total = Money::try_sum(values.iter(), Currency::INR).unwrap();
        assert_eq!(total.amount_minor, 350);

        let overflowing = [Money::new(i64::MAX, Currency::INR), Money::new(1, Currency::INR)];
        assert_eq!(Money::try_sum(overflowing.iter(), Currency::INR), None);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("inr"), Some(Currency::INR));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}

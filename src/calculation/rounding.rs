//! Shared rounding utilities for derived monetary amounts.
//!
//! Statutory breakdown amounts are truncated down to the whole currency
//! unit immediately after they are computed; later steps consume the
//! truncated value. Centralizing the truncation keeps every step of the
//! chain on the same convention.

use rust_decimal::Decimal;

/// Truncates a monetary amount down to the whole currency unit.
///
/// # Example
///
/// ```
/// use estimate_engine::calculation::floor_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("72500.9").unwrap();
/// assert_eq!(floor_currency(amount), Decimal::from(72500));
/// ```
pub fn floor_currency(amount: Decimal) -> Decimal {
    amount.floor()
}

/// Applies a percent to a base and truncates the result to the whole
/// currency unit: `floor(base × percent / 100)`.
pub fn floored_percent(base: Decimal, percent: Decimal) -> Decimal {
    floor_currency(base * (percent / Decimal::ONE_HUNDRED))
}

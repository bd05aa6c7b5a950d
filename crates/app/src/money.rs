//! Minor-unit price helpers.

use rust_decimal::Decimal;

/// Number of decimal places in a stored minor-unit price.
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Convert a price in cents into a major-unit decimal, e.g. `1250` into `12.50`.
#[must_use]
pub fn minor_to_decimal(minor: u64) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(minor), MINOR_UNIT_SCALE)
}

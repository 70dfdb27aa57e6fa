//! Money calculation utilities using rust_decimal for precision
//!
//! Prices live as `Decimal` end to end. Binary floats only appear at the UI
//! boundary, where [`to_decimal`] rounds them to cents.

use rust_decimal::prelude::*;

pub use shared::validation::{MAX_PRICE, round_price};

/// Convert a UI-provided number to a price.
///
/// Returns `None` for NaN and infinities.
#[inline]
pub fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value).map(round_price)
}

/// Convert back to `f64` for display widgets that need one
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_price(value).to_f64().unwrap_or_default()
}

/// Format a price the way the menu board shows it: `$45`, `$45.50`
pub fn format_price(value: Decimal) -> String {
    let rounded = round_price(value);
    if rounded.fract().is_zero() {
        format!("${}", rounded.trunc())
    } else {
        format!("${:.2}", rounded)
    }
}

#[cfg(test)]
mod tests;

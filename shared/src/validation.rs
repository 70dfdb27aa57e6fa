//! Input validation helpers
//!
//! Centralized text length and price limits. Callers map the returned issue
//! onto their own field-keyed message or error code.

use rust_decimal::{Decimal, RoundingStrategy};

// ── Limits ──────────────────────────────────────────────────────────

/// Dish and menu item names
pub const MAX_NAME_LEN: usize = 200;

/// Catalog category labels
pub const MAX_CATEGORY_LEN: usize = 100;

/// Maximum allowed price per dish ($1,000,000)
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Prices are kept in cents
pub const PRICE_DECIMAL_PLACES: u32 = 2;

// ── Issues ──────────────────────────────────────────────────────────

/// Why a required text field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextIssue {
    /// Missing, empty, or whitespace only
    Empty,
    /// Longer than the allowed limit
    TooLong { len: usize, max: usize },
}

/// Why a price was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceIssue {
    /// No price given
    Missing,
    /// Zero or negative
    NotPositive,
    /// Above [`MAX_PRICE`]
    TooLarge,
}

// ── Checks ──────────────────────────────────────────────────────────

/// Validate that a required string is present, non-blank and within the
/// length limit. Returns the trimmed value.
pub fn check_required_text(value: Option<&str>, max_len: usize) -> Result<&str, TextIssue> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(TextIssue::Empty);
    }
    let len = trimmed.chars().count();
    if len > max_len {
        return Err(TextIssue::TooLong { len, max: max_len });
    }
    Ok(trimmed)
}

/// Round to cents, half away from zero
#[inline]
pub fn round_price(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(PRICE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Validate that a price is present, strictly positive and not absurdly large.
/// Returns the price rounded to cents; bounds apply to the rounded value.
pub fn check_price(value: Option<Decimal>) -> Result<Decimal, PriceIssue> {
    let price = round_price(value.ok_or(PriceIssue::Missing)?);
    if price <= Decimal::ZERO {
        return Err(PriceIssue::NotPositive);
    }
    if price > MAX_PRICE {
        return Err(PriceIssue::TooLarge);
    }
    Ok(price)
}

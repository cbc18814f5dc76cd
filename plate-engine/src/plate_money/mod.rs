//! Money calculation utilities using rust_decimal for precision
//!
//! Totals are always recomputed from plate data on demand, never cached.

use rust_decimal::prelude::*;
use shared::plate::{LineItem, Plate};

/// Rounding strategy for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

#[inline]
fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// `price × portions` for one line
pub fn line_total(line: &LineItem) -> Decimal {
    round_money(line.menu_item.price * Decimal::from(line.portions))
}

/// Sum of line totals on one plate
pub fn plate_total(plate: &Plate) -> Decimal {
    round_money(plate.items.iter().map(line_total).sum())
}

/// Sum of plate totals across a cart
pub fn cart_total<'a>(plates: impl IntoIterator<Item = &'a Plate>) -> Decimal {
    round_money(plates.into_iter().map(plate_total).sum())
}

/// Convert a validated f64 price into Decimal, rounded to cents
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).map(round_money).unwrap_or_default()
}

/// Convert Decimal to f64 for display-only consumers
///
/// Returns 0.0 for values outside f64 range, which cannot occur for
/// validated menu prices.
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_else(|| {
        tracing::error!(value = %value, "Decimal not representable as f64, defaulting to zero");
        0.0
    })
}

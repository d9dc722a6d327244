//! Valuation engine: inventory and order totals.
//!
//! Totals accumulate in exact decimal arithmetic at full precision. Rounding
//! to cents is a presentation concern and is applied by callers through
//! [`round_currency`] only when a figure leaves the domain layer.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{DomainError, DomainResult};

/// Number of decimal places used when presenting currency.
pub const CURRENCY_SCALE: u32 = 2;

/// Total value of stock on hand: Σ `current_stock × unit_price`.
///
/// Each element is `(current_stock, unit_price)`. An empty input is worth zero.
pub fn inventory_value<I>(items: I) -> DomainResult<Decimal>
where
    I: IntoIterator<Item = (i64, Decimal)>,
{
    items
        .into_iter()
        .try_fold(Decimal::ZERO, |total, (stock, unit_price)| {
            if stock < 0 {
                return Err(DomainError::invalid_argument(format!(
                    "stock quantity cannot be negative (got {stock})"
                )));
            }
            accumulate(total, stock, unit_price)
        })
}

/// Value of one order: Σ `quantity × unit_price_at_order_time`.
///
/// Each element is `(quantity, unit_price)` where the price is the one captured
/// on the order line, never the item's current catalog price.
pub fn order_value<I>(lines: I) -> DomainResult<Decimal>
where
    I: IntoIterator<Item = (i64, Decimal)>,
{
    lines
        .into_iter()
        .try_fold(Decimal::ZERO, |total, (quantity, unit_price)| {
            if quantity <= 0 {
                return Err(DomainError::invalid_argument(format!(
                    "order line quantity must be positive (got {quantity})"
                )));
            }
            accumulate(total, quantity, unit_price)
        })
}

/// Round a currency figure to cents, midpoint away from zero.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

fn accumulate(total: Decimal, quantity: i64, unit_price: Decimal) -> DomainResult<Decimal> {
    if unit_price < Decimal::ZERO {
        return Err(DomainError::invalid_argument(format!(
            "unit price cannot be negative (got {unit_price})"
        )));
    }
    Decimal::from(quantity)
        .checked_mul(unit_price)
        .and_then(|line| total.checked_add(line))
        .ok_or_else(|| DomainError::invalid_argument("valuation overflowed"))
}

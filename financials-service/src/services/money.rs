//! Shared money arithmetic: rounding, percentages, and input guards.

use crate::error::FinancialsError;
use rust_decimal::{Decimal, RoundingStrategy};

pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Round to cents, half away from zero. Applied only at the response boundary.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

fn overflow(field: String) -> FinancialsError {
    FinancialsError::validation(field, "overflows decimal range")
}

/// `a + b`, rejecting results outside the decimal range.
pub fn checked_sum<F>(a: Decimal, b: Decimal, field: F) -> Result<Decimal, FinancialsError>
where
    F: FnOnce() -> String,
{
    a.checked_add(b).ok_or_else(|| overflow(field()))
}

/// `a - b`, rejecting results outside the decimal range.
pub fn checked_difference<F>(a: Decimal, b: Decimal, field: F) -> Result<Decimal, FinancialsError>
where
    F: FnOnce() -> String,
{
    a.checked_sub(b).ok_or_else(|| overflow(field()))
}

/// `amount * pct / 100`, scaling the percentage first.
pub fn percent_of<F>(amount: Decimal, pct: Decimal, field: F) -> Result<Decimal, FinancialsError>
where
    F: FnOnce() -> String,
{
    pct.checked_div(Decimal::ONE_HUNDRED)
        .and_then(|fraction| amount.checked_mul(fraction))
        .ok_or_else(|| overflow(field()))
}

/// `numerator / denominator * 100`, or 0 when the denominator is not positive.
pub fn ratio_pct<F>(
    numerator: Decimal,
    denominator: Decimal,
    field: F,
) -> Result<Decimal, FinancialsError>
where
    F: FnOnce() -> String,
{
    if denominator <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    numerator
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| overflow(field()))
}

pub fn ensure_non_negative<F>(value: Decimal, field: F) -> Result<Decimal, FinancialsError>
where
    F: FnOnce() -> String,
{
    if value < Decimal::ZERO {
        return Err(FinancialsError::validation(
            field(),
            format!("{} must not be negative", value),
        ));
    }
    Ok(value)
}

pub fn ensure_percentage<F>(value: Decimal, field: F) -> Result<Decimal, FinancialsError>
where
    F: FnOnce() -> String,
{
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(FinancialsError::validation(
            field(),
            format!("{} is outside [0, 100]", value),
        ));
    }
    Ok(value)
}

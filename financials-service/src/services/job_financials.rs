//! Job and estimate pricing: the single authority for derived job figures.

use crate::error::FinancialsError;
use crate::models::{CostConfig, JobFinancials, LineItem, ProfitFlag};
use crate::services::money::{
    checked_difference, checked_sum, ensure_non_negative, percent_of, ratio_pct,
};
use rust_decimal::Decimal;

/// Sum of line totals, rejecting negative quantities, prices, or totals and
/// totals beyond the decimal range.
pub fn compute_subtotal(line_items: &[LineItem]) -> Result<Decimal, FinancialsError> {
    let mut subtotal = Decimal::ZERO;
    for (index, item) in line_items.iter().enumerate() {
        ensure_non_negative(item.quantity, || format!("line_items[{}].quantity", index))?;
        ensure_non_negative(item.unit_price, || {
            format!("line_items[{}].unit_price", index)
        })?;
        if let Some(line_total) = item.line_total {
            ensure_non_negative(line_total, || format!("line_items[{}].line_total", index))?;
        }
        let line_total = item.effective_total().ok_or_else(|| {
            FinancialsError::validation(
                format!("line_items[{}]", index),
                "overflows decimal range",
            )
        })?;
        subtotal = checked_sum(subtotal, line_total, || "subtotal".to_string())?;
    }
    Ok(subtotal)
}

/// Derive every financial field of an estimate or job.
///
/// `total_price` may go negative when the discount exceeds the subtotal; it is
/// not clamped and the margin falls back to 0. A job with zero or negative
/// gross profit is flagged `RaisePrice` whatever the configured thresholds.
/// Results are full precision; round with [`JobFinancials::rounded`] before
/// persisting.
pub fn compute_job_financials(
    line_items: &[LineItem],
    discount_amount: Decimal,
    config: &CostConfig,
) -> Result<JobFinancials, FinancialsError> {
    config.validate()?;
    ensure_non_negative(discount_amount, || "discount_amount".to_string())?;

    let subtotal = compute_subtotal(line_items)?;
    let total_price = checked_difference(subtotal, discount_amount, || "total_price".to_string())?;

    let sub_materials_cost = percent_of(total_price, config.sub_materials_pct, || {
        "sub_materials_cost".to_string()
    })?;
    let sub_labor_cost =
        percent_of(total_price, config.sub_labor_pct, || "sub_labor_cost".to_string())?;
    let sub_total_cost =
        percent_of(total_price, config.sub_total_pct(), || "sub_total_cost".to_string())?;
    let gross_profit =
        checked_difference(total_price, sub_total_cost, || "gross_profit".to_string())?;
    let gross_margin_pct =
        ratio_pct(gross_profit, total_price, || "gross_margin_pct".to_string())?;

    let deposit_amount = if total_price > Decimal::ZERO {
        percent_of(total_price, config.default_deposit_pct, || {
            "deposit_amount".to_string()
        })?
    } else {
        Decimal::ZERO
    };

    let meets_min_gp = gross_profit >= config.min_gross_profit_per_job;
    let meets_target_gm = gross_margin_pct >= config.target_gross_margin_pct;
    let profit_flag = if gross_profit <= Decimal::ZERO {
        ProfitFlag::RaisePrice
    } else {
        ProfitFlag::classify(meets_min_gp, meets_target_gm)
    };

    Ok(JobFinancials {
        subtotal,
        discount_amount,
        total_price,
        sub_materials_cost,
        sub_labor_cost,
        sub_total_cost,
        gross_profit,
        gross_margin_pct,
        deposit_amount,
        meets_min_gp,
        meets_target_gm,
        profit_flag,
    })
}

//! Per-job subcontractor financial projection.

use crate::error::FinancialsError;
use crate::models::{
    JobMaterialCost, SubJobFinancial, SubcontractorPayment, SubcontractorPayout,
    TimeEntryWithEmployee,
};
use crate::services::money::{checked_difference, checked_sum, ensure_non_negative, ratio_pct};
use crate::services::payment_status::{classify_paid_amount, last_paid_date, paid_amount};
use rust_decimal::Decimal;

fn check_join(index: usize, joined: &TimeEntryWithEmployee) -> Result<(), FinancialsError> {
    if joined.entry.employee_id != joined.employee.employee_id {
        return Err(FinancialsError::validation(
            format!("time_entries[{}].employee", index),
            format!(
                "joined employee {} does not match entry employee {}",
                joined.employee.employee_id, joined.entry.employee_id
            ),
        ));
    }
    Ok(())
}

fn belongs_to_payout(payout: &SubcontractorPayout, joined: &TimeEntryWithEmployee) -> bool {
    joined.entry.job_id == payout.job_id
        && joined.employee.subcontractor_id == payout.subcontractor_id
}

/// Time entries that belong to the payout: logged on the payout's job by an
/// employee of the payout's subcontractor.
///
/// Entries whose joined employee record does not match the entry's
/// `employee_id` are a broken join and are rejected rather than skipped.
pub fn labor_entries_for_payout<'a>(
    payout: &SubcontractorPayout,
    time_entries: &'a [TimeEntryWithEmployee],
) -> Result<Vec<&'a TimeEntryWithEmployee>, FinancialsError> {
    let mut matching = Vec::new();
    for (index, joined) in time_entries.iter().enumerate() {
        check_join(index, joined)?;
        if belongs_to_payout(payout, joined) {
            matching.push(joined);
        }
    }
    Ok(matching)
}

/// Σ hours × hourly rate over the payout's own entries.
pub fn compute_labor_cost(
    payout: &SubcontractorPayout,
    time_entries: &[TimeEntryWithEmployee],
) -> Result<Decimal, FinancialsError> {
    let mut total = Decimal::ZERO;
    for (index, joined) in time_entries.iter().enumerate() {
        ensure_non_negative(joined.entry.hours_worked, || {
            format!("time_entries[{}].hours_worked", index)
        })?;
        ensure_non_negative(joined.employee.hourly_rate, || {
            format!("time_entries[{}].hourly_rate", index)
        })?;
        check_join(index, joined)?;
        if !belongs_to_payout(payout, joined) {
            continue;
        }
        let cost = joined.cost().ok_or_else(|| {
            FinancialsError::validation(
                format!("time_entries[{}]", index),
                "overflows decimal range",
            )
        })?;
        total = checked_sum(total, cost, || "labor_cost".to_string())?;
    }
    Ok(total)
}

/// The payout's material cost, or zero when no row was recorded.
pub fn compute_material_cost(
    payout: &SubcontractorPayout,
    material_cost: Option<&JobMaterialCost>,
) -> Result<Decimal, FinancialsError> {
    let Some(row) = material_cost else {
        return Ok(Decimal::ZERO);
    };
    if row.job_id != payout.job_id || row.subcontractor_id != payout.subcontractor_id {
        return Err(FinancialsError::validation(
            "material_cost",
            format!(
                "row for job {} / subcontractor {} does not belong to payout {}",
                row.job_id, row.subcontractor_id, payout.payout_id
            ),
        ));
    }
    ensure_non_negative(row.total_cost, || "material_cost.total_cost".to_string())
}

/// Project one payout into its per-job financial view.
///
/// Payments for other payouts are ignored. Profit may be negative and is
/// never clamped. Results are full precision; round with
/// [`SubJobFinancial::rounded`] before responding.
pub fn compute_sub_job_financial(
    payout: &SubcontractorPayout,
    payments: &[SubcontractorPayment],
    time_entries: &[TimeEntryWithEmployee],
    material_cost: Option<&JobMaterialCost>,
) -> Result<SubJobFinancial, FinancialsError> {
    let final_payout = ensure_non_negative(payout.final_payout, || "final_payout".to_string())?;

    let own_payments: Vec<SubcontractorPayment> = payments
        .iter()
        .filter(|p| p.payout_id == payout.payout_id)
        .cloned()
        .collect();

    let labor_cost = compute_labor_cost(payout, time_entries)?;
    let material_cost = compute_material_cost(payout, material_cost)?;
    let paid = paid_amount(&own_payments)?;

    let profit = checked_difference(final_payout, labor_cost, || "profit".to_string())
        .and_then(|p| checked_difference(p, material_cost, || "profit".to_string()))?;
    let profit_margin = ratio_pct(profit, final_payout, || "profit_margin".to_string())?;

    Ok(SubJobFinancial {
        payout_id: payout.payout_id,
        job_id: payout.job_id,
        subcontractor_id: payout.subcontractor_id,
        earnings: final_payout,
        paid_amount: paid,
        outstanding_amount: (final_payout - paid).max(Decimal::ZERO),
        labor_cost,
        material_cost,
        profit,
        profit_margin,
        payment_status: classify_paid_amount(paid, final_payout),
        last_paid_date: last_paid_date(&own_payments),
    })
}

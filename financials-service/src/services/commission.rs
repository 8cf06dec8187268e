//! Commission calculation for sales reps and project managers.

use crate::error::FinancialsError;
use crate::models::{
    CommissionAssignment, CommissionLine, CommissionRateSource, ResolvedCommissionRate,
};
use crate::services::money::{ensure_percentage, percent_of};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Applied when neither an override nor a member default is set.
pub const FALLBACK_COMMISSION_PCT: Decimal = dec!(5);

/// Resolve the commission percentage: explicit override, then the team
/// member's default, then `fallback_pct`. The chosen value is validated.
pub fn resolve_commission_rate(
    override_pct: Option<Decimal>,
    default_pct: Option<Decimal>,
    fallback_pct: Decimal,
) -> Result<ResolvedCommissionRate, FinancialsError> {
    let (pct, source, field) = match (override_pct, default_pct) {
        (Some(pct), _) => (pct, CommissionRateSource::Override, "override_pct"),
        (None, Some(pct)) => (pct, CommissionRateSource::MemberDefault, "default_pct"),
        (None, None) => (fallback_pct, CommissionRateSource::Fallback, "fallback_pct"),
    };
    ensure_percentage(pct, || field.to_string())?;
    Ok(ResolvedCommissionRate { pct, source })
}

/// Commission base for a job. A job priced below zero (discount beyond the
/// subtotal) earns no commission.
pub fn commission_base(job_value: Decimal) -> Decimal {
    job_value.max(Decimal::ZERO)
}

/// `job_value * pct / 100` using the standard resolution order with the 5%
/// constant as the last resort.
pub fn compute_commission(
    job_value: Decimal,
    override_pct: Option<Decimal>,
    default_pct: Option<Decimal>,
) -> Result<Decimal, FinancialsError> {
    let rate = resolve_commission_rate(override_pct, default_pct, FALLBACK_COMMISSION_PCT)?;
    percent_of(commission_base(job_value), rate.pct, || "job_value".to_string())
}

/// One commission line per assignment, in assignment order.
pub fn compute_team_commissions(
    job_value: Decimal,
    assignments: &[CommissionAssignment],
    fallback_pct: Decimal,
) -> Result<Vec<CommissionLine>, FinancialsError> {
    let base = commission_base(job_value);

    assignments
        .iter()
        .enumerate()
        .map(|(index, assignment)| -> Result<CommissionLine, FinancialsError> {
            let rate = resolve_commission_rate(
                assignment.override_pct,
                assignment.member.default_commission_pct,
                fallback_pct,
            )
            .map_err(|e| match e {
                FinancialsError::Validation { field, reason } => FinancialsError::Validation {
                    field: format!("assignments[{}].{}", index, field),
                    reason,
                },
                other => other,
            })?;

            let amount = percent_of(base, rate.pct, || "job_value".to_string())?;

            Ok(CommissionLine {
                member_id: assignment.member.member_id,
                role: assignment.role,
                pct: rate.pct,
                source: rate.source,
                amount,
            })
        })
        .collect()
}

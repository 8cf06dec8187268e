//! Subcontractor earnings summary.

use crate::error::FinancialsError;
use crate::models::{PaymentStatus, SubEarningsSummary, SubJobFinancial};
use crate::services::money::checked_sum;
use rust_decimal::Decimal;

/// Fold per-job views into subcontractor totals.
///
/// `total_earnings` counts a payout's full value only once it is fully paid;
/// `total_paid` counts every paid disbursement, partial ones included.
pub fn compute_earnings_summary(
    jobs: &[SubJobFinancial],
) -> Result<SubEarningsSummary, FinancialsError> {
    let mut total_earnings = Decimal::ZERO;
    let mut total_pending = Decimal::ZERO;
    let mut total_paid = Decimal::ZERO;
    let mut total_profit = Decimal::ZERO;

    for job in jobs {
        match job.payment_status {
            PaymentStatus::Paid => {
                total_earnings =
                    checked_sum(total_earnings, job.earnings, || "total_earnings".to_string())?
            }
            PaymentStatus::Partial | PaymentStatus::Pending => {
                total_pending =
                    checked_sum(total_pending, job.earnings, || "total_pending".to_string())?
            }
        }
        total_paid = checked_sum(total_paid, job.paid_amount, || "total_paid".to_string())?;
        total_profit = checked_sum(total_profit, job.profit, || "total_profit".to_string())?;
    }

    let avg_profit_per_job = if jobs.is_empty() {
        Decimal::ZERO
    } else {
        total_profit / Decimal::from(jobs.len())
    };

    Ok(SubEarningsSummary {
        total_earnings,
        total_pending,
        total_paid,
        job_count: jobs.len(),
        avg_profit_per_job,
    })
}

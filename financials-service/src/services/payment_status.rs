//! Payout payment status classification.

use crate::error::FinancialsError;
use crate::models::{PaymentStatus, SubcontractorPayment};
use crate::services::money::{checked_sum, ensure_non_negative};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Sum of payments with status `paid`. Pending, failed, and void payments
/// do not count.
pub fn paid_amount(payments: &[SubcontractorPayment]) -> Result<Decimal, FinancialsError> {
    let mut total = Decimal::ZERO;
    for (index, payment) in payments.iter().enumerate() {
        ensure_non_negative(payment.amount, || format!("payments[{}].amount", index))?;
        if payment.is_paid() {
            total = checked_sum(total, payment.amount, || "paid_amount".to_string())?;
        }
    }
    Ok(total)
}

/// Most recent `paid_date` among paid payments.
pub fn last_paid_date(payments: &[SubcontractorPayment]) -> Option<NaiveDate> {
    payments
        .iter()
        .filter(|p| p.is_paid())
        .filter_map(|p| p.paid_date)
        .max()
}

/// Classify a payout from what has actually been paid against it.
///
/// A zero payout is `Paid`: nothing is owed, so nothing is outstanding.
pub fn classify_paid_amount(paid: Decimal, final_payout: Decimal) -> PaymentStatus {
    if final_payout.is_zero() {
        return PaymentStatus::Paid;
    }
    if paid >= final_payout {
        PaymentStatus::Paid
    } else if paid > Decimal::ZERO {
        PaymentStatus::Partial
    } else {
        PaymentStatus::Pending
    }
}

pub fn classify_payment_status(
    payments: &[SubcontractorPayment],
    final_payout: Decimal,
) -> Result<PaymentStatus, FinancialsError> {
    ensure_non_negative(final_payout, || "final_payout".to_string())?;
    let paid = paid_amount(payments)?;
    Ok(classify_paid_amount(paid, final_payout))
}

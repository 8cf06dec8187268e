//! Derived subcontractor views. Recomputed on every read, never persisted.

use crate::models::PaymentStatus;
use crate::services::money::round_money;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-job financial view for one subcontractor payout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubJobFinancial {
    pub payout_id: Uuid,
    pub job_id: Uuid,
    pub subcontractor_id: Uuid,
    /// The payout's final amount.
    pub earnings: Decimal,
    pub paid_amount: Decimal,
    pub outstanding_amount: Decimal,
    pub labor_cost: Decimal,
    pub material_cost: Decimal,
    pub profit: Decimal,
    pub profit_margin: Decimal,
    pub payment_status: PaymentStatus,
    pub last_paid_date: Option<NaiveDate>,
}

impl SubJobFinancial {
    pub fn rounded(&self) -> Self {
        Self {
            earnings: round_money(self.earnings),
            paid_amount: round_money(self.paid_amount),
            outstanding_amount: round_money(self.outstanding_amount),
            labor_cost: round_money(self.labor_cost),
            material_cost: round_money(self.material_cost),
            profit: round_money(self.profit),
            profit_margin: round_money(self.profit_margin),
            ..self.clone()
        }
    }
}

/// Subcontractor-level totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubEarningsSummary {
    /// Full payout value of fully paid jobs.
    pub total_earnings: Decimal,
    /// Full payout value of jobs not yet fully paid.
    pub total_pending: Decimal,
    /// Money actually disbursed, partial payments included.
    pub total_paid: Decimal,
    pub job_count: usize,
    pub avg_profit_per_job: Decimal,
}

impl SubEarningsSummary {
    pub fn rounded(&self) -> Self {
        Self {
            total_earnings: round_money(self.total_earnings),
            total_pending: round_money(self.total_pending),
            total_paid: round_money(self.total_paid),
            job_count: self.job_count,
            avg_profit_per_job: round_money(self.avg_profit_per_job),
        }
    }
}

/// Per-job views and totals for one subcontractor, as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcontractorReport {
    pub subcontractor_id: Uuid,
    pub jobs: Vec<SubJobFinancial>,
    pub summary: SubEarningsSummary,
}

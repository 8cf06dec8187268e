//! Subcontractor payout and payment models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Amount owed to a subcontractor for one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcontractorPayout {
    pub payout_id: Uuid,
    pub job_id: Uuid,
    pub subcontractor_id: Uuid,
    pub final_payout: Decimal,
}

/// Status stored on an individual payment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentRecordStatus {
    Paid,
    Pending,
    Failed,
    Void,
}

impl PaymentRecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentRecordStatus::Paid => "paid",
            PaymentRecordStatus::Pending => "pending",
            PaymentRecordStatus::Failed => "failed",
            PaymentRecordStatus::Void => "void",
        }
    }

    /// Unrecognized statuses are treated as pending, never as paid.
    pub fn from_string(s: &str) -> Self {
        match s {
            "paid" => PaymentRecordStatus::Paid,
            "failed" => PaymentRecordStatus::Failed,
            "void" => PaymentRecordStatus::Void,
            _ => PaymentRecordStatus::Pending,
        }
    }
}

/// Disbursement against a payout. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcontractorPayment {
    pub payment_id: Uuid,
    pub payout_id: Uuid,
    pub status: String,
    pub amount: Decimal,
    #[serde(default)]
    pub paid_date: Option<NaiveDate>,
}

impl SubcontractorPayment {
    pub fn record_status(&self) -> PaymentRecordStatus {
        PaymentRecordStatus::from_string(&self.status)
    }

    pub fn is_paid(&self) -> bool {
        self.record_status() == PaymentRecordStatus::Paid
    }
}

/// Payment status of a payout as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Partial,
    Pending,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Partial => "partial",
            PaymentStatus::Pending => "pending",
        }
    }
}

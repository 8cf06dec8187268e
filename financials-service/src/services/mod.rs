//! Services module for financials-service.

pub mod commission;
pub mod earnings;
pub mod job_financials;
pub mod metrics;
pub mod money;
pub mod payment_status;
pub mod payout;
pub mod reconciler;
pub mod records;

pub use commission::{compute_commission, compute_team_commissions, resolve_commission_rate};
pub use earnings::compute_earnings_summary;
pub use job_financials::{compute_job_financials, compute_subtotal};
pub use metrics::{get_metrics, init_metrics};
pub use payment_status::classify_payment_status;
pub use payout::{compute_labor_cost, compute_sub_job_financial, labor_entries_for_payout};
pub use reconciler::Reconciler;
pub use records::{InMemoryRecords, PayoutRecords, RecordSnapshot, RecordSource};

//! Financials Service - Job costing, commissions, and subcontractor payout reconciliation.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::FinancialsError;
pub use services::{
    classify_payment_status, compute_commission, compute_earnings_summary,
    compute_job_financials, compute_sub_job_financial, Reconciler,
};

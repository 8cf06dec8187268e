//! Domain models for financials-service.

mod commission;
mod cost_config;
mod job;
mod labor;
mod line_item;
mod payout;
mod summary;

pub use commission::{
    CommissionAssignment, CommissionLine, CommissionRateSource, CommissionRole,
    ResolvedCommissionRate, TeamMember,
};
pub use cost_config::{
    CostConfig, OrgCostSettings, DEFAULT_COMMISSION_PCT, DEFAULT_DEPOSIT_PCT,
    DEFAULT_MIN_GROSS_PROFIT_PER_JOB, DEFAULT_SUB_LABOR_PCT, DEFAULT_SUB_MATERIALS_PCT,
    DEFAULT_TARGET_GROSS_MARGIN_PCT,
};
pub use job::{JobFinancials, JobOrEstimate, ProfitFlag, RecordKind};
pub use labor::{JobMaterialCost, SubcontractorEmployee, TimeEntry, TimeEntryWithEmployee};
pub use line_item::LineItem;
pub use payout::{PaymentRecordStatus, PaymentStatus, SubcontractorPayment, SubcontractorPayout};
pub use summary::{SubEarningsSummary, SubJobFinancial, SubcontractorReport};

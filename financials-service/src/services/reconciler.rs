//! Orchestration of the calculators over a record source.
//!
//! Every estimate/job write path and every subcontractor read path goes
//! through [`Reconciler`], so figures never depend on which path produced
//! them. Derived values are recomputed from freshly fetched records on every
//! call and returned rounded to cents.

use crate::error::FinancialsError;
use crate::models::{
    CommissionAssignment, CommissionLine, CostConfig, JobFinancials, JobOrEstimate, LineItem,
    SubJobFinancial, SubcontractorReport,
};
use crate::services::commission::compute_team_commissions;
use crate::services::earnings::compute_earnings_summary;
use crate::services::job_financials::compute_job_financials;
use crate::services::metrics::{
    record_calculation, record_error, record_payment_status, record_profit_flag,
    CALCULATION_DURATION,
};
use crate::services::money::round_money;
use crate::services::payout::compute_sub_job_financial;
use crate::services::records::{PayoutRecords, RecordSource};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

pub struct Reconciler<S> {
    source: S,
    defaults: CostConfig,
}

impl<S: RecordSource> Reconciler<S> {
    pub fn new(source: S, defaults: CostConfig) -> Self {
        Self { source, defaults }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn defaults(&self) -> &CostConfig {
        &self.defaults
    }

    /// The organization's cost configuration, falling back to the service
    /// defaults field by field.
    #[instrument(skip(self))]
    pub async fn cost_config(&self, organization_id: Uuid) -> Result<CostConfig, FinancialsError> {
        let settings = self.source.org_cost_settings(organization_id).await?;
        if settings.is_none() {
            debug!("No cost settings for organization, using defaults");
        }
        CostConfig::resolve(settings.as_ref(), &self.defaults)
    }

    /// Price an estimate or job from its line items and discount.
    #[instrument(skip(self, line_items), fields(line_items = line_items.len()))]
    pub async fn price_job(
        &self,
        organization_id: Uuid,
        line_items: &[LineItem],
        discount_amount: Decimal,
    ) -> Result<JobFinancials, FinancialsError> {
        let timer = CALCULATION_DURATION
            .with_label_values(&["job_financials"])
            .start_timer();

        let result = async {
            let config = self.cost_config(organization_id).await?;
            compute_job_financials(line_items, discount_amount, &config)
        }
        .await;

        timer.observe_duration();

        match result {
            Ok(financials) => {
                record_calculation("job_financials", "ok");
                record_profit_flag(financials.profit_flag.as_str());
                info!(
                    total_price = %round_money(financials.total_price),
                    gross_margin_pct = %round_money(financials.gross_margin_pct),
                    profit_flag = financials.profit_flag.as_str(),
                    "Job priced"
                );
                Ok(financials.rounded())
            }
            Err(e) => Err(self.fail("job_financials", e)),
        }
    }

    /// Recompute and overwrite the derived fields of an estimate or job,
    /// priced with the configuration of the record's own organization.
    #[instrument(skip(self, record, line_items), fields(record_id = %record.record_id, kind = record.kind.as_str()))]
    pub async fn reprice_record(
        &self,
        record: &mut JobOrEstimate,
        line_items: &[LineItem],
        discount_amount: Decimal,
    ) -> Result<JobFinancials, FinancialsError> {
        let financials = self
            .price_job(record.organization_id, line_items, discount_amount)
            .await?;
        record.apply_financials(&financials);
        Ok(financials)
    }

    /// Commissions for the team assigned to a job. The organization's
    /// default commission percentage is the last-resort rate; a job valued
    /// below zero earns no commission.
    #[instrument(skip(self, assignments), fields(assignments = assignments.len()))]
    pub async fn assign_commissions(
        &self,
        organization_id: Uuid,
        job_value: Decimal,
        assignments: &[CommissionAssignment],
    ) -> Result<Vec<CommissionLine>, FinancialsError> {
        let result = async {
            let config = self.cost_config(organization_id).await?;
            compute_team_commissions(job_value, assignments, config.default_commission_pct)
        }
        .await;

        match result {
            Ok(lines) => {
                record_calculation("commission", "ok");
                Ok(lines
                    .into_iter()
                    .map(|line| CommissionLine {
                        amount: round_money(line.amount),
                        ..line
                    })
                    .collect())
            }
            Err(e) => Err(self.fail("commission", e)),
        }
    }

    /// Per-job financial view of one payout.
    #[instrument(skip(self))]
    pub async fn sub_job_financial(
        &self,
        payout_id: Uuid,
    ) -> Result<SubJobFinancial, FinancialsError> {
        let timer = CALCULATION_DURATION
            .with_label_values(&["sub_job_financial"])
            .start_timer();

        let result = async {
            let payout = self
                .source
                .payout(payout_id)
                .await?
                .ok_or_else(|| FinancialsError::NotFound {
                    entity: "Payout",
                    id: payout_id,
                })?;
            let records = self.source.payout_records(payout).await?;
            project(&records)
        }
        .await;

        timer.observe_duration();

        match result {
            Ok(view) => {
                record_calculation("sub_job_financial", "ok");
                Ok(view.rounded())
            }
            Err(e) => Err(self.fail("sub_job_financial", e)),
        }
    }

    /// Per-job views and earnings totals for one subcontractor.
    #[instrument(skip(self))]
    pub async fn subcontractor_report(
        &self,
        subcontractor_id: Uuid,
    ) -> Result<SubcontractorReport, FinancialsError> {
        let timer = CALCULATION_DURATION
            .with_label_values(&["earnings_summary"])
            .start_timer();

        let result = async {
            let payouts = self
                .source
                .payouts_for_subcontractor(subcontractor_id)
                .await?;
            let mut jobs = Vec::with_capacity(payouts.len());
            for payout in payouts {
                let records = self.source.payout_records(payout).await?;
                jobs.push(project(&records)?);
            }
            let summary = compute_earnings_summary(&jobs)?;
            Ok::<_, FinancialsError>((jobs, summary))
        }
        .await;

        timer.observe_duration();

        match result {
            Ok((jobs, summary)) => {
                record_calculation("earnings_summary", "ok");
                info!(
                    job_count = summary.job_count,
                    total_earnings = %round_money(summary.total_earnings),
                    total_pending = %round_money(summary.total_pending),
                    "Subcontractor earnings summarized"
                );
                Ok(SubcontractorReport {
                    subcontractor_id,
                    jobs: jobs.iter().map(SubJobFinancial::rounded).collect(),
                    summary: summary.rounded(),
                })
            }
            Err(e) => Err(self.fail("earnings_summary", e)),
        }
    }

    fn fail(&self, calculation: &str, err: FinancialsError) -> FinancialsError {
        record_calculation(calculation, "error");
        record_error(err.error_type());
        match &err {
            FinancialsError::Validation { field, reason } => {
                warn!(calculation, field = %field, reason = %reason, "Calculation input rejected");
            }
            other => {
                warn!(calculation, error = %other, "Calculation failed");
            }
        }
        err
    }
}

fn project(records: &PayoutRecords) -> Result<SubJobFinancial, FinancialsError> {
    let view = compute_sub_job_financial(
        &records.payout,
        &records.payments,
        &records.time_entries,
        records.material_cost.as_ref(),
    )?;
    record_payment_status(view.payment_status.as_str());
    debug!(
        payout_id = %view.payout_id,
        job_id = %view.job_id,
        payment_status = view.payment_status.as_str(),
        "Payout projected"
    );
    Ok(view)
}

//! Record fetching seam between the calculation core and persistence.

use crate::models::{
    JobMaterialCost, OrgCostSettings, SubcontractorEmployee, SubcontractorPayment,
    SubcontractorPayout, TimeEntry, TimeEntryWithEmployee,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

/// Source of the records the calculators consume.
///
/// Implementations fetch; they never compute derived figures. Each call
/// should read from one consistent snapshot of the underlying store.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Organization cost settings, `None` when the organization has none.
    async fn org_cost_settings(
        &self,
        organization_id: Uuid,
    ) -> anyhow::Result<Option<OrgCostSettings>>;

    async fn payout(&self, payout_id: Uuid) -> anyhow::Result<Option<SubcontractorPayout>>;

    async fn payouts_for_subcontractor(
        &self,
        subcontractor_id: Uuid,
    ) -> anyhow::Result<Vec<SubcontractorPayout>>;

    async fn payments_for_payout(
        &self,
        payout_id: Uuid,
    ) -> anyhow::Result<Vec<SubcontractorPayment>>;

    /// Every time entry on the job, for all subcontractors, joined to its
    /// employee. Filtering to one subcontractor is the calculator's job.
    async fn time_entries_for_job(&self, job_id: Uuid)
        -> anyhow::Result<Vec<TimeEntryWithEmployee>>;

    async fn material_cost(
        &self,
        job_id: Uuid,
        subcontractor_id: Uuid,
    ) -> anyhow::Result<Option<JobMaterialCost>>;

    /// Everything needed to project one payout. Stores that can read in a
    /// single transaction should override this.
    async fn payout_records(&self, payout: SubcontractorPayout) -> anyhow::Result<PayoutRecords> {
        let payments = self.payments_for_payout(payout.payout_id).await?;
        let time_entries = self.time_entries_for_job(payout.job_id).await?;
        let material_cost = self
            .material_cost(payout.job_id, payout.subcontractor_id)
            .await?;
        Ok(PayoutRecords {
            payout,
            payments,
            time_entries,
            material_cost,
        })
    }
}

/// Records behind one payout, fetched together.
#[derive(Debug, Clone)]
pub struct PayoutRecords {
    pub payout: SubcontractorPayout,
    pub payments: Vec<SubcontractorPayment>,
    pub time_entries: Vec<TimeEntryWithEmployee>,
    pub material_cost: Option<JobMaterialCost>,
}

/// Serialized set of records, as exported from the persistence layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordSnapshot {
    pub cost_settings: HashMap<Uuid, OrgCostSettings>,
    pub payouts: Vec<SubcontractorPayout>,
    pub payments: Vec<SubcontractorPayment>,
    pub employees: Vec<SubcontractorEmployee>,
    pub time_entries: Vec<TimeEntry>,
    pub material_costs: Vec<JobMaterialCost>,
}

impl RecordSnapshot {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::BadRequest(anyhow::anyhow!(
                "Failed to read snapshot {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&json)
    }

    /// Distinct subcontractors with at least one payout, in first-seen order.
    pub fn subcontractor_ids(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = Vec::new();
        for payout in &self.payouts {
            if !ids.contains(&payout.subcontractor_id) {
                ids.push(payout.subcontractor_id);
            }
        }
        ids
    }
}

#[derive(Debug, Default)]
struct Tables {
    cost_settings: HashMap<Uuid, OrgCostSettings>,
    payouts: Vec<SubcontractorPayout>,
    payments: Vec<SubcontractorPayment>,
    employees: HashMap<Uuid, SubcontractorEmployee>,
    time_entries: Vec<TimeEntry>,
    material_costs: HashMap<(Uuid, Uuid), JobMaterialCost>,
}

impl Tables {
    fn payments_for_payout(&self, payout_id: Uuid) -> Vec<SubcontractorPayment> {
        self.payments
            .iter()
            .filter(|p| p.payout_id == payout_id)
            .cloned()
            .collect()
    }

    fn time_entries_for_job(&self, job_id: Uuid) -> Vec<TimeEntryWithEmployee> {
        let mut joined = Vec::new();
        for entry in self.time_entries.iter().filter(|e| e.job_id == job_id) {
            match self.employees.get(&entry.employee_id) {
                Some(employee) => {
                    joined.push(TimeEntryWithEmployee::new(entry.clone(), employee.clone()))
                }
                None => {
                    warn!(
                        entry_id = %entry.entry_id,
                        employee_id = %entry.employee_id,
                        "Time entry references unknown employee, skipping"
                    );
                }
            }
        }
        joined
    }
}

/// In-memory [`RecordSource`] over a snapshot.
///
/// Writes and reads share one lock, so every read sees a consistent state.
#[derive(Debug, Default)]
pub struct InMemoryRecords {
    tables: RwLock<Tables>,
}

impl InMemoryRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Material cost rows are keyed on (job, subcontractor); a later row for
    /// the same pair replaces an earlier one.
    pub fn from_snapshot(snapshot: RecordSnapshot) -> Self {
        let employees = snapshot
            .employees
            .into_iter()
            .map(|e| (e.employee_id, e))
            .collect();
        let material_costs = snapshot
            .material_costs
            .into_iter()
            .map(|m| ((m.job_id, m.subcontractor_id), m))
            .collect::<HashMap<_, _>>();

        let tables = Tables {
            cost_settings: snapshot.cost_settings,
            payouts: snapshot.payouts,
            payments: snapshot.payments,
            employees,
            time_entries: snapshot.time_entries,
            material_costs,
        };

        info!(
            payouts = tables.payouts.len(),
            payments = tables.payments.len(),
            time_entries = tables.time_entries.len(),
            material_costs = tables.material_costs.len(),
            "Record snapshot loaded"
        );

        Self {
            tables: RwLock::new(tables),
        }
    }

    pub async fn set_cost_settings(&self, organization_id: Uuid, settings: OrgCostSettings) {
        self.tables
            .write()
            .await
            .cost_settings
            .insert(organization_id, settings);
    }

    /// A second payout for the same (job, subcontractor) is rejected.
    pub async fn add_payout(&self, payout: SubcontractorPayout) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        if tables.payouts.iter().any(|p| {
            p.payout_id == payout.payout_id
                || (p.job_id == payout.job_id && p.subcontractor_id == payout.subcontractor_id)
        }) {
            return Err(AppError::Conflict(anyhow::anyhow!(
                "Payout already exists for job {} and subcontractor {}",
                payout.job_id,
                payout.subcontractor_id
            )));
        }
        tables.payouts.push(payout);
        Ok(())
    }

    pub async fn record_payment(&self, payment: SubcontractorPayment) {
        self.tables.write().await.payments.push(payment);
    }

    pub async fn add_employee(&self, employee: SubcontractorEmployee) {
        self.tables
            .write()
            .await
            .employees
            .insert(employee.employee_id, employee);
    }

    pub async fn log_time(&self, entry: TimeEntry) {
        self.tables.write().await.time_entries.push(entry);
    }

    pub async fn upsert_material_cost(&self, row: JobMaterialCost) {
        self.tables
            .write()
            .await
            .material_costs
            .insert((row.job_id, row.subcontractor_id), row);
    }
}

#[async_trait]
impl RecordSource for InMemoryRecords {
    async fn org_cost_settings(
        &self,
        organization_id: Uuid,
    ) -> anyhow::Result<Option<OrgCostSettings>> {
        Ok(self
            .tables
            .read()
            .await
            .cost_settings
            .get(&organization_id)
            .cloned())
    }

    async fn payout(&self, payout_id: Uuid) -> anyhow::Result<Option<SubcontractorPayout>> {
        Ok(self
            .tables
            .read()
            .await
            .payouts
            .iter()
            .find(|p| p.payout_id == payout_id)
            .cloned())
    }

    async fn payouts_for_subcontractor(
        &self,
        subcontractor_id: Uuid,
    ) -> anyhow::Result<Vec<SubcontractorPayout>> {
        Ok(self
            .tables
            .read()
            .await
            .payouts
            .iter()
            .filter(|p| p.subcontractor_id == subcontractor_id)
            .cloned()
            .collect())
    }

    async fn payments_for_payout(
        &self,
        payout_id: Uuid,
    ) -> anyhow::Result<Vec<SubcontractorPayment>> {
        Ok(self.tables.read().await.payments_for_payout(payout_id))
    }

    async fn time_entries_for_job(
        &self,
        job_id: Uuid,
    ) -> anyhow::Result<Vec<TimeEntryWithEmployee>> {
        Ok(self.tables.read().await.time_entries_for_job(job_id))
    }

    async fn material_cost(
        &self,
        job_id: Uuid,
        subcontractor_id: Uuid,
    ) -> anyhow::Result<Option<JobMaterialCost>> {
        Ok(self
            .tables
            .read()
            .await
            .material_costs
            .get(&(job_id, subcontractor_id))
            .cloned())
    }

    async fn payout_records(&self, payout: SubcontractorPayout) -> anyhow::Result<PayoutRecords> {
        let tables = self.tables.read().await;
        Ok(PayoutRecords {
            payments: tables.payments_for_payout(payout.payout_id),
            time_entries: tables.time_entries_for_job(payout.job_id),
            material_cost: tables
                .material_costs
                .get(&(payout.job_id, payout.subcontractor_id))
                .cloned(),
            payout,
        })
    }
}

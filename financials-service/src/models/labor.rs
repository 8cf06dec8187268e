//! Subcontractor labor and material cost records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcontractorEmployee {
    pub employee_id: Uuid,
    pub subcontractor_id: Uuid,
    #[serde(default)]
    pub name: String,
    pub hourly_rate: Decimal,
}

/// Hours logged by an employee against a job. Cost is never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub entry_id: Uuid,
    pub employee_id: Uuid,
    pub job_id: Uuid,
    pub hours_worked: Decimal,
    #[serde(default)]
    pub work_date: Option<NaiveDate>,
}

/// A time entry joined to the employee who logged it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntryWithEmployee {
    pub entry: TimeEntry,
    pub employee: SubcontractorEmployee,
}

impl TimeEntryWithEmployee {
    pub fn new(entry: TimeEntry, employee: SubcontractorEmployee) -> Self {
        Self { entry, employee }
    }

    /// `None` when `hours_worked * hourly_rate` overflows.
    pub fn cost(&self) -> Option<Decimal> {
        self.entry.hours_worked.checked_mul(self.employee.hourly_rate)
    }
}

/// Subcontractor-reported material cost; one row per (job, subcontractor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMaterialCost {
    pub job_id: Uuid,
    pub subcontractor_id: Uuid,
    pub total_cost: Decimal,
}

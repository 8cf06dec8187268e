//! Test helper module for financials-service tests.
//!
//! Builders for the records the calculators consume.

#![allow(dead_code)]

use financials_service::models::{
    JobMaterialCost, SubcontractorEmployee, SubcontractorPayment, SubcontractorPayout, TimeEntry,
    TimeEntryWithEmployee,
};
use rust_decimal::Decimal;
use uuid::Uuid;

// Fixed ids so failures are easy to read
pub const TEST_ORG_ID: &str = "11111111-1111-1111-1111-111111111111";
pub const TEST_JOB_ID: &str = "22222222-2222-2222-2222-222222222222";
pub const OTHER_JOB_ID: &str = "33333333-3333-3333-3333-333333333333";
pub const TEST_SUB_ID: &str = "44444444-4444-4444-4444-444444444444";
pub const OTHER_SUB_ID: &str = "55555555-5555-5555-5555-555555555555";

pub fn id(s: &str) -> Uuid {
    Uuid::parse_str(s).expect("Invalid test uuid")
}

pub fn org_id() -> Uuid {
    id(TEST_ORG_ID)
}

pub fn job_id() -> Uuid {
    id(TEST_JOB_ID)
}

pub fn sub_id() -> Uuid {
    id(TEST_SUB_ID)
}

/// Payout on the test job for the test subcontractor.
pub fn payout(final_payout: Decimal) -> SubcontractorPayout {
    payout_for(job_id(), sub_id(), final_payout)
}

pub fn payout_for(job_id: Uuid, subcontractor_id: Uuid, final_payout: Decimal) -> SubcontractorPayout {
    SubcontractorPayout {
        payout_id: Uuid::new_v4(),
        job_id,
        subcontractor_id,
        final_payout,
    }
}

pub fn payment(payout: &SubcontractorPayout, status: &str, amount: Decimal) -> SubcontractorPayment {
    SubcontractorPayment {
        payment_id: Uuid::new_v4(),
        payout_id: payout.payout_id,
        status: status.to_string(),
        amount,
        paid_date: None,
    }
}

pub fn paid(payout: &SubcontractorPayout, amount: Decimal) -> SubcontractorPayment {
    payment(payout, "paid", amount)
}

pub fn employee(subcontractor_id: Uuid, hourly_rate: Decimal) -> SubcontractorEmployee {
    SubcontractorEmployee {
        employee_id: Uuid::new_v4(),
        subcontractor_id,
        name: "Test Painter".to_string(),
        hourly_rate,
    }
}

pub fn time_entry(employee: &SubcontractorEmployee, job_id: Uuid, hours: Decimal) -> TimeEntry {
    TimeEntry {
        entry_id: Uuid::new_v4(),
        employee_id: employee.employee_id,
        job_id,
        hours_worked: hours,
        work_date: None,
    }
}

/// Time entry already joined to its employee.
pub fn worked(
    employee: &SubcontractorEmployee,
    job_id: Uuid,
    hours: Decimal,
) -> TimeEntryWithEmployee {
    TimeEntryWithEmployee::new(time_entry(employee, job_id, hours), employee.clone())
}

pub fn material(job_id: Uuid, subcontractor_id: Uuid, total_cost: Decimal) -> JobMaterialCost {
    JobMaterialCost {
        job_id,
        subcontractor_id,
        total_cost,
    }
}

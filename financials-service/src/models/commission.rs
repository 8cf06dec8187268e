//! Commission models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a team member is assigned to on a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionRole {
    SalesRep,
    ProjectManager,
}

impl CommissionRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommissionRole::SalesRep => "sales_rep",
            CommissionRole::ProjectManager => "project_manager",
        }
    }

    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "sales_rep" => Some(CommissionRole::SalesRep),
            "project_manager" => Some(CommissionRole::ProjectManager),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub member_id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub default_commission_pct: Option<Decimal>,
}

/// A team member assigned to a job in a role, with an optional
/// job-specific percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionAssignment {
    pub member: TeamMember,
    pub role: CommissionRole,
    #[serde(default)]
    pub override_pct: Option<Decimal>,
}

/// Where the applied commission percentage came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionRateSource {
    Override,
    MemberDefault,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCommissionRate {
    pub pct: Decimal,
    pub source: CommissionRateSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionLine {
    pub member_id: Uuid,
    pub role: CommissionRole,
    pub pct: Decimal,
    pub source: CommissionRateSource,
    pub amount: Decimal,
}

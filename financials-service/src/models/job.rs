//! Job and estimate financial models.

use crate::services::money::round_money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coarse profitability classification of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfitFlag {
    Ok,
    RaisePrice,
    FixScope,
}

impl ProfitFlag {
    /// The profit floor dominates the margin target: a job below the floor
    /// is `RaisePrice` whatever its margin.
    pub fn classify(meets_min_gp: bool, meets_target_gm: bool) -> Self {
        match (meets_min_gp, meets_target_gm) {
            (false, _) => ProfitFlag::RaisePrice,
            (true, false) => ProfitFlag::FixScope,
            (true, true) => ProfitFlag::Ok,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfitFlag::Ok => "OK",
            ProfitFlag::RaisePrice => "RAISE_PRICE",
            ProfitFlag::FixScope => "FIX_SCOPE",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "OK" => ProfitFlag::Ok,
            "FIX_SCOPE" => ProfitFlag::FixScope,
            _ => ProfitFlag::RaisePrice,
        }
    }
}

/// Output of the job financial calculation, at full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobFinancials {
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub total_price: Decimal,
    pub sub_materials_cost: Decimal,
    pub sub_labor_cost: Decimal,
    pub sub_total_cost: Decimal,
    pub gross_profit: Decimal,
    pub gross_margin_pct: Decimal,
    pub deposit_amount: Decimal,
    pub meets_min_gp: bool,
    pub meets_target_gm: bool,
    pub profit_flag: ProfitFlag,
}

impl JobFinancials {
    /// Money and percentages rounded to 2 places for persistence or response.
    pub fn rounded(&self) -> Self {
        Self {
            subtotal: round_money(self.subtotal),
            discount_amount: round_money(self.discount_amount),
            total_price: round_money(self.total_price),
            sub_materials_cost: round_money(self.sub_materials_cost),
            sub_labor_cost: round_money(self.sub_labor_cost),
            sub_total_cost: round_money(self.sub_total_cost),
            gross_profit: round_money(self.gross_profit),
            gross_margin_pct: round_money(self.gross_margin_pct),
            deposit_amount: round_money(self.deposit_amount),
            meets_min_gp: self.meets_min_gp,
            meets_target_gm: self.meets_target_gm,
            profit_flag: self.profit_flag,
        }
    }
}

/// Record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Estimate,
    Job,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Estimate => "estimate",
            RecordKind::Job => "job",
        }
    }
}

/// Estimate or job carrying derived financial fields.
///
/// The derived fields are only ever written through [`JobOrEstimate::apply_financials`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOrEstimate {
    pub record_id: Uuid,
    pub organization_id: Uuid,
    pub kind: RecordKind,
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub total_price: Decimal,
    pub sub_materials_cost: Decimal,
    pub sub_labor_cost: Decimal,
    pub sub_total_cost: Decimal,
    pub gross_profit: Decimal,
    pub gross_margin_pct: Decimal,
    pub deposit_amount: Decimal,
    pub meets_min_gp: bool,
    pub meets_target_gm: bool,
    pub profit_flag: ProfitFlag,
}

impl JobOrEstimate {
    /// An empty record; its flag is `RaisePrice` until priced.
    pub fn new(record_id: Uuid, organization_id: Uuid, kind: RecordKind) -> Self {
        Self {
            record_id,
            organization_id,
            kind,
            subtotal: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            total_price: Decimal::ZERO,
            sub_materials_cost: Decimal::ZERO,
            sub_labor_cost: Decimal::ZERO,
            sub_total_cost: Decimal::ZERO,
            gross_profit: Decimal::ZERO,
            gross_margin_pct: Decimal::ZERO,
            deposit_amount: Decimal::ZERO,
            meets_min_gp: false,
            meets_target_gm: false,
            profit_flag: ProfitFlag::RaisePrice,
        }
    }

    /// Overwrite every derived field from a calculation result, rounded.
    pub fn apply_financials(&mut self, financials: &JobFinancials) {
        let f = financials.rounded();
        self.subtotal = f.subtotal;
        self.discount_amount = f.discount_amount;
        self.total_price = f.total_price;
        self.sub_materials_cost = f.sub_materials_cost;
        self.sub_labor_cost = f.sub_labor_cost;
        self.sub_total_cost = f.sub_total_cost;
        self.gross_profit = f.gross_profit;
        self.gross_margin_pct = f.gross_margin_pct;
        self.deposit_amount = f.deposit_amount;
        self.meets_min_gp = f.meets_min_gp;
        self.meets_target_gm = f.meets_target_gm;
        self.profit_flag = f.profit_flag;
    }
}

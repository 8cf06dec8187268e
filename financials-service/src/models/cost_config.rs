//! Per-organization cost configuration.

use crate::error::FinancialsError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUB_MATERIALS_PCT: Decimal = dec!(15);
pub const DEFAULT_SUB_LABOR_PCT: Decimal = dec!(45);
pub const DEFAULT_MIN_GROSS_PROFIT_PER_JOB: Decimal = dec!(900);
pub const DEFAULT_TARGET_GROSS_MARGIN_PCT: Decimal = dec!(40);
pub const DEFAULT_DEPOSIT_PCT: Decimal = dec!(50);
pub const DEFAULT_COMMISSION_PCT: Decimal = dec!(5);

/// Resolved cost configuration snapshot used by every calculation.
///
/// `sub_materials_pct` and `sub_labor_pct` are configured proportions of the
/// job's total price, not measured costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostConfig {
    pub sub_materials_pct: Decimal,
    pub sub_labor_pct: Decimal,
    pub min_gross_profit_per_job: Decimal,
    pub target_gross_margin_pct: Decimal,
    pub default_deposit_pct: Decimal,
    pub default_commission_pct: Decimal,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            sub_materials_pct: DEFAULT_SUB_MATERIALS_PCT,
            sub_labor_pct: DEFAULT_SUB_LABOR_PCT,
            min_gross_profit_per_job: DEFAULT_MIN_GROSS_PROFIT_PER_JOB,
            target_gross_margin_pct: DEFAULT_TARGET_GROSS_MARGIN_PCT,
            default_deposit_pct: DEFAULT_DEPOSIT_PCT,
            default_commission_pct: DEFAULT_COMMISSION_PCT,
        }
    }
}

/// Organization settings row as stored; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgCostSettings {
    pub sub_materials_pct: Option<Decimal>,
    pub sub_labor_pct: Option<Decimal>,
    pub min_gross_profit_per_job: Option<Decimal>,
    pub target_gross_margin_pct: Option<Decimal>,
    pub default_deposit_pct: Option<Decimal>,
    pub default_commission_pct: Option<Decimal>,
}

impl CostConfig {
    /// Fill each missing setting from `defaults` independently, then validate.
    pub fn resolve(
        settings: Option<&OrgCostSettings>,
        defaults: &CostConfig,
    ) -> Result<Self, FinancialsError> {
        let Some(s) = settings else {
            let resolved = defaults.clone();
            resolved.validate()?;
            return Ok(resolved);
        };

        let resolved = Self {
            sub_materials_pct: s.sub_materials_pct.unwrap_or(defaults.sub_materials_pct),
            sub_labor_pct: s.sub_labor_pct.unwrap_or(defaults.sub_labor_pct),
            min_gross_profit_per_job: s
                .min_gross_profit_per_job
                .unwrap_or(defaults.min_gross_profit_per_job),
            target_gross_margin_pct: s
                .target_gross_margin_pct
                .unwrap_or(defaults.target_gross_margin_pct),
            default_deposit_pct: s
                .default_deposit_pct
                .unwrap_or(defaults.default_deposit_pct),
            default_commission_pct: s
                .default_commission_pct
                .unwrap_or(defaults.default_commission_pct),
        };
        resolved.validate()?;
        Ok(resolved)
    }

    /// Percentages must lie in [0, 100]; the profit floor must be non-negative.
    ///
    /// Materials and labor are checked together as well, since their sum is
    /// the share of the price attributed to subcontractor cost.
    pub fn validate(&self) -> Result<(), FinancialsError> {
        let percentages = [
            ("sub_materials_pct", self.sub_materials_pct),
            ("sub_labor_pct", self.sub_labor_pct),
            ("target_gross_margin_pct", self.target_gross_margin_pct),
            ("default_deposit_pct", self.default_deposit_pct),
            ("default_commission_pct", self.default_commission_pct),
        ];
        for (field, value) in percentages {
            if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
                return Err(FinancialsError::validation(
                    field,
                    format!("{} is outside [0, 100]", value),
                ));
            }
        }

        if self.sub_materials_pct + self.sub_labor_pct > Decimal::ONE_HUNDRED {
            return Err(FinancialsError::validation(
                "sub_labor_pct",
                format!(
                    "materials ({}) and labor ({}) together exceed 100",
                    self.sub_materials_pct, self.sub_labor_pct
                ),
            ));
        }

        if self.min_gross_profit_per_job < Decimal::ZERO {
            return Err(FinancialsError::validation(
                "min_gross_profit_per_job",
                "must not be negative",
            ));
        }

        Ok(())
    }

    /// Combined subcontractor cost share of the total price.
    pub fn sub_total_pct(&self) -> Decimal {
        self.sub_materials_pct + self.sub_labor_pct
    }
}

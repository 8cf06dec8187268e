//! Configuration module for financials-service.

use crate::models::{CostConfig, OrgCostSettings};
use rust_decimal::Decimal;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct FinancialsConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub service_version: String,
    /// Cost configuration applied to organizations without their own settings.
    pub cost_defaults: CostConfig,
}

impl FinancialsConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(Self {
            common,
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "financials-service".to_string()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            cost_defaults: cost_defaults_from_env()?,
        })
    }
}

/// Built-in defaults overridden by any `COST_DEFAULT_*` variables that are set.
pub fn cost_defaults_from_env() -> Result<CostConfig, AppError> {
    let overrides = OrgCostSettings {
        sub_materials_pct: decimal_var("COST_DEFAULT_SUB_MATERIALS_PCT")?,
        sub_labor_pct: decimal_var("COST_DEFAULT_SUB_LABOR_PCT")?,
        min_gross_profit_per_job: decimal_var("COST_DEFAULT_MIN_GROSS_PROFIT_PER_JOB")?,
        target_gross_margin_pct: decimal_var("COST_DEFAULT_TARGET_GROSS_MARGIN_PCT")?,
        default_deposit_pct: decimal_var("COST_DEFAULT_DEPOSIT_PCT")?,
        default_commission_pct: decimal_var("COST_DEFAULT_COMMISSION_PCT")?,
    };

    CostConfig::resolve(Some(&overrides), &CostConfig::default())
        .map_err(|e| AppError::ConfigError(anyhow::anyhow!("Invalid cost defaults: {}", e)))
}

fn decimal_var(name: &str) -> Result<Option<Decimal>, AppError> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => Decimal::from_str(raw.trim())
            .map(Some)
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!("{} is not a decimal: {}", name, e))),
        _ => Ok(None),
    }
}

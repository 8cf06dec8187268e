//! Cost configuration resolution tests for financials-service.

use financials_service::config::cost_defaults_from_env;
use financials_service::models::{CostConfig, OrgCostSettings};
use rust_decimal_macros::dec;
use serial_test::serial;

const COST_VARS: [&str; 6] = [
    "COST_DEFAULT_SUB_MATERIALS_PCT",
    "COST_DEFAULT_SUB_LABOR_PCT",
    "COST_DEFAULT_MIN_GROSS_PROFIT_PER_JOB",
    "COST_DEFAULT_TARGET_GROSS_MARGIN_PCT",
    "COST_DEFAULT_DEPOSIT_PCT",
    "COST_DEFAULT_COMMISSION_PCT",
];

fn clear_cost_vars() {
    for var in COST_VARS {
        std::env::remove_var(var);
    }
}

#[test]
fn documented_defaults() {
    let config = CostConfig::default();
    assert_eq!(config.sub_materials_pct, dec!(15));
    assert_eq!(config.sub_labor_pct, dec!(45));
    assert_eq!(config.min_gross_profit_per_job, dec!(900));
    assert_eq!(config.target_gross_margin_pct, dec!(40));
    assert_eq!(config.default_deposit_pct, dec!(50));
    assert_eq!(config.default_commission_pct, dec!(5));
}

#[test]
fn missing_settings_resolve_to_defaults() {
    let defaults = CostConfig::default();
    let resolved = CostConfig::resolve(None, &defaults).expect("Failed to resolve");
    assert_eq!(resolved, defaults);
}

#[test]
fn each_missing_field_falls_back_independently() {
    let settings = OrgCostSettings {
        sub_labor_pct: Some(dec!(40)),
        min_gross_profit_per_job: Some(dec!(1200)),
        ..OrgCostSettings::default()
    };
    let resolved =
        CostConfig::resolve(Some(&settings), &CostConfig::default()).expect("Failed to resolve");

    assert_eq!(resolved.sub_materials_pct, dec!(15));
    assert_eq!(resolved.sub_labor_pct, dec!(40));
    assert_eq!(resolved.min_gross_profit_per_job, dec!(1200));
    assert_eq!(resolved.target_gross_margin_pct, dec!(40));
}

#[test]
fn settings_parse_from_partial_json() {
    let settings: OrgCostSettings =
        serde_json::from_str(r#"{"sub_materials_pct": "12.5"}"#).expect("Failed to parse");
    assert_eq!(settings.sub_materials_pct, Some(dec!(12.5)));
    assert_eq!(settings.sub_labor_pct, None);
}

#[test]
fn out_of_range_percentages_are_rejected() {
    let settings = OrgCostSettings {
        default_deposit_pct: Some(dec!(-5)),
        ..OrgCostSettings::default()
    };
    let err = CostConfig::resolve(Some(&settings), &CostConfig::default()).unwrap_err();
    assert_eq!(err.field(), Some("default_deposit_pct"));

    let settings = OrgCostSettings {
        sub_materials_pct: Some(dec!(101)),
        ..OrgCostSettings::default()
    };
    let err = CostConfig::resolve(Some(&settings), &CostConfig::default()).unwrap_err();
    assert_eq!(err.field(), Some("sub_materials_pct"));
}

#[test]
fn cost_share_above_total_price_is_rejected() {
    let settings = OrgCostSettings {
        sub_materials_pct: Some(dec!(60)),
        sub_labor_pct: Some(dec!(45)),
        ..OrgCostSettings::default()
    };
    let err = CostConfig::resolve(Some(&settings), &CostConfig::default()).unwrap_err();
    assert_eq!(err.field(), Some("sub_labor_pct"));
}

#[test]
fn negative_profit_floor_is_rejected() {
    let config = CostConfig {
        min_gross_profit_per_job: dec!(-1),
        ..CostConfig::default()
    };
    assert_eq!(
        config.validate().unwrap_err().field(),
        Some("min_gross_profit_per_job")
    );
}

#[test]
#[serial]
fn env_defaults_without_overrides() {
    clear_cost_vars();
    let config = cost_defaults_from_env().expect("Failed to load cost defaults");
    assert_eq!(config, CostConfig::default());
}

#[test]
#[serial]
fn env_overrides_apply_per_field() {
    clear_cost_vars();
    std::env::set_var("COST_DEFAULT_SUB_LABOR_PCT", "50");
    std::env::set_var("COST_DEFAULT_MIN_GROSS_PROFIT_PER_JOB", " 750.00 ");

    let config = cost_defaults_from_env().expect("Failed to load cost defaults");
    clear_cost_vars();

    assert_eq!(config.sub_materials_pct, dec!(15));
    assert_eq!(config.sub_labor_pct, dec!(50));
    assert_eq!(config.min_gross_profit_per_job, dec!(750));
}

#[test]
#[serial]
fn env_overrides_are_validated() {
    clear_cost_vars();
    std::env::set_var("COST_DEFAULT_TARGET_GROSS_MARGIN_PCT", "abc");
    let err = cost_defaults_from_env().unwrap_err();
    assert_eq!(err.error_type(), "config");

    std::env::set_var("COST_DEFAULT_TARGET_GROSS_MARGIN_PCT", "140");
    let err = cost_defaults_from_env().unwrap_err();
    clear_cost_vars();
    assert_eq!(err.error_type(), "config");
}

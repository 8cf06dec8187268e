//! Financials Service entry point.
//!
//! Reads a record snapshot (first argument or `SNAPSHOT_PATH`) and prints the
//! earnings report of every subcontractor in it as JSON.

use financials_service::config::FinancialsConfig;
use financials_service::services::{init_metrics, InMemoryRecords, RecordSnapshot, Reconciler};
use service_core::error::AppError;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = FinancialsConfig::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    // Initialize tracing
    init_tracing(
        &config.service_name,
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    )
    .map_err(|e| {
        eprintln!("Failed to initialize tracing: {}", e);
        std::io::Error::other(format!("Tracing error: {}", e))
    })?;

    tracing::info!(
        version = %config.service_version,
        otlp_endpoint = ?config.common.otlp_endpoint,
        "Starting financials-service"
    );

    // Initialize metrics
    init_metrics();

    tracing::info!(
        service_name = %config.service_name,
        sub_materials_pct = %config.cost_defaults.sub_materials_pct,
        sub_labor_pct = %config.cost_defaults.sub_labor_pct,
        min_gross_profit_per_job = %config.cost_defaults.min_gross_profit_per_job,
        target_gross_margin_pct = %config.cost_defaults.target_gross_margin_pct,
        "Configuration loaded"
    );

    run(config).await.map_err(|e| {
        tracing::error!(error = %e, error_type = e.error_type(), "Report failed");
        std::io::Error::other(e.to_string())
    })
}

async fn run(config: FinancialsConfig) -> Result<(), AppError> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SNAPSHOT_PATH").ok())
        .ok_or_else(|| {
            AppError::BadRequest(anyhow::anyhow!(
                "Snapshot path required as first argument or SNAPSHOT_PATH"
            ))
        })?;

    let snapshot = RecordSnapshot::load(&path)?;
    let subcontractor_ids = snapshot.subcontractor_ids();
    let reconciler = Reconciler::new(InMemoryRecords::from_snapshot(snapshot), config.cost_defaults);

    let mut reports = Vec::with_capacity(subcontractor_ids.len());
    for subcontractor_id in subcontractor_ids {
        reports.push(reconciler.subcontractor_report(subcontractor_id).await?);
    }

    println!("{}", serde_json::to_string_pretty(&reports)?);

    tracing::info!(subcontractors = reports.len(), "Report complete");
    Ok(())
}

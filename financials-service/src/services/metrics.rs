//! Prometheus metrics for financials-service.

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, Encoder, HistogramVec, TextEncoder,
};

/// Counter for calculations by kind and outcome.
pub static CALCULATIONS: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "financials_calculations_total",
        "Total number of financial calculations",
        &["calculation", "status"]
    )
    .expect("Failed to register CALCULATIONS")
});

/// Histogram for calculation duration, record fetching included.
pub static CALCULATION_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "financials_calculation_duration_seconds",
        "Financial calculation duration in seconds",
        &["calculation"],
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]
    )
    .expect("Failed to register CALCULATION_DURATION")
});

/// Counter for profit flags issued to priced jobs.
pub static PROFIT_FLAGS: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "financials_profit_flags_total",
        "Total number of profit flags issued",
        &["flag"]
    )
    .expect("Failed to register PROFIT_FLAGS")
});

/// Counter for payout payment statuses classified.
pub static PAYMENT_STATUSES: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "financials_payment_statuses_total",
        "Total number of payout payment statuses classified",
        &["status"]
    )
    .expect("Failed to register PAYMENT_STATUSES")
});

/// Counter for errors.
pub static ERRORS: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "financials_errors_total",
        "Total number of errors",
        &["error_type"]
    )
    .expect("Failed to register ERRORS")
});

/// Initialize all metrics (forces lazy initialization).
pub fn init_metrics() {
    Lazy::force(&CALCULATIONS);
    Lazy::force(&CALCULATION_DURATION);
    Lazy::force(&PROFIT_FLAGS);
    Lazy::force(&PAYMENT_STATUSES);
    Lazy::force(&ERRORS);
}

/// Get all metrics as Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::warn!(error = %e, "Failed to encode metrics");
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

/// Record a calculation outcome.
pub fn record_calculation(calculation: &str, status: &str) {
    CALCULATIONS
        .with_label_values(&[calculation, status])
        .inc();
}

/// Record a profit flag.
pub fn record_profit_flag(flag: &str) {
    PROFIT_FLAGS.with_label_values(&[flag]).inc();
}

/// Record a payment status.
pub fn record_payment_status(status: &str) {
    PAYMENT_STATUSES.with_label_values(&[status]).inc();
}

/// Record an error.
pub fn record_error(error_type: &str) {
    ERRORS.with_label_values(&[error_type]).inc();
}

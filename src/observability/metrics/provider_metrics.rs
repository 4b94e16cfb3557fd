//! # Provider Metrics
//!
//! Counts, durations and failures of store operations, labelled by provider.

use crate::error::Result;
use crate::observability::metrics::registry::REGISTRY;
use prometheus::{HistogramVec, IntCounterVec};
use std::sync::LazyLock;

static PROVIDER_OPERATIONS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "param_teller_provider_operations_total",
            "Total number of store operations, successful or failed",
        ),
        &["provider", "operation"],
    )
    .expect("Failed to create PROVIDER_OPERATIONS_TOTAL metric - this should never happen")
});

static PROVIDER_OPERATION_ERRORS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "param_teller_provider_operation_errors_total",
            "Total number of failed store operations by error kind",
        ),
        &["provider", "operation", "kind"],
    )
    .expect("Failed to create PROVIDER_OPERATION_ERRORS_TOTAL metric - this should never happen")
});

static PROVIDER_OPERATION_DURATION: LazyLock<HistogramVec> = LazyLock::new(|| {
    HistogramVec::new(
        prometheus::HistogramOpts::new(
            "param_teller_provider_operation_duration_seconds",
            "Duration of store operations in seconds, including every page fetched",
        )
        .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
        &["provider", "operation"],
    )
    .expect("Failed to create PROVIDER_OPERATION_DURATION metric - this should never happen")
});

pub(crate) fn register_provider_metrics() -> Result<()> {
    REGISTRY.register(Box::new(PROVIDER_OPERATIONS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(PROVIDER_OPERATION_ERRORS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(PROVIDER_OPERATION_DURATION.clone()))?;
    Ok(())
}

pub fn record_provider_operation(provider: &str, operation: &str, duration: f64) {
    PROVIDER_OPERATIONS_TOTAL
        .with_label_values(&[provider, operation])
        .inc();
    PROVIDER_OPERATION_DURATION
        .with_label_values(&[provider, operation])
        .observe(duration);
}

pub fn increment_provider_operation_errors(provider: &str, operation: &str, kind: &str) {
    PROVIDER_OPERATION_ERRORS_TOTAL
        .with_label_values(&[provider, operation, kind])
        .inc();
}

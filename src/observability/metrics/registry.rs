//! # Metrics Registry
//!
//! Prometheus metrics registry setup and registration.

use crate::error::Result;
use prometheus::Registry;
use std::sync::LazyLock;

/// Crate-wide Prometheus metrics registry
pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Registry holding the crate's metrics, for exposition by the host application
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Register all metrics with the Prometheus registry
///
/// Metrics are recorded whether or not they are registered; registration only
/// makes them visible through [`registry`].
///
/// # Errors
/// Registering twice fails with [`Error::Metrics`](crate::Error::Metrics).
pub fn register_metrics() -> Result<()> {
    super::provider_metrics::register_provider_metrics()?;
    Ok(())
}

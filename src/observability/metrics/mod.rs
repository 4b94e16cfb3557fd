//! # Metrics Module
//!
//! Prometheus metrics for store operations.
//!
//! - `registry` - Metrics registry setup and registration
//! - `provider_metrics` - Per-provider operation counts, durations and errors

pub mod provider_metrics;
pub mod registry;

pub use provider_metrics::*;
pub use registry::*;

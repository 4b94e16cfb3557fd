//! # Observability
//!
//! Tracing spans and Prometheus metrics around provider operations.

pub mod metrics;

use crate::error::Result;
use std::future::Future;
use std::time::Instant;
use tracing::{debug_span, Instrument};

/// Run one store operation inside a debug span and record its outcome.
///
/// The span carries only the provider and operation names. Keys and values are
/// never attached.
pub(crate) async fn instrument_operation<T, F>(
    provider: &'static str,
    operation: &'static str,
    operation_future: F,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let span = debug_span!("param_teller.operation", provider, operation);
    let start = Instant::now();
    let result = operation_future.instrument(span).await;
    let elapsed = start.elapsed().as_secs_f64();

    metrics::record_provider_operation(provider, operation, elapsed);
    if let Err(e) = &result {
        metrics::increment_provider_operation_errors(provider, operation, e.kind());
    }

    result
}

//! Metrics collection and exposition.
//!
//! # Metrics
//! - `orchestrator_forward_total` (counter): forwarded calls by outcome and outward status
//! - `orchestrator_forward_duration_seconds` (histogram): end-to-end forward latency
//! - `orchestrator_downstream_reachable` (gauge): 1=reachable, 0=unreachable at last probe
//!
//! Without an installed recorder every call here is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::error::OrchestratorError;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), OrchestratorError> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| OrchestratorError::Metrics(e.to_string()))?;

    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_forward(outcome: &'static str, status: u16, start: Instant) {
    metrics::counter!(
        "orchestrator_forward_total",
        "outcome" => outcome,
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("orchestrator_forward_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_downstream_reachable(reachable: bool) {
    metrics::gauge!("orchestrator_downstream_reachable").set(if reachable { 1.0 } else { 0.0 });
}

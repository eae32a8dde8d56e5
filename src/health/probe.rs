//! On-demand downstream liveness probe.
//!
//! # Responsibilities
//! - Issue one bounded GET against the downstream health URL
//! - Turn the result into a `HealthReport`
//!
//! # Design Decisions
//! - Reachable means: answered before the deadline with exactly 200
//! - Probe failures are reported as data; the probe never errors outward

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time;
use url::Url;

use crate::config::{DownstreamConfig, ServiceConfig};
use crate::error::OrchestratorError;
use crate::observability::metrics;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub service: String,
    pub n8n_reachable: bool,
    pub n8n_url: String,
}

pub struct HealthProbe {
    client: Client,
    health_url: Url,
    webhook_url: String,
    service_name: String,
    timeout: Duration,
}

impl HealthProbe {
    pub fn new(
        client: Client,
        downstream: &DownstreamConfig,
        service: &ServiceConfig,
    ) -> Result<Self, OrchestratorError> {
        let health_url = Url::parse(&downstream.health_url).map_err(|e| OrchestratorError::InvalidUrl {
            url: downstream.health_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            health_url,
            webhook_url: downstream.webhook_url.clone(),
            service_name: service.name.clone(),
            timeout: downstream.health_timeout(),
        })
    }

    /// Build the composite health report.
    pub async fn check_health(&self) -> HealthReport {
        let reachable = self.probe().await;
        metrics::record_downstream_reachable(reachable);

        HealthReport {
            status: "healthy".to_string(),
            service: self.service_name.clone(),
            n8n_reachable: reachable,
            n8n_url: self.webhook_url.clone(),
        }
    }

    /// True iff the downstream answered 200 before the deadline.
    pub async fn probe(&self) -> bool {
        let request = self.client.get(self.health_url.clone()).send();

        match time::timeout(self.timeout, request).await {
            Ok(Ok(response)) => {
                let ok = response.status() == StatusCode::OK;
                if !ok {
                    tracing::warn!(url = %self.health_url, status = %response.status(), "Health probe failed: non-200 status");
                }
                ok
            }
            Ok(Err(e)) => {
                tracing::warn!(url = %self.health_url, error = %e, "Health probe failed: request error");
                false
            }
            Err(_) => {
                tracing::warn!(url = %self.health_url, timeout_secs = self.timeout.as_secs(), "Health probe failed: timeout");
                false
            }
        }
    }
}

//! Request forwarding to the downstream webhook.
//!
//! # Responsibilities
//! - Relay the inbound JSON payload unchanged to the webhook
//! - Bound the call by the configured deadline
//! - Classify the result and map it to the outward reply
//!
//! # Design Decisions
//! - Exactly one attempt per inbound request; failures are terminal
//! - The payload is never inspected, only re-serialized

use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use url::Url;

use crate::config::DownstreamConfig;
use crate::error::OrchestratorError;
use crate::forwarding::outcome::{DownstreamBody, DownstreamOutcome};
use crate::forwarding::response::OutwardResponse;
use crate::observability::metrics;

/// Relays payloads to the configured webhook.
#[derive(Clone)]
pub struct RequestForwarder {
    client: Client,
    webhook_url: Url,
    timeout: Duration,
}

impl RequestForwarder {
    /// Create a forwarder from validated downstream settings.
    pub fn new(client: Client, config: &DownstreamConfig) -> Result<Self, OrchestratorError> {
        let webhook_url = Url::parse(&config.webhook_url).map_err(|e| OrchestratorError::InvalidUrl {
            url: config.webhook_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            webhook_url,
            timeout: config.request_timeout(),
        })
    }

    pub fn webhook_url(&self) -> &Url {
        &self.webhook_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Forward `payload` and build the reply for the inbound caller.
    pub async fn forward(&self, payload: &Value) -> OutwardResponse {
        let start = Instant::now();

        tracing::info!(
            url = %self.webhook_url,
            payload = %payload,
            "Execute request received"
        );

        let outcome = self.call(payload).await;

        match &outcome {
            DownstreamOutcome::Success { status, .. } => {
                tracing::info!(
                    status = status.as_u16(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Downstream responded"
                );
            }
            DownstreamOutcome::Timeout => {
                tracing::error!(
                    timeout_secs = self.timeout.as_secs_f64(),
                    "Downstream call timed out"
                );
            }
            DownstreamOutcome::ConnectionFailure(detail) => {
                tracing::error!(error = %detail, "Could not connect to downstream");
            }
            DownstreamOutcome::OtherFailure(detail) => {
                tracing::error!(error = %detail, "Downstream call failed");
            }
        }

        let response = OutwardResponse::from(outcome.clone());
        metrics::record_forward(outcome.kind(), response.http_status.as_u16(), start);
        response
    }

    /// Issue the single bounded POST and classify what happened.
    pub async fn call(&self, payload: &Value) -> DownstreamOutcome {
        let result = self
            .client
            .post(self.webhook_url.clone())
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => return DownstreamOutcome::from_transport_error(&e),
        };

        let status = response.status();
        match response.bytes().await {
            Ok(bytes) => DownstreamOutcome::Success {
                status,
                body: DownstreamBody::decode(&bytes),
            },
            Err(e) => DownstreamOutcome::from_transport_error(&e),
        }
    }
}

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::forwarding::OutwardResponse;
use crate::health::HealthReport;
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServiceDescriptor {
    pub service: String,
    pub version: &'static str,
    pub endpoints: Vec<EndpointInfo>,
}

/// `POST /api/execute`: relay the body to the webhook.
pub async fn execute(State(state): State<AppState>, body: Bytes) -> OutwardResponse {
    let payload = match parse_payload(&body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(error = %e, bytes = body.len(), "Rejected execute request: body is not JSON");
            return OutwardResponse::error(StatusCode::BAD_REQUEST, format!("invalid JSON body: {}", e));
        }
    };

    state.forwarder.forward(&payload).await
}

/// `GET /health`: always 200, downstream reachability in the body.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    (StatusCode::OK, Json(state.probe.check_health().await))
}

/// `GET /`: static endpoint listing.
pub async fn index(State(state): State<AppState>) -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        service: state.service_name.to_string(),
        version: env!("CARGO_PKG_VERSION"),
        endpoints: vec![
            EndpointInfo {
                method: "POST",
                path: "/api/execute",
                description: "Forward a JSON payload to the automation webhook",
            },
            EndpointInfo {
                method: "GET",
                path: "/health",
                description: "Service health and webhook reachability",
            },
        ],
    })
}

/// An empty (or whitespace-only) body is the `null` payload.
pub fn parse_payload(body: &[u8]) -> Result<Value, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body)
}

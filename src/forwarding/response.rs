//! Outward response shapes.
//!
//! # Mapping
//! ```text
//! Success { S, body }   → S   {"status":"success","n8n_status_code":S,"n8n_response":body}
//! Timeout               → 504 {"status":"error","message":"webhook timed out"}
//! ConnectionFailure     → 503 {"status":"error","message":"could not connect to downstream service"}
//! OtherFailure(detail)  → 500 {"status":"error","message":detail}
//! ```
//!
//! The mapping is a pure function of the outcome; it never touches the network.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::forwarding::outcome::{DownstreamBody, DownstreamOutcome};

pub const TIMEOUT_MESSAGE: &str = "webhook timed out";
pub const CONNECT_MESSAGE: &str = "could not connect to downstream service";

/// JSON body returned to the inbound caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum OutwardPayload {
    Success {
        n8n_status_code: u16,
        n8n_response: DownstreamBody,
    },
    Error {
        message: String,
    },
}

/// Status code plus body for an `/api/execute` reply.
#[derive(Debug, Clone, PartialEq)]
pub struct OutwardResponse {
    pub http_status: StatusCode,
    pub payload: OutwardPayload,
}

impl OutwardResponse {
    pub fn error(http_status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            http_status,
            payload: OutwardPayload::Error {
                message: message.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.payload, OutwardPayload::Success { .. })
    }
}

impl From<DownstreamOutcome> for OutwardResponse {
    fn from(outcome: DownstreamOutcome) -> Self {
        match outcome {
            DownstreamOutcome::Success { status, body } => Self {
                http_status: status,
                payload: OutwardPayload::Success {
                    n8n_status_code: status.as_u16(),
                    n8n_response: body,
                },
            },
            DownstreamOutcome::Timeout => Self::error(StatusCode::GATEWAY_TIMEOUT, TIMEOUT_MESSAGE),
            DownstreamOutcome::ConnectionFailure(_) => {
                Self::error(StatusCode::SERVICE_UNAVAILABLE, CONNECT_MESSAGE)
            }
            DownstreamOutcome::OtherFailure(detail) => {
                Self::error(StatusCode::INTERNAL_SERVER_ERROR, detail)
            }
        }
    }
}

impl IntoResponse for OutwardResponse {
    fn into_response(self) -> Response {
        (self.http_status, Json(self.payload)).into_response()
    }
}

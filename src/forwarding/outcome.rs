//! Downstream call outcomes.
//!
//! Every webhook call resolves into exactly one [`DownstreamOutcome`]. The
//! transport layer only classifies; turning an outcome into an HTTP reply is
//! the job of `response.rs`.

use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::error::Error as StdError;

/// A downstream response body, decoded as JSON when possible.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DownstreamBody {
    Json(Value),
    Text(String),
}

impl DownstreamBody {
    /// Try JSON first, fall back to the raw text.
    pub fn decode(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => DownstreamBody::Json(value),
            Err(_) => DownstreamBody::Text(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            DownstreamBody::Json(v) => Some(v),
            DownstreamBody::Text(_) => None,
        }
    }
}

/// Result of a single bounded call to the downstream webhook.
#[derive(Debug, Clone, PartialEq)]
pub enum DownstreamOutcome {
    /// The downstream answered before the deadline, with any status.
    Success { status: StatusCode, body: DownstreamBody },
    /// No complete response before the deadline.
    Timeout,
    /// DNS failure, refused connection, unreachable network.
    ConnectionFailure(String),
    /// Anything else that went wrong during the call.
    OtherFailure(String),
}

impl DownstreamOutcome {
    /// Classify a transport error.
    ///
    /// Timeouts take precedence: a connect that times out is reported as a
    /// timeout, not as a connection failure.
    pub fn from_transport_error(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            DownstreamOutcome::Timeout
        } else if err.is_connect() {
            DownstreamOutcome::ConnectionFailure(error_chain(err))
        } else {
            DownstreamOutcome::OtherFailure(error_chain(err))
        }
    }

    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            DownstreamOutcome::Success { .. } => "success",
            DownstreamOutcome::Timeout => "timeout",
            DownstreamOutcome::ConnectionFailure(_) => "connection_failure",
            DownstreamOutcome::OtherFailure(_) => "other_failure",
        }
    }
}

/// Render an error with its sources, outermost first.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = cause.source();
    }
    out
}
